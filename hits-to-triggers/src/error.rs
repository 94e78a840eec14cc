use aurora_common::{ElementId, Position, Time};
use thiserror::Error;

/// Invalid detector parameters, caught at construction or on first use.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("trigger window must be positive, got {0}")]
    NonPositiveWindow(Time),
    #[error("trigger threshold must be at least one")]
    ZeroThreshold,
    #[error("coherence length must be at least one")]
    ZeroCoherence,
    #[error("position span must be at least one")]
    ZeroSpan,
    #[error("position range must be at least one")]
    ZeroPositionRange,
    #[error("hit on element {element} at position {position} is outside the configured range")]
    HitOutsideRange {
        element: ElementId,
        position: Position,
    },
}

/// The caller broke the input contract; the hit stream is not reordered or
/// repaired on their behalf.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PreconditionError {
    #[error("hits must be time sorted: hit {index} is earlier than its predecessor")]
    UnsortedHits { index: usize },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DetectError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Precondition(#[from] PreconditionError),
}
