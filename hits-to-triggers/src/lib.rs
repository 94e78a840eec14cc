//! This crate provides the sliding-time-window trigger detectors: they turn
//! one event's time-sorted stream of [`TriggerHit`]s on a detector element
//! (or element set) into zero or more fired trigger intervals.
//!
//! All detectors share the same trailing time-window scan; each trigger kind
//! adds its own positional constraint on top. Typical usage:
//!
//! ```
//! use aurora_common::TriggerHit;
//! use aurora_common::key::{SubdetectorId, TriggerKey, TriggerKind};
//! use hits_to_triggers::SimpleMajorityTrigger;
//!
//! let key = TriggerKey::new(SubdetectorId::InIce, TriggerKind::SimpleMultiplicity);
//! let detector = SimpleMajorityTrigger::simple_majority(key, 1500.0, 3)?;
//! let triggers = detector.detect(&[TriggerHit::new(1.0, 1, 1)])?;
//! assert!(triggers.is_empty());
//! # Ok::<(), hits_to_triggers::DetectError>(())
//! ```
//!
//! [`TriggerHit`]: aurora_common::TriggerHit

pub mod detectors;
pub mod error;
pub(crate) mod window;

pub use detectors::{
    ClusterTrigger, Coherence, Majority, MultiplicityStringTrigger, PositionCriterion,
    SimpleMajorityTrigger, StringSpan, TriggerDetector,
};
pub use error::{ConfigError, DetectError, PreconditionError};
