use super::PositionCriterion;
use crate::error::ConfigError;
use aurora_common::TriggerHit;

/// The simple-majority trigger has no positional constraint: enough hits in
/// the time window is the whole condition.
#[derive(Debug, Clone, Copy, Default)]
pub struct Majority;

impl PositionCriterion for Majority {
    fn accept(&self, _hits: &[TriggerHit], _threshold: usize) -> Result<bool, ConfigError> {
        Ok(true)
    }
}
