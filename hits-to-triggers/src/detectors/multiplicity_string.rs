use super::PositionCriterion;
use crate::error::ConfigError;
use aurora_common::{Position, TriggerHit};
use tracing::debug;

/// The multiplicity-string trigger's positional constraint. A detector
/// instance sees the hit stream of a single string, so raw positions are
/// already comparable.
///
/// A candidate window containing any hit in the veto region
/// (`position <= veto_depth`) is discarded outright. Otherwise each hit
/// position is tried in ascending order as the start of a span of width
/// `max_span`; the first span holding at least the threshold number of hits
/// fires the window.
#[derive(Debug, Clone, Copy)]
pub struct StringSpan {
    max_span: u32,
    veto_depth: Option<Position>,
}

impl StringSpan {
    pub fn new(max_span: u32, veto_depth: Option<Position>) -> Result<Self, ConfigError> {
        if max_span == 0 {
            return Err(ConfigError::ZeroSpan);
        }
        Ok(Self {
            max_span,
            veto_depth,
        })
    }
}

impl PositionCriterion for StringSpan {
    fn accept(&self, hits: &[TriggerHit], threshold: usize) -> Result<bool, ConfigError> {
        if let Some(veto_depth) = self.veto_depth {
            if hits.iter().any(|hit| hit.position <= veto_depth) {
                debug!(veto_depth, "candidate window vetoed");
                return Ok(false);
            }
        }

        let mut positions: Vec<Position> = hits.iter().map(|hit| hit.position).collect();
        positions.sort_unstable();

        let span = u64::from(self.max_span);
        Ok(positions.iter().enumerate().any(|(index, &start)| {
            let end = positions.partition_point(|&position| u64::from(position) < u64::from(start) + span);
            end - index >= threshold
        }))
    }
}
