pub mod cluster;
pub mod multiplicity_string;
pub mod simple_majority;

use crate::error::{ConfigError, DetectError, PreconditionError};
use crate::window::TimeWindow;
use aurora_common::key::TriggerKey;
use aurora_common::{Time, TriggerHit, TriggerInterval, is_time_ordered};
use itertools::Itertools;
use tracing::debug;

pub use cluster::Coherence;
pub use multiplicity_string::StringSpan;
pub use simple_majority::Majority;

/// The positional constraint a candidate time window must satisfy before it
/// is promoted to a fired trigger. The count threshold has already been met
/// when this runs.
pub trait PositionCriterion {
    fn accept(&self, hits: &[TriggerHit], threshold: usize) -> Result<bool, ConfigError>;
}

/// A sliding-window trigger detector: the shared time scan plus one
/// positional criterion selected by the trigger kind.
///
/// Detectors are constructed fresh per event and hold no state across
/// `detect` calls.
#[derive(Debug, Clone)]
pub struct TriggerDetector<C> {
    key: TriggerKey,
    scan: TimeWindow,
    threshold: usize,
    criterion: C,
}

pub type SimpleMajorityTrigger = TriggerDetector<Majority>;
pub type ClusterTrigger = TriggerDetector<Coherence>;
pub type MultiplicityStringTrigger = TriggerDetector<StringSpan>;

impl<C: PositionCriterion> TriggerDetector<C> {
    pub fn new(
        key: TriggerKey,
        window: Time,
        threshold: u32,
        criterion: C,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            key,
            scan: TimeWindow::new(window, threshold)?,
            threshold: threshold as usize,
            criterion,
        })
    }

    /// Scans one event's time-sorted hits and returns every fired trigger,
    /// time ordered and non-overlapping.
    pub fn detect(&self, hits: &[TriggerHit]) -> Result<Vec<TriggerInterval>, DetectError> {
        ensure_time_ordered(hits)?;

        let mut triggers = Vec::new();
        for run in self.scan.candidate_runs(hits) {
            let run_hits = &hits[run];
            if !self.criterion.accept(run_hits, self.threshold)? {
                continue;
            }
            // the run is never empty and its hits are time sorted
            let start = run_hits[0].time;
            let stop = run_hits[run_hits.len() - 1].time;
            triggers.push(TriggerInterval::fired(self.key, start, stop - start));
        }

        debug!(
            key = %self.key,
            hits = hits.len(),
            triggers = triggers.len(),
            "scanned event"
        );
        Ok(triggers)
    }
}

impl TriggerDetector<Majority> {
    pub fn simple_majority(key: TriggerKey, window: Time, threshold: u32) -> Result<Self, ConfigError> {
        Self::new(key, window, threshold, Majority)
    }
}

impl TriggerDetector<Coherence> {
    pub fn cluster(
        key: TriggerKey,
        window: Time,
        threshold: u32,
        coherence: Coherence,
    ) -> Result<Self, ConfigError> {
        Self::new(key, window, threshold, coherence)
    }
}

impl TriggerDetector<StringSpan> {
    pub fn multiplicity_string(
        key: TriggerKey,
        window: Time,
        threshold: u32,
        span: StringSpan,
    ) -> Result<Self, ConfigError> {
        Self::new(key, window, threshold, span)
    }
}

fn ensure_time_ordered(hits: &[TriggerHit]) -> Result<(), PreconditionError> {
    if is_time_ordered(hits) {
        return Ok(());
    }
    let index = hits
        .iter()
        .tuple_windows()
        .position(|(earlier, later)| later.time < earlier.time)
        .map_or(hits.len(), |offset| offset + 1);
    Err(PreconditionError::UnsortedHits { index })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aurora_common::key::{SubdetectorId, TriggerKind};

    #[test]
    fn unsorted_hits_are_rejected_not_reordered() {
        let key = TriggerKey::new(SubdetectorId::InIce, TriggerKind::SimpleMultiplicity);
        let detector = SimpleMajorityTrigger::simple_majority(key, 1500.0, 3).unwrap();

        let hits = [
            TriggerHit::new(1.0, 1, 1),
            TriggerHit::new(3.0, 2, 1),
            TriggerHit::new(2.0, 3, 1),
        ];
        assert_eq!(
            detector.detect(&hits).unwrap_err(),
            DetectError::Precondition(PreconditionError::UnsortedHits { index: 2 })
        );
    }

    #[test]
    fn construction_rejects_bad_window() {
        let key = TriggerKey::new(SubdetectorId::InIce, TriggerKind::SimpleMultiplicity);
        assert_eq!(
            SimpleMajorityTrigger::simple_majority(key, -5.0, 3).unwrap_err(),
            ConfigError::NonPositiveWindow(-5.0)
        );
    }
}
