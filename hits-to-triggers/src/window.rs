use crate::error::ConfigError;
use aurora_common::{Time, TriggerHit};
use std::ops::Range;

/// The trailing time-window scan shared by every trigger detector.
///
/// A FIFO of the hits currently inside the window slides over the stream.
/// Once the queue reaches `threshold` hits the run is active and every
/// queued hit is accumulated into it; when the count drops back below the
/// threshold the run closes. A hit consumed by a closed run is never reused,
/// so the closing hit starts the next run from scratch.
#[derive(Debug, Clone)]
pub(crate) struct TimeWindow {
    window: Time,
    threshold: usize,
}

impl TimeWindow {
    pub(crate) fn new(window: Time, threshold: u32) -> Result<Self, ConfigError> {
        if window.is_nan() || window <= 0.0 {
            return Err(ConfigError::NonPositiveWindow(window));
        }
        if threshold == 0 {
            return Err(ConfigError::ZeroThreshold);
        }
        Ok(Self {
            window,
            threshold: threshold as usize,
        })
    }

    /// Candidate runs as index ranges into `hits`, time ordered and
    /// disjoint. `hits` must already be time sorted.
    pub(crate) fn candidate_runs(&self, hits: &[TriggerHit]) -> Vec<Range<usize>> {
        let mut runs = Vec::new();
        let mut front = 0;
        let mut run_start: Option<usize> = None;
        let mut run_end = 0;

        for (index, hit) in hits.iter().enumerate() {
            // the queue is hits[front..=index]
            while hits[front].time < hit.time - self.window {
                front += 1;
            }
            if index - front + 1 >= self.threshold {
                run_start.get_or_insert(front);
                run_end = index;
            } else if let Some(start) = run_start.take() {
                runs.push(start..run_end + 1);
                front = index;
            }
        }
        if let Some(start) = run_start {
            runs.push(start..run_end + 1);
        }
        runs
    }
}
