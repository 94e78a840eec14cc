use crate::config::ReadoutConfig;
use crate::error::GlobalTriggerError;
use crate::hierarchy::TriggerNode;
use crate::readout::ReadoutWindowUtil;
use aurora_common::TriggerInterval;
use aurora_common::key::{SubdetectorId, TriggerKey, TriggerKind};
use std::mem;
use tracing::{debug, warn};

/// A synthetic throughput trigger paired with the fired subdetector trigger
/// that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ThroughputPair {
    pub throughput: TriggerInterval,
    pub source: TriggerInterval,
}

/// Merges one event's fired subdetector triggers into the hierarchical
/// readout plan.
///
/// Phase one expands every fired trigger into the envelope of the readout
/// windows it implies and wraps it in a throughput trigger. Phase two sorts
/// the throughput triggers by start time and folds transitively overlapping
/// windows into merged blocks, yielding a time-ordered forest that covers
/// each input trigger exactly once.
pub struct GlobalTriggerSim {
    readout: ReadoutWindowUtil,
}

impl GlobalTriggerSim {
    pub fn new(config: ReadoutConfig) -> Self {
        Self {
            readout: ReadoutWindowUtil::new(config),
        }
    }

    /// Phase one. Triggers from sources that are not physical subdetectors
    /// contribute nothing to readout and are dropped, as are triggers with
    /// no readout relationship to any subdetector.
    pub fn insert_throughput_triggers(
        &self,
        triggers: &[TriggerInterval],
    ) -> Result<Vec<ThroughputPair>, GlobalTriggerError> {
        let mut pairs = Vec::new();
        for &trigger in triggers {
            if !trigger.fired {
                continue;
            }
            if !trigger.key.source.is_physical() {
                warn!(key = %trigger.key, "skipping trigger from a source without readout");
                continue;
            }
            let Some((start, stop)) = self.readout.readout_envelope(&trigger)? else {
                debug!(key = %trigger.key, "trigger implies no readout at all");
                continue;
            };
            let throughput = TriggerInterval::fired(
                TriggerKey::new(SubdetectorId::Global, TriggerKind::Throughput),
                start,
                stop - start,
            );
            pairs.push(ThroughputPair {
                throughput,
                source: trigger,
            });
        }
        Ok(pairs)
    }

    /// Phase two. Touching endpoints count as overlapping.
    pub fn merge(&self, mut pairs: Vec<ThroughputPair>) -> Vec<TriggerNode> {
        pairs.sort_by(|a, b| a.throughput.start.total_cmp(&b.throughput.start));

        let mut forest = Vec::new();
        let mut group: Vec<ThroughputPair> = Vec::new();
        let mut group_stop = f64::NEG_INFINITY;

        for pair in pairs {
            if !group.is_empty() && pair.throughput.start > group_stop {
                forest.extend(close_group(mem::take(&mut group)));
            }
            group_stop = if group.is_empty() {
                pair.throughput.stop()
            } else {
                group_stop.max(pair.throughput.stop())
            };
            group.push(pair);
        }
        forest.extend(close_group(group));
        forest
    }

    /// Both phases in one step.
    pub fn build(
        &self,
        triggers: &[TriggerInterval],
    ) -> Result<Vec<TriggerNode>, GlobalTriggerError> {
        Ok(self.merge(self.insert_throughput_triggers(triggers)?))
    }
}

fn close_group(group: Vec<ThroughputPair>) -> Option<TriggerNode> {
    let (start, stop) = group
        .iter()
        .map(|pair| (pair.throughput.start, pair.throughput.stop()))
        .reduce(|(start_a, stop_a), (start_b, stop_b)| (start_a.min(start_b), stop_a.max(stop_b)))?;

    let mut nodes: Vec<TriggerNode> = group
        .into_iter()
        .map(|pair| TriggerNode::Throughput(pair.throughput, Box::new(TriggerNode::Leaf(pair.source))))
        .collect();

    if nodes.len() == 1 {
        return nodes.pop();
    }
    let merged = TriggerInterval::fired(
        TriggerKey::new(SubdetectorId::Global, TriggerKind::Merged),
        start,
        stop - start,
    );
    Some(TriggerNode::Merged(merged, nodes))
}
