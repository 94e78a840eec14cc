use aurora_common::Time;
use aurora_common::key::{SubdetectorId, TriggerKey};
use std::collections::HashMap;

/// How far one fired trigger obliges a subdetector to read out, relative to
/// the trigger interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadoutWindow {
    pub minus: Time,
    pub plus: Time,
    pub offset: Time,
}

impl ReadoutWindow {
    pub fn new(minus: Time, plus: Time, offset: Time) -> Self {
        Self {
            minus,
            plus,
            offset,
        }
    }

    pub fn symmetric(minus: Time, plus: Time) -> Self {
        Self::new(minus, plus, 0.0)
    }
}

/// The immutable per-event snapshot of every readout relationship: for each
/// trigger configuration, which subdetectors read out and by how much. The
/// snapshot is resolved by the surrounding pipeline from the detector status
/// record and injected here by value; nothing is read from ambient state.
#[derive(Debug, Clone, Default)]
pub struct ReadoutConfig {
    windows: HashMap<TriggerKey, HashMap<SubdetectorId, ReadoutWindow>>,
}

impl ReadoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: TriggerKey, target: SubdetectorId, window: ReadoutWindow) {
        self.windows.entry(key).or_default().insert(target, window);
    }

    pub fn contains(&self, key: &TriggerKey) -> bool {
        self.windows.contains_key(key)
    }

    pub(crate) fn entry(&self, key: &TriggerKey) -> Option<&HashMap<SubdetectorId, ReadoutWindow>> {
        self.windows.get(key)
    }
}
