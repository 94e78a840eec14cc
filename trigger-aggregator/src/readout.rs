use crate::config::ReadoutConfig;
use crate::error::GlobalTriggerError;
use aurora_common::key::SubdetectorId;
use aurora_common::{Time, TriggerInterval};
use tracing::debug;

/// Maps a fired trigger interval onto the hardware readout interval it
/// implies for a given subdetector.
///
/// Reading out the subdetector that fired expands the trigger interval
/// itself (`start - minus`, `stop + plus`). Reading out any other
/// subdetector anchors a fixed-length window to the trigger *start* only
/// (`start + offset ± minus/plus`); the trigger length never enters that
/// branch.
pub struct ReadoutWindowUtil {
    config: ReadoutConfig,
}

impl ReadoutWindowUtil {
    pub fn new(config: ReadoutConfig) -> Self {
        Self { config }
    }

    pub fn in_ice_readout_window(
        &self,
        trigger: &TriggerInterval,
    ) -> Result<Option<(Time, Time)>, GlobalTriggerError> {
        self.readout_window(SubdetectorId::InIce, trigger)
    }

    pub fn ice_top_readout_window(
        &self,
        trigger: &TriggerInterval,
    ) -> Result<Option<(Time, Time)>, GlobalTriggerError> {
        self.readout_window(SubdetectorId::IceTop, trigger)
    }

    /// The readout interval `target` owes for `trigger`, or `None` when no
    /// readout relationship is configured for this particular pairing.
    /// A trigger key missing from the snapshot altogether is a
    /// configuration error.
    pub fn readout_window(
        &self,
        target: SubdetectorId,
        trigger: &TriggerInterval,
    ) -> Result<Option<(Time, Time)>, GlobalTriggerError> {
        let entries = self
            .config
            .entry(&trigger.key)
            .ok_or(GlobalTriggerError::UnknownTriggerKey(trigger.key))?;

        let Some(window) = entries
            .get(&SubdetectorId::All)
            .or_else(|| entries.get(&target))
        else {
            debug!(key = %trigger.key, %target, "no readout relationship for this pairing");
            return Ok(None);
        };

        let readout = if target == trigger.key.source {
            (trigger.start - window.minus, trigger.stop() + window.plus)
        } else {
            (
                trigger.start + window.offset - window.minus,
                trigger.start + window.offset + window.plus,
            )
        };
        Ok(Some(readout))
    }

    /// The envelope over both physical subdetectors' readout windows, or
    /// `None` when neither has a readout relationship with this trigger.
    pub fn readout_envelope(
        &self,
        trigger: &TriggerInterval,
    ) -> Result<Option<(Time, Time)>, GlobalTriggerError> {
        let windows = [
            self.in_ice_readout_window(trigger)?,
            self.ice_top_readout_window(trigger)?,
        ];
        Ok(windows
            .into_iter()
            .flatten()
            .reduce(|(start_a, stop_a), (start_b, stop_b)| {
                (start_a.min(start_b), stop_a.max(stop_b))
            }))
    }
}
