use aurora_common::key::TriggerKey;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GlobalTriggerError {
    #[error("no readout configuration at all for trigger {0}")]
    UnknownTriggerKey(TriggerKey),
}
