use crate::ConfigId;
use std::fmt;

/// Subdetector identifiers double as trigger sources and as keys of the
/// readout map. `All` only ever appears as a readout-map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum SubdetectorId {
    All,
    InIce,
    IceTop,
    Global,
    Unknown,
}

impl SubdetectorId {
    /// The subdetectors that can actually be read out.
    pub fn is_physical(self) -> bool {
        matches!(self, SubdetectorId::InIce | SubdetectorId::IceTop)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum TriggerKind {
    SimpleMultiplicity,
    Cluster,
    MultiplicityString,
    Throughput,
    Merged,
    Unknown,
}

/// Identifies a trigger configuration, not a trigger instance. Two firings
/// of the same configured trigger carry the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TriggerKey {
    pub source: SubdetectorId,
    pub kind: TriggerKind,
    pub config_id: Option<ConfigId>,
}

impl TriggerKey {
    pub fn new(source: SubdetectorId, kind: TriggerKind) -> Self {
        Self {
            source,
            kind,
            config_id: None,
        }
    }

    pub fn with_config_id(source: SubdetectorId, kind: TriggerKind, config_id: ConfigId) -> Self {
        Self {
            source,
            kind,
            config_id: Some(config_id),
        }
    }
}

impl fmt::Display for TriggerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.source, self.kind)?;
        match self.config_id {
            Some(config_id) => write!(f, "#{config_id}"),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_with_and_without_config_id() {
        let bare = TriggerKey::new(SubdetectorId::InIce, TriggerKind::SimpleMultiplicity);
        assert_eq!(bare.to_string(), "InIce/SimpleMultiplicity");

        let configured =
            TriggerKey::with_config_id(SubdetectorId::IceTop, TriggerKind::Cluster, 1011);
        assert_eq!(configured.to_string(), "IceTop/Cluster#1011");
    }

    #[test]
    fn physical_subdetectors() {
        assert!(SubdetectorId::InIce.is_physical());
        assert!(SubdetectorId::IceTop.is_physical());
        assert!(!SubdetectorId::All.is_physical());
        assert!(!SubdetectorId::Global.is_physical());
        assert!(!SubdetectorId::Unknown.is_physical());
    }
}
