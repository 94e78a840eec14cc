use super::PositionCriterion;
use crate::error::ConfigError;
use aurora_common::{ElementId, Position, TriggerHit};

/// The cluster trigger's spatial-coherence requirement: some contiguous
/// position interval of width `length` must contain at least the threshold
/// number of the windowed hits.
///
/// Hits on different elements are made comparable by mapping
/// `(element, position)` onto a single axis; the mapping is injective as
/// long as every hit stays inside the configured ranges, and a hit outside
/// them is a configuration error rather than being silently ignored.
#[derive(Debug, Clone, Copy)]
pub struct Coherence {
    length: u32,
    min_element: ElementId,
    min_position: Position,
    position_range: u32,
}

impl Coherence {
    pub fn new(
        length: u32,
        min_element: ElementId,
        min_position: Position,
        position_range: u32,
    ) -> Result<Self, ConfigError> {
        if length == 0 {
            return Err(ConfigError::ZeroCoherence);
        }
        if position_range == 0 {
            return Err(ConfigError::ZeroPositionRange);
        }
        Ok(Self {
            length,
            min_element,
            min_position,
            position_range,
        })
    }

    pub fn hash(&self, hit: &TriggerHit) -> Result<i64, ConfigError> {
        let in_range = hit.element >= self.min_element
            && hit.position >= self.min_position
            && hit.position - self.min_position < self.position_range;
        if !in_range {
            return Err(ConfigError::HitOutsideRange {
                element: hit.element,
                position: hit.position,
            });
        }
        Ok(i64::from(hit.element - self.min_element) * i64::from(self.position_range)
            + i64::from(hit.position - self.min_position))
    }

    pub fn element_of(&self, hash: i64) -> ElementId {
        self.min_element + (hash / i64::from(self.position_range)) as ElementId
    }

    pub fn position_of(&self, hash: i64) -> Position {
        self.min_position + (hash % i64::from(self.position_range)) as Position
    }
}

impl PositionCriterion for Coherence {
    fn accept(&self, hits: &[TriggerHit], threshold: usize) -> Result<bool, ConfigError> {
        let mut hashes = hits
            .iter()
            .map(|hit| self.hash(hit))
            .collect::<Result<Vec<_>, _>>()?;
        hashes.sort_unstable();

        let width = i64::from(self.length);
        Ok(hashes.iter().enumerate().any(|(index, &start)| {
            let end = hashes.partition_point(|&hash| hash < start + width);
            end - index >= threshold
        }))
    }
}
