use crate::{Time, key::TriggerKey};

/// A trigger decision: "an interesting hit pattern occurred in
/// `[start, start + length]`". `length` is never negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerInterval {
    pub key: TriggerKey,
    pub fired: bool,
    pub start: Time,
    pub length: Time,
}

impl TriggerInterval {
    pub fn fired(key: TriggerKey, start: Time, length: Time) -> Self {
        Self {
            key,
            fired: true,
            start,
            length,
        }
    }

    pub fn stop(&self) -> Time {
        self.start + self.length
    }

    /// Closed-interval overlap: touching endpoints count as overlapping.
    pub fn overlaps(&self, other: &TriggerInterval) -> bool {
        self.start <= other.stop() && other.start <= self.stop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{SubdetectorId, TriggerKind};

    fn interval(start: Time, length: Time) -> TriggerInterval {
        TriggerInterval::fired(
            TriggerKey::new(SubdetectorId::InIce, TriggerKind::SimpleMultiplicity),
            start,
            length,
        )
    }

    #[test]
    fn stop_is_start_plus_length() {
        assert_eq!(interval(10.0, 5.0).stop(), 15.0);
        assert_eq!(interval(10.0, 0.0).stop(), 10.0);
    }

    #[test]
    fn touching_endpoints_overlap() {
        let a = interval(0.0, 10.0);
        let b = interval(10.0, 5.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn disjoint_intervals_do_not_overlap() {
        let a = interval(0.0, 10.0);
        let b = interval(10.1, 5.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn containment_overlaps() {
        let outer = interval(0.0, 100.0);
        let inner = interval(40.0, 1.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }
}
