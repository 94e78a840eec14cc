pub mod interval;
pub mod key;

pub use interval::TriggerInterval;

pub type Time = f64;
pub type Position = u32;
pub type ElementId = i32;
pub type ConfigId = i32;

/// A single detection on one detector element: a time and a position along
/// the element (optical-module number on a string, panel index, ...).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerHit {
    pub time: Time,
    pub position: Position,
    pub element: ElementId,
}

impl TriggerHit {
    pub fn new(time: Time, position: Position, element: ElementId) -> Self {
        Self {
            time,
            position,
            element,
        }
    }
}

/// Hits are delivered time ordered; ties may appear in any stable order.
pub fn is_time_ordered(hits: &[TriggerHit]) -> bool {
    hits.iter()
        .zip(hits.iter().skip(1))
        .all(|(earlier, later)| earlier.time <= later.time)
}
