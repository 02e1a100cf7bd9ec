use crate::domain::errors::{SpaceResult, ensure_scale};
use crate::domain::geometry::{Point, Position};

/// Controller state carried between drag ticks.
///
/// Passed into every controller operation by value and handed back updated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub scale: f64,
    pub last_position: Point,
    /// Compensating margin applied to the dragged element so far
    pub element_margin: Position,
    /// Time of the last processed tick, ms
    pub last_call_ms: u64,
}

impl DragState {
    pub fn new(scale: f64, now_ms: u64) -> Self {
        Self {
            scale,
            last_position: Point::ORIGIN,
            element_margin: Position::default(),
            last_call_ms: now_ms,
        }
    }

    /// True while `now_ms` is still inside the throttle window.
    pub fn is_throttled(&self, now_ms: u64, throttle_ms: u64) -> bool {
        now_ms.saturating_sub(self.last_call_ms) < throttle_ms
    }

    /// Replace the scale. Non-positive or non-finite values are rejected.
    pub fn with_scale(self, scale: f64) -> SpaceResult<Self> {
        Ok(Self { scale: ensure_scale(scale)?, ..self })
    }

    /// Margins go back to zero once the drag ends.
    pub fn reset_margins(self) -> Self {
        Self { element_margin: Position::default(), ..self }
    }
}
