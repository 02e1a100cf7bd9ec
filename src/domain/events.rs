use serde::Serialize;

use crate::domain::drag::Direction;
use crate::domain::geometry::{Frame, Position, Size};

/// Final geometry reported once a drag ends
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceChange {
    pub content: Frame,
    pub fake_content: Frame,
    pub wrapper: Frame,
    pub scale: f64,
    pub scroll: Position,
}

/// Something the controller did to the page during a drag
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SpaceEvent {
    /// Bounding container grew towards `direction`
    BoundsAdjusted { direction: Direction, size: Size },
    /// Dragged element margin compensates for growth at the top or left
    MarginCompensated { margin: Position },
    /// Viewport scroll offset changed
    ViewportScrolled { from: Position, to: Position },
}
