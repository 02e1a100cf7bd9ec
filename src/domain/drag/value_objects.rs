use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumIter};

use crate::domain::geometry::{Padding, Point, Position};

/// Edge of the bounding container a drag can push against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, StrumDisplay, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Top,
    Bottom,
    Left,
    Right,
}

/// Everything the decision engine needs for one drag tick.
///
/// Element and content positions are raw (scaled) pixels and get divided by
/// `scale`. Scroll offsets and wrapper dimensions are screen space.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometrySnapshot {
    pub position: Point,
    pub last_position: Point,
    pub scale: f64,
    pub edge_distance: f64,
    #[serde(default)]
    pub padding: Padding,

    pub scroll_left: f64,
    pub scroll_top: f64,

    pub wrapper_width: f64,
    pub wrapper_height: f64,

    pub content_position: Position,
    pub content_width: f64,
    pub content_height: f64,

    pub fake_content_position: Position,
    pub fake_content_width: f64,
    pub fake_content_height: f64,

    pub element_position: Position,
    pub element_width: f64,
    pub element_height: f64,

    #[serde(default)]
    pub element_margin_top: f64,
    #[serde(default)]
    pub element_margin_left: f64,
}

/// Per-edge outcome of [`calculate_drag`](super::calculate_drag)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragDecision {
    pub adjust_top: bool,
    pub scroll_to_top: bool,

    pub adjust_bottom: bool,
    pub scroll_to_bottom: bool,

    pub adjust_left: bool,
    pub scroll_to_left: bool,
    pub left_distance: f64,

    pub adjust_right: bool,
    pub scroll_to_right: bool,
}

impl DragDecision {
    /// Should the bounding container grow towards `direction`
    pub fn adjusts(&self, direction: Direction) -> bool {
        match direction {
            Direction::Top => self.adjust_top,
            Direction::Bottom => self.adjust_bottom,
            Direction::Left => self.adjust_left,
            Direction::Right => self.adjust_right,
        }
    }

    /// Should the viewport scroll towards `direction`
    pub fn scrolls(&self, direction: Direction) -> bool {
        match direction {
            Direction::Top => self.scroll_to_top,
            Direction::Bottom => self.scroll_to_bottom,
            Direction::Left => self.scroll_to_left,
            Direction::Right => self.scroll_to_right,
        }
    }

    pub fn is_idle(&self) -> bool {
        use strum::IntoEnumIterator;
        Direction::iter().all(|d| !self.adjusts(d) && !self.scrolls(d))
    }
}
