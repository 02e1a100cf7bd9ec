use derive_more::Constructor;
use serde::{Deserialize, Serialize};

/// Value Object - pointer/element coordinate pair, `[x, y]` on the wire
#[derive(Debug, Clone, Copy, PartialEq, Default, Constructor, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Swap the axes.
    pub fn transposed(&self) -> Self {
        Self { x: self.y, y: self.x }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Value Object - offset of a box inside its container
#[derive(Debug, Clone, Copy, PartialEq, Default, Constructor, Serialize, Deserialize)]
pub struct Position {
    pub left: f64,
    pub top: f64,
}

impl Position {
    pub fn transposed(&self) -> Self {
        Self { left: self.top, top: self.left }
    }
}

/// Value Object - box dimensions
#[derive(Debug, Clone, Copy, PartialEq, Default, Constructor, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }
}

/// Canvas padding, used when the bounding container does not sit at (0, 0)
#[derive(Debug, Clone, Copy, PartialEq, Default, Constructor, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub top: f64,
    pub left: f64,
}

/// Size and position of one box, as reported to change listeners
#[derive(Debug, Clone, Copy, PartialEq, Default, Constructor, Serialize, Deserialize)]
pub struct Frame {
    pub size: Size,
    pub position: Position,
}

impl Frame {
    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_serializes_as_pair() {
        let point = Point::new(313.0, 602.0);
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(json, "[313.0,602.0]");
        let back: Point = serde_json::from_str("[1, 2]").unwrap();
        assert_eq!(back, Point::new(1.0, 2.0));
    }

    #[test]
    fn negative_size_is_invalid() {
        assert!(Size::new(0.0, 10.0).is_valid());
        assert!(!Size::new(-1.0, 10.0).is_valid());
        assert!(!Size::new(f64::NAN, 10.0).is_valid());
    }
}
