use crate::domain::geometry::{Point, Position, Size};

/// Scroll offset that centers a viewport of `viewport` size inside a
/// scrollable area of `scroll` size.
pub fn scroll_center(scroll: Size, viewport: Size) -> Position {
    Position {
        left: scroll.width / 2.0 - viewport.width / 2.0,
        top: scroll.height / 2.0 - viewport.height / 2.0,
    }
}

/// Midpoint of a box of the given size.
pub fn center_of(size: Size) -> Point {
    Point::new(size.width / 2.0, size.height / 2.0)
}

/// Position that centers `content` inside the bounding container.
pub fn centered_content(fake_content: Size, content: Size) -> Position {
    let center = center_of(fake_content);
    Position {
        left: center.x - content.width / 2.0,
        top: center.y - content.height / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_viewport_in_scroll_area() {
        let offset = scroll_center(Size::new(2850.0, 1014.0), Size::new(1425.0, 507.0));
        assert_eq!(offset, Position::new(712.5, 253.5));
    }

    #[test]
    fn viewport_larger_than_area_gives_negative_offset() {
        let offset = scroll_center(Size::new(100.0, 100.0), Size::new(300.0, 200.0));
        assert_eq!(offset, Position::new(-100.0, -50.0));
    }

    #[test]
    fn content_is_centered_in_fake_content() {
        let pos = centered_content(Size::new(2850.0, 1014.0), Size::new(1425.0, 507.0));
        assert_eq!(pos, Position::new(712.5, 253.5));
    }
}
