use super::value_objects::{DragDecision, GeometrySnapshot};

/// Decide, per edge, whether the bounding container should grow and whether
/// the viewport should scroll.
///
/// An edge is only considered while the pointer moves towards it, compared
/// strictly against `last_position`. Inputs are not validated: `scale` must be
/// positive, and NaN geometry makes the affected comparisons come out `false`.
pub fn calculate_drag(s: &GeometrySnapshot) -> DragDecision {
    let top = s.position.y + s.element_margin_top;
    let left = s.position.x + s.element_margin_left;

    let element_left = s.element_position.left / s.scale;
    let element_top = s.element_position.top / s.scale;
    let element_right = element_left + s.element_width;
    let element_bottom = element_top + s.element_height;

    let content_left = s.content_position.left / s.scale;
    let content_top = s.content_position.top / s.scale;

    let scroll_left = s.scroll_left / s.scale;
    let scroll_top = s.scroll_top / s.scale;

    // Top
    let moving_to_top = s.last_position.y > s.position.y;
    let top_distance = content_top + top;
    let adjust_top = moving_to_top
        && s.fake_content_position.top + top_distance <= s.edge_distance + s.padding.top;
    let scroll_to_top = moving_to_top && top_distance <= scroll_top + s.edge_distance;

    // Bottom
    let moving_to_bottom = s.last_position.y < s.position.y;
    let bottom_distance =
        s.fake_content_position.top + s.fake_content_height - content_top - element_bottom;
    let adjust_bottom = moving_to_bottom && s.edge_distance >= bottom_distance;
    let scroll_to_bottom = moving_to_bottom
        && (scroll_top + s.wrapper_height / s.scale)
            - (s.position.y + content_top + s.element_height)
            - s.element_margin_top
            < s.edge_distance;

    // Left
    let moving_to_left = s.last_position.x > s.position.x;
    let left_distance = content_left + left;
    let adjust_left = moving_to_left
        && s.fake_content_position.left + left_distance <= s.edge_distance + s.padding.left;
    let scroll_to_left = moving_to_left && left_distance <= scroll_left + s.edge_distance;

    // Right
    let moving_to_right = s.last_position.x < s.position.x;
    let right_distance =
        s.fake_content_position.left + s.fake_content_width - content_left - element_right;
    let adjust_right = moving_to_right && s.edge_distance >= right_distance;
    let scroll_to_right = moving_to_right
        && (scroll_left + s.wrapper_width / s.scale)
            - (s.position.x + content_left + s.element_width)
            - s.element_margin_left
            < s.edge_distance;

    DragDecision {
        adjust_top,
        scroll_to_top,
        adjust_bottom,
        scroll_to_bottom,
        adjust_left,
        scroll_to_left,
        left_distance,
        adjust_right,
        scroll_to_right,
    }
}
