use infinite_space_wasm::domain::drag::{DragDecision, GeometrySnapshot, calculate_drag};
use infinite_space_wasm::domain::geometry::{Padding, Point, Position};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

/// Half-pixel grid keeps every scaled value exact for power-of-two scales.
fn coord(g: &mut Gen) -> f64 {
    i16::arbitrary(g) as f64 / 2.0
}

fn extent(g: &mut Gen) -> f64 {
    (u16::arbitrary(g) % 4096) as f64
}

fn step(g: &mut Gen) -> f64 {
    *g.choose(&[-1.0, 0.0, 1.0]).unwrap()
}

#[derive(Clone, Debug)]
struct Input(GeometrySnapshot);

impl Arbitrary for Input {
    fn arbitrary(g: &mut Gen) -> Self {
        let position = Point::new(coord(g), coord(g));
        let last_position = Point::new(position.x + step(g), position.y + step(g));
        Input(GeometrySnapshot {
            position,
            last_position,
            scale: 1.0,
            edge_distance: extent(g) / 8.0,
            padding: Padding::new(coord(g), coord(g)),
            scroll_left: extent(g),
            scroll_top: extent(g),
            wrapper_width: extent(g),
            wrapper_height: extent(g),
            content_position: Position::new(coord(g), coord(g)),
            content_width: extent(g),
            content_height: extent(g),
            fake_content_position: Position::new(coord(g), coord(g)),
            fake_content_width: extent(g),
            fake_content_height: extent(g),
            element_position: Position::new(coord(g), coord(g)),
            element_width: extent(g),
            element_height: extent(g),
            element_margin_top: coord(g),
            element_margin_left: coord(g),
        })
    }
}

#[derive(Clone, Copy, Debug)]
struct Scale(f64);

impl Arbitrary for Scale {
    fn arbitrary(g: &mut Gen) -> Self {
        Scale(*g.choose(&[0.25, 0.5, 1.0, 2.0, 4.0]).unwrap())
    }
}

fn transpose(s: &GeometrySnapshot) -> GeometrySnapshot {
    GeometrySnapshot {
        position: s.position.transposed(),
        last_position: s.last_position.transposed(),
        scale: s.scale,
        edge_distance: s.edge_distance,
        padding: Padding::new(s.padding.left, s.padding.top),
        scroll_left: s.scroll_top,
        scroll_top: s.scroll_left,
        wrapper_width: s.wrapper_height,
        wrapper_height: s.wrapper_width,
        content_position: s.content_position.transposed(),
        content_width: s.content_height,
        content_height: s.content_width,
        fake_content_position: s.fake_content_position.transposed(),
        fake_content_width: s.fake_content_height,
        fake_content_height: s.fake_content_width,
        element_position: s.element_position.transposed(),
        element_width: s.element_height,
        element_height: s.element_width,
        element_margin_top: s.element_margin_left,
        element_margin_left: s.element_margin_top,
    }
}

fn scale_raw_pixels(s: &GeometrySnapshot, scale: f64) -> GeometrySnapshot {
    GeometrySnapshot {
        scale,
        element_position: Position::new(s.element_position.left * scale, s.element_position.top * scale),
        content_position: Position::new(s.content_position.left * scale, s.content_position.top * scale),
        ..s.clone()
    }
}

fn adjust_flags(d: &DragDecision) -> [bool; 4] {
    [d.adjust_top, d.adjust_bottom, d.adjust_left, d.adjust_right]
}

#[quickcheck]
fn still_y_axis_never_touches_top_or_bottom(input: Input) -> bool {
    let mut s = input.0;
    s.last_position.y = s.position.y;
    let d = calculate_drag(&s);
    !d.adjust_top && !d.scroll_to_top && !d.adjust_bottom && !d.scroll_to_bottom
}

#[quickcheck]
fn still_x_axis_never_touches_left_or_right(input: Input) -> bool {
    let mut s = input.0;
    s.last_position.x = s.position.x;
    let d = calculate_drag(&s);
    !d.adjust_left && !d.scroll_to_left && !d.adjust_right && !d.scroll_to_right
}

#[quickcheck]
fn adjust_decisions_ignore_scale(input: Input, scale: Scale) -> bool {
    let base = calculate_drag(&input.0);
    let scaled = calculate_drag(&scale_raw_pixels(&input.0, scale.0));
    adjust_flags(&base) == adjust_flags(&scaled)
}

#[quickcheck]
fn all_decisions_ignore_scale_when_screen_space_scales_too(input: Input, scale: Scale) -> bool {
    let s = &input.0;
    let scaled = GeometrySnapshot {
        scroll_left: s.scroll_left * scale.0,
        scroll_top: s.scroll_top * scale.0,
        wrapper_width: s.wrapper_width * scale.0,
        wrapper_height: s.wrapper_height * scale.0,
        ..scale_raw_pixels(s, scale.0)
    };
    calculate_drag(s) == calculate_drag(&scaled)
}

#[quickcheck]
fn vertical_edges_mirror_horizontal_edges(input: Input, scale: Scale) -> bool {
    let s = scale_raw_pixels(&input.0, scale.0);
    let d = calculate_drag(&s);
    let t = calculate_drag(&transpose(&s));

    d.adjust_top == t.adjust_left
        && d.scroll_to_top == t.scroll_to_left
        && d.adjust_bottom == t.adjust_right
        && d.scroll_to_bottom == t.scroll_to_right
        && d.adjust_left == t.adjust_top
        && d.scroll_to_left == t.scroll_to_top
        && d.adjust_right == t.adjust_bottom
        && d.scroll_to_right == t.scroll_to_bottom
}
