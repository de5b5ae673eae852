use crate::model::Point;
use std::fmt::Write;

/// Label anchor for a boundary: the arithmetic mean of its vertices.
///
/// This is a vertex average, not the area-weighted centroid. For concave or
/// unevenly sampled outlines the result can land outside the shape.
/// `boundary` must be non-empty.
pub fn centroid(boundary: &[Point]) -> Point {
    debug_assert!(!boundary.is_empty(), "centroid of an empty boundary");
    let n = boundary.len() as f32;
    let (sx, sy) = boundary
        .iter()
        .fold((0.0f32, 0.0f32), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sx / n, sy / n)
}

/// Largest x and y over every vertex, starting from the origin.
pub fn max_extent<'a, I>(boundaries: I) -> (f32, f32)
where
    I: IntoIterator<Item = &'a [Point]>,
{
    let mut max_x = 0.0f32;
    let mut max_y = 0.0f32;
    for b in boundaries {
        for p in b {
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
    }
    (max_x, max_y)
}

/// Viewport size covering `(max_x, max_y)` scaled by `margin`, rounded up.
pub fn viewport(max_x: f32, max_y: f32, margin: f32) -> (f32, f32) {
    ((max_x * margin).ceil(), (max_y * margin).ceil())
}

/// SVG path data for a closed polygon.
pub fn path_data(boundary: &[Point]) -> String {
    let mut d = String::with_capacity(boundary.len() * 12);
    for (i, p) in boundary.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            d.push(' ');
        }
        let _ = write!(d, "{} {} {}", cmd, p.x, p.y);
    }
    if !boundary.is_empty() {
        d.push_str(" Z");
    }
    d
}
