use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }
}

/// A colored top-level grouping of municipalities.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subdivision {
    pub id: String,
    /// Hex color, e.g. `#8B0000`.
    pub color: String,
    pub display_name: String,
}

/// Smallest clickable unit on the map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Municipality {
    pub id: String,
    pub display_name: String,
    /// Resolved against the catalog at render time; may dangle.
    pub subdivision_id: String,
    /// Closed polygon, first vertex is not repeated at the end.
    pub boundary: Vec<Point>,
}

impl Subdivision {
    pub fn new(id: impl Into<String>, color: impl Into<String>, display_name: impl Into<String>) -> Self {
        Subdivision { id: id.into(), color: color.into(), display_name: display_name.into() }
    }
}

impl Municipality {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        subdivision_id: impl Into<String>,
        boundary: Vec<Point>,
    ) -> Self {
        Municipality {
            id: id.into(),
            display_name: display_name.into(),
            subdivision_id: subdivision_id.into(),
            boundary,
        }
    }
}
