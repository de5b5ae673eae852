use serde::{Deserialize, Serialize};

pub const DEFAULT_STORAGE_KEY: &str = "beenKosova_visited";

/// Visual and persistence settings. Every field has a default so hosts can
/// override only what they need.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub storage_key: String,
    pub visited_color: String,
    /// Used when a municipality's subdivision does not resolve.
    pub fallback_color: String,
    pub background_color: String,
    pub fill_opacity: f32,
    pub visited_fill_opacity: f32,
    pub hover_fill_opacity: f32,
    pub hover_visited_fill_opacity: f32,
    pub stroke_width: f32,
    pub hover_stroke_width: f32,
    pub stroke_opacity: f32,
    pub glow_std_deviation: f32,
    /// Viewport scale over the largest coordinate.
    pub viewport_margin: f32,
    pub label_font_size: String,
    pub label_font_weight: String,
    pub label_color: String,
    pub legend_title: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfig {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            visited_color: "#16a34a".to_string(),
            fallback_color: "#d1d5db".to_string(),
            background_color: "#f9fafb".to_string(),
            fill_opacity: 0.3,
            visited_fill_opacity: 0.7,
            hover_fill_opacity: 0.4,
            hover_visited_fill_opacity: 0.8,
            stroke_width: 1.5,
            hover_stroke_width: 2.5,
            stroke_opacity: 0.8,
            glow_std_deviation: 3.0,
            viewport_margin: 1.1,
            label_font_size: "10px".to_string(),
            label_font_weight: "500".to_string(),
            label_color: "#1a202c".to_string(),
            legend_title: "RAJONET".to_string(),
        }
    }
}
