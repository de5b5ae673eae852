use crate::catalog::Catalog;
use crate::config::MapConfig;
use crate::geometry::polygon::{centroid, max_extent, path_data, viewport};
use crate::model::{Municipality, Point};
use crate::storage::Storage;
use crate::store::VisitedStore;
use serde::Serialize;

pub const GLOW_FILTER_ID: &str = "glow";

/// Paint attributes of one municipality shape.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShapeStyle {
    pub fill: String,
    pub fill_opacity: f32,
    pub stroke: String,
    pub stroke_width: f32,
    pub stroke_opacity: f32,
    /// `url(#glow)` on visited shapes only.
    pub filter: Option<String>,
}

impl ShapeStyle {
    /// Resting style, a function of visited state and subdivision color only.
    pub fn base(catalog: &Catalog, m: &Municipality, visited: bool, cfg: &MapConfig) -> ShapeStyle {
        let color = if visited {
            cfg.visited_color.clone()
        } else {
            region_color(catalog, m, cfg).to_string()
        };
        ShapeStyle {
            fill: color.clone(),
            fill_opacity: if visited { cfg.visited_fill_opacity } else { cfg.fill_opacity },
            stroke: color,
            stroke_width: cfg.stroke_width,
            stroke_opacity: cfg.stroke_opacity,
            filter: visited.then(|| format!("url(#{})", GLOW_FILTER_ID)),
        }
    }

    /// Base style with the hover emphasis applied.
    pub fn hover(catalog: &Catalog, m: &Municipality, visited: bool, cfg: &MapConfig) -> ShapeStyle {
        ShapeStyle {
            stroke_width: cfg.hover_stroke_width,
            fill_opacity: if visited { cfg.hover_visited_fill_opacity } else { cfg.hover_fill_opacity },
            ..ShapeStyle::base(catalog, m, visited, cfg)
        }
    }

    /// SVG attributes in application order. `None` means the attribute must
    /// be removed so no stale value survives a restyle.
    pub fn attributes(&self) -> [(&'static str, Option<String>); 6] {
        [
            ("fill", Some(self.fill.clone())),
            ("fill-opacity", Some(self.fill_opacity.to_string())),
            ("stroke", Some(self.stroke.clone())),
            ("stroke-width", Some(self.stroke_width.to_string())),
            ("stroke-opacity", Some(self.stroke_opacity.to_string())),
            ("filter", self.filter.clone()),
        ]
    }
}

/// Subdivision color of `m`, or the fallback when the reference dangles.
pub fn region_color<'a>(catalog: &'a Catalog, m: &Municipality, cfg: &'a MapConfig) -> &'a str {
    catalog
        .subdivision(&m.subdivision_id)
        .map(|s| s.color.as_str())
        .unwrap_or(cfg.fallback_color.as_str())
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Label {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LabelStyle {
    pub font_size: String,
    pub font_weight: String,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShapeNode {
    pub id: String,
    pub name: String,
    pub subdivision_id: String,
    /// SVG path data of the closed boundary.
    pub path: String,
    pub style: ShapeStyle,
    pub label: Label,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GlowFilter {
    pub id: String,
    pub std_deviation: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LegendEntry {
    pub subdivision_id: String,
    pub color: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Legend {
    pub title: String,
    /// Catalog declaration order.
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    pub fn build(catalog: &Catalog, cfg: &MapConfig) -> Legend {
        Legend {
            title: cfg.legend_title.clone(),
            entries: catalog
                .subdivisions()
                .iter()
                .map(|s| LegendEntry {
                    subdivision_id: s.id.clone(),
                    color: s.color.clone(),
                    name: s.display_name.clone(),
                })
                .collect(),
        }
    }
}

/// Backend-agnostic description of the whole map.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapScene {
    pub width: f32,
    pub height: f32,
    pub background: String,
    pub glow: GlowFilter,
    pub label_style: LabelStyle,
    pub shapes: Vec<ShapeNode>,
    pub legend: Legend,
}

impl MapScene {
    pub fn build<S: Storage>(store: &VisitedStore<S>, cfg: &MapConfig) -> MapScene {
        let catalog = store.catalog();
        let (max_x, max_y) =
            max_extent(catalog.municipalities().iter().map(|m| m.boundary.as_slice()));
        let (width, height) = viewport(max_x, max_y, cfg.viewport_margin);
        let shapes = catalog
            .municipalities()
            .iter()
            .map(|m| {
                let Point { x, y } = centroid(&m.boundary);
                ShapeNode {
                    id: m.id.clone(),
                    name: m.display_name.clone(),
                    subdivision_id: m.subdivision_id.clone(),
                    path: path_data(&m.boundary),
                    style: ShapeStyle::base(catalog, m, store.contains(&m.id), cfg),
                    label: Label { x, y, text: m.display_name.clone() },
                }
            })
            .collect();
        MapScene {
            width,
            height,
            background: cfg.background_color.clone(),
            glow: GlowFilter { id: GLOW_FILTER_ID.to_string(), std_deviation: cfg.glow_std_deviation },
            label_style: LabelStyle {
                font_size: cfg.label_font_size.clone(),
                font_weight: cfg.label_font_weight.clone(),
                color: cfg.label_color.clone(),
            },
            shapes,
            legend: Legend::build(catalog, cfg),
        }
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

/// Base style for every municipality, catalog order.
pub fn shape_styles<S: Storage>(store: &VisitedStore<S>, cfg: &MapConfig) -> Vec<(String, ShapeStyle)> {
    let catalog = store.catalog();
    catalog
        .municipalities()
        .iter()
        .map(|m| (m.id.clone(), ShapeStyle::base(catalog, m, store.contains(&m.id), cfg)))
        .collect()
}
