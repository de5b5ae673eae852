use log::LevelFilter;
use serde::Deserialize;
use visitmap::MapConfig;
use wasm_bindgen::JsValue;

/// Element ids (and the panel grid selector) the widget binds to.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct DomIds {
    pub map: String,
    pub legend: String,
    pub list: String,
    pub visited_count: String,
    pub total_count: String,
    pub completion_rate: String,
    pub progress_bar: String,
    pub panel_header: String,
    pub panel_grid_selector: String,
}

impl Default for DomIds {
    fn default() -> Self {
        DomIds {
            map: "kosovo-map".to_string(),
            legend: "legend-container".to_string(),
            list: "cities-container".to_string(),
            visited_count: "visited-count".to_string(),
            total_count: "total-count".to_string(),
            completion_rate: "completion-rate".to_string(),
            progress_bar: "progress-bar".to_string(),
            panel_header: "cities-header".to_string(),
            panel_grid_selector: ".cities-grid".to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct BootOptions {
    pub map: MapConfig,
    pub dom: DomIds,
    pub log_level: String,
    /// Replacement territory in catalog JSON form; built-in data otherwise.
    pub catalog: Option<serde_json::Value>,
}

impl Default for BootOptions {
    fn default() -> Self {
        BootOptions {
            map: MapConfig::default(),
            dom: DomIds::default(),
            log_level: "info".to_string(),
            catalog: None,
        }
    }
}

impl BootOptions {
    /// `undefined` and `null` select the defaults.
    pub fn from_js(v: JsValue) -> Result<BootOptions, JsValue> {
        if v.is_undefined() || v.is_null() {
            return Ok(BootOptions::default());
        }
        serde_wasm_bindgen::from_value(v).map_err(|e| crate::error::invalid_options(e.to_string()))
    }

    pub fn level_filter(&self) -> Result<LevelFilter, JsValue> {
        crate::logger::parse_level(&self.log_level).ok_or_else(|| {
            crate::error::invalid_options(format!("unknown log level '{}'", self.log_level))
        })
    }
}
