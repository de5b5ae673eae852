use crate::catalog::Catalog;
use crate::config::MapConfig;
use crate::error::{AppError, StoreError};
use crate::list::{list_rows, ListRow, Stats};
use crate::scene::{shape_styles, MapScene, ShapeStyle};
use crate::storage::Storage;
use crate::store::VisitedStore;
use crate::svg::scene_to_svg;
use serde::Serialize;
use std::rc::Rc;

/// Everything a full resync writes to the view.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ViewState {
    /// Base style per municipality, catalog order.
    pub styles: Vec<(String, ShapeStyle)>,
    pub rows: Vec<ListRow>,
    pub stats: Stats,
}

/// Owns the catalog, the visited store and the transient panel flag.
///
/// Views are read projections of this state; `toggle` and `reset` are the
/// only visited-state mutations and both persist before returning.
pub struct App<S: Storage> {
    config: MapConfig,
    store: VisitedStore<S>,
    panel_open: bool,
}

impl<S: Storage> App<S> {
    pub fn new(catalog: Catalog, storage: S, config: MapConfig) -> Result<App<S>, AppError> {
        let store = VisitedStore::load(Rc::new(catalog), storage, config.storage_key.clone())?;
        Ok(App { config, store, panel_open: false })
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        self.store.catalog()
    }

    pub fn store(&self) -> &VisitedStore<S> {
        &self.store
    }

    pub fn scene(&self) -> MapScene {
        MapScene::build(&self.store, &self.config)
    }

    pub fn to_svg(&self) -> String {
        scene_to_svg(&self.scene())
    }

    pub fn view_state(&self) -> ViewState {
        ViewState {
            styles: shape_styles(&self.store, &self.config),
            rows: list_rows(&self.store),
            stats: Stats::of(&self.store),
        }
    }

    /// Toggle one municipality and return the state to redraw.
    pub fn toggle(&mut self, id: &str) -> Result<ViewState, StoreError> {
        self.store.toggle(id)?;
        Ok(self.view_state())
    }

    pub fn reset(&mut self) -> Result<ViewState, StoreError> {
        self.store.clear()?;
        Ok(self.view_state())
    }

    pub fn is_visited(&self, id: &str) -> bool {
        self.store.contains(id)
    }

    /// Resting style for one shape; also what hover exit restores.
    pub fn base_style(&self, id: &str) -> Option<ShapeStyle> {
        let m = self.catalog().municipality(id)?;
        Some(ShapeStyle::base(self.catalog(), m, self.store.contains(id), &self.config))
    }

    pub fn hover_style(&self, id: &str) -> Option<ShapeStyle> {
        let m = self.catalog().municipality(id)?;
        Some(ShapeStyle::hover(self.catalog(), m, self.store.contains(id), &self.config))
    }

    /// Flip the list panel. View-only; nothing is persisted or redrawn.
    pub fn toggle_panel(&mut self) -> bool {
        self.panel_open = !self.panel_open;
        self.panel_open
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }
}
