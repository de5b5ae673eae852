use std::cell::RefCell;
use std::rc::Rc;

use crate::dom::{DomView, Shared};
use crate::interop::{describe, to_js};
use crate::options::BootOptions;
use crate::storage::BrowserStorage;
use crate::{error, logger, VisitMap};
use visitmap::list::list_rows;
use visitmap::scene::Legend;
use visitmap::{App, Catalog, Stats};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Build the widget and mount it into the page.
///
/// `options` may be `undefined`; see `BootOptions` for the accepted fields.
/// Throws a `{ ok: false, error }` object on failure.
#[wasm_bindgen]
pub fn boot(options: JsValue) -> Result<VisitMap, JsValue> {
    let opts = BootOptions::from_js(options)?;
    logger::init(opts.level_filter()?);
    set_panic_hook();

    let catalog = match opts.catalog {
        Some(v) => Catalog::from_json_value(v),
        None => Catalog::builtin(),
    }
    .map_err(|e| error::catalog(&e))?;
    let storage = BrowserStorage::local().map_err(|e| error::storage(&e))?;
    let app = App::new(catalog, storage, opts.map).map_err(|e| error::app(&e))?;
    let view = DomView::attach(opts.dom)?;

    let inner = Rc::new(RefCell::new(Shared { app, view }));
    Shared::mount(&inner)?;
    Ok(VisitMap { inner })
}

#[wasm_bindgen]
impl VisitMap {
    /// Toggle a municipality and return its visited flag. On error nothing
    /// changed, so this is the unchanged current flag.
    pub fn toggle(&self, id: &str) -> bool {
        match Shared::toggle(&self.inner, id) {
            Ok(v) => v,
            Err(e) => {
                log::warn!("toggle '{}' rejected: {}", id, describe(&e));
                self.is_visited(id)
            }
        }
    }
    pub fn toggle_res(&self, id: &str) -> JsValue {
        match Shared::toggle(&self.inner, id) {
            Ok(v) => error::ok(JsValue::from_bool(v)),
            Err(e) => e,
        }
    }
    pub fn is_visited(&self, id: &str) -> bool {
        self.inner.borrow().app.is_visited(id)
    }
    pub fn visited_count(&self) -> u32 {
        self.inner.borrow().app.store().count() as u32
    }
    pub fn total_count(&self) -> u32 {
        self.inner.borrow().app.catalog().len() as u32
    }
    pub fn completion_percent(&self) -> u32 {
        Stats::of(self.inner.borrow().app.store()).percent
    }
    /// Visited ids, ascending.
    pub fn visited_ids(&self) -> JsValue {
        let ids: Vec<String> = self.inner.borrow().app.store().ids().map(str::to_string).collect();
        to_js(&ids)
    }
    /// Sorted list rows as `{ id, name, subdivision_id, visited }`.
    pub fn rows(&self) -> JsValue {
        to_js(&list_rows(self.inner.borrow().app.store()))
    }
    pub fn legend(&self) -> JsValue {
        let guard = self.inner.borrow();
        to_js(&Legend::build(guard.app.catalog(), guard.app.config()))
    }
    /// Re-apply styles, list and stats from the current state.
    pub fn resync_res(&self) -> JsValue {
        match Shared::resync(&self.inner) {
            Ok(()) => error::ok(JsValue::UNDEFINED),
            Err(e) => e,
        }
    }
    /// Forget all visited municipalities.
    pub fn reset_res(&self) -> JsValue {
        match Shared::reset(&self.inner) {
            Ok(()) => error::ok(JsValue::UNDEFINED),
            Err(e) => e,
        }
    }
    pub fn toggle_panel(&self) -> bool {
        match Shared::toggle_panel(&self.inner) {
            Ok(open) => open,
            Err(e) => {
                log::warn!("panel toggle failed: {}", describe(&e));
                self.panel_open()
            }
        }
    }
    pub fn panel_open(&self) -> bool {
        self.inner.borrow().app.panel_open()
    }
    /// Standalone SVG snapshot of the current map.
    pub fn to_svg(&self) -> String {
        self.inner.borrow().app.to_svg()
    }
}
