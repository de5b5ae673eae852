use wasm_bindgen::prelude::*;
mod api;
mod dom;
mod error;
mod interop;
mod logger;
mod options;
mod storage;

pub use api::{boot, set_panic_hook};
pub use options::{BootOptions, DomIds};
pub use storage::BrowserStorage;

/// A mounted map widget. Dropping it (`free()` from JS) removes every DOM
/// listener it registered.
#[wasm_bindgen]
pub struct VisitMap { pub(crate) inner: dom::SharedRef }
