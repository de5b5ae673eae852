use crate::interop::{new_obj, set_kv};
use visitmap::{AppError, CatalogError, StorageError, StoreError};
use wasm_bindgen::prelude::*;

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

#[inline]
pub fn invalid_id(id: &str) -> JsValue {
    let d = new_obj();
    set_kv(&d, "kind", &JsValue::from_str("municipality"));
    set_kv(&d, "id", &JsValue::from_str(id));
    err("invalid_id", format!("unknown municipality '{}'", id), Some(d.into()))
}

#[inline]
pub fn storage(e: &StorageError) -> JsValue {
    let d = new_obj();
    set_kv(&d, "op", &JsValue::from_str(e.op));
    err("storage", e.to_string(), Some(d.into()))
}

#[inline]
pub fn store(e: &StoreError) -> JsValue {
    match e {
        StoreError::UnknownMunicipality(id) => invalid_id(id),
        StoreError::Storage(s) => storage(s),
    }
}

#[inline]
pub fn catalog(e: &CatalogError) -> JsValue { err("catalog", e.to_string(), None) }

pub fn app(e: &AppError) -> JsValue {
    match e {
        AppError::Catalog(c) => catalog(c),
        AppError::Store(s) => store(s),
    }
}

#[inline]
pub fn missing_element(selector: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "selector", &JsValue::from_str(selector));
    err("missing_element", format!("no element matches '{}'", selector), Some(d.into()))
}

#[inline]
pub fn invalid_options(message: impl Into<String>) -> JsValue { err("invalid_options", message, None) }

/// DOM calls that threw; `data` carries the thrown value.
#[inline]
pub fn dom(e: &JsValue) -> JsValue { err("dom", crate::interop::describe(e), Some(e.clone())) }
