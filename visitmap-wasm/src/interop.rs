use js_sys::{Object, Reflect};
use serde::Serialize;
use wasm_bindgen::JsValue;

pub fn new_obj() -> Object { Object::new() }

pub fn set_kv(obj: &Object, key: &str, val: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(key), val);
}

/// Serialize to a plain JS value; `null` if the value cannot be represented.
pub fn to_js<T: Serialize + ?Sized>(v: &T) -> JsValue {
    serde_wasm_bindgen::to_value(v).unwrap_or_else(|e| {
        log::warn!("cannot convert {} to a JS value: {}", std::any::type_name::<T>(), e);
        JsValue::NULL
    })
}

/// Best-effort text for a thrown JS value.
pub fn describe(v: &JsValue) -> String {
    if let Some(s) = v.as_string() {
        return s;
    }
    let message = |obj: &JsValue| {
        Reflect::get(obj, &JsValue::from_str("message")).ok().and_then(|m| m.as_string())
    };
    // plain exceptions carry `message`; our result objects carry `error.message`
    message(v)
        .or_else(|| Reflect::get(v, &JsValue::from_str("error")).ok().and_then(|e| message(&e)))
        .unwrap_or_else(|| format!("{:?}", v))
}
