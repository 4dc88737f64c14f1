//! Thin helpers for driving untyped JS libraries through `Reflect`.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// A global installed by a `<script>` tag, if it is there.
pub fn global(name: &str) -> Option<JsValue> {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

#[inline]
pub fn get(obj: &JsValue, key: &str) -> anyhow::Result<JsValue> {
    js_sys::Reflect::get(obj, &JsValue::from_str(key)).map_err(js_err)
}

#[inline]
pub fn set(obj: &JsValue, key: &str, value: &JsValue) -> anyhow::Result<()> {
    js_sys::Reflect::set(obj, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(js_err)
}

/// `obj[method](...args)`
pub fn call(obj: &JsValue, method: &str, args: &[JsValue]) -> anyhow::Result<JsValue> {
    let f: js_sys::Function = get(obj, method)?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("{method} is not a function"))?;
    let args: js_sys::Array = args.iter().collect();
    f.apply(obj, &args).map_err(js_err)
}

/// `new ns[class](...args)`
pub fn construct(ns: &JsValue, class: &str, args: &[JsValue]) -> anyhow::Result<JsValue> {
    let ctor: js_sys::Function = get(ns, class)?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("{class} is not a constructor"))?;
    let args: js_sys::Array = args.iter().collect();
    js_sys::Reflect::construct(&ctor, &args).map_err(js_err)
}

/// Plain JS object with the same shape as the serde representation of `value`.
pub fn to_js<T: Serialize>(value: &T) -> anyhow::Result<JsValue> {
    let json = serde_json::to_string(value)?;
    js_sys::JSON::parse(&json).map_err(js_err)
}

/// `obj.position.set(x, y, z)` style vector assignment.
pub fn set_xyz(obj: &JsValue, field: &str, v: glam::Vec3) -> anyhow::Result<()> {
    let target = get(obj, field)?;
    call(
        &target,
        "set",
        &[
            JsValue::from_f64(v.x as f64),
            JsValue::from_f64(v.y as f64),
            JsValue::from_f64(v.z as f64),
        ],
    )?;
    Ok(())
}
