//! WebAssembly surface over [`crate::binding`].

use wasm_bindgen::prelude::*;

use crate::binding::{self, HostArg};
use crate::error::CanonError;
use crate::pipeline::PipelineOptions;
use crate::registry;

fn type_name(value: &JsValue) -> String {
    value
        .js_typeof()
        .as_string()
        .unwrap_or_else(|| "unknown".to_string())
}

fn host_arg<'a>(text: Option<&'a str>, value: &JsValue) -> HostArg<'a> {
    match text {
        Some(t) => HostArg::Text(t),
        None => HostArg::Other {
            type_name: type_name(value),
        },
    }
}

/// Normalize whitespace (text)
#[wasm_bindgen(js_name = normalize_ws_process_single)]
pub fn normalize_ws_process_single(value: JsValue) -> Result<String, JsError> {
    let text = value.as_string();
    Ok(binding::normalize_ws_process_single(host_arg(text.as_deref(), &value))?)
}

/// Run the named canonicizers, in order, over a string.
#[wasm_bindgen]
pub fn canonicize(value: JsValue, names: js_sys::Array, strict: bool) -> Result<String, JsError> {
    let text = value.as_string();
    let names = names
        .iter()
        .map(|name| {
            name.as_string().ok_or_else(|| CanonError::ArgumentType {
                expected: "str",
                found: type_name(&name),
            })
        })
        .collect::<Result<Vec<String>, _>>()?;
    let options = PipelineOptions { strict };
    Ok(binding::canonicize(host_arg(text.as_deref(), &value), &names, &options)?)
}

/// Registry keys of every built-in canonicizer.
#[wasm_bindgen(js_name = availableCanonicizers)]
pub fn available_canonicizers() -> js_sys::Array {
    registry::available()
        .iter()
        .map(|name| JsValue::from_str(name))
        .collect()
}
