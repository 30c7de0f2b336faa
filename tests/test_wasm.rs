#![cfg(all(target_arch = "wasm32", feature = "wasm"))]

use wasm_bindgen::JsValue;
use wasm_bindgen_test::wasm_bindgen_test;

use textcanon::wasm::{available_canonicizers, canonicize, normalize_ws_process_single};

#[wasm_bindgen_test]
fn test_wasm_normalize_string() {
    let out = normalize_ws_process_single(JsValue::from_str("  a\t\\b  ")).unwrap();
    assert_eq!(out, "a b");
}

#[wasm_bindgen_test]
fn test_wasm_normalize_rejects_number() {
    assert!(normalize_ws_process_single(JsValue::from_f64(1.0)).is_err());
}

#[wasm_bindgen_test]
fn test_wasm_canonicize() {
    let names: js_sys::Array = ["unify-case", "normalize-whitespace"]
        .iter()
        .map(|n| JsValue::from_str(n))
        .collect();
    let out = canonicize(JsValue::from_str(" Hello   WORLD "), names, true).unwrap();
    assert_eq!(out, "hello world");
}

#[wasm_bindgen_test]
fn test_wasm_available() {
    assert_eq!(available_canonicizers().length(), 9);
}
