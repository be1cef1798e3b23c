//! WASM API test
//!
//! Exercises the JavaScript-facing functions in a browser.
//! Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use chordsheet_wasm::api;
use chordsheet_wasm::models::{ParsedChord, RenderedLine};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_prepare_document_defaults() {
    let result = api::prepare_document("Chorus:\n[C]Hello [G]world", JsValue::UNDEFINED).unwrap();
    let lines: Vec<RenderedLine> = serde_wasm_bindgen::from_value(result).unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].chord_layer, "Chorus:");
    assert!(lines[1].chord_layer.starts_with(r#"<span class="chord">C</span>"#));
    assert_eq!(lines[1].lyric_layer, "Hello world");
}

#[wasm_bindgen_test]
fn test_render_text_with_settings() {
    let settings = js_sys::JSON::parse(r#"{"transposeSteps": 2}"#).unwrap();
    let text = api::render_text("[C]Hello [G]world", settings).unwrap();
    assert_eq!(text, "D     A\nHello world");
}

#[wasm_bindgen_test]
fn test_invalid_settings_rejected() {
    let settings = js_sys::JSON::parse(r#"{"transposeSteps": "up"}"#).unwrap();
    assert!(api::prepare_document("[C]x", settings).is_err());
}

#[wasm_bindgen_test]
fn test_transpose_functions() {
    assert_eq!(api::transpose_pitch("C#", 1, Some("flat".into())).unwrap(), "D");
    assert_eq!(api::transpose_chord("[Am]", -2, None).unwrap(), "[Gm]");
    assert_eq!(api::transpose_document("[F]la", 1, Some("sharp".into())).unwrap(), "[F#]la");
    assert!(api::transpose_chord("C", 1, Some("natural".into())).is_err());
}

#[wasm_bindgen_test]
fn test_parse_and_extract() {
    let parsed: ParsedChord =
        serde_wasm_bindgen::from_value(api::parse_chord("F#m7b5/A").unwrap()).unwrap();
    assert_eq!(parsed.root, "F#");

    let chords = api::extract_chords("[C] and [G7]");
    assert_eq!(chords.length(), 2);
    assert_eq!(api::key_preference("Eb major"), "flat");
}
