//! WASM API for the chord sheet engine
//!
//! Thin wrappers: argument parsing, logging and JsValue conversion. All
//! behaviour lives in the engine modules.

use wasm_bindgen::prelude::*;

use crate::models::{ChordHighlight, KeyPreference, RenderedLine, SheetSettings};
use crate::parse::{extract_bracketed_chords, parse_chord as parse_chord_token};
use crate::renderers::{self, layout_line};
use crate::transposition;
use crate::utils;
use crate::{wasm_error, wasm_info, wasm_log};
use super::helpers::{deserialize_optional, parse_preference, serialize, validation_error};

fn settings_from_js(settings_js: JsValue) -> Result<SheetSettings, JsValue> {
    Ok(deserialize_optional::<SheetSettings>(settings_js, "Invalid sheet settings")?
        .unwrap_or_default())
}

fn preference_from_js(prefer: Option<String>) -> Result<Option<KeyPreference>, JsValue> {
    parse_preference(prefer).map_err(validation_error)
}

/// Prepare a chord sheet for display
///
/// # Parameters
/// - `text`: raw chord sheet text
/// - `settings_js`: optional `SheetSettings` object
///   (`{ transposeSteps, prefer, key, highlight }`)
///
/// # Returns
/// Array of `{ chordLayer, lyricLayer, section }` objects in source order
#[wasm_bindgen(js_name = prepareDocument)]
pub fn prepare_document(text: &str, settings_js: JsValue) -> Result<JsValue, JsValue> {
    let settings = settings_from_js(settings_js)?;
    wasm_info!(
        "prepareDocument called: {} bytes, steps={}, prefer={:?}",
        text.len(),
        settings.transpose_steps,
        settings.effective_preference()
    );

    let lines = renderers::prepare_document(text, Some(settings));
    wasm_log!("  Produced {} lines", lines.len());
    serialize(&lines, "Failed to serialize rendered lines")
}

/// Prepare a chord sheet as preformatted plain text
#[wasm_bindgen(js_name = renderText)]
pub fn render_text(text: &str, settings_js: JsValue) -> Result<String, JsValue> {
    let mut settings = settings_from_js(settings_js)?;
    settings.highlight = ChordHighlight::None;

    let lines = renderers::prepare_document(text, Some(settings));
    Ok(renderers::render_text(&lines))
}

/// Width in characters of a display column for this sheet
#[wasm_bindgen(js_name = columnWidth)]
pub fn column_width(text: &str, settings_js: JsValue, extra_padding: Option<usize>) -> Result<usize, JsValue> {
    let mut settings = settings_from_js(settings_js)?;
    settings.highlight = ChordHighlight::None;

    let lines = renderers::prepare_document(text, Some(settings));
    Ok(renderers::column_width(
        &lines,
        extra_padding.unwrap_or(renderers::DEFAULT_COLUMN_PADDING),
    ))
}

/// Transpose every bracketed chord in a document
#[wasm_bindgen(js_name = transposeDocument)]
pub fn transpose_document(text: &str, steps: i32, prefer: Option<String>) -> Result<String, JsValue> {
    let prefer = preference_from_js(prefer)?;
    wasm_info!("transposeDocument called: steps={}, prefer={:?}", steps, prefer);
    Ok(transposition::transpose_document(text, steps, prefer))
}

/// Transpose one chord token (bare or bracketed)
#[wasm_bindgen(js_name = transposeChord)]
pub fn transpose_chord(token: &str, steps: i32, prefer: Option<String>) -> Result<String, JsValue> {
    let prefer = preference_from_js(prefer)?;
    Ok(transposition::transpose_chord(token, steps, prefer))
}

/// Transpose one pitch name; sharps unless `prefer` is "flat"
#[wasm_bindgen(js_name = transposePitch)]
pub fn transpose_pitch(pitch: &str, steps: i32, prefer: Option<String>) -> Result<String, JsValue> {
    let prefer = preference_from_js(prefer)?.unwrap_or_default();
    Ok(transposition::transpose_pitch(pitch, steps, prefer))
}

/// Parse a chord token into `{ root, quality, bass }` (all empty on failure)
#[wasm_bindgen(js_name = parseChord)]
pub fn parse_chord(token: &str) -> Result<JsValue, JsValue> {
    let parsed = parse_chord_token(token);
    if parsed.is_empty() {
        wasm_log!("parseChord: '{}' is not a chord", token);
    }
    serialize(&parsed, "Failed to serialize parsed chord")
}

/// Split one line into its plain chord and lyric layers
#[wasm_bindgen(js_name = splitChordLyric)]
pub fn split_chord_lyric(line: &str) -> Result<JsValue, JsValue> {
    let rendered: RenderedLine = layout_line(line).render(ChordHighlight::None);
    serialize(&rendered, "Failed to serialize line")
}

/// Canonicalise whitespace of a chord sheet
#[wasm_bindgen(js_name = normaliseSpacing)]
pub fn normalise_spacing(text: &str) -> String {
    utils::normalise_spacing(text)
}

/// Spelling preference ("sharp" or "flat") for a key signature like "Eb major"
#[wasm_bindgen(js_name = keyPreference)]
pub fn key_preference(key: &str) -> String {
    KeyPreference::from_key(key).to_string()
}

/// All bracketed chords in the text, without brackets
#[wasm_bindgen(js_name = extractChords)]
pub fn extract_chords(text: &str) -> js_sys::Array {
    let array = js_sys::Array::new();
    for chord in extract_bracketed_chords(text) {
        array.push(&JsValue::from_str(&chord));
    }
    array
}

/// Wrap bracketed chords in free text with `<span class="chord">`
#[wasm_bindgen(js_name = highlightChords)]
pub fn highlight_chords(text: &str, with_data: bool) -> String {
    let highlight = if with_data {
        ChordHighlight::SpanWithData
    } else {
        ChordHighlight::Span
    };
    renderers::highlight_chords(text, highlight)
}

/// Parse a settings object and report what it resolves to (for debugging hosts)
#[wasm_bindgen(js_name = validateSettings)]
pub fn validate_settings(settings_js: JsValue) -> Result<JsValue, JsValue> {
    let settings = settings_from_js(settings_js).map_err(|e| {
        wasm_error!("validateSettings failed");
        e
    })?;
    serialize(&settings, "Failed to serialize settings")
}
