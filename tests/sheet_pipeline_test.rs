// End-to-end chord sheet preparation

use chordsheet_wasm::models::{ChordHighlight, KeyPreference, RenderedLine, SheetSettings};
use chordsheet_wasm::renderers::{column_width, prepare_document, render_text};
use chordsheet_wasm::utils::normalise_spacing;

const SONG: &str = "\
Verse 1:
[G]Amazing [G7]grace, how [C]sweet the [G]sound   


That [G]saved a wretch like [D]me


Chorus
[C]I once was [G]lost
";

fn plain() -> SheetSettings {
    SheetSettings::builder().highlight(ChordHighlight::None).build()
}

#[test]
fn test_prepare_song() {
    let lines = prepare_document(SONG, Some(plain()));
    let pairs: Vec<(&str, &str)> = lines.iter().map(RenderedLine::as_pair).collect();
    assert_eq!(
        pairs,
        vec![
            ("Verse 1:", ""),
            ("G       G7         C         G", "Amazing grace, how sweet the sound"),
            ("     G                   D", "That saved a wretch like me"),
            ("Chorus", ""),
            ("C          G", "I once was lost"),
        ]
    );
}

#[test]
fn test_prepare_transposed_song() {
    let settings = SheetSettings::builder()
        .transpose_steps(-2)
        .highlight(ChordHighlight::None)
        .build();
    let lines = prepare_document(SONG, Some(settings));
    // C infers sharps on its own, so it lands on A#
    assert_eq!(lines[1].chord_layer, "F       F7         A#        F");
    assert_eq!(lines[1].lyric_layer, "Amazing grace, how sweet the sound");
    assert_eq!(lines[4].chord_layer, "A#         F");
}

#[test]
fn test_key_signature_sets_document_spelling() {
    let settings = SheetSettings::builder()
        .transpose_steps(1)
        .key("Ab major")
        .highlight(ChordHighlight::None)
        .build();
    let lines = prepare_document("[G]one [C]two", Some(settings));
    assert_eq!(lines[0].chord_layer, "Ab  Db");

    let settings = SheetSettings::builder()
        .transpose_steps(1)
        .key("Ab major")
        .prefer(Some(KeyPreference::Sharp))
        .highlight(ChordHighlight::None)
        .build();
    let lines = prepare_document("[G]one [C]two", Some(settings));
    assert_eq!(lines[0].chord_layer, "G#  C#");
}

#[test]
fn test_blank_documents() {
    assert!(prepare_document("", None).is_empty());
    assert!(prepare_document("\n", None).is_empty());
    assert!(prepare_document("  \n\n  \t ", None).is_empty());
}

#[test]
fn test_normalise_is_idempotent_and_collapses() {
    let once = normalise_spacing(SONG);
    assert_eq!(normalise_spacing(&once), once);
    assert!(!once.contains("\n\n\n"));
    assert!(once.contains("sound\n\nThat"));
}

#[test]
fn test_highlighted_output() {
    let settings = SheetSettings::builder()
        .highlight(ChordHighlight::SpanWithData)
        .build();
    let lines = prepare_document("[Am]a [N.C.]b", Some(settings));
    assert_eq!(
        lines[0].chord_layer,
        r#"<span class="chord" data-chord="[Am]">Am</span>N.C."#
    );
}

#[test]
fn test_text_export_and_width() {
    let lines = prepare_document("Chorus\n[C]Hello [G]world", Some(plain()));
    assert_eq!(render_text(&lines), "Chorus\nC     G\nHello world");
    assert_eq!(column_width(&lines, 5), 16);
}

#[test]
fn test_settings_json_round_trip() {
    let json = r#"{"transposeSteps": 3, "key": "Eb", "highlight": "none"}"#;
    let settings: SheetSettings = serde_json::from_str(json).unwrap();
    assert_eq!(settings.effective_preference(), Some(KeyPreference::Flat));

    let lines = prepare_document("[C]x", Some(settings));
    let out = serde_json::to_value(&lines).unwrap();
    assert_eq!(out[0]["chordLayer"], "Eb");
    assert_eq!(out[0]["lyricLayer"], "x");
    assert_eq!(out[0]["section"], false);
}
