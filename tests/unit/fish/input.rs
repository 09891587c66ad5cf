use super::*;
use crate::geometry::curve::ShapeMode;

const DOC: &str = r##"{
  "timepoints": [0, 30, 75, 150],
  "clones": [
    {"fractions": [100, 45, 0, 0], "label": "founder", "annotation": "TP53"},
    {"fractions": [98, 0, 0, 0], "parent": 0},
    {"fractions": [2, 44, 0, 0], "parent": 0}
  ],
  "config": {"shape": "bezier", "title": "Patient 1"}
}"##;

#[test]
fn parses_document_into_data() {
    let doc = FishDocument::from_json_str(DOC).unwrap();
    assert_eq!(doc.config.shape, ShapeMode::Bezier);
    assert_eq!(doc.config.title.as_deref(), Some("Patient 1"));

    let data = doc.to_data().unwrap();
    assert_eq!(data.len(), 3);
    assert_eq!(data.parents(), &[None, Some(0), Some(0)]);
    assert_eq!(data.labels()[0].as_deref(), Some("founder"));
    assert_eq!(data.annotations()[0].as_deref(), Some("TP53"));
}

#[test]
fn default_palette_covers_every_clone() {
    let doc = FishDocument::from_json_str(DOC).unwrap();
    let colors = doc.resolved_colors();
    assert_eq!(colors.len(), 3);
    assert_eq!(default_palette(12)[10], default_palette(1)[0]);
}

#[test]
fn configured_colors_are_kept_even_when_miscounted() {
    let mut doc = FishDocument::from_json_str(DOC).unwrap();
    doc.colors = Some(vec![ColorDef::from(Rgba8::BLACK)]);
    assert_eq!(doc.resolved_colors(), vec![Rgba8::BLACK]);
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = FishDocument::from_json_str("{").unwrap_err();
    assert!(matches!(err, FishError::Serde(_)));
}

#[test]
fn invalid_fractions_surface_as_validation_errors() {
    let doc = FishDocument::from_json_str(
        r#"{"timepoints": [0, 1], "clones": [{"fractions": [50, 150]}]}"#,
    )
    .unwrap();
    assert!(matches!(doc.to_data(), Err(FishError::Validation(_))));
}
