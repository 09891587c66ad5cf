use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: ColorDef = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c.to_rgba8(), Rgba8::rgb(255, 0, 0));

    let c: ColorDef = serde_json::from_value(json!("#FFFFFF99")).unwrap();
    assert_eq!(c.to_rgba8(), Rgba8::rgba(255, 255, 255, 0x99));
}

#[test]
fn parses_css_names() {
    let c: ColorDef = serde_json::from_value(json!("bisque")).unwrap();
    assert_eq!(c.to_rgba8(), Rgba8::rgb(0xff, 0xe4, 0xc4));
}

#[test]
fn parses_rgba_object_and_array() {
    let c: ColorDef = serde_json::from_value(json!({"r": 0.25, "g": 0.5, "b": 0.75})).unwrap();
    assert_eq!(c, ColorDef::rgba(0.25, 0.5, 0.75, 1.0));

    let c: ColorDef = serde_json::from_value(json!([0.25, 0.5, 0.75, 0.9])).unwrap();
    assert_eq!(c, ColorDef::rgba(0.25, 0.5, 0.75, 0.9));

    assert!(serde_json::from_value::<ColorDef>(json!([0.1, 0.2])).is_err());
}

#[test]
fn parses_hsla_object() {
    let c: ColorDef = serde_json::from_value(json!({"h": 0.0, "s": 1.0, "l": 0.5})).unwrap();
    assert_eq!(c.to_rgba8(), Rgba8::rgb(255, 0, 0));
}

#[test]
fn rejects_garbage_strings() {
    assert!(ColorDef::parse("not-a-color").is_err());
}

#[test]
fn rejects_non_ascii_hex_without_panicking() {
    assert!(ColorDef::parse("#aé123").is_err());
    assert!(ColorDef::parse("#12345é").is_err());
    assert!(serde_json::from_value::<ColorDef>(json!("#aé123")).is_err());
}
