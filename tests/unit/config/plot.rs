use super::*;
use serde_json::json;

#[test]
fn empty_object_yields_defaults() {
    let cfg: PlotConfig = serde_json::from_value(json!({})).unwrap();
    assert_eq!(cfg, PlotConfig::default());
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.shape, ShapeMode::Polygon);
    assert_eq!(cfg.border_color(), Some(Rgba8::rgb(0x77, 0x77, 0x77)));
}

#[test]
fn unknown_shape_degrades_to_polygon() {
    let cfg: PlotConfig = serde_json::from_value(json!({"shape": "blob"})).unwrap();
    assert_eq!(cfg.shape, ShapeMode::Polygon);
    let cfg: PlotConfig = serde_json::from_value(json!({"shape": "spline"})).unwrap();
    assert_eq!(cfg.shape, ShapeMode::Spline);
}

#[test]
fn border_color_none_and_null_disable_the_border_color() {
    let cfg: PlotConfig = serde_json::from_value(json!({"col_border": "none"})).unwrap();
    assert_eq!(cfg.col_border, None);
    let cfg: PlotConfig = serde_json::from_value(json!({"col_border": null})).unwrap();
    assert_eq!(cfg.col_border, None);
    let cfg: PlotConfig = serde_json::from_value(json!({"col_border": "#000000"})).unwrap();
    assert_eq!(cfg.border_color(), Some(Rgba8::BLACK));
}

#[test]
fn background_variants_parse() {
    let cfg: PlotConfig = serde_json::from_value(json!({
        "background": {"type": "solid", "color": "white"}
    }))
    .unwrap();
    assert_eq!(
        cfg.background,
        BackgroundDef::Solid {
            color: ColorDef::from(Rgba8::WHITE)
        }
    );

    let cfg: PlotConfig = serde_json::from_value(json!({
        "background": {"type": "gradient", "colors": []}
    }))
    .unwrap();
    assert!(cfg.validate().is_err());
}

#[test]
fn ramp_angle_outside_unit_interval_is_rejected() {
    let cfg = PlotConfig {
        ramp_angle: 1.5,
        ..PlotConfig::default()
    };
    assert!(cfg.validate().is_err());
    let cfg = PlotConfig {
        ramp_angle: 0.0,
        ..PlotConfig::default()
    };
    assert!(cfg.validate().is_ok());
}

#[test]
fn vlab_must_match_vlines() {
    let cfg = PlotConfig {
        vlines: vec![0.0, 10.0],
        vlab: vec!["day 0".to_owned()],
        ..PlotConfig::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = PlotConfig {
        vlines: vec![0.0, 10.0],
        ..PlotConfig::default()
    };
    assert!(cfg.validate().is_ok());
}

#[test]
fn negative_sizes_are_rejected() {
    let cfg = PlotConfig {
        pad_left: -0.1,
        ..PlotConfig::default()
    };
    assert!(cfg.validate().is_err());

    let mut cfg = PlotConfig::default();
    cfg.legend.columns = Some(0);
    assert!(cfg.validate().is_err());
}

#[test]
fn annotation_position_names() {
    let s: AnnotationStyle =
        serde_json::from_value(json!({"position": "above", "angle": 45.0})).unwrap();
    assert_eq!(s.position, AnnotationPosition::Above);
    assert_eq!(s.angle, 45.0);
    assert_eq!(s.size, 0.7);
}
