use super::*;
use crate::render::surface::{Call, RecordingSurface};

fn outline() -> ShapeOutline {
    let start = Point::new(10.0, 50.0);
    ShapeOutline {
        start,
        vertices: vec![
            start,
            Point::new(20.0, 60.0),
            Point::new(30.0, 40.0),
            start,
        ],
    }
}

fn style<'a>(annotation: Option<&'a str>, s: &'a AnnotationStyle) -> CloneStyle<'a> {
    CloneStyle {
        fill: Rgba8::rgb(200, 0, 0),
        border_width: 0.5,
        border_color: None,
        annotation,
        annotation_style: s,
    }
}

#[test]
fn missing_border_color_uses_fill() {
    let ann = AnnotationStyle::default();
    let mut surface = RecordingSurface::new(100.0, 100.0);
    draw_clone(&mut surface, &outline(), &style(None, &ann)).unwrap();
    assert_eq!(surface.calls.len(), 1);
    let Call::Path(_, fill, stroke) = &surface.calls[0] else {
        panic!("expected a path call");
    };
    assert_eq!(stroke.unwrap().color, *fill);
}

#[test]
fn zero_border_width_draws_no_edge() {
    let ann = AnnotationStyle::default();
    let mut st = style(None, &ann);
    st.border_width = 0.0;
    st.border_color = Some(Rgba8::BLACK);
    assert_eq!(st.stroke(), None);
}

#[test]
fn annotation_follows_the_shape() {
    let ann = AnnotationStyle {
        angle: 30.0,
        ..AnnotationStyle::default()
    };
    let mut surface = RecordingSurface::new(100.0, 100.0);
    draw_clone(&mut surface, &outline(), &style(Some("KRAS"), &ann)).unwrap();
    assert_eq!(surface.texts(), vec!["KRAS"]);
    let Call::Text(_, at, angle) = &surface.calls[1] else {
        panic!("expected a text call");
    };
    assert!(at.x < 10.0);
    assert_eq!(at.y, 50.0);
    assert_eq!(*angle, 30.0);
}

#[test]
fn empty_annotation_is_not_drawn() {
    let ann = AnnotationStyle::default();
    let mut surface = RecordingSurface::new(100.0, 100.0);
    draw_clone(&mut surface, &outline(), &style(Some(""), &ann)).unwrap();
    assert!(surface.texts().is_empty());
}

#[test]
fn anchors_move_away_from_origin() {
    let origin = Point::new(0.0, 0.0);
    for (pos, align) in [
        (AnnotationPosition::Below, TextAnchor::Middle),
        (AnnotationPosition::Left, TextAnchor::End),
        (AnnotationPosition::Above, TextAnchor::Middle),
        (AnnotationPosition::Right, TextAnchor::Start),
    ] {
        let s = AnnotationStyle {
            position: pos,
            ..AnnotationStyle::default()
        };
        let (at, a, _) = annotation_anchor(origin, &s);
        assert_eq!(a, align);
        assert!(at.distance(origin) > 0.0);
    }
}
