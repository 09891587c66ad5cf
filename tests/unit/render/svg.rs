use super::*;

fn surface() -> SvgSurface {
    SvgSurface::new(
        Canvas {
            width: 200,
            height: 100,
        },
        &FontSpec::default(),
    )
}

#[test]
fn document_has_canvas_size() {
    let svg = surface().finish();
    assert!(svg.starts_with("<svg "));
    assert!(svg.contains("viewBox=\"0 0 200 100\""));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn translucent_fill_emits_opacity() {
    let mut s = surface();
    s.fill_rect(
        Rect::new(0.0, 0.0, 10.0, 5.5),
        Rgba8::rgba(255, 255, 255, 0x99),
    )
    .unwrap();
    let svg = s.finish();
    assert!(svg.contains("height=\"5.5\""));
    assert!(svg.contains("fill=\"#ffffff\" fill-opacity=\"0.6\""));
}

#[test]
fn zero_width_stroke_is_omitted() {
    let mut s = surface();
    let mut path = BezPath::new();
    path.move_to((0.0, 0.0));
    path.line_to((10.0, 0.0));
    path.line_to((10.0, 10.0));
    path.close_path();
    s.fill_path(
        &path,
        Rgba8::BLACK,
        Some(StrokeStyle {
            color: Rgba8::WHITE,
            width: 0.0,
        }),
    )
    .unwrap();
    let svg = s.finish();
    assert!(svg.contains("stroke=\"none\""));
    assert!(svg.contains("<path d=\"M0"));
}

#[test]
fn text_is_escaped_and_rotated_counter_clockwise() {
    let mut s = surface();
    s.text(
        &TextSpec::new("a<b & c", Point::new(10.0, 20.0), 12.0, Rgba8::BLACK)
            .align(TextAnchor::End)
            .rotated(90.0),
    )
    .unwrap();
    let svg = s.finish();
    assert!(svg.contains(">a&lt;b &amp; c</text>"));
    assert!(svg.contains("text-anchor=\"end\""));
    assert!(svg.contains("transform=\"rotate(-90 10 20)\""));
    assert!(svg.contains("font-weight=\"bold\""));
}

#[test]
fn images_are_embedded_as_png_data_uris() {
    let mut s = surface();
    let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([1, 2, 3, 255]));
    s.draw_image(Rect::new(0.0, 0.0, 200.0, 100.0), &img).unwrap();
    let svg = s.finish();
    assert!(svg.contains("xlink:href=\"data:image/png;base64,iVBORw0KGgo"));
    assert!(svg.contains("preserveAspectRatio=\"none\""));
}

#[test]
fn numbers_drop_trailing_zeros_and_negative_zero() {
    assert_eq!(num(-0.0001), "0");
    assert_eq!(num(-0.0), "0");
    assert_eq!(num(12.500), "12.5");
    assert_eq!(num(3.0), "3");
    assert_eq!(num(-1.25), "-1.25");
}
