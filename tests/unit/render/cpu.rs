use super::*;
use kurbo::Shape as _;

fn canvas() -> Canvas {
    Canvas {
        width: 16,
        height: 8,
    }
}

fn near(a: [u8; 4], b: [u8; 4]) -> bool {
    a.iter().zip(b).all(|(x, y)| x.abs_diff(y) <= 2)
}

#[test]
fn filled_rect_covers_pixels() {
    let mut s = CpuSurface::new(canvas()).unwrap();
    s.fill_rect(Rect::new(0.0, 0.0, 8.0, 8.0), Rgba8::rgb(255, 0, 0))
        .unwrap();
    let frame = s.finish();
    assert_eq!((frame.width, frame.height), (16, 8));
    assert!(frame.premultiplied);
    assert!(near(frame.pixel(2, 2).unwrap(), [255, 0, 0, 255]));
    assert_eq!(frame.pixel(12, 2), Some([0, 0, 0, 0]));
}

#[test]
fn later_paths_paint_over_earlier_ones() {
    let mut s = CpuSurface::new(canvas()).unwrap();
    let rect = Rect::new(0.0, 0.0, 16.0, 8.0);
    s.fill_path(&rect.to_path(0.1), Rgba8::rgb(0, 0, 255), None)
        .unwrap();
    s.fill_path(
        &Rect::new(8.0, 0.0, 16.0, 8.0).to_path(0.1),
        Rgba8::rgb(0, 255, 0),
        Some(StrokeStyle {
            color: Rgba8::rgb(0, 255, 0),
            width: 1.0,
        }),
    )
    .unwrap();
    let frame = s.finish();
    assert!(near(frame.pixel(3, 4).unwrap(), [0, 0, 255, 255]));
    assert!(near(frame.pixel(12, 4).unwrap(), [0, 255, 0, 255]));
}

#[test]
fn images_are_stretched_over_their_rect() {
    let mut s = CpuSurface::new(canvas()).unwrap();
    let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([10, 200, 30, 255]));
    s.draw_image(Rect::new(0.0, 0.0, 16.0, 8.0), &img).unwrap();
    let frame = s.finish();
    assert!(near(frame.pixel(8, 4).unwrap(), [10, 200, 30, 255]));
}

#[test]
fn text_without_font_is_skipped() {
    let mut s = CpuSurface::new(canvas()).unwrap();
    s.text(&TextSpec::new("label", Point::new(2.0, 4.0), 10.0, Rgba8::BLACK))
        .unwrap();
    let frame = s.finish();
    assert!(frame.data.iter().all(|b| *b == 0));
}

#[test]
fn oversized_canvas_is_rejected() {
    let big = Canvas {
        width: 70_000,
        height: 10,
    };
    assert!(CpuSurface::new(big).is_err());
}

#[test]
fn missing_font_file_is_an_error() {
    let s = CpuSurface::new(canvas()).unwrap();
    assert!(s.with_font_file(Path::new("/nonexistent/font.ttf")).is_err());
}
