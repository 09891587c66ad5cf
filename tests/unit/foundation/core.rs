use super::*;

#[test]
fn canvas_rejects_zero_and_oversized_dimensions() {
    assert!(Canvas::default().validate().is_ok());
    assert!(
        Canvas {
            width: 0,
            height: 10
        }
        .validate()
        .is_err()
    );
    assert!(
        Canvas {
            width: 70_000,
            height: 10
        }
        .validate()
        .is_err()
    );
}

#[test]
fn premul_scales_channels_by_alpha() {
    let c = Rgba8::rgba(255, 128, 0, 128);
    assert_eq!(c.to_premul_array(), [128, 64, 0, 128]);
    assert_eq!(Rgba8::WHITE.to_premul_array(), [255, 255, 255, 255]);
}

#[test]
fn lerp_hits_endpoints_and_midpoint() {
    let a = Rgba8::rgb(0, 0, 0);
    let b = Rgba8::rgb(200, 100, 50);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 0.5), Rgba8::rgb(100, 50, 25));
}

#[test]
fn hex_rgb_ignores_alpha() {
    assert_eq!(Rgba8::rgba(255, 16, 1, 3).to_hex_rgb(), "#ff1001");
}
