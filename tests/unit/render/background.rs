use super::*;

#[test]
fn gradient_runs_top_to_bottom_through_every_stop() {
    let colors = [Rgba8::BLACK, Rgba8::rgb(255, 0, 0), Rgba8::WHITE];
    let img = gradient_image(&colors, 3, 5);
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
    assert_eq!(img.get_pixel(1, 2).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(2, 4).0, [255, 255, 255, 255]);
    assert_eq!(img.get_pixel(0, 1).0, [128, 0, 0, 255]);
}

#[test]
fn single_stop_is_flat() {
    let img = gradient_image(&[Rgba8::rgb(1, 2, 3)], 2, 4);
    assert!(img.pixels().all(|p| p.0 == [1, 2, 3, 255]));
}

#[test]
fn temp_file_is_removed_on_drop() {
    let backdrop = GradientBackdrop::create(&[Rgba8::BLACK, Rgba8::WHITE], 4, 16).unwrap();
    let path = backdrop.path().to_path_buf();
    assert!(path.exists());
    assert_eq!(backdrop.image().dimensions(), (4, 16));
    drop(backdrop);
    assert!(!path.exists());
}

#[test]
fn empty_stop_list_is_rejected() {
    assert!(GradientBackdrop::create(&[], 4, 4).is_err());
}
