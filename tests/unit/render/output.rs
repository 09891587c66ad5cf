use super::*;

#[test]
fn straight_copy_undoes_premultiplication() {
    let frame = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![128, 0, 64, 128, 10, 20, 30, 255],
        premultiplied: true,
    };
    let straight = frame.to_straight();
    assert_eq!(&straight[..4], &[255, 0, 128, 128]);
    assert_eq!(&straight[4..], &[10, 20, 30, 255]);
    assert_eq!(frame.pixel(1, 0), Some([10, 20, 30, 255]));
    assert_eq!(frame.pixel(2, 0), None);
}

#[test]
fn save_png_round_trips_through_image() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.png");
    let frame = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![0, 0, 0, 0],
        premultiplied: true,
    };
    frame.save_png(&path).unwrap();
    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (1, 1));
}

#[test]
fn mismatched_frame_is_rejected() {
    let frame = FrameRGBA {
        width: 4,
        height: 4,
        data: vec![0; 3],
        premultiplied: false,
    };
    let dir = tempfile::tempdir().unwrap();
    assert!(frame.save_png(&dir.path().join("bad.png")).is_err());
}

#[test]
fn backend_names_parse() {
    assert_eq!("cpu".parse::<RasterBackend>().unwrap(), RasterBackend::Cpu);
    assert_eq!("RESVG".parse::<RasterBackend>().unwrap(), RasterBackend::Resvg);
    assert!("gpu".parse::<RasterBackend>().is_err());
}
