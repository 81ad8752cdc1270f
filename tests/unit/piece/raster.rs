use super::*;

fn checker() -> RasterImage {
    RasterImage {
        width: 2,
        height: 2,
        data: vec![
            0, 0, 0, 255, 255, 255, 255, 255, //
            255, 255, 255, 255, 0, 0, 0, 255,
        ],
    }
}

#[test]
fn pixel_is_bounds_checked() {
    let img = checker();
    assert_eq!(img.pixel(0, 0), Some([0, 0, 0, 255]));
    assert_eq!(img.pixel(1, 0), Some([255, 255, 255, 255]));
    assert_eq!(img.pixel(1, 1), Some([0, 0, 0, 255]));
    assert_eq!(img.pixel(2, 0), None);
    assert_eq!(img.pixel(0, 2), None);
}

#[test]
fn png_bytes_start_with_the_signature() {
    let png = checker().encode_png().unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(RasterImage::from_rgba_image(decoded), checker());
}

#[test]
fn mismatched_buffer_does_not_encode() {
    let img = RasterImage {
        width: 3,
        height: 3,
        data: vec![0; 4],
    };
    assert!(img.to_rgba_image().is_none());
    assert!(img.encode_png().is_err());
}

#[test]
fn fingerprint_tracks_content_and_size() {
    let a = checker();
    assert_eq!(a.fingerprint(), checker().fingerprint());

    let mut b = checker();
    b.data[0] = 1;
    assert_ne!(a.fingerprint(), b.fingerprint());

    let c = RasterImage {
        width: 4,
        height: 1,
        data: a.data.clone(),
    };
    assert_ne!(a.fingerprint(), c.fingerprint());
}

#[test]
fn write_png_creates_parent_dirs() {
    let dir = std::path::PathBuf::from("target")
        .join("unit_raster")
        .join("nested");
    let _ = std::fs::remove_dir_all(&dir);
    let path = dir.join("checker.png");

    checker().write_png(&path).unwrap();
    let back = image::open(&path).unwrap().to_rgba8();
    assert_eq!(back.dimensions(), (2, 2));
}
