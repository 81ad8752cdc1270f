use super::*;

fn layer(width: u32, height: u32, data: Vec<u8>) -> PremulPixels {
    PremulPixels {
        width,
        height,
        data,
    }
}

#[test]
fn under_fills_transparent_with_background() {
    let white = [255, 255, 255, 255];
    assert_eq!(under([0, 0, 0, 0], white), white);
    assert_eq!(under([0, 0, 0, 255], white), [0, 0, 0, 255]);
    assert_eq!(under([0, 0, 0, 128], white), [127, 127, 127, 255]);
}

#[test]
fn finalize_is_opaque() {
    let img = Compositor::new(Rotation::Deg0)
        .finalize(layer(2, 2, vec![0; 16]))
        .unwrap();
    assert_eq!((img.width, img.height), (2, 2));
    assert!(img.data.iter().all(|&b| b == 255));
}

#[test]
fn rotations_move_the_marked_pixel() {
    // 2x1 layer, black on the left.
    let data = vec![0, 0, 0, 255, 0, 0, 0, 0];
    let black = Some([0, 0, 0, 255]);
    let white = Some([255, 255, 255, 255]);

    let img = Compositor::new(Rotation::Deg0)
        .finalize(layer(2, 1, data.clone()))
        .unwrap();
    assert_eq!((img.pixel(0, 0), img.pixel(1, 0)), (black, white));

    let img = Compositor::new(Rotation::Deg90)
        .finalize(layer(2, 1, data.clone()))
        .unwrap();
    assert_eq!((img.width, img.height), (1, 2));
    assert_eq!((img.pixel(0, 0), img.pixel(0, 1)), (black, white));

    let img = Compositor::new(Rotation::Deg180)
        .finalize(layer(2, 1, data.clone()))
        .unwrap();
    assert_eq!((img.pixel(0, 0), img.pixel(1, 0)), (white, black));

    let img = Compositor::new(Rotation::Deg270)
        .finalize(layer(2, 1, data))
        .unwrap();
    assert_eq!((img.width, img.height), (1, 2));
    assert_eq!((img.pixel(0, 0), img.pixel(0, 1)), (white, black));
}

#[test]
fn finalize_rejects_short_buffers() {
    let err = Compositor::new(Rotation::Deg90)
        .finalize(layer(4, 4, vec![0; 12]))
        .unwrap_err();
    assert!(matches!(err, TrackCodeError::SurfaceAllocation(_)));
}
