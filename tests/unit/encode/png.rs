use super::*;

#[test]
fn download_names_follow_the_pattern() {
    assert_eq!(
        download_file_name(1_700_000_000_123),
        "satellite-collage-1700000000123.png"
    );
    let now = download_file_name(unix_millis_now());
    assert!(now.starts_with(DOWNLOAD_PREFIX));
    assert!(now.ends_with(".png"));
}

#[test]
fn encoded_png_decodes_to_same_size_and_straight_alpha() {
    let frame = FrameRGBA {
        width: 3,
        height: 2,
        data: [[64u8, 32, 0, 128], [10, 20, 30, 255]].concat().repeat(3),
        premultiplied: true,
    };
    let png = encode_png(&frame).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (3, 2));
    assert_eq!(decoded.get_pixel(0, 0).0, [128, 64, 0, 128]);
    assert_eq!(decoded.get_pixel(1, 0).0, [10, 20, 30, 255]);
}

#[test]
fn length_mismatch_is_an_encode_error() {
    let frame = FrameRGBA {
        width: 4,
        height: 4,
        data: vec![0u8; 10],
        premultiplied: true,
    };
    let err = encode_png(&frame).unwrap_err();
    assert!(matches!(err, SatError::Encode(_)), "{err}");
}
