use enough::Unstoppable;
use zenbmp24::*;

#[test]
fn bmp_roundtrip_rgb() {
    let mut image = Image::new(3, 2, BLACK);
    image.row_mut(0).copy_from_slice(&[
        Color::new(255, 0, 0),
        Color::new(0, 255, 0),
        Color::new(0, 0, 255),
    ]);
    image.row_mut(1).copy_from_slice(&[
        Color::new(128, 128, 128),
        Color::new(64, 64, 64),
        Color::new(0, 0, 0),
    ]);

    let encoded = encode_bmp24(&image, Unstoppable).unwrap();
    assert_eq!(&encoded[0..2], b"BM");

    let decoded = decode_bmp24(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded.width(), 3);
    assert_eq!(decoded.height(), 2);
    assert_eq!(decoded, image);
}

#[test]
fn bmp_bytes_are_bgr_bottom_up() {
    let mut image = Image::new(2, 2, BLACK);
    image.row_mut(0).copy_from_slice(&[Color::new(1, 2, 3), Color::new(4, 5, 6)]);
    image.row_mut(1).copy_from_slice(&[Color::new(7, 8, 9), Color::new(10, 11, 12)]);

    let encoded = encode_bmp24(&image, Unstoppable).unwrap();
    // stride(2) = 8: six pixel bytes and two padding bytes per row
    assert_eq!(
        &encoded[54..],
        &[
            9, 8, 7, 12, 11, 10, 0, 0, // row 1
            3, 2, 1, 6, 5, 4, 0, 0, // row 0
        ]
    );
}

#[test]
fn image_info_probe() {
    let encoded = encode_bmp24(&Image::new(1, 2, BLACK), Unstoppable).unwrap();

    let info = ImageInfo::from_bytes(&encoded).unwrap();
    assert_eq!(info.width, 1);
    assert_eq!(info.height, 2);
    assert_eq!(info.file_size as usize, encoded.len());
    assert_eq!(info.image_size, 8);
}

#[test]
fn limits_reject_large() {
    let encoded = encode_bmp24(&Image::new(1, 2, BLACK), Unstoppable).unwrap();

    let limits = Limits {
        max_pixels: Some(1), // only 1 pixel allowed
        ..Default::default()
    };

    let result = DecodeRequest::new(&encoded)
        .with_limits(&limits)
        .decode(Unstoppable);
    match result.unwrap_err() {
        BitmapError::LimitExceeded(_) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }
}

#[test]
fn limits_allow_within_bounds() {
    let image = Image::new(4, 4, Color::new(3, 2, 1));
    let encoded = encode_bmp24(&image, Unstoppable).unwrap();
    let limits = Limits {
        max_width: Some(4),
        max_height: Some(4),
        max_pixels: Some(16),
        max_memory_bytes: Some(48),
    };
    let decoded = DecodeRequest::new(&encoded)
        .with_limits(&limits)
        .decode(Unstoppable)
        .unwrap();
    assert_eq!(decoded, image);
}

#[test]
fn streaming_read_leaves_trailing_bytes() {
    let image = Image::new(2, 1, Color::new(9, 9, 9));
    let mut data = encode_bmp24(&image, Unstoppable).unwrap();
    data.extend_from_slice(b"trailer");

    let mut input = &data[..];
    let decoded = read_bmp24(&mut input, None, Unstoppable).unwrap();
    assert_eq!(decoded, image);
    assert_eq!(input, b"trailer");
}

#[test]
fn imgref_source_roundtrip() {
    let pixels: Vec<Color> = (0..20u8).map(|i| Color::new(i, 255 - i, i / 2)).collect();
    let image = Image::from(imgref::ImgVec::new(pixels, 5, 4));
    let encoded = encode_bmp24(&image, Unstoppable).unwrap();
    let decoded = decode_bmp24(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded, image);
    let view = decoded.as_imgref().unwrap();
    assert_eq!((view.width(), view.height()), (5, 4));
    assert_eq!(view.buf()[7], Color::new(7, 248, 3));
}

#[test]
fn cancelled_encode_and_decode() {
    struct Cancelled;
    impl Stop for Cancelled {
        fn check(&self) -> Result<(), enough::StopReason> {
            Err(enough::StopReason::Cancelled)
        }
    }

    let image = Image::new(2, 2, BLACK);
    assert!(matches!(
        encode_bmp24(&image, Cancelled),
        Err(BitmapError::Cancelled(_))
    ));

    let encoded = encode_bmp24(&image, Unstoppable).unwrap();
    assert!(matches!(
        decode_bmp24(&encoded, Cancelled),
        Err(BitmapError::Cancelled(_))
    ));
}
