//! BMP decoder for files written by [`super::write_bmp24`].

use std::io::Read;

use enough::Stop;

use super::{FileHeader, InfoHeader, checked_stride, validate};
use crate::error::BitmapError;
use crate::image::{BLACK, Image};
use crate::limits::Limits;

/// Read both headers from the start of `input`.
pub(crate) fn read_headers<R: Read + ?Sized>(
    input: &mut R,
) -> Result<(FileHeader, InfoHeader), BitmapError> {
    let mut file = [0u8; FileHeader::SIZE];
    input.read_exact(&mut file)?;
    let mut info = [0u8; InfoHeader::SIZE];
    input.read_exact(&mut info)?;
    Ok((FileHeader::from_bytes(&file), InfoHeader::from_bytes(&info)))
}

/// Width and height of a validated header, as unsigned pixel counts.
pub(crate) fn dimensions(info: &InfoHeader) -> Result<(usize, usize), BitmapError> {
    let width = usize::try_from(info.width).map_err(|_| {
        BitmapError::InvalidHeader(format!("negative width {}", info.width))
    })?;
    let height = usize::try_from(info.height).map_err(|_| {
        BitmapError::UnsupportedVariant(format!(
            "top-down row order (height {})",
            info.height
        ))
    })?;
    Ok((width, height))
}

/// Read a 24-bit BMP from `input`.
///
/// Pixel rows are expected directly after the 54 header bytes. Nothing is
/// returned unless every row was read.
pub fn read_bmp24<R: Read + ?Sized>(
    input: &mut R,
    limits: Option<&Limits>,
    stop: impl Stop,
) -> Result<Image, BitmapError> {
    read_rows(input, limits, &stop)
}

/// Decode a 24-bit BMP held in memory.
pub fn decode_bmp24(data: &[u8], stop: impl Stop) -> Result<Image, BitmapError> {
    let mut input = data;
    read_rows(&mut input, None, &stop)
}

fn read_rows<R: Read + ?Sized>(
    input: &mut R,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Image, BitmapError> {
    let (file, info) = read_headers(input)?;
    validate(&file, &info)?;
    let (width, height) = dimensions(&info)?;

    let row_stride =
        checked_stride(width).ok_or(BitmapError::DimensionsTooLarge { width, height })?;
    let out_bytes = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(3))
        .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
    if let Some(limits) = limits {
        limits.check(width, height)?;
        limits.check_memory(out_bytes)?;
    }

    stop.check()?;
    let mut image = Image::try_new(width, height, BLACK)?;
    if image.is_empty() {
        // no row bytes to read
        return Ok(image);
    }
    let mut buf = vec![0u8; row_stride];

    for (i, y) in (0..height).rev().enumerate() {
        if i % 16 == 0 {
            stop.check()?;
        }
        input.read_exact(&mut buf)?;
        for (px, slot) in image.row_mut(y).iter_mut().zip(buf.chunks_exact(3)) {
            px.b = slot[0];
            px.g = slot[1];
            px.r = slot[2];
        }
    }

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmp::encode_bmp24;
    use crate::image::Color;
    use enough::Unstoppable;

    fn sample() -> Image {
        let mut img = Image::new(3, 2, BLACK);
        img.row_mut(0).copy_from_slice(&[
            Color::new(255, 0, 0),
            Color::new(0, 255, 0),
            Color::new(0, 0, 255),
        ]);
        img.row_mut(1).copy_from_slice(&[
            Color::new(128, 128, 128),
            Color::new(64, 64, 64),
            Color::new(1, 2, 3),
        ]);
        img
    }

    #[test]
    fn decodes_own_output() {
        let img = sample();
        let data = encode_bmp24(&img, Unstoppable).unwrap();
        assert_eq!(decode_bmp24(&data, Unstoppable).unwrap(), img);
    }

    #[test]
    fn padding_bytes_are_ignored() {
        let img = sample();
        let mut data = encode_bmp24(&img, Unstoppable).unwrap();
        // width 3: 9 pixel bytes, 3 padding bytes per row
        for row in 0..2 {
            let pad = 54 + row * 12 + 9;
            data[pad..pad + 3].fill(0xAB);
        }
        assert_eq!(decode_bmp24(&data, Unstoppable).unwrap(), img);
    }

    #[test]
    fn short_header_is_eof() {
        let data = encode_bmp24(&sample(), Unstoppable).unwrap();
        for len in [0, 1, 13, 14, 53] {
            assert!(
                matches!(
                    decode_bmp24(&data[..len], Unstoppable),
                    Err(BitmapError::UnexpectedEof)
                ),
                "len {len}"
            );
        }
    }

    #[test]
    fn short_pixel_data_is_eof() {
        let data = encode_bmp24(&sample(), Unstoppable).unwrap();
        assert!(matches!(
            decode_bmp24(&data[..data.len() - 1], Unstoppable),
            Err(BitmapError::UnexpectedEof)
        ));
    }

    #[test]
    fn top_down_rejected() {
        let mut data = encode_bmp24(&sample(), Unstoppable).unwrap();
        data[22..26].copy_from_slice(&(-2i32).to_le_bytes());
        assert!(matches!(
            decode_bmp24(&data, Unstoppable),
            Err(BitmapError::UnsupportedVariant(_))
        ));
    }

    #[test]
    fn negative_width_rejected() {
        let mut data = encode_bmp24(&sample(), Unstoppable).unwrap();
        data[18..22].copy_from_slice(&(-3i32).to_le_bytes());
        assert!(matches!(
            decode_bmp24(&data, Unstoppable),
            Err(BitmapError::InvalidHeader(_))
        ));
    }

    #[test]
    fn limits_checked_before_reading_rows() {
        let data = encode_bmp24(&sample(), Unstoppable).unwrap();
        let limits = Limits {
            max_memory_bytes: Some(17),
            ..Default::default()
        };
        let mut input = &data[..];
        assert!(matches!(
            read_bmp24(&mut input, Some(&limits), Unstoppable),
            Err(BitmapError::LimitExceeded(_))
        ));
    }

    #[test]
    fn zero_height_skips_row_buffer() {
        let mut data = encode_bmp24(&Image::default(), Unstoppable).unwrap();
        data[18..22].copy_from_slice(&i32::MAX.to_le_bytes());
        let img = decode_bmp24(&data, Unstoppable).unwrap();
        assert_eq!(img.width(), i32::MAX as usize);
        assert!(img.is_empty());
    }

    #[test]
    fn huge_header_dimensions_fail_cleanly() {
        let mut data = encode_bmp24(&sample(), Unstoppable).unwrap();
        data[18..22].copy_from_slice(&i32::MAX.to_le_bytes());
        data[22..26].copy_from_slice(&i32::MAX.to_le_bytes());
        assert!(decode_bmp24(&data, Unstoppable).is_err());
    }
}
