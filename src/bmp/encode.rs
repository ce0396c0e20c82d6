//! BMP encoder: uncompressed 24-bit, bottom-up.

use std::io::Write;

use enough::Stop;

use super::{FileHeader, InfoHeader, checked_stride};
use crate::error::BitmapError;
use crate::image::Image;

/// Write `image` as a 24-bit BMP to `out`.
///
/// Rows go out last to first, each as B,G,R triples followed by zero
/// padding up to the row stride. On error the writer may hold a partial
/// file.
pub fn write_bmp24<W: Write + ?Sized>(
    out: &mut W,
    image: &Image,
    stop: impl Stop,
) -> Result<(), BitmapError> {
    write_rows(out, image, &stop)
}

/// Encode `image` as a 24-bit BMP in memory.
pub fn encode_bmp24(image: &Image, stop: impl Stop) -> Result<Vec<u8>, BitmapError> {
    let file = FileHeader::for_image(image.width(), image.height())?;
    let mut out = Vec::with_capacity(file.file_size as usize);
    write_rows(&mut out, image, &stop)?;
    Ok(out)
}

fn write_rows<W: Write + ?Sized>(
    out: &mut W,
    image: &Image,
    stop: &dyn Stop,
) -> Result<(), BitmapError> {
    let (width, height) = (image.width(), image.height());
    let file = FileHeader::for_image(width, height)?;
    let info = InfoHeader::for_image(width, height)?;
    let row_stride =
        checked_stride(width).ok_or(BitmapError::DimensionsTooLarge { width, height })?;

    stop.check()?;
    out.write_all(&file.to_bytes())?;
    out.write_all(&info.to_bytes())?;
    if image.is_empty() {
        return Ok(());
    }

    let mut buf = vec![0u8; row_stride];
    for (i, row) in image.rows().rev().enumerate() {
        if i % 16 == 0 {
            stop.check()?;
        }
        for (slot, px) in buf.chunks_exact_mut(3).zip(row) {
            slot[0] = px.b;
            slot[1] = px.g;
            slot[2] = px.r;
        }
        // padding bytes past 3 * width are never written, so they stay zero
        out.write_all(&buf)?;
    }

    Ok(())
}
