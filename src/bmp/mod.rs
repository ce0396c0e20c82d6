//! Uncompressed 24-bit BGR BMP: header layout, row stride, encoder and decoder.
//!
//! Files produced here carry a fixed 300 DPI resolution and store
//! `0x1000000` in the "important colors" field. The decoder requires both,
//! so it reads this codec's own output rather than arbitrary BMP files.

pub(crate) mod decode;
mod encode;
mod header;

pub use decode::{decode_bmp24, read_bmp24};
pub use encode::{encode_bmp24, write_bmp24};
pub use header::{FileHeader, InfoHeader, is_supported, validate};

/// Magic bytes at offset 0.
pub const SIGNATURE: [u8; 2] = *b"BM";

/// Offset of the first pixel row: both headers, nothing in between.
pub const PIXEL_DATA_OFFSET: u32 = (FileHeader::SIZE + InfoHeader::SIZE) as u32;

pub const BITS_PER_PIXEL: u16 = 24;

/// Pixels per meter, roughly 300 DPI.
pub const RESOLUTION_300_DPI: i32 = 11811;

/// Value stored in the "important colors" field to mark files written by this codec.
pub const IMPORTANT_COLORS_MARKER: u32 = 0x100_0000;

/// Bytes per stored row of a `width`-pixel image: `3 * width` rounded up to
/// a multiple of 4.
pub const fn stride(width: usize) -> usize {
    4 * ((3 * width + 3) / 4)
}

/// [`stride`] with overflow reported as `None`.
pub(crate) fn checked_stride(width: usize) -> Option<usize> {
    width
        .checked_mul(3)
        .and_then(|r| r.checked_add(3))
        .map(|r| r & !3)
}
