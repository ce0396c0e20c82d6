//! The 14-byte file header and 40-byte info header, serialized field by
//! field in little-endian order.

use super::{
    BITS_PER_PIXEL, IMPORTANT_COLORS_MARKER, PIXEL_DATA_OFFSET, RESOLUTION_300_DPI, SIGNATURE,
    checked_stride,
};
use crate::error::BitmapError;

/// `BITMAPFILEHEADER`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FileHeader {
    pub signature: [u8; 2],
    /// Total file size in bytes.
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    /// Offset from the start of the file to the first pixel row.
    pub pixel_data_offset: u32,
}

/// `BITMAPINFOHEADER`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InfoHeader {
    pub header_size: u32,
    pub width: i32,
    /// Positive for bottom-up row order.
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    /// Size of the pixel rows, padding included.
    pub image_size: u32,
    /// Pixels per meter.
    pub x_resolution: i32,
    pub y_resolution: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

/// Size of the padded pixel data for a `width` × `height` image, checked
/// against the 32-bit header fields that store it.
fn pixel_data_size(width: usize, height: usize) -> Result<u32, BitmapError> {
    let too_large = BitmapError::DimensionsTooLarge { width, height };
    if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
        return Err(too_large);
    }
    checked_stride(width)
        .and_then(|s| s.checked_mul(height))
        .and_then(|n| u32::try_from(n).ok())
        .ok_or(too_large)
}

impl FileHeader {
    pub const SIZE: usize = 14;

    /// Header for a 24-bit image of the given dimensions.
    pub fn for_image(width: usize, height: usize) -> Result<Self, BitmapError> {
        let file_size = pixel_data_size(width, height)?
            .checked_add(PIXEL_DATA_OFFSET)
            .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
        Ok(Self {
            signature: SIGNATURE,
            file_size,
            reserved1: 0,
            reserved2: 0,
            pixel_data_offset: PIXEL_DATA_OFFSET,
        })
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        out[0..2].copy_from_slice(&self.signature);
        out[2..6].copy_from_slice(&self.file_size.to_le_bytes());
        out[6..8].copy_from_slice(&self.reserved1.to_le_bytes());
        out[8..10].copy_from_slice(&self.reserved2.to_le_bytes());
        out[10..14].copy_from_slice(&self.pixel_data_offset.to_le_bytes());
        out
    }

    pub fn from_bytes(b: &[u8; Self::SIZE]) -> Self {
        Self {
            signature: [b[0], b[1]],
            file_size: u32::from_le_bytes([b[2], b[3], b[4], b[5]]),
            reserved1: u16::from_le_bytes([b[6], b[7]]),
            reserved2: u16::from_le_bytes([b[8], b[9]]),
            pixel_data_offset: u32::from_le_bytes([b[10], b[11], b[12], b[13]]),
        }
    }
}

impl InfoHeader {
    pub const SIZE: usize = 40;

    /// Header for a 24-bit, uncompressed, bottom-up image of the given dimensions.
    pub fn for_image(width: usize, height: usize) -> Result<Self, BitmapError> {
        let image_size = pixel_data_size(width, height)?;
        Ok(Self {
            header_size: Self::SIZE as u32,
            // pixel_data_size() already checked both fit in i32
            width: width as i32,
            height: height as i32,
            planes: 1,
            bits_per_pixel: BITS_PER_PIXEL,
            compression: 0,
            image_size,
            x_resolution: RESOLUTION_300_DPI,
            y_resolution: RESOLUTION_300_DPI,
            colors_used: 0,
            colors_important: IMPORTANT_COLORS_MARKER,
        })
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        out[0..4].copy_from_slice(&self.header_size.to_le_bytes());
        out[4..8].copy_from_slice(&self.width.to_le_bytes());
        out[8..12].copy_from_slice(&self.height.to_le_bytes());
        out[12..14].copy_from_slice(&self.planes.to_le_bytes());
        out[14..16].copy_from_slice(&self.bits_per_pixel.to_le_bytes());
        out[16..20].copy_from_slice(&self.compression.to_le_bytes());
        out[20..24].copy_from_slice(&self.image_size.to_le_bytes());
        out[24..28].copy_from_slice(&self.x_resolution.to_le_bytes());
        out[28..32].copy_from_slice(&self.y_resolution.to_le_bytes());
        out[32..36].copy_from_slice(&self.colors_used.to_le_bytes());
        out[36..40].copy_from_slice(&self.colors_important.to_le_bytes());
        out
    }

    pub fn from_bytes(b: &[u8; Self::SIZE]) -> Self {
        let u32_at = |i: usize| u32::from_le_bytes([b[i], b[i + 1], b[i + 2], b[i + 3]]);
        let i32_at = |i: usize| i32::from_le_bytes([b[i], b[i + 1], b[i + 2], b[i + 3]]);
        let u16_at = |i: usize| u16::from_le_bytes([b[i], b[i + 1]]);
        Self {
            header_size: u32_at(0),
            width: i32_at(4),
            height: i32_at(8),
            planes: u16_at(12),
            bits_per_pixel: u16_at(14),
            compression: u32_at(16),
            image_size: u32_at(20),
            x_resolution: i32_at(24),
            y_resolution: i32_at(28),
            colors_used: u32_at(32),
            colors_important: u32_at(36),
        }
    }
}

/// Check that a header pair describes a file this codec can load.
///
/// Every check must pass: both signature bytes, one plane, 24 bits per
/// pixel, no compression, 300 DPI in both directions and the
/// important-colors marker.
pub fn validate(file: &FileHeader, info: &InfoHeader) -> Result<(), BitmapError> {
    if file.signature[0] != SIGNATURE[0] || file.signature[1] != SIGNATURE[1] {
        return Err(BitmapError::UnrecognizedFormat);
    }
    if info.planes != 1 {
        return Err(BitmapError::UnsupportedVariant(format!(
            "{} color planes",
            info.planes
        )));
    }
    if info.bits_per_pixel != BITS_PER_PIXEL {
        return Err(BitmapError::UnsupportedVariant(format!(
            "{} bits per pixel",
            info.bits_per_pixel
        )));
    }
    if info.compression != 0 {
        return Err(BitmapError::UnsupportedVariant(format!(
            "compression method {}",
            info.compression
        )));
    }
    if info.x_resolution != RESOLUTION_300_DPI || info.y_resolution != RESOLUTION_300_DPI {
        return Err(BitmapError::UnsupportedVariant(format!(
            "resolution {}x{} pixels per meter",
            info.x_resolution, info.y_resolution
        )));
    }
    if info.colors_important != IMPORTANT_COLORS_MARKER {
        return Err(BitmapError::UnsupportedVariant(format!(
            "important colors field {:#x}",
            info.colors_important
        )));
    }
    Ok(())
}

/// Predicate form of [`validate`].
pub fn is_supported(file: &FileHeader, info: &InfoHeader) -> bool {
    validate(file, info).is_ok()
}
