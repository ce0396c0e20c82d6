use crate::bmp::{self, FileHeader, InfoHeader};
use crate::error::BitmapError;

/// Header-level facts about a BMP file, read without decoding pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: usize,
    pub height: usize,
    /// `file_size` field of the file header.
    pub file_size: u32,
    /// `image_size` field of the info header.
    pub image_size: u32,
}

impl ImageInfo {
    /// Probe the 54 header bytes at the start of `data`.
    ///
    /// Fails the same way decoding would for a file this codec cannot load.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BitmapError> {
        let mut input = data;
        let (file, info) = bmp::decode::read_headers(&mut input)?;
        Self::from_headers(&file, &info)
    }

    pub fn from_headers(file: &FileHeader, info: &InfoHeader) -> Result<Self, BitmapError> {
        bmp::validate(file, info)?;
        let (width, height) = bmp::decode::dimensions(info)?;
        Ok(Self {
            width,
            height,
            file_size: file.file_size,
            image_size: info.image_size,
        })
    }
}
