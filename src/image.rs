//! In-memory RGB image buffer filled by the decoder and read by the encoder.

use imgref::{ImgRef, ImgVec};

use crate::error::BitmapError;

/// One pixel: 8-bit red, green and blue channels.
pub type Color = rgb::RGB8;

/// All channels zero.
pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

/// Row-major grid of `width * height` colors.
///
/// `Image::default()` is the 0×0 image returned by [`crate::load_bmp`] when
/// loading fails.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Image {
    /// Create a `width` × `height` image with every pixel set to `fill`.
    pub fn new(width: usize, height: usize, fill: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width * height],
        }
    }

    /// Like [`Image::new`], but reports an allocation that cannot be
    /// satisfied instead of aborting.
    pub(crate) fn try_new(width: usize, height: usize, fill: Color) -> Result<Self, BitmapError> {
        let len = width
            .checked_mul(height)
            .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len).map_err(|_| {
            BitmapError::LimitExceeded(format!("cannot allocate {width}x{height} image"))
        })?;
        pixels.resize(len, fill);
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Wrap an existing row-major pixel buffer.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Color>) -> Result<Self, BitmapError> {
        let needed = width
            .checked_mul(height)
            .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
        if pixels.len() != needed {
            return Err(BitmapError::BufferTooSmall {
                needed,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// True when the image has no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The `width` pixels of row `y`. Panics if `y >= height`.
    pub fn row(&self, y: usize) -> &[Color] {
        assert!(y < self.height, "row {y} out of bounds (height {})", self.height);
        let start = y * self.width;
        &self.pixels[start..start + self.width]
    }

    /// Mutable access to the `width` pixels of row `y`. Panics if `y >= height`.
    pub fn row_mut(&mut self, y: usize) -> &mut [Color] {
        assert!(y < self.height, "row {y} out of bounds (height {})", self.height);
        let start = y * self.width;
        &mut self.pixels[start..start + self.width]
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Color]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<Color> {
        self.pixels
    }

    /// Borrow as an [`imgref::ImgRef`].
    ///
    /// Returns `None` for zero-width images, which `imgref` cannot represent.
    pub fn as_imgref(&self) -> Option<ImgRef<'_, Color>> {
        if self.width == 0 {
            return None;
        }
        Some(ImgRef::new(&self.pixels, self.width, self.height))
    }
}

impl From<ImgVec<Color>> for Image {
    fn from(img: ImgVec<Color>) -> Self {
        let width = img.width();
        let height = img.height();
        let mut pixels = Vec::with_capacity(width * height);
        for row in img.as_ref().rows() {
            pixels.extend_from_slice(row);
        }
        Self {
            width,
            height,
            pixels,
        }
    }
}
