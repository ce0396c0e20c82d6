//! Path-level save and load.
//!
//! [`save_bmp`] and [`load_bmp`] report failure as `false` and as an empty
//! image. The `try_` forms return the underlying [`BitmapError`].

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use enough::{Stop, Unstoppable};

use crate::bmp;
use crate::error::BitmapError;
use crate::image::Image;
use crate::limits::Limits;

/// Write `image` to `path`, creating or truncating the file.
///
/// A failed save may leave a partial file behind.
pub fn try_save_bmp(
    path: impl AsRef<Path>,
    image: &Image,
    stop: impl Stop,
) -> Result<(), BitmapError> {
    let mut out = BufWriter::new(File::create(path.as_ref())?);
    bmp::write_bmp24(&mut out, image, stop)?;
    out.flush()?;
    Ok(())
}

/// Read the image stored at `path`.
pub fn try_load_bmp(
    path: impl AsRef<Path>,
    limits: Option<&Limits>,
    stop: impl Stop,
) -> Result<Image, BitmapError> {
    let mut input = BufReader::new(File::open(path.as_ref())?);
    bmp::read_bmp24(&mut input, limits, stop)
}

/// Write `image` to `path`. Returns `true` if every write succeeded.
pub fn save_bmp(path: impl AsRef<Path>, image: &Image) -> bool {
    let path = path.as_ref();
    match try_save_bmp(path, image, Unstoppable) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("failed to save {}: {e}", path.display());
            false
        }
    }
}

/// Read the image stored at `path`.
///
/// Returns an empty 0×0 image if the file cannot be read or is not a
/// 24-bit BMP this codec understands.
pub fn load_bmp(path: impl AsRef<Path>) -> Image {
    let path = path.as_ref();
    match try_load_bmp(path, None, Unstoppable) {
        Ok(image) => image,
        Err(e) if e.is_io() => {
            log::warn!("I/O error while reading {}: {e}", path.display());
            Image::default()
        }
        Err(e) => {
            log::debug!("rejected {}: {e}", path.display());
            Image::default()
        }
    }
}
