//! # zenbmp24
//!
//! Uncompressed 24-bit BGR BMP encoder and decoder for an in-memory RGB
//! [`Image`].
//!
//! ## Format
//!
//! A 14-byte file header, a 40-byte info header, then the pixel rows
//! bottom row first. Each row stores B,G,R triples padded with zeros to a
//! multiple of 4 bytes (see [`bmp::stride`]).
//!
//! Written files carry a 300 DPI resolution and a marker value in the
//! "important colors" field, and the decoder insists on both. This is a
//! closed codec: it loads its own output, not BMP files in general.
//!
//! ## Non-Goals
//!
//! - Compressed BMP variants (RLE, bitfields)
//! - Palettes and bit depths other than 24
//! - Top-down (negative height) files
//! - Streaming or partial decode
//!
//! ## Usage
//!
//! ```no_run
//! use zenbmp24::{Color, Image, load_bmp, save_bmp};
//!
//! let mut image = Image::new(4, 2, zenbmp24::BLACK);
//! image.row_mut(0)[1] = Color::new(255, 128, 0);
//!
//! assert!(save_bmp("out.bmp", &image));
//! let loaded = load_bmp("out.bmp");
//! assert_eq!(loaded, image);
//! ```
//!
//! In-memory, with errors and cancellation:
//!
//! ```
//! use zenbmp24::{DecodeRequest, Image, Limits, Unstoppable, encode_bmp24};
//!
//! let image = Image::new(3, 3, zenbmp24::BLACK);
//! let data = encode_bmp24(&image, Unstoppable)?;
//!
//! let limits = Limits { max_pixels: Some(1 << 20), ..Default::default() };
//! let decoded = DecodeRequest::new(&data)
//!     .with_limits(&limits)
//!     .decode(Unstoppable)?;
//! assert_eq!(decoded, image);
//! # Ok::<(), zenbmp24::BitmapError>(())
//! ```

#![forbid(unsafe_code)]

mod error;
mod file;
mod image;
mod info;
mod limits;

pub mod bmp;

mod decode;

// Re-exports
pub use bmp::{decode_bmp24, encode_bmp24, read_bmp24, write_bmp24};
pub use decode::DecodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::BitmapError;
pub use file::{load_bmp, save_bmp, try_load_bmp, try_save_bmp};
pub use image::{BLACK, Color, Image};
pub use info::ImageInfo;
pub use limits::Limits;
