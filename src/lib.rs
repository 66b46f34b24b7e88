//! # zensurface
//!
//! 24-bit BMP codec built around an owned, padded pixel [`Surface`].
//!
//! ## Layout
//!
//! A surface stores pixels exactly as a 24-bit BMP pixel array does: B, G, R
//! per pixel, each row padded to a multiple of 4 bytes. Decoding copies the
//! file's rows straight into the buffer and encoding writes them straight
//! back, so `decode(encode(s)) == s` byte for byte.
//!
//! Rows are **not** flipped. Buffer row 0 is the first row stored in the
//! file, which a standard bottom-up BMP viewer shows at the bottom.
//!
//! ## Supported Formats
//!
//! - Decode and encode of uncompressed 24-bit BMP with a 40-byte
//!   BITMAPINFOHEADER.
//!
//! ## Non-Goals
//!
//! - Compressed BMP (RLE, bitfields), palettes, other bit depths
//! - Other image formats (`.png` is recognised by [`load`]/[`save`] and
//!   rejected)
//!
//! ## Validation
//!
//! Header checks run in a fixed order and the first failure is returned as a
//! [`FormatError`]. Harmless oddities (non-zero reserved, resolution or
//! palette fields) become [`BmpWarning`]s, which are logged through the `log`
//! facade and returned by [`DecodeRequest`].
//!
//! ## Usage
//!
//! ```no_run
//! use zensurface::{DecodeRequest, EncodeRequest};
//!
//! let data = std::fs::read("in.bmp")?;
//! let mut surface = DecodeRequest::new(&data).decode()?.into_surface();
//!
//! // Keep only the red channel and shift right by 10 pixels.
//! surface.rgb_filter_and(0xFF, 0x00, 0x00);
//! surface.translate(10, 0);
//!
//! let out = EncodeRequest::bmp().encode(&surface)?;
//! std::fs::write("out.bmp", out)?;
//! # Ok::<(), zensurface::BitmapError>(())
//! ```

#![forbid(unsafe_code)]

extern crate alloc;

mod decode;
mod encode;
mod error;
mod info;
mod kernel;
mod limits;
mod path;
mod pixel;
mod surface;

pub mod bmp;

// Re-exports
pub use bmp::BmpWarning;
pub use decode::{DecodeOutput, DecodeRequest};
pub use encode::EncodeRequest;
pub use error::{BitmapError, FormatError, SizeField};
pub use info::ImageInfo;
pub use kernel::KernelMode;
pub use limits::Limits;
pub use path::{load, save};
pub use pixel::{BitDepth, ImageFormat, PixelLayout};
pub use rgb::alt::BGR8;
pub use surface::Surface;

/// Decode a 24-bit BMP file. Shorthand for [`bmp::decode`].
pub fn decode_bmp(data: &[u8]) -> Result<Surface, FormatError> {
    bmp::decode(data)
}

/// Encode a surface as BMP. Shorthand for [`bmp::encode`].
pub fn encode_bmp(surface: &Surface) -> alloc::vec::Vec<u8> {
    bmp::encode(surface)
}
