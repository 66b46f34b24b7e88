use crate::bmp::{self, MAGIC};
use crate::error::FormatError;
use crate::pixel::ImageFormat;
use crate::surface::row_padding_for;

/// Header facts read without decoding pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u16,
    /// Bytes per row implied by width and depth, padding included.
    pub row_stride: u64,
    pub format: ImageFormat,
}

impl ImageInfo {
    /// Probe a BMP header.
    ///
    /// Only the length and magic bytes are checked; a successful probe does
    /// not mean the file will decode.
    pub fn from_bytes(data: &[u8]) -> Result<Self, FormatError> {
        let (file, info) = bmp::parse_headers(data)?;
        if file.magic != MAGIC {
            return Err(FormatError::BadMagic(file.magic));
        }
        let row_bytes = u64::from(info.bits_per_pixel / 8) * u64::from(info.width);
        Ok(Self {
            width: info.width,
            height: info.height,
            bits_per_pixel: info.bits_per_pixel,
            row_stride: row_bytes + row_padding_for((row_bytes % 4) as usize) as u64,
            format: ImageFormat::Bmp,
        })
    }
}
