use alloc::string::String;
use core::fmt;

use crate::pixel::ImageFormat;

/// Which declared size field disagreed with the image dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeField {
    /// `file size` in the file header.
    FileSize,
    /// `image data size` in the info header.
    ImageDataSize,
}

impl fmt::Display for SizeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeField::FileSize => f.write_str("file size field"),
            SizeField::ImageDataSize => f.write_str("image data size field"),
        }
    }
}

/// Fatal BMP header validation failures.
///
/// Decoding stops at the first of these; the target surface is never touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum FormatError {
    #[error("input too short: need {needed} bytes, got {actual}")]
    Truncated { needed: usize, actual: usize },

    #[error("bad magic bytes {0:02x?}, expected \"BM\"")]
    BadMagic([u8; 2]),

    #[error("file size field ({declared}) does not match input length ({actual})")]
    SizeMismatch { declared: u32, actual: usize },

    #[error("info header size is {0}, expected 40")]
    HeaderSizeInvalid(u32),

    #[error("planes field is {0}, expected 1")]
    PlanesInvalid(u16),

    #[error("bit depth {0} unsupported, only 24-bit BMP is supported")]
    BitDepthUnsupported(u16),

    #[error("compression method {0} unsupported")]
    Compressed(u32),

    #[error("{field} ({declared}) inconsistent with image dimensions (expected {expected})")]
    SizeInconsistent {
        field: SizeField,
        declared: u32,
        expected: u64,
    },
}

/// Errors from surface decoding, encoding and file access.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitmapError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("surface has no bit depth (empty state)")]
    EmptySurface,

    #[error("image format {0:?} is recognised but not supported")]
    UnsupportedFormat(ImageFormat),

    #[error("cannot detect image format from file extension {0:?}")]
    UnrecognizedExtension(String),
}
