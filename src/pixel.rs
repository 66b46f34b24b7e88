use std::path::Path;

/// Image format detected from a file extension.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// BMP (Windows bitmap), 24-bit uncompressed.
    Bmp,
    /// PNG. Recognised so callers get a clear error, never decoded.
    Png,
}

impl ImageFormat {
    /// Match an extension (without the dot), ignoring ASCII case.
    pub fn from_extension(ext: &str) -> Option<Self> {
        if ext.eq_ignore_ascii_case("bmp") {
            Some(Self::Bmp)
        } else if ext.eq_ignore_ascii_case("png") {
            Some(Self::Png)
        } else {
            None
        }
    }

    /// Match the extension of `path`. Paths without an extension give `None`.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Canonical lowercase extension.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Bmp => "bmp",
            Self::Png => "png",
        }
    }
}

/// Bit depth of a surface.
///
/// Only 24-bit BGR is supported end to end.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BitDepth {
    /// 3 bytes per pixel, stored B, G, R.
    #[default]
    Bgr24,
}

impl BitDepth {
    /// Value of the BMP `bits per pixel` field.
    pub fn bits(&self) -> u16 {
        match self {
            Self::Bgr24 => 24,
        }
    }

    /// Bytes per pixel.
    pub fn bytes_per_pixel(&self) -> usize {
        usize::from(self.bits() / 8)
    }

    /// Map a `bits per pixel` field to a supported depth.
    pub fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            24 => Some(Self::Bgr24),
            _ => None,
        }
    }
}

/// Channel order of a tightly packed (unpadded) 3-byte pixel buffer.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLayout {
    /// 3 channels, 8-bit RGB.
    Rgb8,
    /// 3 channels, 8-bit BGR (BMP native order).
    Bgr8,
}

impl PixelLayout {
    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Rgb8 | Self::Bgr8 => 3,
        }
    }

    /// Reorder one packed pixel into B, G, R.
    pub(crate) fn to_bgr(self, px: &[u8]) -> [u8; 3] {
        match self {
            Self::Rgb8 => [px[2], px[1], px[0]],
            Self::Bgr8 => [px[0], px[1], px[2]],
        }
    }

    /// Reorder one B, G, R pixel into this layout.
    pub(crate) fn bgr_to_layout(self, bgr: &[u8]) -> [u8; 3] {
        match self {
            Self::Rgb8 => [bgr[2], bgr[1], bgr[0]],
            Self::Bgr8 => [bgr[0], bgr[1], bgr[2]],
        }
    }
}
