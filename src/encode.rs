use alloc::vec::Vec;
use std::io::Write;

use crate::bmp;
use crate::error::BitmapError;
use crate::surface::Surface;

/// BMP encode with size checks.
///
/// [`bmp::encode`] trusts the surface; this request first makes sure the
/// surface has a bit depth and that the file fits the format's 32-bit size
/// fields.
#[derive(Clone, Copy, Debug, Default)]
pub struct EncodeRequest {
    _private: (),
}

impl EncodeRequest {
    /// Encode as 24-bit uncompressed BMP.
    pub fn bmp() -> Self {
        Self::default()
    }

    pub(crate) fn check(&self, surface: &Surface) -> Result<(), BitmapError> {
        if surface.bit_depth().is_none() {
            return Err(BitmapError::EmptySurface);
        }
        if bmp::file_size_for(surface.row_stride(), surface.height()).is_none() {
            return Err(BitmapError::DimensionsTooLarge {
                width: surface.width(),
                height: surface.height(),
            });
        }
        Ok(())
    }

    /// Encode to an in-memory file.
    pub fn encode(&self, surface: &Surface) -> Result<Vec<u8>, BitmapError> {
        self.check(surface)?;
        Ok(bmp::encode(surface))
    }

    /// Encode straight to `writer`. A failed write may leave partial output.
    pub fn write_to<W: Write>(&self, surface: &Surface, writer: W) -> Result<(), BitmapError> {
        self.check(surface)?;
        bmp::write_to(surface, writer)?;
        Ok(())
    }
}
