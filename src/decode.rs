use alloc::vec::Vec;

use crate::bmp::{self, BmpWarning};
use crate::error::BitmapError;
use crate::limits::Limits;
use crate::surface::Surface;

/// Decoded surface plus the non-fatal warnings raised while reading it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeOutput {
    pub surface: Surface,
    pub warnings: Vec<BmpWarning>,
}

impl DecodeOutput {
    /// Drop the warnings.
    pub fn into_surface(self) -> Surface {
        self.surface
    }
}

/// BMP decode with optional resource limits.
///
/// ```no_run
/// use zensurface::{DecodeRequest, Limits};
///
/// let data: &[u8] = &[]; // your BMP bytes
/// let limits = Limits::dimensions(4096, 4096);
/// let out = DecodeRequest::new(data).with_limits(&limits).decode()?;
/// for w in &out.warnings {
///     eprintln!("{w}");
/// }
/// # Ok::<(), zensurface::BitmapError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode into a new surface.
    pub fn decode(self) -> Result<DecodeOutput, BitmapError> {
        let mut surface = Surface::empty();
        let warnings = self.decode_into(&mut surface)?;
        Ok(DecodeOutput { surface, warnings })
    }

    /// Decode into an existing surface.
    ///
    /// `target` is only touched once the headers validate and the limits
    /// pass; on any error it keeps its previous contents.
    pub fn decode_into(self, target: &mut Surface) -> Result<Vec<BmpWarning>, BitmapError> {
        let validated = bmp::validate(self.data)?;
        if let Some(limits) = self.limits {
            limits.check_surface(
                validated.width(),
                validated.height(),
                validated.payload.len() as u64,
            )?;
        }
        validated.write_into(target);
        Ok(validated.warnings)
    }
}
