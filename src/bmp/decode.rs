//! 24-bit uncompressed BMP decoder.
//!
//! Validation runs in a fixed order and stops at the first fatal problem.
//! Nothing is written to the target surface until every check has passed and
//! the pixel range is known to be inside the input.

use alloc::vec::Vec;
use core::fmt;

use log::{trace, warn};

use super::header::{HEADERS_SIZE, INFO_HEADER_SIZE, InfoHeader, MAGIC, parse_headers};
use crate::error::{FormatError, SizeField};
use crate::pixel::BitDepth;
use crate::surface::{Surface, row_padding_for};

/// Non-fatal oddities found while decoding. They are logged and never abort.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum BmpWarning {
    /// `reserved1` (index 1) or `reserved2` (index 2) is non-zero.
    ReservedNonZero { index: u8, value: u16 },
    /// Horizontal resolution is set; it is ignored.
    HorizontalResolution(u32),
    /// Vertical resolution is set; it is ignored.
    VerticalResolution(u32),
    /// Palette color count is set; palettes are not used at 24-bit.
    PaletteColors(u32),
    /// Important color count is set; ignored.
    ImportantColors(u32),
}

impl fmt::Display for BmpWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReservedNonZero { index, value } => {
                write!(f, "reserved field {index} is non-zero ({value}), ignored")
            }
            Self::HorizontalResolution(v) => {
                write!(f, "ignoring non-zero horizontal resolution ({v} px/m)")
            }
            Self::VerticalResolution(v) => {
                write!(f, "ignoring non-zero vertical resolution ({v} px/m)")
            }
            Self::PaletteColors(v) => write!(f, "ignoring non-zero palette color count ({v})"),
            Self::ImportantColors(v) => write!(f, "ignoring non-zero important color count ({v})"),
        }
    }
}

/// A BMP whose headers passed every check, borrowing its pixel payload.
#[derive(Debug)]
pub(crate) struct ValidatedBmp<'a> {
    pub info: InfoHeader,
    pub row_stride: usize,
    pub payload: &'a [u8],
    pub warnings: Vec<BmpWarning>,
}

impl ValidatedBmp<'_> {
    pub fn width(&self) -> u32 {
        self.info.width
    }

    pub fn height(&self) -> u32 {
        self.info.height
    }

    /// Resize `target` and copy the rows in file order.
    pub fn write_into(&self, target: &mut Surface) {
        target.reinitialize(self.info.width, self.info.height, BitDepth::Bgr24);
        if self.payload.is_empty() {
            return;
        }
        let stride = self.row_stride;
        for (dst, src) in target
            .pixels
            .chunks_exact_mut(stride)
            .zip(self.payload.chunks_exact(stride))
        {
            dst.copy_from_slice(src);
        }
    }
}

fn push_warning(warnings: &mut Vec<BmpWarning>, warning: BmpWarning) {
    warn!("BMP: {warning}");
    warnings.push(warning);
}

/// Run every header check and locate the pixel payload.
pub(crate) fn validate(data: &[u8]) -> Result<ValidatedBmp<'_>, FormatError> {
    let (file, info) = parse_headers(data)?;
    let mut warnings = Vec::new();

    if file.magic != MAGIC {
        return Err(FormatError::BadMagic(file.magic));
    }

    if file.file_size as usize != data.len() {
        return Err(FormatError::SizeMismatch {
            declared: file.file_size,
            actual: data.len(),
        });
    }

    if file.reserved1 != 0 {
        push_warning(
            &mut warnings,
            BmpWarning::ReservedNonZero {
                index: 1,
                value: file.reserved1,
            },
        );
    }
    if file.reserved2 != 0 {
        push_warning(
            &mut warnings,
            BmpWarning::ReservedNonZero {
                index: 2,
                value: file.reserved2,
            },
        );
    }

    if info.header_size as usize != INFO_HEADER_SIZE {
        return Err(FormatError::HeaderSizeInvalid(info.header_size));
    }
    if info.planes != 1 {
        return Err(FormatError::PlanesInvalid(info.planes));
    }
    let depth = BitDepth::from_bits(info.bits_per_pixel)
        .ok_or(FormatError::BitDepthUnsupported(info.bits_per_pixel))?;

    trace!("Width: {}", info.width);
    trace!("Height: {}", info.height);
    trace!("Bit depth: {}", info.bits_per_pixel);

    // u64 keeps the arithmetic exact for any 32-bit width/height on every target.
    let row_bytes = depth.bytes_per_pixel() as u64 * u64::from(info.width);
    let stride = row_bytes + row_padding_for((row_bytes % 4) as usize) as u64;
    let expected_pixel_bytes = stride.saturating_mul(u64::from(info.height));
    let expected_file_size = expected_pixel_bytes.saturating_add(HEADERS_SIZE as u64);

    if u64::from(file.file_size) != expected_file_size {
        return Err(FormatError::SizeInconsistent {
            field: SizeField::FileSize,
            declared: file.file_size,
            expected: expected_file_size,
        });
    }

    if info.compression != 0 {
        return Err(FormatError::Compressed(info.compression));
    }

    if u64::from(info.image_data_size) != expected_pixel_bytes {
        return Err(FormatError::SizeInconsistent {
            field: SizeField::ImageDataSize,
            declared: info.image_data_size,
            expected: expected_pixel_bytes,
        });
    }

    if info.x_pixels_per_meter != 0 {
        push_warning(
            &mut warnings,
            BmpWarning::HorizontalResolution(info.x_pixels_per_meter),
        );
    }
    if info.y_pixels_per_meter != 0 {
        push_warning(
            &mut warnings,
            BmpWarning::VerticalResolution(info.y_pixels_per_meter),
        );
    }
    if info.colors_used != 0 {
        push_warning(&mut warnings, BmpWarning::PaletteColors(info.colors_used));
    }
    if info.colors_important != 0 {
        push_warning(
            &mut warnings,
            BmpWarning::ImportantColors(info.colors_important),
        );
    }

    // expected_file_size equals data.len() here, so the payload size fits usize.
    let pixel_bytes = data.len() - HEADERS_SIZE;
    let row_stride = usize::try_from(stride).map_err(|_| FormatError::SizeInconsistent {
        field: SizeField::FileSize,
        declared: file.file_size,
        expected: expected_file_size,
    })?;

    let offset = file.pixel_data_offset as usize;
    let end = offset.saturating_add(pixel_bytes);
    let payload = data.get(offset..end).ok_or(FormatError::Truncated {
        needed: end,
        actual: data.len(),
    })?;

    Ok(ValidatedBmp {
        info,
        row_stride,
        payload,
        warnings,
    })
}

/// Decode into `target`, returning the warnings seen.
///
/// On error `target` keeps its previous contents.
pub fn decode_into(data: &[u8], target: &mut Surface) -> Result<Vec<BmpWarning>, FormatError> {
    let bmp = validate(data)?;
    bmp.write_into(target);
    Ok(bmp.warnings)
}

/// Decode a complete BMP file into a new surface, with the warnings seen.
pub fn decode_with_warnings(data: &[u8]) -> Result<(Surface, Vec<BmpWarning>), FormatError> {
    let mut surface = Surface::empty();
    let warnings = decode_into(data, &mut surface)?;
    Ok((surface, warnings))
}

/// Decode a complete BMP file into a new surface.
///
/// Warnings are logged through the `log` facade and otherwise dropped.
pub fn decode(data: &[u8]) -> Result<Surface, FormatError> {
    decode_with_warnings(data).map(|(surface, _)| surface)
}
