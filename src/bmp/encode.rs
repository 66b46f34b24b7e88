//! BMP encoder: headers plus the surface rows, written in buffer order.

use alloc::vec::Vec;
use std::io::Write;

use super::header::{FileHeader, HEADERS_SIZE, INFO_HEADER_SIZE, InfoHeader, MAGIC};
use crate::surface::Surface;

/// Size of the pixel array for `surface`, in bytes.
pub(crate) fn pixel_data_size(surface: &Surface) -> usize {
    surface.row_stride() * surface.height() as usize
}

/// Total file size for rows of `row_stride` bytes, or `None` when it does
/// not fit the format's 32-bit size fields.
pub(crate) fn file_size_for(row_stride: usize, height: u32) -> Option<u32> {
    (row_stride as u64)
        .checked_mul(u64::from(height))
        .and_then(|n| n.checked_add(HEADERS_SIZE as u64))
        .and_then(|n| u32::try_from(n).ok())
}

/// Headers describing `surface`.
///
/// The size fields are 32-bit in the format; surfaces whose encoded size
/// exceeds `u32::MAX` are rejected earlier by [`crate::EncodeRequest`].
/// Calling this directly with such a surface truncates the size fields.
pub fn headers_for(surface: &Surface) -> (FileHeader, InfoHeader) {
    debug_assert!(
        file_size_for(surface.row_stride(), surface.height()).is_some(),
        "{}x{} surface does not fit BMP size fields",
        surface.width(),
        surface.height()
    );
    let pixel_data_size = pixel_data_size(surface);
    let file = FileHeader {
        magic: MAGIC,
        file_size: (HEADERS_SIZE + pixel_data_size) as u32,
        reserved1: 0,
        reserved2: 0,
        pixel_data_offset: HEADERS_SIZE as u32,
    };
    let info = InfoHeader {
        header_size: INFO_HEADER_SIZE as u32,
        width: surface.width(),
        height: surface.height(),
        planes: 1,
        bits_per_pixel: surface.bits_per_pixel(),
        compression: 0,
        image_data_size: pixel_data_size as u32,
        x_pixels_per_meter: 0,
        y_pixels_per_meter: 0,
        colors_used: 0,
        colors_important: 0,
    };
    (file, info)
}

fn header_bytes(surface: &Surface) -> Vec<u8> {
    let (file, info) = headers_for(surface);
    let mut out = Vec::with_capacity(HEADERS_SIZE);
    file.write(&mut out);
    info.write(&mut out);
    out
}

/// Encode `surface` as a complete BMP file.
///
/// Rows go out in buffer order, padding bytes included, so decoding the
/// result reproduces the surface exactly.
pub fn encode(surface: &Surface) -> Vec<u8> {
    let mut out = header_bytes(surface);
    out.reserve_exact(pixel_data_size(surface));
    for row in surface.rows() {
        out.extend_from_slice(row);
    }
    out
}

/// Stream `surface` as BMP to `writer`.
///
/// On failure the writer may hold a partial file.
pub fn write_to<W: Write>(surface: &Surface, mut writer: W) -> std::io::Result<()> {
    writer.write_all(&header_bytes(surface))?;
    for row in surface.rows() {
        writer.write_all(row)?;
    }
    writer.flush()
}
