//! BITMAPFILEHEADER and BITMAPINFOHEADER, read and written field by field.
//!
//! All multi-byte fields are little-endian. The structs are plain Rust
//! values; their on-disk form never depends on in-memory layout.

use alloc::vec::Vec;

use crate::error::FormatError;

/// Size of the file header on disk.
pub const FILE_HEADER_SIZE: usize = 14;
/// Size of the BITMAPINFOHEADER on disk.
pub const INFO_HEADER_SIZE: usize = 40;
/// Both headers; also the pixel data offset this codec writes.
pub const HEADERS_SIZE: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;
/// `"BM"`.
pub const MAGIC: [u8; 2] = *b"BM";

// ── Little-endian cursor over a fixed header ───────────────────────────

struct Cursor<'a, const N: usize> {
    data: &'a [u8; N],
    pos: usize,
}

impl<'a, const N: usize> Cursor<'a, N> {
    fn new(data: &'a [u8; N]) -> Self {
        Self { data, pos: 0 }
    }

    fn read_fixed_bytes<const M: usize>(&mut self) -> [u8; M] {
        let mut buf = [0u8; M];
        buf.copy_from_slice(&self.data[self.pos..self.pos + M]);
        self.pos += M;
        buf
    }

    fn get_u16_le(&mut self) -> u16 {
        u16::from_le_bytes(self.read_fixed_bytes())
    }

    fn get_u32_le(&mut self) -> u32 {
        u32::from_le_bytes(self.read_fixed_bytes())
    }
}

// ── File header ─────────────────────────────────────────────────────

/// The 14-byte file header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    pub magic: [u8; 2],
    /// Total file size in bytes.
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    /// Offset of the pixel array from the start of the file.
    pub pixel_data_offset: u32,
}

impl FileHeader {
    pub fn parse(bytes: &[u8; FILE_HEADER_SIZE]) -> Self {
        let mut c = Cursor::new(bytes);
        Self {
            magic: c.read_fixed_bytes(),
            file_size: c.get_u32_le(),
            reserved1: c.get_u16_le(),
            reserved2: c.get_u16_le(),
            pixel_data_offset: c.get_u32_le(),
        }
    }

    pub fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.magic);
        out.extend_from_slice(&self.file_size.to_le_bytes());
        out.extend_from_slice(&self.reserved1.to_le_bytes());
        out.extend_from_slice(&self.reserved2.to_le_bytes());
        out.extend_from_slice(&self.pixel_data_offset.to_le_bytes());
    }
}

// ── Info header ─────────────────────────────────────────────────────

/// The 40-byte BITMAPINFOHEADER.
///
/// Width and height are signed in the BMP format but are read here as
/// unsigned; a negative (top-down) height shows up as a huge value and
/// fails the size checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    /// Must be 40.
    pub header_size: u32,
    pub width: u32,
    pub height: u32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_data_size: u32,
    pub x_pixels_per_meter: u32,
    pub y_pixels_per_meter: u32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl InfoHeader {
    pub fn parse(bytes: &[u8; INFO_HEADER_SIZE]) -> Self {
        let mut c = Cursor::new(bytes);
        Self {
            header_size: c.get_u32_le(),
            width: c.get_u32_le(),
            height: c.get_u32_le(),
            planes: c.get_u16_le(),
            bits_per_pixel: c.get_u16_le(),
            compression: c.get_u32_le(),
            image_data_size: c.get_u32_le(),
            x_pixels_per_meter: c.get_u32_le(),
            y_pixels_per_meter: c.get_u32_le(),
            colors_used: c.get_u32_le(),
            colors_important: c.get_u32_le(),
        }
    }

    pub fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.header_size.to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&self.planes.to_le_bytes());
        out.extend_from_slice(&self.bits_per_pixel.to_le_bytes());
        out.extend_from_slice(&self.compression.to_le_bytes());
        out.extend_from_slice(&self.image_data_size.to_le_bytes());
        out.extend_from_slice(&self.x_pixels_per_meter.to_le_bytes());
        out.extend_from_slice(&self.y_pixels_per_meter.to_le_bytes());
        out.extend_from_slice(&self.colors_used.to_le_bytes());
        out.extend_from_slice(&self.colors_important.to_le_bytes());
    }
}

/// Read both headers from the start of `data`.
///
/// Only the length is checked here; field validation is the decoder's job.
pub fn parse_headers(data: &[u8]) -> Result<(FileHeader, InfoHeader), FormatError> {
    let truncated = FormatError::Truncated {
        needed: HEADERS_SIZE,
        actual: data.len(),
    };
    let file: &[u8; FILE_HEADER_SIZE] = data
        .get(..FILE_HEADER_SIZE)
        .and_then(|s| s.try_into().ok())
        .ok_or(truncated)?;
    let info: &[u8; INFO_HEADER_SIZE] = data
        .get(FILE_HEADER_SIZE..HEADERS_SIZE)
        .and_then(|s| s.try_into().ok())
        .ok_or(truncated)?;
    Ok((FileHeader::parse(file), InfoHeader::parse(info)))
}
