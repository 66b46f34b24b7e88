//! 24-bit uncompressed BMP codec.
//!
//! [`decode`] turns a complete file into a [`Surface`]; [`encode`] is its
//! exact inverse. Rows are copied in file order in both directions, with no
//! vertical flip.

mod decode;
mod encode;
mod header;

pub use decode::{BmpWarning, decode, decode_into, decode_with_warnings};
pub use encode::{encode, headers_for, write_to};
pub use header::{
    FILE_HEADER_SIZE, FileHeader, HEADERS_SIZE, INFO_HEADER_SIZE, InfoHeader, MAGIC,
    parse_headers,
};

pub(crate) use decode::validate;
pub(crate) use encode::file_size_for;

use alloc::vec::Vec;
use std::io::Read;

use crate::error::BitmapError;
use crate::surface::Surface;

/// Read a whole BMP stream and decode it.
pub fn read_from<R: Read>(mut reader: R) -> Result<Surface, BitmapError> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    Ok(decode(&data)?)
}
