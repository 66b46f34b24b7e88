//! Load and save by file extension.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use log::warn;

use crate::decode::DecodeRequest;
use crate::encode::EncodeRequest;
use crate::error::BitmapError;
use crate::pixel::ImageFormat;
use crate::surface::Surface;

fn extension_lossy(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Load an image, choosing the decoder from the file extension.
///
/// `.bmp` is decoded; `.png` is recognised but unsupported; anything else
/// is rejected without opening the file.
pub fn load(path: impl AsRef<Path>) -> Result<Surface, BitmapError> {
    let path = path.as_ref();
    match ImageFormat::from_path(path) {
        Some(ImageFormat::Bmp) => {
            let data = std::fs::read(path)?;
            Ok(DecodeRequest::new(&data).decode()?.into_surface())
        }
        Some(format) => Err(BitmapError::UnsupportedFormat(format)),
        None => Err(BitmapError::UnrecognizedExtension(extension_lossy(path))),
    }
}

/// Save an image, choosing the encoder from the file extension.
///
/// Unknown extensions fall back to BMP. A failed write can leave a
/// truncated file behind.
pub fn save(surface: &Surface, path: impl AsRef<Path>) -> Result<(), BitmapError> {
    let path = path.as_ref();
    match ImageFormat::from_path(path) {
        Some(ImageFormat::Bmp) => {}
        Some(format) => return Err(BitmapError::UnsupportedFormat(format)),
        None => warn!(
            "cannot detect image format from {}, writing .{}",
            path.display(),
            ImageFormat::Bmp.extension()
        ),
    }
    let request = EncodeRequest::bmp();
    request.check(surface)?;
    let file = File::create(path)?;
    request.write_to(surface, BufWriter::new(file))
}
