use crate::error::BitmapError;

/// Resource limits applied by [`crate::DecodeRequest`].
///
/// Checked after the headers validate and before the surface is allocated.
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum size of the surface buffer, row padding included.
    pub max_memory_bytes: Option<u64>,
}

fn exceeded(what: &str, value: u64, limit: u64) -> BitmapError {
    BitmapError::LimitExceeded(alloc::format!("{what} {value} exceeds limit {limit}"))
}

impl Limits {
    /// Limit width and height only.
    pub fn dimensions(max_width: u64, max_height: u64) -> Self {
        Self {
            max_width: Some(max_width),
            max_height: Some(max_height),
            ..Self::default()
        }
    }

    /// Check a surface of `width` x `height` needing `buffer_bytes` of storage.
    pub(crate) fn check_surface(
        &self,
        width: u32,
        height: u32,
        buffer_bytes: u64,
    ) -> Result<(), BitmapError> {
        let (width, height) = (u64::from(width), u64::from(height));
        if let Some(max) = self.max_width.filter(|&max| width > max) {
            return Err(exceeded("width", width, max));
        }
        if let Some(max) = self.max_height.filter(|&max| height > max) {
            return Err(exceeded("height", height, max));
        }
        let pixels = width * height;
        if let Some(max) = self.max_pixels.filter(|&max| pixels > max) {
            return Err(exceeded("pixel count", pixels, max));
        }
        if let Some(max) = self.max_memory_bytes.filter(|&max| buffer_bytes > max) {
            return Err(exceeded("buffer size", buffer_bytes, max));
        }
        Ok(())
    }
}
