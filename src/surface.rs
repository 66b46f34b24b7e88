//! Owned pixel surface.
//!
//! A [`Surface`] owns one padded pixel buffer laid out exactly like the pixel
//! array of a 24-bit BMP: rows of `row_stride` bytes, each row holding
//! `width` B, G, R triples followed by zero to three padding bytes so the
//! stride is a multiple of 4.
//!
//! Rows are kept in the order they appear in the file. The codec does not
//! flip rows, so buffer row 0 is the first row of the BMP pixel array (the
//! bottom row for a standard bottom-up BMP).

use alloc::vec::Vec;

use rgb::alt::BGR8;

use crate::error::BitmapError;
use crate::pixel::{BitDepth, PixelLayout};

/// Padding bytes needed after `row_bytes` to reach a multiple of 4.
#[inline]
pub(crate) fn row_padding_for(row_bytes: usize) -> usize {
    (4 - row_bytes % 4) % 4
}

/// In-memory image with BMP row layout.
///
/// Cloning copies the pixel buffer; no two surfaces ever share one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Surface {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) bits_per_pixel: u16,
    pub(crate) row_padding: usize,
    pub(crate) row_stride: usize,
    pub(crate) pixels: Vec<u8>,
}

impl Surface {
    /// The empty state: zero dimensions, zero depth, no buffer.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Allocate a zero-filled surface.
    ///
    /// Same precondition as [`Surface::reinitialize`].
    pub fn new(width: u32, height: u32, depth: BitDepth) -> Self {
        let mut surface = Self::empty();
        surface.reinitialize(width, height, depth);
        surface
    }

    /// Resize to `width` x `height`, discarding the old contents.
    ///
    /// Recomputes the row padding and stride and zero-fills the whole buffer.
    /// Any dimensions are accepted, including zero. `row_stride * height`
    /// must fit in the address space; this is not checked.
    pub fn reinitialize(&mut self, width: u32, height: u32, depth: BitDepth) {
        let row_bytes = depth.bytes_per_pixel() * width as usize;
        self.width = width;
        self.height = height;
        self.bits_per_pixel = depth.bits();
        self.row_padding = row_padding_for(row_bytes);
        self.row_stride = row_bytes + self.row_padding;
        self.pixels.clear();
        self.pixels.resize(self.row_stride * height as usize, 0);
    }

    /// Move the contents out, leaving `self` in the empty state.
    pub fn take(&mut self) -> Surface {
        core::mem::take(self)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// 24 for a sized surface, 0 for the empty state.
    pub fn bits_per_pixel(&self) -> u16 {
        self.bits_per_pixel
    }

    pub fn bit_depth(&self) -> Option<BitDepth> {
        BitDepth::from_bits(self.bits_per_pixel)
    }

    pub fn bytes_per_pixel(&self) -> usize {
        usize::from(self.bits_per_pixel / 8)
    }

    /// Bytes per row including padding. Always a multiple of 4.
    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    /// Padding bytes at the end of each row.
    pub fn row_padding(&self) -> usize {
        self.row_padding
    }

    /// True when the surface holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whole padded buffer, `row_stride * height` bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Byte offset of pixel (x, y): `bpp/8 * x + y * row_stride`.
    ///
    /// Not bounds checked. Callers must keep `x < width` and `y < height`
    /// before indexing with the result.
    #[inline]
    pub fn pixel_offset(&self, x: u32, y: u32) -> usize {
        self.bytes_per_pixel() * x as usize + y as usize * self.row_stride
    }

    #[inline]
    fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Pixel at (x, y), or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<BGR8> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let off = self.pixel_offset(x, y);
        let px = self.pixels.get(off..off + 3)?;
        Some(BGR8 {
            b: px[0],
            g: px[1],
            r: px[2],
        })
    }

    /// Write pixel (x, y). Returns `false` and does nothing outside the surface.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: BGR8) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let off = self.pixel_offset(x, y);
        match self.pixels.get_mut(off..off + 3) {
            Some(px) => {
                px.copy_from_slice(&[color.b, color.g, color.r]);
                true
            }
            None => false,
        }
    }

    /// Row `y` including its padding bytes.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.row_stride;
        self.pixels.get(start..start + self.row_stride)
    }

    /// Rows in buffer order, each `row_stride` bytes including padding.
    ///
    /// A zero-width surface has zero-length rows and yields none, whatever
    /// its height.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        let stride = self.row_stride;
        let height = if stride == 0 { 0 } else { self.height as usize };
        (0..height).map(move |y| &self.pixels[y * stride..(y + 1) * stride])
    }

    /// Zero every pixel channel. Padding bytes are left as they are.
    pub fn clear(&mut self) {
        let used = self.bytes_per_pixel() * self.width as usize;
        if used == 0 {
            return;
        }
        for y in 0..self.height as usize {
            let start = y * self.row_stride;
            self.pixels[start..start + used].fill(0);
        }
    }

    /// Build a 24-bit surface from a tightly packed 3-byte-per-pixel buffer.
    ///
    /// `pixels` is read row by row in the given order and must hold at least
    /// `width * height * 3` bytes.
    pub fn from_packed(
        pixels: &[u8],
        width: u32,
        height: u32,
        layout: PixelLayout,
    ) -> Result<Self, BitmapError> {
        let w = width as usize;
        let h = height as usize;
        let bpp = layout.bytes_per_pixel();
        let expected = w
            .checked_mul(h)
            .and_then(|wh| wh.checked_mul(bpp))
            .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
        if pixels.len() < expected {
            return Err(BitmapError::BufferTooSmall {
                needed: expected,
                actual: pixels.len(),
            });
        }

        let mut surface = Surface::new(width, height, BitDepth::Bgr24);
        if expected == 0 {
            return Ok(surface);
        }
        let stride = surface.row_stride;
        for (src_row, dst_row) in pixels[..expected]
            .chunks_exact(w * bpp)
            .zip(surface.pixels.chunks_exact_mut(stride))
        {
            for (src, dst) in src_row.chunks_exact(bpp).zip(dst_row.chunks_exact_mut(3)) {
                dst.copy_from_slice(&layout.to_bgr(src));
            }
        }
        Ok(surface)
    }

    /// Copy the pixels out as a tightly packed buffer, dropping row padding.
    pub fn to_packed(&self, layout: PixelLayout) -> Vec<u8> {
        let mut out =
            Vec::with_capacity(self.width as usize * self.height as usize * layout.bytes_per_pixel());
        let used = self.bytes_per_pixel() * self.width as usize;
        for row in self.rows() {
            for px in row[..used].chunks_exact(3) {
                out.extend_from_slice(&layout.bgr_to_layout(px));
            }
        }
        out
    }

    /// Copy into an [`imgref::ImgVec`] of typed BGR pixels.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<BGR8> {
        let used = self.bytes_per_pixel() * self.width as usize;
        let buf: Vec<BGR8> = self
            .rows()
            .flat_map(|row| {
                row[..used].chunks_exact(3).map(|px| BGR8 {
                    b: px[0],
                    g: px[1],
                    r: px[2],
                })
            })
            .collect();
        imgref::ImgVec::new(buf, self.width as usize, self.height as usize)
    }

    /// Build a 24-bit surface from an [`imgref::ImgRef`] of BGR pixels.
    ///
    /// The image dimensions must fit in `u32`.
    #[cfg(feature = "imgref")]
    pub fn from_imgref(img: imgref::ImgRef<'_, BGR8>) -> Result<Self, BitmapError> {
        let width = u32::try_from(img.width()).map_err(|_| BitmapError::DimensionsTooLarge {
            width: u32::MAX,
            height: u32::MAX,
        })?;
        let height = u32::try_from(img.height()).map_err(|_| BitmapError::DimensionsTooLarge {
            width,
            height: u32::MAX,
        })?;
        let mut surface = Surface::new(width, height, BitDepth::Bgr24);
        if surface.pixels.is_empty() {
            return Ok(surface);
        }
        let stride = surface.row_stride;
        for (y, row) in img.rows().enumerate() {
            let dst_row = &mut surface.pixels[y * stride..(y + 1) * stride];
            for (px, dst) in row.iter().zip(dst_row.chunks_exact_mut(3)) {
                dst.copy_from_slice(&[px.b, px.g, px.r]);
            }
        }
        Ok(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_is_padded_to_four_bytes() {
        for width in 0..64u32 {
            let s = Surface::new(width, 2, BitDepth::Bgr24);
            assert_eq!(s.row_stride() % 4, 0, "width {width}");
            assert!(s.row_stride() >= 3 * width as usize);
            assert_eq!(s.row_stride(), 3 * width as usize + s.row_padding());
            assert!(s.row_padding() < 4);
            assert_eq!(s.pixels().len(), s.row_stride() * 2);
        }
    }

    #[test]
    fn known_strides() {
        assert_eq!(Surface::new(1, 1, BitDepth::Bgr24).row_stride(), 4);
        assert_eq!(Surface::new(2, 1, BitDepth::Bgr24).row_stride(), 8);
        assert_eq!(Surface::new(3, 1, BitDepth::Bgr24).row_stride(), 12);
        assert_eq!(Surface::new(4, 1, BitDepth::Bgr24).row_stride(), 12);
        assert_eq!(Surface::new(5, 1, BitDepth::Bgr24).row_padding(), 1);
    }

    #[test]
    fn empty_state() {
        let s = Surface::empty();
        assert_eq!(s.width(), 0);
        assert_eq!(s.height(), 0);
        assert_eq!(s.bits_per_pixel(), 0);
        assert_eq!(s.row_stride(), 0);
        assert!(s.pixels().is_empty());
        assert!(s.is_empty());
        assert_eq!(s.bit_depth(), None);
    }

    #[test]
    fn zero_sized_reinitialize_is_accepted() {
        let mut s = Surface::new(0, 5, BitDepth::Bgr24);
        assert_eq!(s.row_stride(), 0);
        assert!(s.pixels().is_empty());
        s.reinitialize(7, 0, BitDepth::Bgr24);
        assert_eq!(s.row_stride(), 24);
        assert!(s.pixels().is_empty());
        assert_eq!(s.rows().count(), 0);
    }

    #[test]
    fn reinitialize_discards_contents() {
        let mut s = Surface::new(2, 2, BitDepth::Bgr24);
        s.pixels_mut().fill(0xAB);
        s.reinitialize(3, 1, BitDepth::Bgr24);
        assert_eq!(s.pixels(), &[0u8; 12]);
    }

    #[test]
    fn pixel_offset_matches_layout() {
        let s = Surface::new(5, 3, BitDepth::Bgr24);
        assert_eq!(s.row_stride(), 16);
        assert_eq!(s.pixel_offset(0, 0), 0);
        assert_eq!(s.pixel_offset(1, 0), 3);
        assert_eq!(s.pixel_offset(4, 2), 12 + 32);
        // Unchecked: out-of-range coordinates still produce an offset.
        assert_eq!(s.pixel_offset(5, 0), 15);
    }

    #[test]
    fn accessors_are_bounds_checked() {
        let mut s = Surface::new(2, 2, BitDepth::Bgr24);
        let c = BGR8 { b: 1, g: 2, r: 3 };
        assert!(s.set_pixel(1, 1, c));
        assert_eq!(s.pixel(1, 1), Some(c));
        assert_eq!(&s.pixels()[11..14], &[1, 2, 3]);
        assert!(!s.set_pixel(2, 0, c));
        assert!(!s.set_pixel(0, 2, c));
        assert_eq!(s.pixel(2, 0), None);
        assert_eq!(s.row(2), None);
        assert_eq!(s.row(1).map(<[u8]>::len), Some(8));
    }

    #[test]
    fn clone_is_deep() {
        let mut a = Surface::new(2, 1, BitDepth::Bgr24);
        let b = a.clone();
        a.pixels_mut()[0] = 9;
        assert_eq!(b.pixels()[0], 0);
        assert_ne!(a, b);
    }

    #[test]
    fn take_leaves_empty_state() {
        let mut a = Surface::new(3, 2, BitDepth::Bgr24);
        a.pixels_mut()[5] = 7;
        let b = a.take();
        assert_eq!(a, Surface::empty());
        assert_eq!(b.width(), 3);
        assert_eq!(b.pixels()[5], 7);
    }

    #[test]
    fn clear_keeps_padding() {
        let mut s = Surface::new(1, 2, BitDepth::Bgr24);
        s.pixels_mut().fill(0xFF);
        s.clear();
        assert_eq!(s.pixels(), &[0, 0, 0, 0xFF, 0, 0, 0, 0xFF]);
    }

    #[test]
    fn packed_rgb_import_export() {
        let rgb = [10u8, 20, 30, 40, 50, 60, 70, 80, 90];
        let s = Surface::from_packed(&rgb, 3, 1, PixelLayout::Rgb8).unwrap();
        assert_eq!(s.row_stride(), 12);
        assert_eq!(&s.pixels()[..9], &[30, 20, 10, 60, 50, 40, 90, 80, 70]);
        assert_eq!(s.to_packed(PixelLayout::Rgb8), rgb);
        assert_eq!(
            s.to_packed(PixelLayout::Bgr8),
            [30, 20, 10, 60, 50, 40, 90, 80, 70]
        );
    }

    #[test]
    fn packed_import_rejects_short_buffer() {
        let err = Surface::from_packed(&[0u8; 5], 2, 1, PixelLayout::Bgr8).unwrap_err();
        assert!(matches!(
            err,
            BitmapError::BufferTooSmall {
                needed: 6,
                actual: 5
            }
        ));
    }

    #[cfg(feature = "imgref")]
    #[test]
    fn imgref_roundtrip() {
        let px = |v: u8| BGR8 { b: v, g: v + 1, r: v + 2 };
        let img = imgref::ImgVec::new(vec![px(0), px(10), px(20), px(30)], 2, 2);
        let s = Surface::from_imgref(img.as_ref()).unwrap();
        assert_eq!(s.pixel(1, 1), Some(px(30)));
        assert_eq!(s.to_imgvec().buf().as_slice(), img.buf().as_slice());
    }
}
