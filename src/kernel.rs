//! Bitwise pixel kernels, translate and resize on [`Surface`].
//!
//! Kernels touch pixel channels only; row padding is never read or written.

use rgb::alt::BGR8;

use crate::pixel::BitDepth;
use crate::surface::Surface;

/// Channel-wise combining operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KernelMode {
    And,
    Or,
    Xor,
}

impl KernelMode {
    #[inline]
    pub fn apply(self, dst: u8, src: u8) -> u8 {
        match self {
            Self::And => dst & src,
            Self::Or => dst | src,
            Self::Xor => dst ^ src,
        }
    }
}

impl Surface {
    /// Combine every pixel with `color` in place.
    pub fn rgb_filter(&mut self, mode: KernelMode, color: BGR8) {
        let bgr = [color.b, color.g, color.r];
        let used = self.bytes_per_pixel() * self.width as usize;
        if used == 0 {
            return;
        }
        for y in 0..self.height as usize {
            let start = y * self.row_stride;
            for px in self.pixels[start..start + used].chunks_exact_mut(3) {
                for (c, k) in px.iter_mut().zip(bgr) {
                    *c = mode.apply(*c, k);
                }
            }
        }
    }

    pub fn rgb_filter_and(&mut self, r: u8, g: u8, b: u8) {
        self.rgb_filter(KernelMode::And, BGR8 { b, g, r });
    }

    pub fn rgb_filter_or(&mut self, r: u8, g: u8, b: u8) {
        self.rgb_filter(KernelMode::Or, BGR8 { b, g, r });
    }

    pub fn rgb_filter_xor(&mut self, r: u8, g: u8, b: u8) {
        self.rgb_filter(KernelMode::Xor, BGR8 { b, g, r });
    }

    /// Combine with `other` over the overlapping region only.
    ///
    /// Pixel (x, y) is updated for `x < min(width, other.width)` and
    /// `y < min(height, other.height)`. Each surface is addressed through its
    /// own stride, so differing widths line up by coordinate. No resizing.
    pub fn combine(&mut self, other: &Surface, mode: KernelMode) {
        if self.bit_depth().is_none() || other.bit_depth().is_none() {
            return;
        }
        let w = self.width.min(other.width) as usize;
        let h = self.height.min(other.height);
        let used = self.bytes_per_pixel() * w;
        if used == 0 {
            return;
        }
        for y in 0..h {
            let dst_start = self.pixel_offset(0, y);
            let src_start = other.pixel_offset(0, y);
            let dst = &mut self.pixels[dst_start..dst_start + used];
            let src = &other.pixels[src_start..src_start + used];
            for (d, s) in dst.iter_mut().zip(src) {
                *d = mode.apply(*d, *s);
            }
        }
    }

    pub fn and(&mut self, other: &Surface) {
        self.combine(other, KernelMode::And);
    }

    pub fn or(&mut self, other: &Surface) {
        self.combine(other, KernelMode::Or);
    }

    pub fn xor(&mut self, other: &Surface) {
        self.combine(other, KernelMode::Xor);
    }

    /// Shift the image by (dx, dy) without wrapping.
    ///
    /// Pixel (x, y) takes the old pixel (x - dx, y - dy) when that lies inside
    /// the surface and is zero otherwise.
    pub fn translate(&mut self, dx: i64, dy: i64) {
        let Some(depth) = self.bit_depth() else {
            return;
        };
        let mut scratch = Surface::new(self.width, self.height, depth);
        let (w, h) = (i64::from(self.width), i64::from(self.height));

        // Destination columns whose source column x - dx is in range.
        let x0 = dx.clamp(0, w);
        let x1 = w.saturating_add(dx).clamp(0, w);
        if x0 < x1 {
            let bpp = depth.bytes_per_pixel();
            let len = (x1 - x0) as usize * bpp;
            for y in 0..h {
                let sy = y.saturating_sub(dy);
                if !(0..h).contains(&sy) {
                    continue;
                }
                let dst = scratch.pixel_offset(x0 as u32, y as u32);
                let src = self.pixel_offset((x0 - dx) as u32, sy as u32);
                scratch.pixels[dst..dst + len].copy_from_slice(&self.pixels[src..src + len]);
            }
        }

        *self = scratch;
    }

    /// Nearest-neighbour resample to `width` x `height`.
    ///
    /// Source pixel for (x, y) is `(x * src_w / width, y * src_h / height)`.
    /// An empty source yields an all-zero surface. A zero-sized target
    /// does no per-pixel work.
    pub fn resized(&self, width: u32, height: u32) -> Surface {
        let depth = self.bit_depth().unwrap_or(BitDepth::Bgr24);
        let mut out = Surface::new(width, height, depth);
        if out.is_empty() || self.is_empty() || self.bit_depth().is_none() {
            return out;
        }
        let bpp = depth.bytes_per_pixel();
        let (sw, sh) = (u64::from(self.width), u64::from(self.height));
        for y in 0..height {
            let sy = (u64::from(y) * sh / u64::from(height)) as u32;
            for x in 0..width {
                let sx = (u64::from(x) * sw / u64::from(width)) as u32;
                let src = self.pixel_offset(sx, sy);
                let dst = out.pixel_offset(x, y);
                out.pixels[dst..dst + bpp].copy_from_slice(&self.pixels[src..src + bpp]);
            }
        }
        out
    }

    /// Resize in place; see [`Surface::resized`].
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = self.resized(width, height);
    }
}
