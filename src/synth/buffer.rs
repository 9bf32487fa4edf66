use crate::foundation::{
    color::{Argb32, TRANSPARENT, from_rgba8, to_rgba8},
    error::{SynthError, SynthResult},
};

/// Row-major buffer of packed straight-alpha ARGB pixels.
///
/// Width and height are fixed at construction and always non-zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<Argb32>,
}

impl PixelBuffer {
    /// Fully transparent buffer of `width x height` pixels.
    pub fn new(width: u32, height: u32) -> SynthResult<Self> {
        Self::filled(width, height, TRANSPARENT)
    }

    pub fn filled(width: u32, height: u32, color: Argb32) -> SynthResult<Self> {
        let len = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![color; len],
        })
    }

    /// Wrap existing pixels; `data.len()` must equal `width * height`.
    pub fn from_pixels(width: u32, height: u32, data: Vec<Argb32>) -> SynthResult<Self> {
        let len = pixel_count(width, height)?;
        if data.len() != len {
            return Err(SynthError::dimension_mismatch(format!(
                "{width}x{height} buffer needs {len} pixels, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn pixels(&self) -> &[Argb32] {
        &self.data
    }

    pub fn pixels_mut(&mut self) -> &mut [Argb32] {
        &mut self.data
    }

    pub fn into_pixels(self) -> Vec<Argb32> {
        self.data
    }

    pub fn same_size(&self, other: &PixelBuffer) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Linear index of the pixel at column `x`, row `y`.
    pub fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Argb32> {
        self.index_of(x, y).map(|i| self.data[i])
    }

    /// Returns `false` when `(x, y)` lies outside the buffer.
    pub fn set(&mut self, x: u32, y: u32, color: Argb32) -> bool {
        match self.index_of(x, y) {
            Some(i) => {
                self.data[i] = color;
                true
            }
            None => false,
        }
    }

    pub fn fill(&mut self, color: Argb32) {
        self.data.fill(color);
    }

    /// One row of pixels, left to right.
    pub fn row(&self, y: u32) -> Option<&[Argb32]> {
        if y >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = y as usize * w;
        Some(&self.data[start..start + w])
    }

    /// Straight RGBA8 copy for image encoders.
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        let mut out = image::RgbaImage::new(self.width, self.height);
        for (dst, &src) in out.pixels_mut().zip(self.data.iter()) {
            *dst = image::Rgba(to_rgba8(src));
        }
        out
    }

    pub fn from_rgba_image(img: &image::RgbaImage) -> SynthResult<Self> {
        let data = img.pixels().map(|p| from_rgba8(p.0)).collect();
        Self::from_pixels(img.width(), img.height(), data)
    }
}

/// Number of pixels in a `width x height` buffer, rejecting empty or unaddressable sizes.
pub fn pixel_count(width: u32, height: u32) -> SynthResult<usize> {
    if width == 0 || height == 0 {
        return Err(SynthError::invalid_dimension(format!(
            "width and height must be > 0, got {width}x{height}"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| {
            SynthError::invalid_dimension(format!("{width}x{height} exceeds addressable memory"))
        })
}

#[cfg(test)]
#[path = "../../tests/unit/synth/buffer.rs"]
mod tests;
