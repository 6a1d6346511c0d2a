//! Pixel buffers with an explicit extent.

use crate::color::Color;
use crate::region::Region;

/// Number of channels per pixel in the negotiated buffer format.
pub const CHANNELS: usize = 4;

/// A 2D RGBA float pixel buffer anchored at an arbitrary origin.
///
/// Unlike an origin-at-zero texture, the buffer carries its extent so
/// pixels are addressed in absolute image coordinates. This matches the
/// host pipeline's buffer model, where a filter may be handed any window
/// of a larger image.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    extent: Region,
    data: Vec<Color>,
}

impl PixelBuffer {
    /// Create a new buffer covering `extent`, filled with a color.
    pub fn new(extent: Region, fill: Color) -> Self {
        Self {
            extent,
            data: vec![fill; extent.area()],
        }
    }

    /// The buffer's extent in absolute coordinates.
    pub fn extent(&self) -> Region {
        self.extent
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        let dx = (x - self.extent.x) as usize;
        let dy = (y - self.extent.y) as usize;
        dy * self.extent.width as usize + dx
    }

    /// Get the pixel at an absolute coordinate.
    ///
    /// The coordinate must lie inside the extent; the render path
    /// guarantees this by bounds-checking the region up front.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Color {
        self.data[self.index(x, y)]
    }

    /// Set the pixel at an absolute coordinate.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        let idx = self.index(x, y);
        self.data[idx] = color;
    }

    /// Copy `region` from `src` into this buffer, pixel for pixel.
    /// Degenerate regions copy nothing.
    pub fn copy_region(&mut self, src: &PixelBuffer, region: Region) {
        for (x, y) in region.coords() {
            let pixel = src.get(x, y);
            self.set(x, y, pixel);
        }
    }

    /// The raw pixel data, row-major over the extent.
    pub fn pixels(&self) -> &[Color] {
        &self.data
    }
}
