//! Axis-aligned integer rectangles.

/// An axis-aligned integer rectangle in absolute image coordinates.
///
/// Regions describe both buffer extents and render requests. A region
/// with `width < 1` or `height < 1` is degenerate: it covers no pixels
/// and rendering it is a no-op rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Region {
    /// Create a new region.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True if the region covers no pixels.
    pub fn is_degenerate(&self) -> bool {
        self.width < 1 || self.height < 1
    }

    /// Number of pixels covered.
    pub fn area(&self) -> usize {
        self.width.max(0) as usize * self.height.max(0) as usize
    }

    /// True if `other` lies entirely inside this region.
    ///
    /// Only meaningful for non-degenerate `other`; the render path never
    /// bounds-checks degenerate regions since they touch no pixels.
    pub fn contains(&self, other: &Region) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x + other.width <= self.x + self.width
            && other.y + other.height <= self.y + self.height
    }

    /// Iterate the absolute (x, y) coordinates of every pixel in the
    /// region, row-major. Yields nothing for degenerate regions.
    pub fn coords(&self) -> impl Iterator<Item = (i32, i32)> {
        let Region {
            x,
            y,
            width,
            height,
        } = *self;
        (0..height.max(0)).flat_map(move |dy| (0..width.max(0)).map(move |dx| (x + dx, y + dy)))
    }
}
