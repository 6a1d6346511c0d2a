//! Texloom Weave Filter
//!
//! A procedural woven-fabric texture filter. Given an input image region
//! in linear RGBA float and a [`WeaveParams`](texloom_spec::WeaveParams)
//! configuration, it computes per output pixel a color simulating a woven
//! fabric (plain, twill, satin, diamond, herringbone, or wave), blended
//! over the source image or a flat background, with directional shading
//! to suggest thread relief.
//!
//! The filter is a pure function of (input pixels, region, parameters):
//! no internal state, no I/O, byte-identical output for identical inputs.
//! It is safe to invoke concurrently on disjoint regions of the same
//! image.
//!
//! # Example
//!
//! ```
//! use texloom_filter::{render, Color, PixelBuffer, Region};
//! use texloom_spec::{WeaveParams, WeavePattern};
//!
//! let extent = Region::new(0, 0, 64, 64);
//! let input = PixelBuffer::new(extent, Color::white());
//! let mut output = PixelBuffer::new(extent, Color::black());
//!
//! let params = WeaveParams {
//!     pattern: WeavePattern::Twill,
//!     thread_width: 6.0,
//!     thread_spacing: 4.0,
//!     ..WeaveParams::default()
//! };
//! render(&input, &mut output, extent, &params).unwrap();
//! ```
//!
//! # Host contract
//!
//! - Both pads use 4-channel float color ([`CHANNELS`]).
//! - [`output_extent`] and [`required_input`] are identity: the filter
//!   neither grows nor shrinks the image footprint, and producing an
//!   output region needs exactly that region of input.
//! - [`render`] fails only on a region outside a buffer extent; degenerate
//!   regions are a no-op copy, not an error.

pub mod buffer;
pub mod color;
pub mod region;
pub mod render;
pub mod weave;

pub use buffer::{PixelBuffer, CHANNELS};
pub use color::Color;
pub use region::Region;
pub use render::{output_extent, render, required_input, RenderError};
pub use weave::x_over_y;
