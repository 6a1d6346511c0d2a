//! Texloom Weave Filter Parameters
//!
//! This crate provides the configuration surface of the texloom weave
//! filter: the weave pattern enum, the parameter structure with serde
//! support and per-field defaults, range validation, and hex-color parsing
//! for host-supplied color strings.
//!
//! The filter itself lives in `texloom-filter`; this crate carries no
//! algorithmic code so hosts can describe and validate a filter invocation
//! without pulling in the renderer.
//!
//! # Example
//!
//! ```
//! use texloom_spec::{WeaveParams, WeavePattern, rgba_from_hex};
//!
//! let params = WeaveParams {
//!     pattern: WeavePattern::Twill,
//!     thread_width: 12.0,
//!     thread_spacing: 8.0,
//!     thread_color1: rgba_from_hex("#a2a2a2").unwrap(),
//!     ..WeaveParams::default()
//! };
//! assert!(params.validate().is_ok());
//! ```

pub mod error;
pub mod params;

pub use error::ParamError;
pub use params::{rgba_from_hex, WeaveParams, WeavePattern};
