//! Error types for parameter validation and parsing.

use thiserror::Error;

/// Errors from parameter validation or color parsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    /// A numeric parameter is outside its documented range.
    #[error("{field} must be in [{min}, {max}], got {value}")]
    OutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },

    /// A color string is not `#rrggbb` or `#rrggbbaa`.
    #[error("invalid hex color {0:?}: expected #rrggbb or #rrggbbaa")]
    InvalidHexColor(String),
}
