//! Weave filter parameter types.

use serde::{Deserialize, Serialize};

use crate::error::ParamError;

/// The six supported weave topologies.
///
/// Each topology is a fixed over/under alternation rule; the set is closed
/// and the renderer dispatches on it with a plain match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeavePattern {
    /// Alternating over-under.
    Plain,
    /// Diagonal pattern, 2x2 offset.
    Twill,
    /// Sparse crossing, 4x1 offset.
    Satin,
    /// Diagonal shifts forming diamond shapes.
    Diamond,
    /// Zigzag twill.
    Herringbone,
    /// Sinusoidal over/under.
    Wave,
}

impl Default for WeavePattern {
    fn default() -> Self {
        WeavePattern::Plain
    }
}

/// Parameters for one weave filter invocation.
///
/// Immutable per invocation; the filter is a pure function of
/// (input pixels, region, parameters). Field defaults apply both to
/// `Default::default()` and to fields omitted from a serialized
/// configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaveParams {
    /// Weave topology to render.
    #[serde(default)]
    pub pattern: WeavePattern,
    /// Width of the weave threads in pixels. Range [2.0, 200.0].
    #[serde(default = "default_thread_width")]
    pub thread_width: f64,
    /// Spacing between threads in pixels. Range [2.0, 150.0].
    #[serde(default = "default_thread_spacing")]
    pub thread_spacing: f64,
    /// Rotation angle of the pattern in degrees. Range [0.0, 360.0].
    #[serde(default = "default_angle")]
    pub angle: f64,
    /// Shadow intensity for the relief effect. Range [0.0, 1.0].
    #[serde(default)]
    pub shadow_intensity: f64,
    /// Color of the first (x-direction) thread set, RGBA in [0, 1].
    #[serde(default = "default_thread_color1")]
    pub thread_color1: [f64; 4],
    /// Color of the second (y-direction) thread set, RGBA in [0, 1].
    #[serde(default = "default_thread_color2")]
    pub thread_color2: [f64; 4],
    /// Fill the inter-thread gaps with `background_color` instead of the
    /// input image.
    #[serde(default)]
    pub use_background_color: bool,
    /// Background fill color, only used when `use_background_color` is set.
    #[serde(default = "default_background_color")]
    pub background_color: [f64; 4],
}

fn default_thread_width() -> f64 {
    75.0
}

fn default_thread_spacing() -> f64 {
    60.0
}

fn default_angle() -> f64 {
    45.0
}

fn default_thread_color1() -> [f64; 4] {
    // #a2a2a2
    [162.0 / 255.0, 162.0 / 255.0, 162.0 / 255.0, 1.0]
}

fn default_thread_color2() -> [f64; 4] {
    // #cccccc
    [204.0 / 255.0, 204.0 / 255.0, 204.0 / 255.0, 1.0]
}

fn default_background_color() -> [f64; 4] {
    [0.0, 0.0, 0.0, 1.0]
}

impl Default for WeaveParams {
    fn default() -> Self {
        Self {
            pattern: WeavePattern::Plain,
            thread_width: default_thread_width(),
            thread_spacing: default_thread_spacing(),
            angle: default_angle(),
            shadow_intensity: 0.0,
            thread_color1: default_thread_color1(),
            thread_color2: default_thread_color2(),
            use_background_color: false,
            background_color: default_background_color(),
        }
    }
}

impl WeaveParams {
    /// The period of the weave tiling, in pixels.
    pub fn period(&self) -> f64 {
        self.thread_width + self.thread_spacing
    }

    /// Check the numeric fields against their documented ranges.
    ///
    /// Returns the first violation. This is a host-facing convenience:
    /// the renderer itself accepts any values, since all of its arithmetic
    /// is total (trigonometry is periodic, moduli are defined for any
    /// real input) and out-of-range values degrade gracefully.
    pub fn validate(&self) -> Result<(), ParamError> {
        check_range("thread_width", self.thread_width, 2.0, 200.0)?;
        check_range("thread_spacing", self.thread_spacing, 2.0, 150.0)?;
        check_range("angle", self.angle, 0.0, 360.0)?;
        check_range("shadow_intensity", self.shadow_intensity, 0.0, 1.0)?;
        Ok(())
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ParamError> {
    if value < min || value > max || value.is_nan() {
        return Err(ParamError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Parse a `#rrggbb` or `#rrggbbaa` color string into RGBA floats.
///
/// A missing alpha component defaults to fully opaque.
pub fn rgba_from_hex(hex: &str) -> Result<[f64; 4], ParamError> {
    let digits = hex
        .strip_prefix('#')
        .ok_or_else(|| ParamError::InvalidHexColor(hex.to_string()))?;

    if digits.len() != 6 && digits.len() != 8 {
        return Err(ParamError::InvalidHexColor(hex.to_string()));
    }

    let mut channels = [1.0f64; 4];
    for (i, chunk) in digits.as_bytes().chunks(2).enumerate() {
        let pair = std::str::from_utf8(chunk)
            .map_err(|_| ParamError::InvalidHexColor(hex.to_string()))?;
        let byte = u8::from_str_radix(pair, 16)
            .map_err(|_| ParamError::InvalidHexColor(hex.to_string()))?;
        channels[i] = byte as f64 / 255.0;
    }

    Ok(channels)
}
