//! The six weave topology rules.

use std::f32::consts::PI;

use texloom_spec::WeavePattern;

/// Decide which thread lies on top at a crossing.
///
/// `cx` and `cy` are cell coordinates: the floor of the rotated pixel
/// position divided by the tiling period. They are real-valued and may
/// be negative left/above the origin; moduli here are truncated
/// remainders (fmod semantics), taking the sign of the dividend.
///
/// Returns true when the x-direction thread is on top. Total over all
/// inputs, no side effects.
pub fn x_over_y(pattern: WeavePattern, cx: f32, cy: f32) -> bool {
    match pattern {
        // Alternating over-under.
        WeavePattern::Plain => (cx + cy) % 2.0 < 1.0,
        // Diagonal pattern, 2x2 offset.
        WeavePattern::Twill => (cx + cy * 2.0) % 4.0 < 2.0,
        // Sparse crossing, 4x1 offset.
        WeavePattern::Satin => (cx + cy * 4.0) % 5.0 < 1.0,
        // Diagonal shifts forming diamond shapes.
        WeavePattern::Diamond => (cx - cy).abs() % 4.0 < 2.0,
        // Zigzag twill: the twill diagonal reverses every 4 rows.
        WeavePattern::Herringbone => {
            (cx + cy * 2.0 + (cy / 4.0).floor() * 4.0) % 8.0 < 4.0
        }
        // Sinusoidal over/under, strict > so the zeros fall to "under".
        WeavePattern::Wave => (PI * (cx + cy) / 4.0).sin() > 0.0,
    }
}
