//! The pixel compositor and the host pipeline contract.

use thiserror::Error;

use texloom_spec::WeaveParams;

use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::region::Region;
use crate::weave;

/// Errors from rendering a region.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// The requested region is not covered by one of the buffers.
    #[error("region {region:?} is outside the {buffer} buffer extent {extent:?}")]
    RegionOutOfBounds {
        /// Which buffer failed the check ("input" or "output").
        buffer: &'static str,
        /// The requested region.
        region: Region,
        /// The extent of the offending buffer.
        extent: Region,
    },
}

/// Output extent of the filter for a given input extent.
///
/// The weave is composited in place over the source, so the footprint
/// passes through unchanged: the filter never grows or shrinks the image.
pub fn output_extent(input_extent: Region) -> Region {
    input_extent
}

/// Input region required to produce a given output region.
///
/// Every output pixel depends only on the co-located input pixel (for
/// background passthrough) and on global parameters, so there is no
/// dependency expansion.
pub fn required_input(output_roi: Region) -> Region {
    output_roi
}

/// Render the weave over `region`, reading `input` and writing `output`.
///
/// A degenerate region (width or height < 1) copies the input over the
/// (empty) region and succeeds. A non-degenerate region must lie inside
/// both buffer extents; a violation fails loudly with
/// [`RenderError::RegionOutOfBounds`] instead of touching memory.
///
/// Out-of-documented-range parameter values are not rejected: the
/// per-pixel arithmetic is total, so they degrade gracefully. Hosts that
/// want range enforcement call [`WeaveParams::validate`] first.
///
/// The call is pure and re-entrant; concurrent calls on disjoint regions
/// of the same image are safe, overlapping output regions are the
/// caller's error.
pub fn render(
    input: &PixelBuffer,
    output: &mut PixelBuffer,
    region: Region,
    params: &WeaveParams,
) -> Result<(), RenderError> {
    if region.is_degenerate() {
        output.copy_region(input, region);
        return Ok(());
    }

    check_extent("input", input.extent(), region)?;
    check_extent("output", output.extent(), region)?;

    // Narrow the parameters once; per-pixel math runs in the buffer's
    // channel type.
    let thread_width = params.thread_width as f32;
    let period = params.period() as f32;
    let shadow = params.shadow_intensity as f32;
    // Drop full turns before converting, so 360 degrees rotates by an
    // exact zero instead of a rounded two-pi.
    let angle_rad = ((params.angle % 360.0) as f32).to_radians();
    let (sin_a, cos_a) = angle_rad.sin_cos();

    let color1 = Color::from_array64(params.thread_color1);
    let color2 = Color::from_array64(params.thread_color2);
    let bg_color = Color::from_array64(params.background_color);

    for (px, py) in region.coords() {
        let fx = px as f32;
        let fy = py as f32;

        // Rotate into pattern space.
        let rx = fx * cos_a + fy * sin_a;
        let ry = -fx * sin_a + fy * cos_a;

        // Wrapped position within the tiling period. `%` is a truncated
        // remainder, so positions left/above the origin wrap to negative
        // values and still compare below the thread width.
        let wx = rx % period;
        let wy = ry % period;
        let is_thread_x = wx < thread_width;
        let is_thread_y = wy < thread_width;

        // The four branches are mutually exclusive and exhaustive.
        let (color, shading) = match (is_thread_x, is_thread_y) {
            (true, true) => {
                let cx = (rx / period).floor();
                let cy = (ry / period).floor();
                if weave::x_over_y(params.pattern, cx, cy) {
                    (color1, 1.0)
                } else {
                    (color2, 1.0 - shadow)
                }
            }
            (true, false) => (color1, 1.0 - shadow * 0.5),
            (false, true) => (color2, 1.0 - shadow * 0.5),
            (false, false) => {
                let color = if params.use_background_color {
                    bg_color
                } else {
                    input.get(px, py)
                };
                (color, 1.0)
            }
        };

        // Thread pixels get fully shaded; background pixels keep their
        // alpha unmultiplied so input alpha passes through unchanged.
        let is_background = !is_thread_x && !is_thread_y;
        output.set(
            px,
            py,
            Color {
                r: color.r * shading,
                g: color.g * shading,
                b: color.b * shading,
                a: if is_background {
                    color.a
                } else {
                    color.a * shading
                },
            },
        );
    }

    Ok(())
}

fn check_extent(buffer: &'static str, extent: Region, region: Region) -> Result<(), RenderError> {
    if !extent.contains(&region) {
        return Err(RenderError::RegionOutOfBounds {
            buffer,
            region,
            extent,
        });
    }
    Ok(())
}
