//! Falloff-weighted brush application to a window of the grid.

use glam::{FloatExt, IVec2, Vec2};

use crate::alphamap::{AlphamapGrid, ChannelPair};
use crate::core::{Error, Result};

/// Parameters for one brush application.
#[derive(Debug, Clone, Copy)]
pub struct BrushParams {
    /// Center cell in grid space: `x` is the column, `y` the row. May
    /// lie outside the grid; the footprint is clamped to grid bounds.
    pub center: IVec2,
    /// Brush radius in grid cells. Must be positive and finite.
    pub radius: f32,
    /// Target weight for channel A at the brush center, in [0, 1].
    pub opacity_a: f32,
    /// Target weight for channel B at the brush center, in [0, 1].
    pub opacity_b: f32,
}

/// Paint the two selected channels toward their target opacities inside
/// a circular footprint, renormalizing every touched cell.
///
/// The bounding window `center ± radius` is clamped to the grid; the
/// circle test against `radius` is the real footprint shape. Influence
/// falls off linearly, `1 - dist/radius`, from 1 at the center to 0 at
/// the rim, and each channel is lerped toward its target by that
/// factor. Cells outside the grid or the circle are untouched, so the
/// call is local: no cell beyond the footprint changes its sum.
///
/// Repeated application with the same parameters converges toward the
/// targets asymptotically rather than reaching them in one stroke;
/// hosts invoke this once per pointer-drag event.
///
/// Validation is all-or-nothing: a bad pair or non-positive radius
/// leaves the grid untouched. Opacities are clamped to [0, 1].
pub fn paint(grid: &mut AlphamapGrid, pair: ChannelPair, params: &BrushParams) -> Result<()> {
    pair.validate(grid.layers())?;
    if !(params.radius > 0.0) || !params.radius.is_finite() {
        return Err(Error::InvalidRadius(params.radius));
    }

    let opacity_a = params.opacity_a.clamp(0.0, 1.0);
    let opacity_b = params.opacity_b.clamp(0.0, 1.0);
    let center = params.center.as_vec2();

    // Window math in i64: huge radii and far-off centers clamp to the
    // grid instead of overflowing i32.
    let reach = params.radius.ceil().min(grid.width().max(grid.height()) as f32) as i64;
    let cx = params.center.x as i64;
    let cy = params.center.y as i64;

    let col_min = (cx - reach).max(0);
    let col_max = (cx + reach).min(grid.width() as i64 - 1);
    let row_min = (cy - reach).max(0);
    let row_max = (cy + reach).min(grid.height() as i64 - 1);

    let mut touched = 0usize;
    for row in row_min..=row_max {
        for col in col_min..=col_max {
            let dist = Vec2::new(col as f32, row as f32).distance(center);
            if dist > params.radius {
                continue;
            }
            let factor = 1.0 - dist / params.radius;

            let cell = grid.cell_mut(row as usize, col as usize)?;
            cell[pair.a] = cell[pair.a].lerp(opacity_a, factor);
            cell[pair.b] = cell[pair.b].lerp(opacity_b, factor);
            grid.renormalize_cell(row as usize, col as usize)?;
            touched += 1;
        }
    }

    log::trace!(
        "painted {} cells around ({}, {}) with radius {}",
        touched,
        params.center.x,
        params.center.y,
        params.radius
    );
    Ok(())
}
