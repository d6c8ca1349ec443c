//! Whole-grid layer blending.

use crate::core::Result;

use super::grid::AlphamapGrid;
use super::ChannelPair;

/// Blend a fraction of channel A's weight into channel B across the
/// whole grid, renormalizing every cell.
///
/// Mass-transfer model: per cell, `strength` of A's weight moves to B
/// (`newA = oldA * (1 - s)`, `newB = oldB + oldA * s`), so A + B is
/// conserved before renormalization. The pass is per-cell independent;
/// order does not matter.
///
/// Validation is all-or-nothing: an invalid or out-of-bounds pair
/// leaves the grid untouched. `strength` is clamped to [0, 1].
pub fn mix(grid: &mut AlphamapGrid, pair: ChannelPair, strength: f32) -> Result<()> {
    pair.validate(grid.layers())?;
    let strength = strength.clamp(0.0, 1.0);

    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let cell = grid.cell_mut(row, col)?;
            let old_a = cell[pair.a];
            cell[pair.a] = old_a * (1.0 - strength);
            cell[pair.b] += old_a * strength;
            grid.renormalize_cell(row, col)?;
        }
    }

    log::debug!(
        "mixed channel {} into {} at strength {} over {}x{} cells",
        pair.a,
        pair.b,
        strength,
        grid.height(),
        grid.width()
    );
    Ok(())
}
