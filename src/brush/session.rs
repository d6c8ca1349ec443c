//! Drag-gesture state feeding brush applications.
//!
//! The host's input layer resolves pointer events against its scene and
//! hands this module already-resolved hit points. The session is the
//! press/drag/release state machine deciding whether a given event
//! paints; the grid itself is borrowed per event and never retained.

use glam::{IVec2, Vec2};

use crate::alphamap::{AlphamapGrid, ChannelPair};
use crate::core::Result;

use super::painter::{paint, BrushParams};

/// Maps world-space hit points into alphamap grid space.
///
/// `origin` is the world position of cell (0, 0); `size` the world
/// extent covered by the whole grid (x maps to columns, y to rows).
#[derive(Debug, Clone, Copy)]
pub struct GridMapping {
    pub origin: Vec2,
    pub size: Vec2,
}

impl GridMapping {
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// World hit point to grid cell (x = column, y = row). Points off
    /// the terrain map to off-grid cells; the painter clamps them.
    pub fn world_to_cell(&self, grid: &AlphamapGrid, world: Vec2) -> IVec2 {
        let relative = world - self.origin;
        IVec2::new(
            (relative.x / self.size.x * grid.width() as f32) as i32,
            (relative.y / self.size.y * grid.height() as f32) as i32,
        )
    }

    /// World-space brush radius to grid cells, scaled by column density.
    pub fn world_radius_to_grid(&self, grid: &AlphamapGrid, world_radius: f32) -> f32 {
        world_radius / self.size.x * grid.width() as f32
    }
}

/// Ephemeral state for one paint gesture.
///
/// Holds the stroke's channel pair and brush parameters plus a single
/// "gesture active" flag; all grid state stays with the caller.
#[derive(Debug, Clone)]
pub struct PaintSession {
    pair: ChannelPair,
    radius: f32,
    opacity_a: f32,
    opacity_b: f32,
    painting: bool,
}

impl PaintSession {
    pub fn new(pair: ChannelPair, radius: f32, opacity_a: f32, opacity_b: f32) -> Self {
        Self {
            pair,
            radius,
            opacity_a,
            opacity_b,
            painting: false,
        }
    }

    pub fn is_painting(&self) -> bool {
        self.painting
    }

    /// Pointer pressed on the terrain: start the gesture and paint the
    /// first dab immediately.
    pub fn press(&mut self, grid: &mut AlphamapGrid, cell: IVec2) -> Result<()> {
        self.painting = true;
        paint(grid, self.pair, &self.brush_at(cell))
    }

    /// Pointer dragged: paints only while a gesture is active. Returns
    /// whether a dab was applied.
    pub fn drag(&mut self, grid: &mut AlphamapGrid, cell: IVec2) -> Result<bool> {
        if !self.painting {
            return Ok(false);
        }
        paint(grid, self.pair, &self.brush_at(cell))?;
        Ok(true)
    }

    /// Pointer released: end the gesture.
    pub fn release(&mut self) {
        self.painting = false;
    }

    fn brush_at(&self, cell: IVec2) -> BrushParams {
        BrushParams {
            center: cell,
            radius: self.radius,
            opacity_a: self.opacity_a,
            opacity_b: self.opacity_b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> PaintSession {
        PaintSession::new(ChannelPair::new(0, 1), 2.0, 1.0, 0.0)
    }

    #[test]
    fn test_drag_without_press_does_nothing() {
        let mut grid = AlphamapGrid::filled(8, 8, 2, 0.5);
        let before = grid.clone();
        let mut session = session();

        assert!(!session.drag(&mut grid, IVec2::new(4, 4)).unwrap());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_press_drag_release_cycle() {
        let mut grid = AlphamapGrid::filled(8, 8, 2, 0.5);
        let mut session = session();

        session.press(&mut grid, IVec2::new(4, 4)).unwrap();
        assert!(session.is_painting());
        assert!((grid.get(4, 4, 0).unwrap() - 1.0).abs() < 1e-5);

        assert!(session.drag(&mut grid, IVec2::new(5, 4)).unwrap());

        session.release();
        assert!(!session.is_painting());
        assert!(!session.drag(&mut grid, IVec2::new(6, 4)).unwrap());
    }

    #[test]
    fn test_press_error_leaves_gesture_recoverable() {
        let mut grid = AlphamapGrid::filled(8, 8, 2, 0.5);
        let mut session = PaintSession::new(ChannelPair::new(1, 1), 2.0, 1.0, 0.0);

        assert!(session.press(&mut grid, IVec2::new(4, 4)).is_err());
        session.release();
        assert!(!session.is_painting());
    }

    #[test]
    fn test_mapped_stroke_paints_along_path() {
        // World-space drag: resolve each hit to a cell, then hand the
        // grid to the session dab by dab.
        let mut grid = AlphamapGrid::filled(32, 32, 2, 0.5);
        let mapping = GridMapping::new(Vec2::ZERO, Vec2::new(64.0, 64.0));
        let mut session = session();

        let start = Vec2::new(8.0, 32.0);
        let cell = mapping.world_to_cell(&grid, start);
        session.press(&mut grid, cell).unwrap();
        for step in 1..=8 {
            let hit = start + Vec2::new(step as f32 * 4.0, 0.0);
            let cell = mapping.world_to_cell(&grid, hit);
            assert!(session.drag(&mut grid, cell).unwrap());
        }
        session.release();

        // Stroke runs along row 16; cells on it moved toward layer A,
        // the far corner is untouched.
        assert!(grid.get(16, 8, 0).unwrap() > 0.5);
        assert!((grid.get(16, 4, 0).unwrap() - 1.0).abs() < 1e-5);
        assert_eq!(grid.get(31, 31, 0).unwrap(), 0.5);
    }

    #[test]
    fn test_world_to_cell_mapping() {
        let grid = AlphamapGrid::new(64, 128, 2);
        let mapping = GridMapping::new(Vec2::new(100.0, 200.0), Vec2::new(256.0, 128.0));

        // Terrain midpoint lands on the grid midpoint.
        let cell = mapping.world_to_cell(&grid, Vec2::new(228.0, 264.0));
        assert_eq!(cell, IVec2::new(64, 32));

        // Hit before the terrain origin resolves to a negative cell.
        let cell = mapping.world_to_cell(&grid, Vec2::new(96.0, 200.0));
        assert_eq!(cell, IVec2::new(-2, 0));
    }

    #[test]
    fn test_world_radius_scaling() {
        let grid = AlphamapGrid::new(64, 128, 2);
        let mapping = GridMapping::new(Vec2::ZERO, Vec2::new(256.0, 128.0));
        let radius = mapping.world_radius_to_grid(&grid, 8.0);
        assert!((radius - 4.0).abs() < 1e-6);
    }
}
