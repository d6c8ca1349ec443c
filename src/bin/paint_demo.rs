//! Offline driver: global mix followed by a simulated brush stroke.
//!
//! Usage:
//!   cargo run --release --bin paint_demo

use glam::Vec2;

use terramix::alphamap::{mixer, AlphamapGrid};
use terramix::brush::session::{GridMapping, PaintSession};
use terramix::core::Result;
use terramix::settings::ToolSettings;

fn main() -> Result<()> {
    terramix::core::logging::init();

    let settings = ToolSettings::load_or_default("terramix.json")?;
    let pair = settings.channel_pair();

    // 129x129 alphamap with four layers, weight spread evenly.
    let mut grid = AlphamapGrid::filled(129, 129, 4, 0.25);
    let mapping = GridMapping::new(Vec2::ZERO, Vec2::new(512.0, 512.0));

    log::info!(
        "mixing layer {} into {} at strength {}",
        settings.layer_a,
        settings.layer_b,
        settings.blend_strength
    );
    mixer::mix(&mut grid, pair, settings.blend_strength)?;
    log::info!(
        "after mix: cell (64,64) = {:?}",
        grid.cell(64, 64)?
    );

    // Drag a stroke across the middle of the terrain.
    let radius = mapping.world_radius_to_grid(&grid, settings.brush_radius);
    let mut session = PaintSession::new(pair, radius, settings.opacity_a, settings.opacity_b);

    let start = Vec2::new(200.0, 256.0);
    let cell = mapping.world_to_cell(&grid, start);
    session.press(&mut grid, cell)?;
    for step in 1..=16 {
        let hit = start + Vec2::new(step as f32 * 7.0, 0.0);
        let cell = mapping.world_to_cell(&grid, hit);
        session.drag(&mut grid, cell)?;
    }
    session.release();

    log::info!(
        "after stroke: cell (64,64) = {:?}, sum = {}",
        grid.cell(64, 64)?,
        grid.cell_sum(64, 64)?
    );

    settings.save("terramix.json")?;
    Ok(())
}
