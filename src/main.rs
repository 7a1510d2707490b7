mod app;
mod builder;
mod config;
mod event;
mod gamestate;
mod input;
mod player;
mod raycast;

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use brickyard_bricks::{Palette, ShapeCatalog};

#[derive(Parser, Debug)]
#[command(name = "brickyard", about = "Headless voxel brick-building simulation")]
struct Args {
    /// Directory holding the bricks/ config files
    #[arg(long, default_value = "assets")]
    assets: PathBuf,
    /// Simulation ticks to run (60 per second)
    #[arg(long, default_value_t = 600)]
    ticks: u64,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let palette = Palette::from_path(args.assets.join("bricks/palette.toml"))?;
    let shapes = ShapeCatalog::from_path(args.assets.join("bricks/shapes.toml"))?;
    let sim = config::SimConfig::from_path(args.assets.join("bricks/sim.toml"))?;
    log::info!(
        "loaded {} colors, {} brick shapes",
        palette.len(),
        shapes.len()
    );

    let mut app = app::App::new(sim, palette, shapes);
    for _ in 0..args.ticks {
        app.step(player::MAX_TICK_DT);
    }

    let gs = &app.gs;
    let stats = gs.grid.stats();
    log::info!(
        "session done: last tick={} pos=({:.2}, {:.2}, {:.2}) grounded={} bricks={} placed={} removed={} rejected={} cells={} (solid {}, tiles {})",
        gs.tick,
        gs.walker.pos.x,
        gs.walker.pos.y,
        gs.walker.pos.z,
        gs.walker.on_ground,
        gs.registry.len(),
        gs.placed_count,
        gs.removed_count,
        gs.rejected_count,
        stats.stored_cells,
        stats.solid_cells,
        stats.tile_cells,
    );
    for (color, count) in gs.placed_by_color.iter() {
        let label = gs
            .palette
            .get(*color)
            .map(|c| c.label.as_str())
            .unwrap_or("?");
        log::info!("  placed {:>3} × {}", count, label);
    }
    Ok(())
}
