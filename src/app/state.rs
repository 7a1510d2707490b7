use brickyard_bricks::{ColorId, Footprint, Palette, ShapeCatalog};
use brickyard_geom::Vec3;

use crate::config::SimConfig;
use crate::event::EventQueue;
use crate::gamestate::GameState;
use crate::input::DemoScript;

pub struct App {
    pub gs: GameState,
    pub queue: EventQueue,
    pub script: DemoScript,
}

impl App {
    pub fn new(cfg: SimConfig, palette: Palette, shapes: ShapeCatalog) -> Self {
        let spawn = Vec3::new(cfg.scene.spawn[0], cfg.scene.spawn[1], cfg.scene.spawn[2]);
        let mut gs = GameState::new(
            palette,
            shapes,
            cfg.walker,
            spawn,
            cfg.scene.default_color,
            &cfg.scene.default_shape,
        );

        let dark = gs.palette.id_by_key("darkgray").unwrap_or(ColorId(0));
        let light = gs.palette.id_by_key("lightgray").unwrap_or(dark);
        gs.grid.seed_floor_tiles(cfg.scene.floor_radius, dark, light);

        if cfg.scene.seed_prefab {
            Self::seed_prefab(&mut gs);
        }
        log::info!(
            target: "scene",
            "world ready: {} cells stored, {} bricks",
            gs.grid.len(),
            gs.registry.len()
        );

        Self {
            gs,
            queue: EventQueue::new(),
            script: DemoScript::standard(),
        }
    }

    /// Street curbs and two corner towers, built from real bricks so the
    /// whole prefab stays removable piece by piece.
    fn seed_prefab(gs: &mut GameState) {
        let grid = &mut gs.grid;
        let registry = &mut gs.registry;
        let dark = gs.palette.id_by_key("darkgray").unwrap_or(ColorId(0));
        let gray = gs.palette.id_by_key("lightgray").unwrap_or(dark);
        let blue = gs.palette.id_by_key("blue").unwrap_or(dark);

        // Two curb strips across the plaza
        let strips = [((-10, 0, 2), dark), ((-10, 0, 3), gray)];
        for (origin, color) in strips {
            if let Err(rej) = registry.place(grid, origin, Footprint::new(21, 1), false, color) {
                log::warn!(target: "scene", "curb strip at {:?} rejected: {:?}", origin, rej);
            }
        }

        // Corner towers: stacked 2x2 bricks
        for y in 0..3 {
            if let Err(rej) = registry.place(grid, (-8, y, -8), Footprint::new(2, 2), false, gray) {
                log::warn!(target: "scene", "tower layer y={} rejected: {:?}", y, rej);
            }
        }
        for y in 0..2 {
            if let Err(rej) = registry.place(grid, (6, y, -6), Footprint::new(2, 2), false, blue) {
                log::warn!(target: "scene", "tower layer y={} rejected: {:?}", y, rej);
            }
        }
    }
}
