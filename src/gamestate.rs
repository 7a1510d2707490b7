use brickyard_bricks::{ColorId, Footprint, Palette, ShapeCatalog};
use brickyard_edit::BrickRegistry;
use brickyard_geom::Vec3;
use brickyard_world::VoxelGrid;
use hashbrown::HashMap;

use crate::player::{Walker, WalkerTuning};

/// Pointer intent while in Build mode places/removes; Gadget mode throws.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionMode {
    Build,
    Gadget,
}

pub struct GameState {
    pub tick: u64,

    // World
    pub grid: VoxelGrid,
    pub registry: BrickRegistry,

    // Catalogs
    pub palette: Palette,
    pub shapes: ShapeCatalog,

    // Player
    pub walker: Walker,

    // Build selection
    pub mode: SessionMode,
    pub color_index: usize,
    pub shape_key: String,
    pub rotated: bool,

    // Session counters for the exit summary
    pub placed_count: u64,
    pub removed_count: u64,
    pub rejected_count: u64,
    pub placed_by_color: HashMap<ColorId, u64>,
}

impl GameState {
    pub fn new(
        palette: Palette,
        shapes: ShapeCatalog,
        tuning: WalkerTuning,
        spawn: Vec3,
        default_color: usize,
        default_shape: &str,
    ) -> Self {
        let shape_key = shapes
            .get(default_shape)
            .map(|s| s.key.clone())
            .or_else(|| shapes.shapes.first().map(|s| s.key.clone()))
            .unwrap_or_default();
        Self {
            tick: 0,
            grid: VoxelGrid::new(),
            registry: BrickRegistry::new(),
            palette,
            shapes,
            walker: Walker::with_tuning(spawn, tuning),
            mode: SessionMode::Build,
            color_index: default_color,
            shape_key,
            rotated: false,
            placed_count: 0,
            removed_count: 0,
            rejected_count: 0,
            placed_by_color: HashMap::new(),
        }
    }

    pub fn selected_color(&self) -> ColorId {
        self.palette
            .colors
            .get(self.color_index)
            .map(|c| c.id)
            .unwrap_or(ColorId(0))
    }

    pub fn selected_footprint(&self) -> Footprint {
        self.shapes
            .footprint(&self.shape_key)
            .unwrap_or(Footprint::new(2, 2))
    }

    pub fn select_color(&mut self, index: usize) -> bool {
        if index < self.palette.len() {
            self.color_index = index;
            true
        } else {
            false
        }
    }

    pub fn select_shape(&mut self, key: &str) -> bool {
        if self.shapes.get(key).is_some() {
            self.shape_key = key.to_string();
            true
        } else {
            false
        }
    }

    pub fn toggle_rotation(&mut self) {
        self.rotated = !self.rotated;
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            SessionMode::Build => SessionMode::Gadget,
            SessionMode::Gadget => SessionMode::Build,
        };
    }

    pub fn note_placed(&mut self, color: ColorId) {
        self.placed_count += 1;
        *self.placed_by_color.entry(color).or_insert(0) += 1;
    }
}
