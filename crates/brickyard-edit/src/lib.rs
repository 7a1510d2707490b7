//! Atomic multi-cell brick placement and removal over the voxel grid.
#![forbid(unsafe_code)]

use brickyard_bricks::{BrickId, Cell, ColorId, Footprint};
use brickyard_world::VoxelGrid;
use std::collections::HashMap;

/// Normal negative outcome of a placement attempt. Callers absorb these
/// silently; they are expected, frequent, user-facing results.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rejected {
    /// Some target cell lies below the buildable volume (y < 0).
    BelowGround,
    /// Some target cell is already solid.
    Occupied,
}

/// Tracks which grid cells belong to which placed brick so multi-cell
/// bricks place and remove as a unit.
///
/// Placement is all-or-nothing: target cells are validated before any
/// write, so no reader ever observes a half-placed brick.
pub struct BrickRegistry {
    next_id: BrickId,
    bricks: HashMap<BrickId, Vec<(i32, i32, i32)>>,
}

impl Default for BrickRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BrickRegistry {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            bricks: HashMap::new(),
        }
    }

    /// Place a brick with its origin cell at `origin`, extending toward
    /// +x and +z. Rotation swaps the footprint axes. On success every
    /// target cell becomes solid, owned by the fresh id.
    pub fn place(
        &mut self,
        grid: &mut VoxelGrid,
        origin: (i32, i32, i32),
        footprint: Footprint,
        rotated: bool,
        color: ColorId,
    ) -> Result<BrickId, Rejected> {
        let (ox, oy, oz) = origin;
        if oy < 0 {
            return Err(Rejected::BelowGround);
        }
        let (w, l) = footprint.oriented(rotated);
        let mut cells = Vec::with_capacity((w * l) as usize);
        for dx in 0..w {
            for dz in 0..l {
                let (cx, cy, cz) = (ox + dx, oy, oz + dz);
                if grid.get(cx, cy, cz).is_some_and(|c| c.solid) {
                    return Err(Rejected::Occupied);
                }
                cells.push((cx, cy, cz));
            }
        }
        let id = self.next_id;
        self.next_id += 1;
        for &(cx, cy, cz) in &cells {
            // Overwrites decorative tiles at y=0; tiles are not restored
            // on removal.
            grid.set(cx, cy, cz, Cell::brick(color, id));
        }
        self.bricks.insert(id, cells);
        Ok(id)
    }

    /// Remove the whole brick owning the cell at `(x, y, z)`. Absent and
    /// non-solid (tile) cells are a no-op returning false.
    pub fn remove_at(&mut self, grid: &mut VoxelGrid, x: i32, y: i32, z: i32) -> bool {
        let Some(cell) = grid.get(x, y, z) else {
            return false;
        };
        if !cell.solid {
            return false;
        }
        let Some(id) = cell.brick else {
            return false;
        };
        let Some(cells) = self.bricks.remove(&id) else {
            return false;
        };
        for (cx, cy, cz) in cells {
            grid.remove(cx, cy, cz);
        }
        true
    }

    /// Cells owned by a registered brick, in placement order.
    pub fn cells_of(&self, id: BrickId) -> Option<&[(i32, i32, i32)]> {
        self.bricks.get(&id).map(|v| v.as_slice())
    }

    pub fn contains(&self, id: BrickId) -> bool {
        self.bricks.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }
}
