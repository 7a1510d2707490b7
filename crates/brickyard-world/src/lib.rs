//! Sparse voxel grid: authoritative cell storage and solidity queries.
#![forbid(unsafe_code)]

use brickyard_bricks::{Cell, ColorId};
use hashbrown::HashMap;

#[derive(Default, Debug, Clone, Copy)]
pub struct GridStats {
    pub stored_cells: usize,
    pub solid_cells: usize,
    pub tile_cells: usize,
}

/// Sparse mapping from integer cell coordinate to cell content.
///
/// Empty space is absence from the map. Everything below y=0 is an implicit
/// infinite solid half-space regardless of storage; the first buildable
/// layer is y=0. A revision counter is bumped on every mutation so the
/// presentation layer can detect when to re-snapshot occupied cells.
pub struct VoxelGrid {
    cells: HashMap<(i32, i32, i32), Cell>,
    // Highest y that ever held a solid cell; bounds column scans.
    max_solid_y: i32,
    rev: u64,
}

impl Default for VoxelGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl VoxelGrid {
    pub fn new() -> Self {
        Self {
            cells: HashMap::new(),
            max_solid_y: -1,
            rev: 0,
        }
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32, z: i32) -> Option<Cell> {
        self.cells.get(&(x, y, z)).copied()
    }

    pub fn set(&mut self, x: i32, y: i32, z: i32, cell: Cell) {
        if cell.solid && y > self.max_solid_y {
            self.max_solid_y = y;
        }
        self.cells.insert((x, y, z), cell);
        self.bump_rev();
    }

    pub fn remove(&mut self, x: i32, y: i32, z: i32) -> Option<Cell> {
        let prev = self.cells.remove(&(x, y, z));
        if prev.is_some() {
            self.bump_rev();
        }
        prev
    }

    /// Whether the cell participates in collision. Any cell below y=0 is
    /// solid: the ground beneath the buildable volume is an implicit
    /// infinite solid half-space.
    #[inline]
    pub fn is_solid_at(&self, x: i32, y: i32, z: i32) -> bool {
        if y < 0 {
            return true;
        }
        self.cells.get(&(x, y, z)).is_some_and(|c| c.solid)
    }

    /// Top surface height of the tallest solid stack in a column: `y + 1`
    /// of the highest solid cell, or 0 when only the implicit ground
    /// supports the column.
    pub fn column_top(&self, cx: i32, cz: i32) -> i32 {
        let mut top = 0;
        for y in 0..=self.max_solid_y {
            if self.is_solid_at(cx, y, cz) {
                top = y + 1;
            }
        }
        top
    }

    /// Highest y that ever held a solid cell (-1 when none was stored).
    /// Bounds vertical scans; never decreases on removal.
    #[inline]
    pub fn max_solid_y(&self) -> i32 {
        self.max_solid_y
    }

    /// Seed the checkerboard of decorative base tiles at y=0 over
    /// `[-radius, radius]²`. Tiles are terrain: visible, non-solid,
    /// unowned. Cells already present (e.g. placed bricks) are kept.
    pub fn seed_floor_tiles(&mut self, radius: i32, dark: ColorId, light: ColorId) {
        for x in -radius..=radius {
            for z in -radius..=radius {
                let color = if (x + z) % 2 == 0 { dark } else { light };
                self.cells.entry((x, 0, z)).or_insert(Cell::tile(color));
            }
        }
        self.bump_rev();
    }

    /// Snapshot of every stored cell for the presentation layer.
    pub fn snapshot(&self) -> Vec<((i32, i32, i32), Cell)> {
        self.cells.iter().map(|(k, v)| (*k, *v)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&(i32, i32, i32), &Cell)> {
        self.cells.iter()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Monotonic change revision; any mutation bumps it.
    #[inline]
    pub fn rev(&self) -> u64 {
        self.rev
    }

    #[inline]
    fn bump_rev(&mut self) {
        self.rev = self.rev.wrapping_add(1).max(1);
    }

    pub fn stats(&self) -> GridStats {
        let mut s = GridStats {
            stored_cells: self.cells.len(),
            ..GridStats::default()
        };
        for c in self.cells.values() {
            if c.solid {
                s.solid_cells += 1;
            } else {
                s.tile_cells += 1;
            }
        }
        s
    }
}
