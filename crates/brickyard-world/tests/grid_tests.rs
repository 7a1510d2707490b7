use brickyard_bricks::{Cell, ColorId};
use brickyard_world::VoxelGrid;

const DARK: ColorId = ColorId(0);
const LIGHT: ColorId = ColorId(1);
const YELLOW: ColorId = ColorId(3);

#[test]
fn sparse_get_set_remove() {
    let mut g = VoxelGrid::new();
    assert_eq!(g.get(1, 2, 3), None);

    g.set(1, 2, 3, Cell::brick(YELLOW, 1));
    assert_eq!(g.get(1, 2, 3), Some(Cell::brick(YELLOW, 1)));
    assert_eq!(g.len(), 1);

    assert!(g.remove(1, 2, 3).is_some());
    assert_eq!(g.get(1, 2, 3), None);
    assert!(g.is_empty());
    // Removing again is a no-op
    assert!(g.remove(1, 2, 3).is_none());
}

#[test]
fn any_integer_triple_is_addressable() {
    let mut g = VoxelGrid::new();
    g.set(-1_000_000, 0, 7_777_777, Cell::brick(YELLOW, 1));
    assert!(g.is_solid_at(-1_000_000, 0, 7_777_777));
}

#[test]
fn below_ground_is_always_solid() {
    let g = VoxelGrid::new();
    assert!(g.is_solid_at(0, -1, 0));
    assert!(g.is_solid_at(123, -50, -9));
    assert!(!g.is_solid_at(0, 0, 0));
}

#[test]
fn tiles_are_visible_but_not_collidable() {
    let mut g = VoxelGrid::new();
    g.seed_floor_tiles(2, DARK, LIGHT);
    assert_eq!(g.len(), 25);
    assert!(!g.is_solid_at(0, 0, 0));
    assert!(!g.is_solid_at(-2, 0, 2));

    // Checkerboard by (x + z) parity
    assert_eq!(g.get(0, 0, 0).unwrap().color, DARK);
    assert_eq!(g.get(1, 0, 0).unwrap().color, LIGHT);
    assert_eq!(g.get(-1, 0, 2).unwrap().color, LIGHT);
}

#[test]
fn seeding_does_not_clobber_existing_cells() {
    let mut g = VoxelGrid::new();
    g.set(0, 0, 0, Cell::brick(YELLOW, 1));
    g.seed_floor_tiles(2, DARK, LIGHT);
    assert!(g.is_solid_at(0, 0, 0));
    assert_eq!(g.get(0, 0, 0).unwrap().brick, Some(1));
}

#[test]
fn column_top_tracks_highest_solid() {
    let mut g = VoxelGrid::new();
    assert_eq!(g.column_top(4, 4), 0);

    g.set(4, 0, 4, Cell::brick(YELLOW, 1));
    g.set(4, 1, 4, Cell::brick(YELLOW, 2));
    assert_eq!(g.column_top(4, 4), 2);

    // A gap in the stack still reports the highest surface
    g.set(4, 5, 4, Cell::brick(YELLOW, 3));
    assert_eq!(g.column_top(4, 4), 6);

    // Tiles do not support
    g.set(7, 0, 7, Cell::tile(DARK));
    assert_eq!(g.column_top(7, 7), 0);

    // Other columns are unaffected
    assert_eq!(g.column_top(5, 4), 0);
}

#[test]
fn rev_bumps_on_mutation_only() {
    let mut g = VoxelGrid::new();
    let r0 = g.rev();
    g.set(0, 1, 0, Cell::brick(YELLOW, 1));
    let r1 = g.rev();
    assert!(r1 > r0);

    let _ = g.is_solid_at(0, 1, 0);
    let _ = g.column_top(0, 0);
    assert_eq!(g.rev(), r1);

    g.remove(0, 1, 0);
    assert!(g.rev() > r1);
}

#[test]
fn snapshot_reports_all_stored_cells() {
    let mut g = VoxelGrid::new();
    g.seed_floor_tiles(1, DARK, LIGHT);
    g.set(0, 3, 0, Cell::brick(YELLOW, 9));
    let snap = g.snapshot();
    assert_eq!(snap.len(), 10);
    assert!(
        snap.iter()
            .any(|&(pos, c)| pos == (0, 3, 0) && c.brick == Some(9))
    );

    let stats = g.stats();
    assert_eq!(stats.stored_cells, 10);
    assert_eq!(stats.solid_cells, 1);
    assert_eq!(stats.tile_cells, 9);
}
