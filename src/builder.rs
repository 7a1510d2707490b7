use brickyard_bricks::{BrickId, ColorId, Footprint};
use brickyard_edit::{BrickRegistry, Rejected};
use brickyard_geom::Vec3;
use brickyard_world::VoxelGrid;

use crate::raycast;

/// Pointer reach in world units (the thrown-gadget range in the source:
/// projectile speed 12 for up to 2 seconds).
pub const REACH: f32 = 24.0;

/// Caster mode, selected externally per pointer action.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CastAction {
    Place,
    Remove,
}

/// Every pointer action resolves to one of these; none of them is an
/// error. Misses and rejections are expected user-facing outcomes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlacementResult {
    Placed {
        id: BrickId,
        origin: (i32, i32, i32),
    },
    Removed {
        id: BrickId,
        cell: (i32, i32, i32),
    },
    Rejected(Rejected),
    Miss,
}

/// Resolve a pointing ray to a target cell and act on the registry.
///
/// The ray walks the grid's solid cells directly; since everything below
/// y=0 is implicitly solid, a ray that reaches the ground plane hits the
/// y=-1 layer and its adjacent cell is the y=0 ground cell, which covers
/// the place-on-ground fallback with no separate plane intersection.
#[allow(clippy::too_many_arguments)]
pub fn cast_and_act(
    grid: &mut VoxelGrid,
    registry: &mut BrickRegistry,
    origin: Vec3,
    dir: Vec3,
    action: CastAction,
    footprint: Footprint,
    rotated: bool,
    color: ColorId,
) -> PlacementResult {
    let Some(hit) = raycast::first_solid_hit(origin, dir, REACH, |x, y, z| grid.is_solid_at(x, y, z))
    else {
        return PlacementResult::Miss;
    };
    log::debug!(
        target: "builder",
        "ray hit {:?} via face {:?}",
        hit.cell, hit.normal
    );
    match action {
        CastAction::Remove => {
            let (x, y, z) = hit.cell;
            let owner = grid.get(x, y, z).and_then(|c| c.brick);
            match owner {
                Some(id) if registry.remove_at(grid, x, y, z) => {
                    PlacementResult::Removed { id, cell: hit.cell }
                }
                _ => PlacementResult::Miss,
            }
        }
        CastAction::Place => {
            // The cell on the outward side of the hit face
            let target = hit.prev;
            match registry.place(grid, target, footprint, rotated, color) {
                Ok(id) => PlacementResult::Placed { id, origin: target },
                Err(rejected) => PlacementResult::Rejected(rejected),
            }
        }
    }
}
