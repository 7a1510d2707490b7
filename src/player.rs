use brickyard_geom::Vec3;
use brickyard_world::VoxelGrid;
use serde::Deserialize;

use crate::input::InputFrame;

/// Frame-loop dt ceiling; the app clamps before calling the resolver so a
/// frame hitch cannot tunnel the body through geometry.
pub const MAX_TICK_DT: f32 = 1.0 / 60.0;

// Collision sampling inset: a box exactly touching a cell boundary does
// not overlap the neighbor cell.
const COLLIDE_EPS: f32 = 1e-4;
const NUDGE_STEP: f32 = 0.01;
const SNAP_NUDGE_STEP: f32 = 0.002;
const MAX_NUDGES: u32 = 64;
const STEP_PROBE: f32 = 0.1;
// Grounded when the feet are within this gap of the supporting surface.
const GROUND_PROBE: f32 = 0.05;
const CENTER_SPEED_MAX: f32 = 0.18;
const CENTER_RATE: f32 = 0.18;

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct WalkerTuning {
    pub speed: f32,        // walk speed (units/s)
    pub run_mult: f32,     // multiplier while the run intent is held
    pub accel: f32,        // horizontal velocity approach rate
    pub jump_speed: f32,   // initial jump velocity
    pub gravity: f32,      // positive, subtracted each tick
    pub ground_friction: f32,
    /// Max automatic step onto a ledge. Unit cells rise 1.0, so anything
    /// in (1.0, 2.0) means one-cell ledges climb and two-cell walls block.
    pub step_height: f32,
}

impl Default for WalkerTuning {
    fn default() -> Self {
        Self {
            speed: 4.0,
            run_mult: 1.6,
            accel: 12.0,
            jump_speed: 6.4,
            gravity: 12.0,
            ground_friction: 0.84,
            step_height: 1.1,
        }
    }
}

/// What a single resolve pass decided, for the caller's jump/friction and
/// diagnostics.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResolveOutcome {
    pub grounded: bool,
    pub stepped_up: bool,
    /// Feet height above the best support under the footprint.
    pub support_gap: f32,
}

/// The single player body: an AABB of fixed half extents walking the grid.
#[derive(Debug)]
pub struct Walker {
    pub pos: Vec3, // box center
    pub vel: Vec3,
    pub on_ground: bool,
    pub yaw: f32, // degrees, supplied by the input collaborator
    pub half: Vec3,
    pub tuning: WalkerTuning,
}

impl Walker {
    pub fn new(spawn: Vec3) -> Self {
        Self::with_tuning(spawn, WalkerTuning::default())
    }

    pub fn with_tuning(spawn: Vec3, tuning: WalkerTuning) -> Self {
        Self {
            pos: spawn,
            vel: Vec3::ZERO,
            on_ground: false,
            yaw: -90.0,
            half: Vec3::new(0.3, 0.85, 0.3),
            tuning,
        }
    }

    #[inline]
    pub fn feet_y(&self) -> f32 {
        self.pos.y - self.half.y
    }

    pub fn eye_position(&self) -> Vec3 {
        self.pos + Vec3::new(0.0, 0.75, 0.0)
    }

    /// Horizontal facing direction from the current yaw.
    pub fn forward(&self) -> Vec3 {
        let yaw_rad = self.yaw.to_radians();
        Vec3::new(yaw_rad.cos(), 0.0, yaw_rad.sin())
    }

    /// One simulation tick: intent to velocity, then the collision sweep.
    pub fn update(&mut self, frame: &InputFrame, dt: f32, grid: &VoxelGrid) -> ResolveOutcome {
        self.yaw = frame.yaw_deg;
        let fwd = self.forward();
        let right = fwd.cross(Vec3::UP);
        let mut wish = fwd * frame.forward + right * frame.strafe;
        if wish.length() > 1.0 {
            wish = wish.normalized();
        }
        let run = if frame.run { self.tuning.run_mult } else { 1.0 };
        let target = wish * (self.tuning.speed * run);

        // Exponential approach keeps starts/stops responsive but smooth
        let k = 1.0 - (-self.tuning.accel * dt).exp();
        self.vel.x += (target.x - self.vel.x) * k;
        self.vel.z += (target.z - self.vel.z) * k;
        self.vel.y -= self.tuning.gravity * dt;

        if frame.jump && self.on_ground {
            self.vel.y = self.tuning.jump_speed;
            self.on_ground = false;
        }

        let out = resolve_movement(
            &mut self.pos,
            &mut self.vel,
            dt,
            self.half,
            self.tuning.step_height,
            grid,
        );
        self.on_ground = out.grounded;
        if self.on_ground {
            self.vel.x *= self.tuning.ground_friction;
            self.vel.z *= self.tuning.ground_friction;
        }
        out
    }
}

/// Does the box centered at `center` overlap any solid cell?
pub fn collides_at(grid: &VoxelGrid, center: Vec3, half: Vec3) -> bool {
    let min_x = (center.x - half.x + COLLIDE_EPS).floor() as i32;
    let max_x = (center.x + half.x - COLLIDE_EPS).floor() as i32;
    let min_y = (center.y - half.y + COLLIDE_EPS).floor() as i32;
    let max_y = (center.y + half.y - COLLIDE_EPS).floor() as i32;
    let min_z = (center.z - half.z + COLLIDE_EPS).floor() as i32;
    let max_z = (center.z + half.z - COLLIDE_EPS).floor() as i32;
    for y in min_y..=max_y {
        for z in min_z..=max_z {
            for x in min_x..=max_x {
                if grid.is_solid_at(x, y, z) {
                    return true;
                }
            }
        }
    }
    false
}

/// Move the body by `vel * dt`, resolving one axis at a time in the fixed
/// order X, Z, Y; each axis resolves against the already-resolved position
/// of the prior axes so corner hits settle deterministically. Landing and
/// ceiling hits zero the vertical velocity in place.
pub fn resolve_movement(
    pos: &mut Vec3,
    vel: &mut Vec3,
    dt: f32,
    half: Vec3,
    step_height: f32,
    grid: &VoxelGrid,
) -> ResolveOutcome {
    let mut p = *pos;
    let mut stepped_up = false;

    let (px, sx) = sweep_x(grid, p, half, p.x + vel.x * dt, step_height);
    p = px;
    stepped_up |= sx;

    let (pz, sz) = sweep_z(grid, p, half, p.z + vel.z * dt, step_height);
    p = pz;
    stepped_up |= sz;

    let mut landed = false;
    let ty = p.y + vel.y * dt;
    let probe = Vec3::new(p.x, ty, p.z);
    if collides_at(grid, probe, half) {
        if vel.y > 0.0 {
            // Head hit a ceiling: clamp just below it and stop ascending
            let mut y = (ty + half.y).floor() - half.y - COLLIDE_EPS;
            let mut n = 0;
            while collides_at(grid, Vec3::new(p.x, y, p.z), half) && n < MAX_NUDGES {
                y -= NUDGE_STEP;
                n += 1;
            }
            if n == MAX_NUDGES {
                log::warn!(
                    target: "physics",
                    "ceiling unstick cap hit at ({:.2}, {:.2}, {:.2})",
                    p.x, y, p.z
                );
            }
            p.y = y;
            vel.y = 0.0;
        } else {
            // Landing: snap exactly onto the tallest stack under the
            // footprint, not merely to the collision boundary
            let top = support_top(grid, p, half) as f32;
            let mut y = top + half.y;
            let mut n = 0;
            while collides_at(grid, Vec3::new(p.x, y, p.z), half) && n < MAX_NUDGES {
                y += SNAP_NUDGE_STEP;
                n += 1;
            }
            p.y = y;
            vel.y = 0.0;
            landed = true;
        }
    } else {
        p.y = ty;
    }

    let gap = (p.y - half.y) - support_top(grid, p, half) as f32;
    let mut grounded = landed || gap < GROUND_PROBE;

    // Standing still (or just landed): ease toward the center of the cell
    // column so the body does not hover at brick edges. Smooth on purpose;
    // an instant snap reads as jitter.
    if grounded && vel.horizontal_length() < CENTER_SPEED_MAX {
        let cx = p.x.floor() + 0.5;
        let cz = p.z.floor() + 0.5;
        p.x += (cx - p.x) * CENTER_RATE;
        p.z += (cz - p.z) * CENTER_RATE;
    }

    // The box never sinks below sitting on the implicit ground
    if p.y < half.y {
        p.y = half.y;
        if vel.y < 0.0 {
            vel.y = 0.0;
        }
        grounded = true;
    }

    *pos = p;
    ResolveOutcome {
        grounded,
        stepped_up,
        support_gap: gap,
    }
}

fn sweep_x(
    grid: &VoxelGrid,
    from: Vec3,
    half: Vec3,
    target: f32,
    step_height: f32,
) -> (Vec3, bool) {
    let mut to = Vec3::new(target, from.y, from.z);
    let delta = target - from.x;
    if delta == 0.0 || !collides_at(grid, to, half) {
        return (to, false);
    }
    if let Some(up) = step_up(grid, from, to, half, step_height) {
        return (up, true);
    }
    let dir = delta.signum();
    to.x = if dir > 0.0 {
        (to.x + half.x).floor() - half.x - COLLIDE_EPS
    } else {
        (to.x - half.x).floor() + 1.0 + half.x + COLLIDE_EPS
    };
    let mut n = 0;
    while collides_at(grid, to, half) && n < MAX_NUDGES {
        to.x -= dir * NUDGE_STEP;
        n += 1;
    }
    if n == MAX_NUDGES {
        log::warn!(
            target: "physics",
            "x unstick cap hit at ({:.2}, {:.2}, {:.2})",
            to.x, to.y, to.z
        );
    }
    (to, false)
}

fn sweep_z(
    grid: &VoxelGrid,
    from: Vec3,
    half: Vec3,
    target: f32,
    step_height: f32,
) -> (Vec3, bool) {
    let mut to = Vec3::new(from.x, from.y, target);
    let delta = target - from.z;
    if delta == 0.0 || !collides_at(grid, to, half) {
        return (to, false);
    }
    if let Some(up) = step_up(grid, from, to, half, step_height) {
        return (up, true);
    }
    let dir = delta.signum();
    to.z = if dir > 0.0 {
        (to.z + half.z).floor() - half.z - COLLIDE_EPS
    } else {
        (to.z - half.z).floor() + 1.0 + half.z + COLLIDE_EPS
    };
    let mut n = 0;
    while collides_at(grid, to, half) && n < MAX_NUDGES {
        to.z -= dir * NUDGE_STEP;
        n += 1;
    }
    if n == MAX_NUDGES {
        log::warn!(
            target: "physics",
            "z unstick cap hit at ({:.2}, {:.2}, {:.2})",
            to.x, to.y, to.z
        );
    }
    (to, false)
}

/// Probe upward from the current stance in small increments; the first
/// clear height wins. A miss falls back to the wall slide in the caller.
fn step_up(grid: &VoxelGrid, base: Vec3, target: Vec3, half: Vec3, max_step: f32) -> Option<Vec3> {
    let mut probe = Vec3::new(target.x, base.y, target.z);
    let mut h = STEP_PROBE;
    while h <= max_step + COLLIDE_EPS {
        probe.y = base.y + h;
        if !collides_at(grid, probe, half) {
            return Some(probe);
        }
        h += STEP_PROBE;
    }
    None
}

/// Top surface of the best support under the box footprint: the highest
/// solid cell at or below the feet in any spanned column (0 when only the
/// implicit ground supports it). Cells above the feet are overhangs, not
/// support, and must never pull the body upward.
fn support_top(grid: &VoxelGrid, p: Vec3, half: Vec3) -> i32 {
    let feet_cell = ((p.y - half.y) + COLLIDE_EPS).floor() as i32;
    let start_y = feet_cell.min(grid.max_solid_y());
    if start_y < 0 {
        return 0;
    }
    let min_x = (p.x - half.x + COLLIDE_EPS).floor() as i32;
    let max_x = (p.x + half.x - COLLIDE_EPS).floor() as i32;
    let min_z = (p.z - half.z + COLLIDE_EPS).floor() as i32;
    let max_z = (p.z + half.z - COLLIDE_EPS).floor() as i32;
    let mut top = 0;
    for cx in min_x..=max_x {
        for cz in min_z..=max_z {
            for y in (0..=start_y).rev() {
                if grid.is_solid_at(cx, y, cz) {
                    top = top.max(y + 1);
                    break;
                }
            }
        }
    }
    top
}
