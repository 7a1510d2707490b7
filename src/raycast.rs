use brickyard_geom::Vec3;

/// First solid cell along a ray, plus the cell the ray was in just before
/// entering it (the natural target for adjacent placement) and the hit
/// face's outward normal.
#[derive(Clone, Copy, Debug)]
pub struct RayHit {
    pub cell: (i32, i32, i32),
    pub prev: (i32, i32, i32),
    pub normal: (i32, i32, i32),
}

#[inline]
fn inv_or_max(v: f32) -> f32 {
    if v.abs() < 1e-8 { f32::MAX } else { 1.0 / v.abs() }
}

/// Voxel DDA walk from `origin` along `dir` up to `max_dist`, stopping at
/// the first cell where `is_solid` answers true. Degenerate rays
/// (zero-length or non-finite) are a miss, never an error.
pub fn first_solid_hit<F>(origin: Vec3, dir: Vec3, max_dist: f32, mut is_solid: F) -> Option<RayHit>
where
    F: FnMut(i32, i32, i32) -> bool,
{
    if !origin.is_finite() || !dir.is_finite() {
        return None;
    }
    let len = dir.length();
    if len < 1e-6 {
        return None;
    }
    let d = dir / len;

    let (mut vx, mut vy, mut vz) = origin.cell();

    let step_x: i32 = if d.x > 0.0 {
        1
    } else if d.x < 0.0 {
        -1
    } else {
        0
    };
    let step_y: i32 = if d.y > 0.0 {
        1
    } else if d.y < 0.0 {
        -1
    } else {
        0
    };
    let step_z: i32 = if d.z > 0.0 {
        1
    } else if d.z < 0.0 {
        -1
    } else {
        0
    };

    let inv_x = inv_or_max(d.x);
    let inv_y = inv_or_max(d.y);
    let inv_z = inv_or_max(d.z);
    let td_x = if step_x == 0 { f32::MAX } else { inv_x };
    let td_y = if step_y == 0 { f32::MAX } else { inv_y };
    let td_z = if step_z == 0 { f32::MAX } else { inv_z };

    // Distance along the ray to the first boundary crossing per axis
    let fx = origin.x - origin.x.floor();
    let fy = origin.y - origin.y.floor();
    let fz = origin.z - origin.z.floor();
    let mut tm_x = match step_x {
        1 => (1.0 - fx) * inv_x,
        -1 => fx * inv_x,
        _ => f32::MAX,
    };
    let mut tm_y = match step_y {
        1 => (1.0 - fy) * inv_y,
        -1 => fy * inv_y,
        _ => f32::MAX,
    };
    let mut tm_z = match step_z {
        1 => (1.0 - fz) * inv_z,
        -1 => fz * inv_z,
        _ => f32::MAX,
    };

    let (mut prev_x, mut prev_y, mut prev_z) = (vx, vy, vz);
    let mut t = 0.0f32;

    for _ in 0..512 {
        if t > max_dist {
            break;
        }
        if is_solid(vx, vy, vz) {
            // Face normal from the last cell transition
            let (dx, dy, dz) = (vx - prev_x, vy - prev_y, vz - prev_z);
            let normal = match (dx, dy, dz) {
                (1, _, _) => (-1, 0, 0),
                (-1, _, _) => (1, 0, 0),
                (_, 1, _) => (0, -1, 0),
                (_, -1, _) => (0, 1, 0),
                (_, _, 1) => (0, 0, -1),
                (_, _, -1) => (0, 0, 1),
                _ => (0, 0, 0),
            };
            return Some(RayHit {
                cell: (vx, vy, vz),
                prev: (prev_x, prev_y, prev_z),
                normal,
            });
        }
        prev_x = vx;
        prev_y = vy;
        prev_z = vz;
        // Advance through the nearest boundary
        if tm_x < tm_y {
            if tm_x < tm_z {
                vx += step_x;
                t = tm_x;
                tm_x += td_x;
            } else {
                vz += step_z;
                t = tm_z;
                tm_z += td_z;
            }
        } else if tm_y < tm_z {
            vy += step_y;
            t = tm_y;
            tm_y += td_y;
        } else {
            vz += step_z;
            t = tm_z;
            tm_z += td_z;
        }
    }
    None
}
