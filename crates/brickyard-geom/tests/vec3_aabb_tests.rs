use brickyard_geom::{Aabb, Vec3};

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn vec3_approx_eq(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps) && approx_eq(a.z, b.z, eps)
}

#[test]
fn vec3_constants() {
    assert!(vec3_approx_eq(Vec3::ZERO, Vec3::new(0.0, 0.0, 0.0), 1e-6));
    assert!(vec3_approx_eq(Vec3::UP, Vec3::new(0.0, 1.0, 0.0), 1e-6));
}

#[test]
fn vec3_add_sub() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(-4.0, 5.0, -6.0);
    let c = a + b;
    assert!(vec3_approx_eq(c, Vec3::new(-3.0, 7.0, -3.0), 1e-6));

    let d = c - a;
    assert!(vec3_approx_eq(d, b, 1e-6));
}

#[test]
fn vec3_dot_length_normalized() {
    let v = Vec3::new(3.0, 4.0, 0.0);
    assert!(approx_eq(v.dot(v), 25.0, 1e-6));
    assert!(approx_eq(v.length(), 5.0, 1e-6));

    let n = v.normalized();
    assert!(approx_eq(n.length(), 1.0, 1e-6));
    assert!(vec3_approx_eq(n, Vec3::new(0.6, 0.8, 0.0), 1e-6));

    // Zero vector normalization is a no-op (not NaN)
    let zn = Vec3::ZERO.normalized();
    assert!(vec3_approx_eq(zn, Vec3::ZERO, 1e-6));
}

#[test]
fn vec3_horizontal_length_ignores_y() {
    let v = Vec3::new(3.0, 100.0, 4.0);
    assert!(approx_eq(v.horizontal_length(), 5.0, 1e-6));
}

#[test]
fn vec3_lerp_endpoints_and_midpoint() {
    let a = Vec3::new(0.0, 0.0, 0.0);
    let b = Vec3::new(2.0, -4.0, 6.0);
    assert!(vec3_approx_eq(a.lerp(b, 0.0), a, 1e-6));
    assert!(vec3_approx_eq(a.lerp(b, 1.0), b, 1e-6));
    assert!(vec3_approx_eq(a.lerp(b, 0.5), Vec3::new(1.0, -2.0, 3.0), 1e-6));
}

#[test]
fn vec3_cell_uses_lower_corner_convention() {
    assert_eq!(Vec3::new(0.5, 0.5, 0.5).cell(), (0, 0, 0));
    assert_eq!(Vec3::new(-0.5, 1.0, 2.9).cell(), (-1, 1, 2));
    assert_eq!(Vec3::new(-1.0, -0.1, 0.0).cell(), (-1, -1, 0));
}

#[test]
fn vec3_is_finite_rejects_nan_and_inf() {
    assert!(Vec3::new(1.0, 2.0, 3.0).is_finite());
    assert!(!Vec3::new(f32::NAN, 0.0, 0.0).is_finite());
    assert!(!Vec3::new(0.0, f32::INFINITY, 0.0).is_finite());
}

#[test]
fn aabb_from_center_half_roundtrip() {
    let b = Aabb::from_center_half(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.3, 0.85, 0.3));
    assert!(vec3_approx_eq(b.min, Vec3::new(0.7, 1.15, 2.7), 1e-6));
    assert!(vec3_approx_eq(b.max, Vec3::new(1.3, 2.85, 3.3), 1e-6));
    assert!(vec3_approx_eq(b.center(), Vec3::new(1.0, 2.0, 3.0), 1e-6));
}

#[test]
fn aabb_overlap_cases() {
    let a = Aabb::unit_cell(0, 0, 0);
    let b = Aabb::unit_cell(2, 0, 0);
    assert!(!a.overlaps(b));

    // Shared face counts as overlap (closed intervals)
    let c = Aabb::unit_cell(1, 0, 0);
    assert!(a.overlaps(c));

    let body = Aabb::from_center_half(Vec3::new(0.5, 0.85, 0.5), Vec3::new(0.3, 0.85, 0.3));
    assert!(body.overlaps(a));
    assert!(!body.overlaps(b));
}

#[test]
fn aabb_unit_cell_spans_one_unit() {
    let c = Aabb::unit_cell(-2, 3, 5);
    assert!(vec3_approx_eq(c.min, Vec3::new(-2.0, 3.0, 5.0), 1e-6));
    assert!(vec3_approx_eq(c.max, Vec3::new(-1.0, 4.0, 6.0), 1e-6));
}
