// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use core::f64::consts::{FRAC_PI_2, PI};
use warp_math::math::{self, Mat3, Vec3};

fn approx_eq(a: f64, b: f64) {
    let diff = (a - b).abs();
    assert!(diff <= 1e-12, "expected {b}, got {a} (diff {diff})");
}

fn approx_eq3(a: [f64; 3], b: [f64; 3]) {
    const ABS_TOL: f64 = 1e-12;
    const REL_TOL: f64 = 1e-12;
    for i in 0..3 {
        let ai = a[i];
        let bi = b[i];
        let diff = (ai - bi).abs();
        let scale = ai.abs().max(bi.abs());
        let tol = ABS_TOL.max(REL_TOL * scale);
        assert!(
            diff <= tol,
            "index {i}: {a:?} vs {b:?}, diff={diff}, tol={tol} (scale={scale})"
        );
    }
}

#[test]
fn dot_length_and_distance() {
    let v = Vec3::new(2.0, -3.0, 6.0);
    assert_eq!(v.dot(&v), 49.0);
    assert_eq!(v.length_squared(), 49.0);
    assert_eq!(v.length(), 7.0);
    assert_eq!(math::dot(&v, &Vec3::UNIT_Z), 6.0);

    let a = Vec3::new(1.0, 1.0, 1.0);
    let b = Vec3::new(4.0, 5.0, 1.0);
    assert_eq!(a.distance_squared(&b), 25.0);
    assert_eq!(math::distance(&a, &b), 5.0);
    assert_eq!(math::distance_squared(&b, &a), 25.0);
}

#[test]
fn dot_and_length_ignore_w() {
    let mut v = Vec3::new(3.0, 4.0, 0.0);
    v.set_w(100.0);
    assert_eq!(v.length(), 5.0);
    assert_eq!(v.dot(&v), 25.0);
    assert_eq!(v.cross(&Vec3::UNIT_Z).w(), 0.0);
}

#[test]
fn safe_norm_guards_degenerate_lengths() {
    assert_eq!(Vec3::new(0.0, 3.0, 4.0).safe_norm(), 5.0);
    assert_eq!(Vec3::new(1e-9, 0.0, 0.0).safe_norm(), 0.0);
    assert_eq!(Vec3::ZERO.safe_norm(), 0.0);
}

#[test]
fn normalize_yields_unit_length() {
    let n = Vec3::new(3.0, -4.0, 12.0).normalize();
    approx_eq(n.length(), 1.0);
    approx_eq3(n.to_array(), [3.0 / 13.0, -4.0 / 13.0, 12.0 / 13.0]);
}

#[test]
fn normalize_zero_vector_is_nan() {
    let n = Vec3::ZERO.normalize();
    assert!(n.to_array().iter().all(|c| c.is_nan()));
}

#[test]
fn safe_normalize_zero_vector_falls_back_to_unit_x() {
    let n = Vec3::ZERO.safe_normalize();
    assert_eq!(n.to_array(), [1.0, 0.0, 0.0]);
    assert_eq!(n.w(), 0.0);

    let mut m = Vec3::new(1e-20, -1e-20, 0.0);
    m.set_w(5.0);
    m.safe_normalize_mut();
    assert_eq!(m, Vec3::UNIT_X);
}

#[test]
fn safe_normalize_divides_by_length() {
    let n = Vec3::new(0.0, 0.0, -10.0).safe_normalize();
    assert_eq!(n.to_array(), [0.0, 0.0, -1.0]);
    let n = Vec3::new(1e-10, 2e-10, 2e-10).safe_normalize();
    approx_eq(n.length(), 1.0);
}

#[test]
fn cross_is_right_handed_and_anticommutative() {
    assert_eq!(Vec3::UNIT_X.cross(&Vec3::UNIT_Y), Vec3::UNIT_Z);
    assert_eq!(Vec3::UNIT_Y.cross(&Vec3::UNIT_Z), Vec3::UNIT_X);
    assert_eq!(Vec3::UNIT_Z.cross(&Vec3::UNIT_X), Vec3::UNIT_Y);

    let a = Vec3::new(1.5, -2.0, 0.25);
    let b = Vec3::new(-3.0, 0.5, 4.0);
    assert_eq!(math::cross(&a, &b), -b.cross(&a));
    approx_eq(a.dot(&a.cross(&b)), 0.0);
    approx_eq(b.dot(&a.cross(&b)), 0.0);
}

#[test]
fn triple_product_is_signed_volume() {
    let v = Vec3::new(2.0, 0.0, 0.0);
    let a = Vec3::new(0.0, 3.0, 0.0);
    let b = Vec3::new(0.0, 0.0, 4.0);
    assert_eq!(v.triple(&a, &b), 24.0);
    assert_eq!(math::triple(&v, &b, &a), -24.0);
    assert_eq!(v.triple(&v, &b), 0.0);
}

#[test]
fn rotate_about_z_maps_x_to_y() {
    let r = Vec3::UNIT_X.rotate(&Vec3::UNIT_Z, FRAC_PI_2);
    approx_eq3(r.to_array(), [0.0, 1.0, 0.0]);
}

#[test]
fn rotate_about_arbitrary_unit_axis() {
    let axis = Vec3::new(1.0, 1.0, 1.0).normalize();
    // A third of a turn about the diagonal cycles the basis vectors.
    let r = Vec3::UNIT_X.rotate(&axis, 2.0 * PI / 3.0);
    approx_eq3(r.to_array(), [0.0, 1.0, 0.0]);

    // The component along the axis is preserved.
    let v = Vec3::new(0.3, -2.0, 5.0);
    let r = v.rotate(&axis, 0.7);
    approx_eq(r.dot(&axis), v.dot(&axis));
    approx_eq(r.length(), v.length());
}

#[test]
fn rotate_with_non_unit_axis_shears() {
    let v = Vec3::new(1.0, 0.0, 1.0);
    let r = v.rotate(&Vec3::new(0.0, 0.0, 2.0), PI);
    // Parallel part comes out as (0, 0, 4) rather than (0, 0, 1).
    approx_eq3(r.to_array(), [-1.0, 0.0, 7.0]);
    assert!((r.length() - v.length()).abs() > 1.0);
}

#[test]
fn angle_between_vectors() {
    approx_eq(Vec3::UNIT_X.angle(&Vec3::UNIT_Y), FRAC_PI_2);
    approx_eq(math::angle(&Vec3::UNIT_X, &Vec3::new(-2.0, 0.0, 0.0)), PI);
    let v = Vec3::new(0.1, 0.7, -0.3);
    assert!(v.angle(&v.scale(3.0)) < 1e-7);
}

#[test]
fn angle_with_zero_vector_is_nan() {
    assert!(Vec3::UNIT_X.angle(&Vec3::ZERO).is_nan());
}

#[test]
fn lerp_hits_endpoints_and_midpoint() {
    let a = Vec3::new(0.1, -7.3, 2.2);
    let b = Vec3::new(0.3, 1.9, -8.8);
    assert_eq!(a.lerp(&b, 0.0), a);
    assert_eq!(a.lerp(&b, 1.0), b);
    approx_eq3(
        math::lerp(&a, &b, 0.5).to_array(),
        [0.2, (-7.3 + 1.9) / 2.0, (2.2 - 8.8) / 2.0],
    );
}

#[test]
fn lerp_extrapolates_outside_unit_interval() {
    let a = Vec3::ZERO;
    let b = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(a.lerp(&b, 2.0).to_array(), [2.0, 4.0, 6.0]);
    assert_eq!(a.lerp(&b, -1.0).to_array(), [-1.0, -2.0, -3.0]);
}

#[test]
fn absolute_drops_signs() {
    let v = Vec3::new(-1.0, 2.0, -0.5).absolute();
    assert_eq!(v.to_array(), [1.0, 2.0, 0.5]);
}

#[test]
fn skew_symmetric_rows_implement_cross_product() {
    let a = Vec3::new(1.0, -2.0, 3.0);
    let [r0, r1, r2] = a.skew_symmetric_rows();
    assert_eq!(r0.to_array(), [0.0, -3.0, -2.0]);
    assert_eq!(r1.to_array(), [3.0, 0.0, -1.0]);
    assert_eq!(r2.to_array(), [2.0, 1.0, 0.0]);

    let mut o0 = Vec3::ZERO;
    let mut o1 = Vec3::ZERO;
    let mut o2 = Vec3::ZERO;
    o2.set_w(4.0);
    a.skew_symmetric_into(&mut o0, &mut o1, &mut o2);
    assert_eq!([o0, o1, o2], [r0, r1, r2]);

    let v = Vec3::new(0.5, 4.0, -1.5);
    approx_eq3(
        Mat3::skew_symmetric(&a).mul_vec3(&v).to_array(),
        a.cross(&v).to_array(),
    );
}
