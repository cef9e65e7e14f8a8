#![allow(missing_docs)]
use core::f32::consts::{FRAC_PI_2, FRAC_PI_4, TAU};
use keel_math::{deg_to_rad, Mat4, Quat, Vec3};

const EPS: f32 = 1e-5;

fn approx_eq3(a: [f32; 3], b: [f32; 3]) {
    for i in 0..3 {
        assert!((a[i] - b[i]).abs() <= EPS, "index {i}: {a:?} vs {b:?}");
    }
}

fn approx_eq16(a: [f32; 16], b: [f32; 16]) {
    for i in 0..16 {
        assert!((a[i] - b[i]).abs() <= EPS, "index {i}: {a:?} vs {b:?}");
    }
}

#[test]
fn rot_z_maps_x_to_y() {
    let y = Mat4::rotation_z(FRAC_PI_2).transform_direction(&Vec3::UNIT_X);
    approx_eq3(y.to_array(), [0.0, 1.0, 0.0]);
}

#[test]
fn rot_y_maps_z_to_x() {
    let x = Mat4::rotation_y(FRAC_PI_2).transform_direction(&Vec3::UNIT_Z);
    approx_eq3(x.to_array(), [1.0, 0.0, 0.0]);
}

#[test]
fn rot_x_maps_y_to_z() {
    let z = Mat4::rotation_x(FRAC_PI_2).transform_direction(&Vec3::UNIT_Y);
    approx_eq3(z.to_array(), [0.0, 0.0, 1.0]);
}

#[test]
fn axis_angle_matches_axis_specific_rotations() {
    approx_eq16(
        Mat4::rotation(FRAC_PI_4, Vec3::UNIT_X).to_array(),
        Mat4::rotation_x(FRAC_PI_4).to_array(),
    );
    approx_eq16(
        Mat4::rotation(FRAC_PI_4, Vec3::UNIT_Y).to_array(),
        Mat4::rotation_y(FRAC_PI_4).to_array(),
    );
    approx_eq16(
        Mat4::rotation(FRAC_PI_4, Vec3::UNIT_Z).to_array(),
        Mat4::rotation_z(FRAC_PI_4).to_array(),
    );
}

#[test]
fn axis_angle_normalizes_the_axis() {
    let skewed = Mat4::rotation(0.9, Vec3::new(0.0, 3.0, 0.0));
    approx_eq16(skewed.to_array(), Mat4::rotation_y(0.9).to_array());
}

#[test]
fn zero_axis_rotation_is_identity() {
    assert_eq!(Mat4::rotation(1.3, Vec3::ZERO), Mat4::identity());
}

#[test]
fn rotation_45_degrees_about_y_matches_analytic_values() {
    let m = Mat4::rotation_y(deg_to_rad(45.0));
    let c = 0.70710678;

    assert!((m.at(0, 0) - c).abs() <= EPS);
    assert!((m.at(0, 2) - c).abs() <= EPS);
    assert!((m.at(2, 0) + c).abs() <= EPS);
    assert!((m.at(2, 2) - c).abs() <= EPS);
    assert_eq!(m.at(1, 1), 1.0);
    assert_eq!(m.at(3, 3), 1.0);
}

#[test]
fn full_turn_is_identity_within_tolerance() {
    approx_eq16(Mat4::rotation_y(TAU).to_array(), Mat4::identity().to_array());
}

#[test]
fn euler_single_axis_matches_axis_rotations() {
    let pitch = Quat::from_euler(Vec3::new(FRAC_PI_2, 0.0, 0.0)).to_mat4();
    approx_eq16(pitch.to_array(), Mat4::rotation_x(FRAC_PI_2).to_array());

    let yaw = Quat::from_euler(Vec3::new(0.0, FRAC_PI_2, 0.0)).to_mat4();
    approx_eq16(yaw.to_array(), Mat4::rotation_y(FRAC_PI_2).to_array());

    let roll = Quat::from_euler(Vec3::new(0.0, 0.0, FRAC_PI_2)).to_mat4();
    approx_eq16(roll.to_array(), Mat4::rotation_z(FRAC_PI_2).to_array());
}

#[test]
fn composed_euler_applies_x_then_y_then_z() {
    let euler = Vec3::new(0.3, -0.4, 0.5);
    let composed = Quat::from_euler(euler).to_mat4();
    let manual = Mat4::rotation_z(0.5)
        .multiply(&Mat4::rotation_y(-0.4))
        .multiply(&Mat4::rotation_x(0.3));
    approx_eq16(composed.to_array(), manual.to_array());
}
