#![allow(missing_docs)]
use core::f32::consts::{FRAC_PI_2, PI};
use keel_math::{Mat4, Quat, Vec3};

const EPS: f32 = 1e-5;

fn approx_eq16(a: [f32; 16], b: [f32; 16]) {
    for i in 0..16 {
        assert!((a[i] - b[i]).abs() <= EPS, "index {i}: {a:?} vs {b:?}");
    }
}

fn approx_eq3(a: [f32; 3], b: [f32; 3]) {
    for i in 0..3 {
        assert!((a[i] - b[i]).abs() <= EPS, "index {i}: {a:?} vs {b:?}");
    }
}

#[test]
fn from_euler_zero_is_identity() {
    let q = Quat::from_euler(Vec3::ZERO);
    assert_eq!(q.to_array(), [0.0, 0.0, 0.0, 1.0]);
    assert_eq!(q.to_mat4(), Mat4::identity());
}

#[test]
fn identity_converts_to_identity_matrix() {
    assert_eq!(Quat::identity().to_mat4(), Mat4::identity());
    assert_eq!(Mat4::from_quat(&Quat::identity()), Mat4::identity());
}

#[test]
fn axis_angle_quat_matches_matrix_builder() {
    let q = Quat::from_axis_angle(Vec3::UNIT_Z, 0.7);
    approx_eq16(q.to_mat4().to_array(), Mat4::rotation_z(0.7).to_array());

    let tilted = Quat::from_axis_angle(Vec3::new(1.0, 1.0, 0.0), 1.2);
    let matrix = Mat4::rotation(1.2, Vec3::new(1.0, 1.0, 0.0));
    approx_eq16(tilted.to_mat4().to_array(), matrix.to_array());
}

#[test]
fn from_mat4_recovers_each_dominant_component() {
    let cases = [
        (Mat4::identity(), 3),
        (Mat4::rotation_x(PI), 0),
        (Mat4::rotation_y(PI), 1),
        (Mat4::rotation_z(PI), 2),
    ];
    for (matrix, dominant) in cases {
        let q = Quat::from_mat4(&matrix);
        let components = q.to_array();
        assert!(
            (components[dominant].abs() - 1.0).abs() <= EPS,
            "component {dominant} of {components:?} should dominate"
        );
        assert!((q.dot(&q) - 1.0).abs() <= EPS, "norm of {components:?}");
        approx_eq16(q.to_mat4().to_array(), matrix.to_array());
    }
}

#[test]
fn matrix_round_trip_preserves_rotation() {
    let eulers = [
        Vec3::new(0.3, 0.4, 0.5),
        Vec3::new(-1.0, 0.2, 2.5),
        Vec3::new(0.0, -1.2, -3.0),
    ];
    for euler in eulers {
        let q = Quat::from_euler(euler);
        let recovered = Quat::from_mat4(&q.to_mat4());

        // Quaternions double-cover rotations; compare up to sign.
        let alignment = q.dot(&recovered).abs();
        assert!((alignment - 1.0).abs() <= EPS, "alignment {alignment} for {euler:?}");
        approx_eq16(recovered.to_mat4().to_array(), q.to_mat4().to_array());
    }
}

#[test]
fn to_euler_inverts_from_euler_away_from_poles() {
    let eulers = [
        Vec3::new(0.3, 0.4, 0.5),
        Vec3::new(-1.0, 0.2, 2.5),
        Vec3::new(0.0, -1.2, -3.0),
    ];
    for euler in eulers {
        let round_trip = Quat::from_euler(euler).to_euler();
        approx_eq3(round_trip.to_array(), euler.to_array());
    }
}

#[test]
fn pole_pitch_survives_euler_round_trip() {
    // At ±π/2 pitch the x and z rotations collapse into one degree of
    // freedom; the angles themselves are not unique there, so compare the
    // recomposed rotation instead of the raw angle triple.
    for sign in [1.0_f32, -1.0] {
        let q = Quat::from_euler(Vec3::new(0.0, sign * FRAC_PI_2, 0.0));
        let euler = q.to_euler();
        assert!(
            (euler.y() - sign * FRAC_PI_2).abs() <= 1e-3,
            "pitch {} at sign {sign}",
            euler.y()
        );

        let original = q.to_mat4().to_array();
        let rebuilt = Quat::from_euler(euler).to_mat4().to_array();
        for i in 0..16 {
            assert!(
                (original[i] - rebuilt[i]).abs() <= 5e-3,
                "index {i}: {original:?} vs {rebuilt:?}"
            );
        }
    }
}

#[test]
fn multiply_operator_matches_method() {
    let a = Quat::from_axis_angle(Vec3::UNIT_X, 0.4);
    let b = Quat::from_axis_angle(Vec3::UNIT_Y, -0.9);
    assert_eq!((a * b).to_array(), a.multiply(&b).to_array());
}

#[test]
fn multiply_is_homomorphic_to_matrix_product() {
    let a = Quat::from_euler(Vec3::new(0.2, -0.3, 0.4));
    let b = Quat::from_axis_angle(Vec3::UNIT_Y, 1.1);

    let combined = a.multiply(&b).to_mat4();
    let product = a.to_mat4().multiply(&b.to_mat4());
    approx_eq16(combined.to_array(), product.to_array());
}

#[test]
fn normalize_recovers_unit_length() {
    let stretched = Quat::new(0.2, -0.4, 0.1, 3.0);
    let unit = stretched.normalize();
    assert!((unit.dot(&unit) - 1.0).abs() <= EPS);

    assert_eq!(Quat::new(0.0, 0.0, 0.0, 0.0).normalize().to_array(), [0.0, 0.0, 0.0, 1.0]);
}
