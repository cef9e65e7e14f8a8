// SPDX-License-Identifier: Apache-2.0

#![allow(missing_docs)]
use core::f32::consts::FRAC_PI_2;
use keel_geom::{DecomposeError, Transform};
use keel_math::{Mat4, Vec3};

const EPS: f32 = 1e-4;

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
fn identity_decomposes_to_identity() {
    let decomposed = Transform::from_mat4(&Mat4::identity()).expect("identity decomposes");
    assert_eq!(decomposed, Transform::identity());
}

#[test]
fn translation_and_uniform_scale_decompose_exactly() {
    let matrix = Mat4::translation(Vec3::new(1.0, 2.0, 3.0))
        .multiply(&Mat4::scale(Vec3::new(2.0, 2.0, 2.0)));

    let decomposed = Transform::from_mat4(&matrix).expect("affine TRS decomposes");
    assert_eq!(decomposed.translation().to_array(), [1.0, 2.0, 3.0]);
    assert_eq!(decomposed.rotation().to_array(), [0.0, 0.0, 0.0]);
    assert_eq!(decomposed.scale().to_array(), [2.0, 2.0, 2.0]);

    assert_eq!(decomposed.to_mat4().to_array(), matrix.to_array());
}

#[test]
fn rotation_only_matrix_round_trips() {
    let euler = Vec3::new(0.3, -0.4, 0.5);
    let matrix = Transform::new(Vec3::ZERO, euler, Vec3::ONE).to_mat4();

    let decomposed = Transform::from_mat4(&matrix).expect("rotation decomposes");
    assert_eq!(decomposed.translation().to_array(), [0.0, 0.0, 0.0]);
    approx_eq3(decomposed.rotation().to_array(), euler.to_array());
    approx_eq3(decomposed.scale().to_array(), [1.0, 1.0, 1.0]);
}

#[test]
fn full_trs_round_trips_through_the_matrix() {
    let source = Transform::new(
        Vec3::new(4.0, -2.0, 0.5),
        Vec3::new(0.2, 0.5, -1.0),
        Vec3::new(2.0, 0.5, 1.5),
    );
    let matrix = source.to_mat4();

    let decomposed = Transform::from_mat4(&matrix).expect("affine TRS decomposes");
    assert_eq!(decomposed.translation().to_array(), [4.0, -2.0, 0.5]);
    approx_eq3(decomposed.rotation().to_array(), source.rotation().to_array());
    approx_eq3(decomposed.scale().to_array(), source.scale().to_array());

    approx_eq16(decomposed.to_mat4().to_array(), matrix.to_array());
}

#[test]
fn homogeneous_scaling_is_normalized_away() {
    let source = Transform::new(
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(0.1, -0.2, 0.3),
        Vec3::new(1.5, 1.0, 0.5),
    );
    let matrix = source.to_mat4();
    let doubled = matrix.multiply_scalar(2.0);

    let plain = Transform::from_mat4(&matrix).expect("plain matrix decomposes");
    let rescaled = Transform::from_mat4(&doubled).expect("scaled matrix decomposes");
    assert_eq!(rescaled.translation().to_array(), plain.translation().to_array());
    assert_eq!(rescaled.rotation().to_array(), plain.rotation().to_array());
    assert_eq!(rescaled.scale().to_array(), plain.scale().to_array());
}

#[test]
fn perspective_row_is_stripped_before_decomposition() {
    let source = Transform::new(
        Vec3::new(-1.0, 0.5, 2.0),
        Vec3::new(0.4, 0.1, -0.6),
        Vec3::new(1.0, 2.0, 0.75),
    );
    let clean = source.to_mat4();
    let mut dirty = clean;
    dirty.set(3, 0, 0.25);
    dirty.set(3, 1, -0.5);
    dirty.set(3, 2, 0.125);

    let from_clean = Transform::from_mat4(&clean).expect("clean matrix decomposes");
    let from_dirty = Transform::from_mat4(&dirty).expect("projective terms are dropped");
    assert_eq!(from_dirty, from_clean);
}

#[test]
fn zero_homogeneous_scale_is_rejected() {
    let mut matrix = Mat4::identity();
    matrix.set(3, 3, 0.0);
    assert_eq!(
        Transform::from_mat4(&matrix),
        Err(DecomposeError::Unnormalizable)
    );
}

#[test]
fn degenerate_axis_is_rejected_with_its_index() {
    let matrix = Mat4::translation(Vec3::new(1.0, 2.0, 3.0))
        .multiply(&Mat4::scale(Vec3::new(2.0, 0.0, 1.0)));
    assert_eq!(
        Transform::from_mat4(&matrix),
        Err(DecomposeError::SingularAxis { axis: 1 })
    );

    let flat_z = Mat4::scale(Vec3::new(1.0, 1.0, 0.0));
    assert_eq!(
        Transform::from_mat4(&flat_z),
        Err(DecomposeError::SingularAxis { axis: 2 })
    );
}

#[test]
fn exact_quarter_turn_pitch_decomposes_cleanly() {
    // A handwritten 90° yaw matrix has exact zeros, so the pole extraction
    // resolves to a pure y rotation.
    #[rustfmt::skip]
    let matrix = Mat4::new([
        0.0, 0.0, -1.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        1.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ]);

    let decomposed = Transform::from_mat4(&matrix).expect("pure rotation decomposes");
    let rotation = decomposed.rotation();
    assert_eq!(rotation.x(), 0.0);
    assert_eq!(rotation.z(), 0.0);
    assert!((rotation.y() - FRAC_PI_2).abs() <= 1e-6, "pitch {}", rotation.y());
    approx_eq3(decomposed.scale().to_array(), [1.0, 1.0, 1.0]);

    approx_eq16(decomposed.to_mat4().to_array(), matrix.to_array());
}

#[test]
fn near_pole_pitch_still_round_trips_the_matrix() {
    // Built from a quaternion the pole matrix carries rounding residue, so
    // the x/z split is not unique; the recomposed rotation is what must
    // survive.
    for sign in [1.0_f32, -1.0] {
        let matrix = Transform::new(
            Vec3::ZERO,
            Vec3::new(0.0, sign * FRAC_PI_2, 0.0),
            Vec3::ONE,
        )
        .to_mat4();

        let decomposed = Transform::from_mat4(&matrix).expect("pole rotation decomposes");
        assert!(
            (decomposed.rotation().y() - sign * FRAC_PI_2).abs() <= 1e-3,
            "pitch {} at sign {sign}",
            decomposed.rotation().y()
        );

        let rebuilt = decomposed.to_mat4().to_array();
        let original = matrix.to_array();
        for i in 0..16 {
            assert!(
                (rebuilt[i] - original[i]).abs() <= 5e-3,
                "index {i}: {rebuilt:?} vs {original:?}"
            );
        }
    }
}
