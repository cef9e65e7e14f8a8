// SPDX-License-Identifier: Apache-2.0

use keel_math::{clamp, epsilon_eq, Mat4, Vec3, EPSILON};
use thiserror::Error;

use crate::Transform;

/// Errors produced when a matrix cannot be split into translate/rotate/scale.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecomposeError {
    /// The homogeneous `w` element is (near) zero, so the matrix cannot be
    /// normalized into an affine transform.
    #[error("matrix is not normalizable: m[3][3] is zero")]
    Unnormalizable,
    /// A basis column has no length, so the axis carries no orientation.
    #[error("basis column {axis} has zero length")]
    SingularAxis {
        /// Index of the degenerate basis column (0 = X, 1 = Y, 2 = Z).
        axis: usize,
    },
}

impl Transform {
    /// Splits a column-major TRS matrix back into its components.
    ///
    /// Mirror of [`Transform::to_mat4`]: for matrices produced from positive
    /// scales and any rotation, `from_mat4(&t.to_mat4())` returns `t` up to
    /// `f32` rounding.
    ///
    /// The matrix is first normalized by `m[3][3]`, so a homogeneously
    /// scaled matrix decomposes like its affine form. A perspective bottom
    /// row is discarded, not decomposed. Shear is not representable either;
    /// it distorts the rotation basis and will not survive a recompose.
    ///
    /// Known limitation: negative (mirrored) scale is not detected. Column
    /// lengths are always positive, so a reflected basis decomposes into an
    /// incorrect rotation with positive scale.
    ///
    /// # Errors
    /// - [`DecomposeError::Unnormalizable`] when `m[3][3]` is within
    ///   `f32::EPSILON` of zero.
    /// - [`DecomposeError::SingularAxis`] when a basis column has length
    ///   ≤ `EPSILON`; a collapsed axis has no recoverable orientation.
    pub fn from_mat4(matrix: &Mat4) -> Result<Self, DecomposeError> {
        let m33 = matrix.at(3, 3);
        if epsilon_eq(m33, 0.0, f32::EPSILON) {
            return Err(DecomposeError::Unnormalizable);
        }

        // Divide out the homogeneous scale so a uniformly scaled matrix
        // decomposes like its affine form.
        let mut local = Mat4::new(matrix.to_array().map(|value| value / m33));

        // A perspective row cannot be represented; clear it and restore the
        // affine form before reading anything else.
        if !epsilon_eq(local.at(3, 0), 0.0, f32::EPSILON)
            || !epsilon_eq(local.at(3, 1), 0.0, f32::EPSILON)
            || !epsilon_eq(local.at(3, 2), 0.0, f32::EPSILON)
        {
            local.set(3, 0, 0.0);
            local.set(3, 1, 0.0);
            local.set(3, 2, 0.0);
            local.set(3, 3, 1.0);
        }

        let translation = local.column3(3);
        local.set(0, 3, 0.0);
        local.set(1, 3, 0.0);
        local.set(2, 3, 0.0);

        let mut basis = [local.column3(0), local.column3(1), local.column3(2)];
        let mut scale = [0.0_f32; 3];
        for (axis, column) in basis.iter_mut().enumerate() {
            let len = column.length();
            if len <= EPSILON {
                return Err(DecomposeError::SingularAxis { axis });
            }
            scale[axis] = len;
            *column = column.scale(1.0 / len);
        }

        let rotation = euler_from_basis(&basis[0], &basis[1], &basis[2]);

        Ok(Self::new(
            translation,
            rotation,
            Vec3::new(scale[0], scale[1], scale[2]),
        ))
    }
}

/// Euler XYZ angles from an orthonormal right-handed basis.
///
/// The y angle comes from the X column's z component; the remaining angles
/// come from `atan2` pairs that share a `cos(rot_y)` factor, so they stay
/// stable as the ±π/2 pitch poles are approached (`atan2` is scale
/// invariant, and an exactly vertical X column yields `atan2(0, 0) == 0`).
/// At the poles themselves the x and z rotations collapse into one degree
/// of freedom and only their combination is recoverable.
#[allow(clippy::float_cmp)]
fn euler_from_basis(b0: &Vec3, b1: &Vec3, b2: &Vec3) -> Vec3 {
    let rot_y = clamp(-b0.z(), -1.0, 1.0).asin();
    if rot_y.cos() == 0.0 {
        let rot_x = (-b2.x()).atan2(b1.y());
        return Vec3::new(rot_x, rot_y, 0.0);
    }
    let rot_x = b1.z().atan2(b2.z());
    let rot_z = b0.y().atan2(b0.x());
    Vec3::new(rot_x, rot_y, rot_z)
}
