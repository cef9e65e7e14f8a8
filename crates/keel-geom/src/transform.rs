// SPDX-License-Identifier: Apache-2.0

use keel_math::{Mat4, Quat, Vec3};

/// Translate/rotate/scale triple describing object placement.
///
/// Conventions:
/// - `translation` in world units.
/// - `rotation` as XYZ Tait-Bryan Euler angles in radians.
/// - `scale` is non-uniform and applied before rotation and translation.
///
/// Determinism: [`Transform::to_mat4`] builds `M = T * R * S` with plain
/// `f32` ops; no FMA, so results stay stable across CPUs and targets.
/// Negative scales recompose fine but do not survive
/// [`Transform::from_mat4`] (see its docs).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    translation: Vec3,
    rotation: Vec3,
    scale: Vec3,
}

impl Transform {
    /// Identity transform (no translation, no rotation, unit scale).
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    /// Creates a transform from components.
    ///
    /// `rotation` is Euler XYZ in radians; use [`keel_math::deg_to_rad`] at
    /// the edge if a caller works in degrees.
    #[must_use]
    pub const fn new(translation: Vec3, rotation: Vec3, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Translation component.
    #[must_use]
    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    /// Euler rotation component in radians.
    #[must_use]
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    /// Scale component.
    #[must_use]
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Rotation as a unit quaternion.
    #[must_use]
    pub fn rotation_quat(&self) -> Quat {
        Quat::from_euler(self.rotation)
    }

    /// Returns the column-major matrix `T * R * S` for this transform.
    ///
    /// The fixed order scales the object in its own frame, rotates it about
    /// its own center, then places it in the world.
    #[must_use]
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::compose(self.translation, &self.rotation_quat(), self.scale)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
