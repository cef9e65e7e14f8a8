use crate::{clamp, Mat4, Vec3, EPSILON};

/// Quaternion stored as `(x, y, z, w)` with deterministic float32 rounding.
///
/// * All angles are expressed in radians.
/// * Euler conversions use the XYZ Tait-Bryan convention: the equivalent
///   matrix is `Rz * Ry * Rx` applied to column vectors.
/// * Normalisation is never implicit; constructors produce unit quaternions,
///   but arithmetic results are the caller's to renormalize.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Quat {
    data: [f32; 4],
}

impl Quat {
    /// Creates a quaternion from components.
    ///
    /// Callers should provide finite components; use
    /// [`Quat::from_axis_angle`] or [`Quat::from_euler`] for rotations.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Returns the quaternion as an `(x, y, z, w)` array.
    pub fn to_array(self) -> [f32; 4] {
        self.data
    }

    fn component(&self, idx: usize) -> f32 {
        self.data[idx]
    }

    /// Constructs a quaternion from a rotation axis and angle in radians.
    ///
    /// Returns the identity quaternion when the axis length is ≤ `EPSILON`
    /// to avoid undefined orientations and preserve deterministic behaviour.
    /// No small-angle approximation is applied.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let len_sq = axis.length_squared();
        if len_sq <= EPSILON * EPSILON {
            return Self::identity();
        }
        let len = len_sq.sqrt();
        let norm_axis = axis.scale(1.0 / len);
        let half = angle * 0.5;
        let (sin_half, cos_half) = half.sin_cos();
        let scaled = norm_axis.scale(sin_half);
        Self::new(scaled.x(), scaled.y(), scaled.z(), cos_half)
    }

    /// Constructs a quaternion from Euler XYZ angles in radians.
    ///
    /// Equivalent to composing per-axis rotations as `z * y * x`, so the
    /// resulting rotation matrix is `Rz * Ry * Rx`. Always unit length for
    /// finite inputs.
    pub fn from_euler(euler: Vec3) -> Self {
        let (sx, cx) = (euler.x() * 0.5).sin_cos();
        let (sy, cy) = (euler.y() * 0.5).sin_cos();
        let (sz, cz) = (euler.z() * 0.5).sin_cos();

        Self::new(
            sx * cy * cz - cx * sy * sz,
            cx * sy * cz + sx * cy * sz,
            cx * cy * sz - sx * sy * cz,
            cx * cy * cz + sx * sy * sz,
        )
    }

    /// Hamilton product of two quaternions (`self * other`).
    ///
    /// Operand order matters: quaternion multiplication is non-commutative.
    /// Component layout is `(x, y, z, w)` with `w` as the scalar part. Inputs
    /// need not be normalized; when both operands are unit quaternions the
    /// result stays unit up to floating-point error (consider re-normalizing
    /// over long chains).
    pub fn multiply(&self, other: &Self) -> Self {
        let ax = self.component(0);
        let ay = self.component(1);
        let az = self.component(2);
        let aw = self.component(3);

        let bx = other.component(0);
        let by = other.component(1);
        let bz = other.component(2);
        let bw = other.component(3);

        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Four-component dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.component(0) * other.component(0)
            + self.component(1) * other.component(1)
            + self.component(2) * other.component(2)
            + self.component(3) * other.component(3)
    }

    /// Normalises the quaternion; returns identity when norm is ~0.
    pub fn normalize(&self) -> Self {
        let len = self.dot(self).sqrt();
        if len <= EPSILON {
            return Self::identity();
        }
        let inv = 1.0 / len;
        Self::new(
            self.component(0) * inv,
            self.component(1) * inv,
            self.component(2) * inv,
            self.component(3) * inv,
        )
    }

    /// Converts the quaternion to a rotation matrix (column-major 4×4).
    ///
    /// The input is assumed to be unit length; a non-unit quaternion scales
    /// the basis accordingly. That property keeps scale and rotation strictly
    /// separated in TRS pipelines, so no normalization happens here.
    pub fn to_mat4(&self) -> Mat4 {
        let x = self.component(0);
        let y = self.component(1);
        let z = self.component(2);
        let w = self.component(3);

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        Mat4::new([
            1.0 - 2.0 * (yy + zz),
            2.0 * (xy + wz),
            2.0 * (xz - wy),
            0.0,
            2.0 * (xy - wz),
            1.0 - 2.0 * (xx + zz),
            2.0 * (yz + wx),
            0.0,
            2.0 * (xz + wy),
            2.0 * (yz - wx),
            1.0 - 2.0 * (xx + yy),
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }

    /// Extracts a quaternion from the rotation part of a matrix.
    ///
    /// The upper-left 3×3 block must be a pure rotation (orthonormal,
    /// right-handed); strip scale first when decomposing a TRS matrix.
    /// Always returns a unit quaternion for valid input.
    pub fn from_mat4(matrix: &Mat4) -> Self {
        let m00 = matrix.at(0, 0);
        let m11 = matrix.at(1, 1);
        let m22 = matrix.at(2, 2);

        // Branch on the largest diagonal combination so the square root below
        // stays well away from zero for every input rotation.
        let (xyzw, largest) = if m22 < 0.0 {
            if m00 > m11 {
                let t = 1.0 + m00 - m11 - m22;
                (
                    [
                        t,
                        matrix.at(1, 0) + matrix.at(0, 1),
                        matrix.at(0, 2) + matrix.at(2, 0),
                        matrix.at(2, 1) - matrix.at(1, 2),
                    ],
                    t,
                )
            } else {
                let t = 1.0 - m00 + m11 - m22;
                (
                    [
                        matrix.at(1, 0) + matrix.at(0, 1),
                        t,
                        matrix.at(2, 1) + matrix.at(1, 2),
                        matrix.at(0, 2) - matrix.at(2, 0),
                    ],
                    t,
                )
            }
        } else if m00 < -m11 {
            let t = 1.0 - m00 - m11 + m22;
            (
                [
                    matrix.at(0, 2) + matrix.at(2, 0),
                    matrix.at(2, 1) + matrix.at(1, 2),
                    t,
                    matrix.at(1, 0) - matrix.at(0, 1),
                ],
                t,
            )
        } else {
            let t = 1.0 + m00 + m11 + m22;
            (
                [
                    matrix.at(2, 1) - matrix.at(1, 2),
                    matrix.at(0, 2) - matrix.at(2, 0),
                    matrix.at(1, 0) - matrix.at(0, 1),
                    t,
                ],
                t,
            )
        };

        let inv = 0.5 / largest.sqrt();
        Self::new(xyzw[0] * inv, xyzw[1] * inv, xyzw[2] * inv, xyzw[3] * inv)
    }

    /// Euler XYZ angles in radians equivalent to this rotation.
    ///
    /// Inverse of [`Quat::from_euler`] for unit input away from the pitch
    /// poles; at `rot_y = ±π/2` the x/z split is not unique. The `asin`
    /// argument is clamped so rounding cannot produce NaN.
    pub fn to_euler(&self) -> Vec3 {
        let x = self.component(0);
        let y = self.component(1);
        let z = self.component(2);
        let w = self.component(3);

        let rot_x = (2.0 * (y * z + w * x)).atan2(1.0 - 2.0 * (x * x + y * y));
        let rot_y = clamp(2.0 * (w * y - x * z), -1.0, 1.0).asin();
        let rot_z = (2.0 * (x * y + w * z)).atan2(1.0 - 2.0 * (y * y + z * z));

        Vec3::new(rot_x, rot_y, rot_z)
    }
}

/// Converts a 4-element `[f32; 4]` array `(x, y, z, w)` into a `Quat`.
/// The components are taken verbatim; callers typically pass unit quaternions
/// for rotations, but normalization is not enforced by this conversion.
impl From<[f32; 4]> for Quat {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}

impl core::ops::Mul for Quat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}
