use crate::{clamp, MathError, EPSILON};

/// Deterministic 3D vector used throughout the toolkit.
///
/// * Components may encode points, directions, per-axis scale factors, or
///   Euler angles in radians depending on the calling context.
/// * Arithmetic uses `f32` so results round the same way on every target.
/// * Use [`crate::Mat4::transform_point`] for points (homogeneous `w = 1`)
///   and [`crate::Mat4::transform_direction`] for directions (homogeneous
///   `w = 0`).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Vec3 {
    data: [f32; 3],
}

impl Vec3 {
    /// Vector with all components zero.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Vector with all components one.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    ///
    /// Callers must ensure values are finite; no checks are applied here.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 3] {
        self.data
    }

    pub(crate) fn component(&self, idx: usize) -> f32 {
        self.data[idx]
    }

    /// X component.
    pub fn x(&self) -> f32 {
        self.component(0)
    }

    /// Y component.
    pub fn y(&self) -> f32 {
        self.component(1)
    }

    /// Z component.
    pub fn z(&self) -> f32 {
        self.component(2)
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(
            self.component(0) + other.component(0),
            self.component(1) + other.component(1),
            self.component(2) + other.component(2),
        )
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(
            self.component(0) - other.component(0),
            self.component(1) - other.component(1),
            self.component(2) - other.component(2),
        )
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(
            self.component(0) * scalar,
            self.component(1) * scalar,
            self.component(2) * scalar,
        )
    }

    /// Component-wise product with another vector.
    pub fn mul_components(&self, other: &Self) -> Self {
        Self::new(
            self.component(0) * other.component(0),
            self.component(1) * other.component(1),
            self.component(2) * other.component(2),
        )
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.component(0) * other.component(0)
            + self.component(1) * other.component(1)
            + self.component(2) * other.component(2)
    }

    /// Cross product with another vector.
    pub fn cross(&self, other: &Self) -> Self {
        let ax = self.component(0);
        let ay = self.component(1);
        let az = self.component(2);
        let bx = other.component(0);
        let by = other.component(1);
        let bz = other.component(2);
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Normalises the vector.
    ///
    /// # Errors
    /// Returns [`MathError::DegenerateLength`] when the length is ≤ `EPSILON`;
    /// no direction can be recovered from a degenerate vector.
    pub fn normalize(&self) -> Result<Self, MathError> {
        let len = self.length();
        if len <= EPSILON {
            return Err(MathError::DegenerateLength);
        }
        Ok(self.scale(1.0 / len))
    }

    /// Normalises the vector, returning the zero vector if length ≤ `EPSILON`.
    ///
    /// `EPSILON` is a degeneracy threshold (not numeric precision): vectors
    /// with length ≤ `EPSILON` are considered degenerate and normalized to
    /// zero so downstream callers can detect them deterministically.
    pub fn normalize_or_zero(&self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            return Self::ZERO;
        }
        self.scale(1.0 / len)
    }

    /// Angle between two vectors in radians, in `[0, π]`.
    ///
    /// The cosine is clamped to `[-1, 1]` before `acos` so rounding near
    /// parallel vectors cannot produce NaN.
    ///
    /// # Errors
    /// Returns [`MathError::DegenerateLength`] when the product of the two
    /// lengths is ≤ `EPSILON`; no angle is defined against a degenerate
    /// vector.
    pub fn angle_between(&self, other: &Self) -> Result<f32, MathError> {
        let len = self.length() * other.length();
        if len <= EPSILON {
            return Err(MathError::DegenerateLength);
        }
        Ok(clamp(self.dot(other) / len, -1.0, 1.0).acos())
    }

    /// Projects this vector onto `other`.
    ///
    /// # Errors
    /// Returns [`MathError::DegenerateLength`] when `other` has length
    /// ≤ `EPSILON`; there is no axis to project onto.
    pub fn project_onto(&self, other: &Self) -> Result<Self, MathError> {
        let len_sq = other.length_squared();
        if len_sq <= EPSILON * EPSILON {
            return Err(MathError::DegenerateLength);
        }
        Ok(other.scale(self.dot(other) / len_sq))
    }

    /// Whether `p1` and `p2` lie on the same side of the line through `a`
    /// and `b`.
    ///
    /// Points exactly on the line count as being on the same side.
    pub fn same_side(p1: &Self, p2: &Self, a: &Self, b: &Self) -> bool {
        let edge = b.sub(a);
        let cp1 = edge.cross(&p1.sub(a));
        let cp2 = edge.cross(&p2.sub(a));
        cp1.dot(&cp2) >= 0.0
    }

    /// Unnormalized normal of the triangle `(t1, t2, t3)`.
    ///
    /// The winding follows the right-hand rule; the length is twice the
    /// triangle area.
    pub fn triangle_normal(t1: &Self, t2: &Self, t3: &Self) -> Self {
        t2.sub(t1).cross(&t3.sub(t1))
    }

    /// Whether `point` lies inside the triangle `(t1, t2, t3)`.
    ///
    /// The point must fall within the triangle's edge prism and within
    /// `EPSILON` of the triangle plane. Degenerate (collinear) triangles
    /// contain no points.
    pub fn in_triangle(point: &Self, t1: &Self, t2: &Self, t3: &Self) -> bool {
        if !Self::same_side(point, t1, t2, t3)
            || !Self::same_side(point, t2, t1, t3)
            || !Self::same_side(point, t3, t1, t2)
        {
            return false;
        }
        let normal = Self::triangle_normal(t1, t2, t3);
        // Projection onto the normal measures distance from the plane; a
        // degenerate normal admits no points.
        point
            .sub(t1)
            .project_onto(&normal)
            .is_ok_and(|offset| offset.length() <= EPSILON)
    }
}

/// Converts a 3-element `[f32; 3]` array into a `Vec3` interpreted as `(x, y, z)`.
///
/// # Examples
/// ```
/// use keel_math::Vec3;
/// let v = Vec3::from([1.0, 2.0, 3.0]);
/// assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
/// ```
impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Self { data: value }
    }
}

impl core::ops::Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::add(&self, &rhs)
    }
}

impl core::ops::Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::sub(&self, &rhs)
    }
}

impl core::ops::Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}

impl core::ops::Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}
