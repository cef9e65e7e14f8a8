use crate::{MathError, Vec3, EPSILON};

/// Deterministic 4D vector, the homogeneous companion of [`Vec3`].
///
/// Matrix columns and transformed points travel through this type; `w`
/// carries the homogeneous coordinate (`1` for points, `0` for directions).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Vec4 {
    data: [f32; 4],
}

impl Vec4 {
    /// Vector with all components zero.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Extends a [`Vec3`] with an explicit homogeneous coordinate.
    pub fn from_vec3(vector: Vec3, w: f32) -> Self {
        let [x, y, z] = vector.to_array();
        Self::new(x, y, z, w)
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 4] {
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

    /// W (homogeneous) component.
    pub fn w(&self) -> f32 {
        self.component(3)
    }

    /// Drops the homogeneous coordinate.
    pub fn truncate(self) -> Vec3 {
        Vec3::new(self.component(0), self.component(1), self.component(2))
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(
            self.component(0) + other.component(0),
            self.component(1) + other.component(1),
            self.component(2) + other.component(2),
            self.component(3) + other.component(3),
        )
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(
            self.component(0) - other.component(0),
            self.component(1) - other.component(1),
            self.component(2) - other.component(2),
            self.component(3) - other.component(3),
        )
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(
            self.component(0) * scalar,
            self.component(1) * scalar,
            self.component(2) * scalar,
            self.component(3) * scalar,
        )
    }

    /// Component-wise product with another vector.
    pub fn mul_components(&self, other: &Self) -> Self {
        Self::new(
            self.component(0) * other.component(0),
            self.component(1) * other.component(1),
            self.component(2) * other.component(2),
            self.component(3) * other.component(3),
        )
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.component(0) * other.component(0)
            + self.component(1) * other.component(1)
            + self.component(2) * other.component(2)
            + self.component(3) * other.component(3)
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
    /// Total counterpart of [`Vec4::normalize`] for callers that must never
    /// fail; degenerate inputs map to zero so they stay detectable.
    pub fn normalize_or_zero(&self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            return Self::ZERO;
        }
        self.scale(1.0 / len)
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}

impl core::ops::Add for Vec4 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::add(&self, &rhs)
    }
}

impl core::ops::Sub for Vec4 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::sub(&self, &rhs)
    }
}

impl core::ops::Mul<f32> for Vec4 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}

impl core::ops::Neg for Vec4 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}
