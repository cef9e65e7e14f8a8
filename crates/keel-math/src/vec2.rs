use crate::{MathError, EPSILON};

/// Deterministic 2D vector.
///
/// * Arithmetic uses `f32` so results round the same way on every target.
/// * Used for texture coordinates and screen-space offsets; no homogeneous
///   helpers exist at this dimension.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Vec2 {
    data: [f32; 2],
}

impl Vec2 {
    /// Vector with both components zero.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Vector with both components one.
    pub const ONE: Self = Self::new(1.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { data: [x, y] }
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 2] {
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

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(
            self.component(0) + other.component(0),
            self.component(1) + other.component(1),
        )
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(
            self.component(0) - other.component(0),
            self.component(1) - other.component(1),
        )
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(self.component(0) * scalar, self.component(1) * scalar)
    }

    /// Component-wise product with another vector.
    pub fn mul_components(&self, other: &Self) -> Self {
        Self::new(
            self.component(0) * other.component(0),
            self.component(1) * other.component(1),
        )
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.component(0) * other.component(0) + self.component(1) * other.component(1)
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
    /// Total counterpart of [`Vec2::normalize`] for callers that must never
    /// fail; degenerate inputs map to zero so they stay detectable.
    pub fn normalize_or_zero(&self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            return Self::ZERO;
        }
        self.scale(1.0 / len)
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(value: [f32; 2]) -> Self {
        Self { data: value }
    }
}

impl core::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::add(&self, &rhs)
    }
}

impl core::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::sub(&self, &rhs)
    }
}

impl core::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}

impl core::ops::Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}
