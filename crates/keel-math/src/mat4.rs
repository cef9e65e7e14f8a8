use crate::{MathError, Quat, Vec3, Vec4, EPSILON};

/// Column-major 4×4 matrix, the backbone of the transform pipeline.
///
/// - Stored in column-major order: element `(row, col)` lives at
///   `data[col * 4 + row]`, matching GPU upload expectations.
/// - Represents affine transforms; perspective terms are preserved but helper
///   methods treat them homogeneously (`w = 1` for points).
///
/// # Examples
/// Basic transformations:
/// ```
/// use keel_math::{Mat4, Vec3};
/// let t = Mat4::translation(Vec3::new(5.0, -3.0, 2.0));
/// let p = Vec3::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
///
/// # Precision
/// - Uses `f32`; repeated multiplies and transforms will accumulate rounding.
/// - Rotation helpers are consistent with [`Quat`] conversions (`from_quat`).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Mat4 {
    data: [f32; 16],
}

impl Mat4 {
    /// Creates a matrix from column-major array data.
    ///
    /// Callers must supply 16 finite values already laid out column-major.
    pub const fn new(data: [f32; 16]) -> Self {
        Self { data }
    }

    /// Returns the identity matrix.
    ///
    /// Column-major layout with ones on the diagonal.
    pub const fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, 0.0, // col 1
                0.0, 0.0, 1.0, 0.0, // col 2
                0.0, 0.0, 0.0, 1.0, // col 3
            ],
        }
    }

    /// Returns a matrix with `diagonal` on the main diagonal, zero elsewhere.
    pub const fn from_diagonal(diagonal: f32) -> Self {
        Self {
            data: [
                diagonal, 0.0, 0.0, 0.0, // col 0
                0.0, diagonal, 0.0, 0.0, // col 1
                0.0, 0.0, diagonal, 0.0, // col 2
                0.0, 0.0, 0.0, diagonal, // col 3
            ],
        }
    }

    /// Returns the matrix as a column-major array.
    pub fn to_array(self) -> [f32; 16] {
        self.data
    }

    /// Borrows the matrix as 16 contiguous column-major floats.
    ///
    /// This is the renderer handoff surface: `as_array().as_ptr()` is valid
    /// for the duration of the borrow and needs no transpose before upload.
    pub fn as_array(&self) -> &[f32; 16] {
        &self.data
    }

    /// Reads the element at `(row, col)` of the column-major layout.
    pub fn at(&self, row: usize, col: usize) -> f32 {
        debug_assert!(row < 4 && col < 4, "matrix index out of bounds: ({row}, {col})");
        self.data[col * 4 + row]
    }

    /// Writes the element at `(row, col)` of the column-major layout.
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        debug_assert!(row < 4 && col < 4, "matrix index out of bounds: ({row}, {col})");
        self.data[col * 4 + row] = value;
    }

    /// Returns column `idx` as a [`Vec4`].
    pub fn column(&self, idx: usize) -> Vec4 {
        Vec4::new(self.at(0, idx), self.at(1, idx), self.at(2, idx), self.at(3, idx))
    }

    /// Returns the first three components of column `idx`.
    pub fn column3(&self, idx: usize) -> Vec3 {
        Vec3::new(self.at(0, idx), self.at(1, idx), self.at(2, idx))
    }

    /// Returns row `idx` as a [`Vec4`].
    pub fn row(&self, idx: usize) -> Vec4 {
        Vec4::new(self.at(idx, 0), self.at(idx, 1), self.at(idx, 2), self.at(idx, 3))
    }

    /// Returns the first three components of row `idx`.
    pub fn row3(&self, idx: usize) -> Vec3 {
        Vec3::new(self.at(idx, 0), self.at(idx, 1), self.at(idx, 2))
    }

    /// Replaces column `idx` with `column`.
    pub fn set_column(&mut self, idx: usize, column: &Vec4) {
        let [x, y, z, w] = column.to_array();
        self.set(0, idx, x);
        self.set(1, idx, y);
        self.set(2, idx, z);
        self.set(3, idx, w);
    }

    /// Builds a translation matrix.
    ///
    /// Column-major layout: translation occupies the last column.
    pub fn translation(translation: Vec3) -> Self {
        let [tx, ty, tz] = translation.to_array();
        Self::new([
            1.0, 0.0, 0.0, 0.0, // col 0
            0.0, 1.0, 0.0, 0.0, // col 1
            0.0, 0.0, 1.0, 0.0, // col 2
            tx, ty, tz, 1.0, // col 3 (translation)
        ])
    }

    /// Builds a non-uniform scale matrix.
    pub fn scale(scale: Vec3) -> Self {
        let [sx, sy, sz] = scale.to_array();
        Self::new([
            sx, 0.0, 0.0, 0.0, // col 0
            0.0, sy, 0.0, 0.0, // col 1
            0.0, 0.0, sz, 0.0, // col 2
            0.0, 0.0, 0.0, 1.0, // col 3
        ])
    }

    /// Builds a rotation matrix from an angle in radians and an axis.
    ///
    /// The axis is normalized internally; a zero-length axis yields the
    /// identity rotation to preserve deterministic behavior.
    ///
    /// Precision: results are `f32` and match [`Quat::from_axis_angle`]
    /// followed by [`Quat::to_mat4`].
    pub fn rotation(angle: f32, axis: Vec3) -> Self {
        if axis.length_squared() <= EPSILON * EPSILON {
            return Self::identity();
        }
        let [x, y, z] = axis.normalize_or_zero().to_array();
        let (sine, cosine) = angle.sin_cos();
        let one_minus = 1.0 - cosine;
        Self::new([
            cosine + x * x * one_minus,
            y * x * one_minus + z * sine,
            z * x * one_minus - y * sine,
            0.0, // col 0
            x * y * one_minus - z * sine,
            cosine + y * y * one_minus,
            z * y * one_minus + x * sine,
            0.0, // col 1
            x * z * one_minus + y * sine,
            y * z * one_minus - x * sine,
            cosine + z * z * one_minus,
            0.0, // col 2
            0.0,
            0.0,
            0.0,
            1.0, // col 3
        ])
    }

    /// Builds a rotation matrix around the X axis by `angle` radians.
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            1.0, 0.0, 0.0, 0.0, //
            0.0, c, s, 0.0, //
            0.0, -s, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix around the Y axis by `angle` radians.
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c, 0.0, -s, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            s, 0.0, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix around the Z axis by `angle` radians.
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c, s, 0.0, 0.0, //
            -s, c, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Constructs a rotation matrix from a quaternion.
    ///
    /// This simply forwards to [`Quat::to_mat4`]; the quaternion should be
    /// unit length.
    pub fn from_quat(q: &Quat) -> Self {
        q.to_mat4()
    }

    /// Composes a TRS matrix: `translation * rotation * scale`.
    ///
    /// The order is fixed so the object is scaled in its own frame, rotated
    /// about its own center, then placed in the world.
    pub fn compose(translation: Vec3, rotation: &Quat, scale: Vec3) -> Self {
        Self::translation(translation)
            .multiply(&rotation.to_mat4())
            .multiply(&Self::scale(scale))
    }

    /// Builds an orthographic projection.
    ///
    /// Right-handed with a `[-1, 1]` clip-space depth range.
    pub fn orthographic(left: f32, right: f32, top: f32, bottom: f32, near: f32, far: f32) -> Self {
        let mut result = Self::identity();
        result.set(0, 0, 2.0 / (right - left));
        result.set(1, 1, 2.0 / (top - bottom));
        result.set(2, 2, 2.0 / (near - far));
        result.set(0, 3, (left + right) / (left - right));
        result.set(1, 3, (bottom + top) / (bottom - top));
        result.set(2, 3, (far + near) / (far - near));
        result
    }

    /// Builds a perspective projection.
    ///
    /// `fov_y` is the vertical field of view in radians; right-handed with a
    /// `[-1, 1]` clip-space depth range.
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let half_tan = (fov_y / 2.0).tan();
        let mut result = Self::new([0.0; 16]);
        result.set(0, 0, 1.0 / (aspect * half_tan));
        result.set(1, 1, 1.0 / half_tan);
        result.set(2, 2, -((far + near) / (far - near)));
        result.set(3, 2, -1.0);
        result.set(2, 3, -((2.0 * far * near) / (far - near)));
        result
    }

    /// Builds a right-handed view matrix looking from `eye` toward `center`.
    ///
    /// `up` is a hint, not a basis vector: the camera up is rebuilt from the
    /// forward and side axes. Degenerate inputs (eye == center, or `up`
    /// parallel to the view direction) collapse the affected axes to zero
    /// rather than producing NaN.
    pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Self {
        let forward = center.sub(&eye).normalize_or_zero();
        let side = forward.cross(&up).normalize_or_zero();
        let camera_up = side.cross(&forward);
        Self::new([
            side.x(),
            camera_up.x(),
            -forward.x(),
            0.0, // col 0
            side.y(),
            camera_up.y(),
            -forward.y(),
            0.0, // col 1
            side.z(),
            camera_up.z(),
            -forward.z(),
            0.0, // col 2
            -side.dot(&eye),
            -camera_up.dot(&eye),
            forward.dot(&eye),
            1.0, // col 3
        ])
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    ///
    /// Each result column is the linear combination of `self`'s columns
    /// weighted by the matching column of `rhs`, accumulated left to right;
    /// column-major semantics with `self` on the left.
    ///
    /// # Examples
    /// ```
    /// use keel_math::{Mat4, Vec3};
    /// let a = Mat4::identity();
    /// let b = Mat4::scale(Vec3::new(2.0, 3.0, 4.0));
    /// assert_eq!(a.multiply(&b).to_array(), b.to_array());
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let basis = [self.column(0), self.column(1), self.column(2), self.column(3)];
        let mut out = Self::identity();
        for idx in 0..4 {
            let combined = basis[0]
                .scale(rhs.at(0, idx))
                .add(&basis[1].scale(rhs.at(1, idx)))
                .add(&basis[2].scale(rhs.at(2, idx)))
                .add(&basis[3].scale(rhs.at(3, idx)));
            out.set_column(idx, &combined);
        }
        out
    }

    /// Full matrix-vector product (`self * vector`).
    pub fn transform(&self, vector: &Vec4) -> Vec4 {
        self.column(0)
            .scale(vector.x())
            .add(&self.column(1).scale(vector.y()))
            .add(&self.column(2).scale(vector.z()))
            .add(&self.column(3).scale(vector.w()))
    }

    /// Transforms a point (assumes `w = 1`, no perspective divide).
    ///
    /// Translation components are applied and the resulting vector is returned
    /// with `w` implicitly equal to `1`.
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        let [x, y, z] = point.to_array();
        let w = 1.0;

        let nx = self.at(0, 0) * x + self.at(0, 1) * y + self.at(0, 2) * z + self.at(0, 3) * w;
        let ny = self.at(1, 0) * x + self.at(1, 1) * y + self.at(1, 2) * z + self.at(1, 3) * w;
        let nz = self.at(2, 0) * x + self.at(2, 1) * y + self.at(2, 2) * z + self.at(2, 3) * w;

        Vec3::new(nx, ny, nz)
    }

    /// Multiplies every element by a scalar.
    ///
    /// A homogeneous rescaling: the result describes the same transform only
    /// for consumers that renormalize by `m[3][3]`.
    pub fn multiply_scalar(&self, scalar: f32) -> Self {
        let mut out = *self;
        for element in &mut out.data {
            *element *= scalar;
        }
        out
    }

    /// Transforms a direction vector (ignores translation, `w = 0`).
    ///
    /// Only the rotational and scaling parts of the matrix affect the result.
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        let [x, y, z] = direction.to_array();

        let nx = self.at(0, 0) * x + self.at(0, 1) * y + self.at(0, 2) * z;
        let ny = self.at(1, 0) * x + self.at(1, 1) * y + self.at(1, 2) * z;
        let nz = self.at(2, 0) * x + self.at(2, 1) * y + self.at(2, 2) * z;

        Vec3::new(nx, ny, nz)
    }

    /// Transposes the matrix in place.
    pub fn transpose(&mut self) {
        for row in 0..4 {
            for col in (row + 1)..4 {
                self.data.swap(col * 4 + row, row * 4 + col);
            }
        }
    }

    /// Returns the transposed matrix, leaving `self` untouched.
    pub fn transposed(&self) -> Self {
        let mut out = *self;
        out.transpose();
        out
    }

    // Cofactors of the first column (flat layout), shared by the determinant
    // and the adjugate inverse.
    fn column0_cofactors(&self) -> [f32; 4] {
        let m = &self.data;
        [
            m[5] * m[10] * m[15] - m[5] * m[11] * m[14] - m[9] * m[6] * m[15]
                + m[9] * m[7] * m[14]
                + m[13] * m[6] * m[11]
                - m[13] * m[7] * m[10],
            -m[4] * m[10] * m[15] + m[4] * m[11] * m[14] + m[8] * m[6] * m[15]
                - m[8] * m[7] * m[14]
                - m[12] * m[6] * m[11]
                + m[12] * m[7] * m[10],
            m[4] * m[9] * m[15] - m[4] * m[11] * m[13] - m[8] * m[5] * m[15]
                + m[8] * m[7] * m[13]
                + m[12] * m[5] * m[11]
                - m[12] * m[7] * m[9],
            -m[4] * m[9] * m[14] + m[4] * m[10] * m[13] + m[8] * m[5] * m[14]
                - m[8] * m[6] * m[13]
                - m[12] * m[5] * m[10]
                + m[12] * m[6] * m[9],
        ]
    }

    /// Determinant via cofactor expansion along the first column.
    pub fn determinant(&self) -> f32 {
        let m = &self.data;
        let [c0, c1, c2, c3] = self.column0_cofactors();
        m[0] * c0 + m[1] * c1 + m[2] * c2 + m[3] * c3
    }

    /// General inverse via the adjugate.
    ///
    /// Works for any invertible matrix, projective terms included.
    ///
    /// # Errors
    /// Returns [`MathError::SingularMatrix`] when the determinant is exactly
    /// zero. Near-singular matrices still invert; conditioning is the
    /// caller's concern.
    #[allow(clippy::float_cmp)]
    pub fn inverse(&self) -> Result<Self, MathError> {
        let m = &self.data;
        let [c0, c1, c2, c3] = self.column0_cofactors();
        let det = m[0] * c0 + m[1] * c1 + m[2] * c2 + m[3] * c3;
        if det == 0.0 {
            return Err(MathError::SingularMatrix);
        }

        let mut inv = [0.0_f32; 16];
        inv[0] = c0;
        inv[4] = c1;
        inv[8] = c2;
        inv[12] = c3;
        inv[1] = -m[1] * m[10] * m[15] + m[1] * m[11] * m[14] + m[9] * m[2] * m[15]
            - m[9] * m[3] * m[14]
            - m[13] * m[2] * m[11]
            + m[13] * m[3] * m[10];
        inv[5] = m[0] * m[10] * m[15] - m[0] * m[11] * m[14] - m[8] * m[2] * m[15]
            + m[8] * m[3] * m[14]
            + m[12] * m[2] * m[11]
            - m[12] * m[3] * m[10];
        inv[9] = -m[0] * m[9] * m[15] + m[0] * m[11] * m[13] + m[8] * m[1] * m[15]
            - m[8] * m[3] * m[13]
            - m[12] * m[1] * m[11]
            + m[12] * m[3] * m[9];
        inv[13] = m[0] * m[9] * m[14] - m[0] * m[10] * m[13] - m[8] * m[1] * m[14]
            + m[8] * m[2] * m[13]
            + m[12] * m[1] * m[10]
            - m[12] * m[2] * m[9];
        inv[2] = m[1] * m[6] * m[15] - m[1] * m[7] * m[14] - m[5] * m[2] * m[15]
            + m[5] * m[3] * m[14]
            + m[13] * m[2] * m[7]
            - m[13] * m[3] * m[6];
        inv[6] = -m[0] * m[6] * m[15] + m[0] * m[7] * m[14] + m[4] * m[2] * m[15]
            - m[4] * m[3] * m[14]
            - m[12] * m[2] * m[7]
            + m[12] * m[3] * m[6];
        inv[10] = m[0] * m[5] * m[15] - m[0] * m[7] * m[13] - m[4] * m[1] * m[15]
            + m[4] * m[3] * m[13]
            + m[12] * m[1] * m[7]
            - m[12] * m[3] * m[5];
        inv[14] = -m[0] * m[5] * m[14] + m[0] * m[6] * m[13] + m[4] * m[1] * m[14]
            - m[4] * m[2] * m[13]
            - m[12] * m[1] * m[6]
            + m[12] * m[2] * m[5];
        inv[3] = -m[1] * m[6] * m[11] + m[1] * m[7] * m[10] + m[5] * m[2] * m[11]
            - m[5] * m[3] * m[10]
            - m[9] * m[2] * m[7]
            + m[9] * m[3] * m[6];
        inv[7] = m[0] * m[6] * m[11] - m[0] * m[7] * m[10] - m[4] * m[2] * m[11]
            + m[4] * m[3] * m[10]
            + m[8] * m[2] * m[7]
            - m[8] * m[3] * m[6];
        inv[11] = -m[0] * m[5] * m[11] + m[0] * m[7] * m[9] + m[4] * m[1] * m[11]
            - m[4] * m[3] * m[9]
            - m[8] * m[1] * m[7]
            + m[8] * m[3] * m[5];
        inv[15] = m[0] * m[5] * m[10] - m[0] * m[6] * m[9] - m[4] * m[1] * m[10]
            + m[4] * m[2] * m[9]
            + m[8] * m[1] * m[6]
            - m[8] * m[2] * m[5];

        let inv_det = 1.0 / det;
        for element in &mut inv {
            *element *= inv_det;
        }
        Ok(Self::new(inv))
    }

    /// Normalizes the three basis columns in place.
    ///
    /// Columns with length ≤ `EPSILON` are left untouched so callers can
    /// still observe the degenerate axis. Columns are not re-orthogonalized;
    /// orthogonality remains the caller's responsibility.
    pub fn orthonormalize(&mut self) {
        for idx in 0..3 {
            let column = self.column3(idx);
            let len = column.length();
            if len <= EPSILON {
                continue;
            }
            let normalized = column.scale(1.0 / len);
            self.set(0, idx, normalized.x());
            self.set(1, idx, normalized.y());
            self.set(2, idx, normalized.z());
        }
    }

    /// Returns a copy with the basis columns normalized.
    pub fn orthonormalized(&self) -> Self {
        let mut out = *self;
        out.orthonormalize();
        out
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(value: [f32; 16]) -> Self {
        Self { data: value }
    }
}

impl core::ops::Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl core::ops::MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl core::ops::MulAssign<&Self> for Mat4 {
    fn mul_assign(&mut self, rhs: &Self) {
        *self = self.multiply(rhs);
    }
}

impl core::ops::Mul<Vec4> for Mat4 {
    type Output = Vec4;
    fn mul(self, rhs: Vec4) -> Self::Output {
        self.transform(&rhs)
    }
}

impl core::ops::Mul<f32> for Mat4 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self::Output {
        self.multiply_scalar(rhs)
    }
}
