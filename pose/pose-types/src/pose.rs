//! 4×4 affine pose matrix.

use std::fmt;
use std::ops::Mul;

use nalgebra::{Matrix4, Point3, UnitQuaternion, Vector3};

use crate::error::{PoseError, PoseResult};

/// Threshold below which sums, determinants and axis lengths count as zero.
pub const EPSILON: f64 = 1e-6;

/// Default per-component tolerance for pose comparison.
pub const DEFAULT_TOLERANCE: f64 = 1e-3;

/// The 15 components that participate in validity and equality checks.
///
/// The bottom-right corner `(3, 3)` is deliberately absent: it is assumed to
/// hold the homogeneous `1` of an affine matrix and is never inspected.
pub const CHECKED_COMPONENTS: [(usize, usize); 15] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (0, 3),
    (1, 0),
    (1, 1),
    (1, 2),
    (1, 3),
    (2, 0),
    (2, 1),
    (2, 2),
    (2, 3),
    (3, 0),
    (3, 1),
    (3, 2),
];

/// An affine pose (rotation, scale and translation) stored as a 4×4 matrix.
///
/// Components are addressed as `(row, col)`; the translation lives in the
/// first three rows of the last column. Poses have no identity beyond their
/// value and are cheap to copy.
///
/// # Example
///
/// ```
/// use pose_types::Pose;
/// use nalgebra::Vector3;
///
/// let a = Pose::from_translation(&Vector3::new(5.0, 0.0, 0.0));
/// let b = Pose::from_translation(&Vector3::new(1.0, 0.0, 0.0));
///
/// let c = a * b;
/// assert!((c.translation().x - 6.0).abs() < 1e-12);
/// assert!(c.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    matrix: Matrix4<f64>,
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

impl Pose {
    /// Wraps an existing matrix.
    #[must_use]
    pub const fn new(matrix: Matrix4<f64>) -> Self {
        Self { matrix }
    }

    /// The identity pose.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(Matrix4::identity())
    }

    /// A pure translation.
    #[must_use]
    pub fn from_translation(translation: &Vector3<f64>) -> Self {
        Self::new(Matrix4::new_translation(translation))
    }

    /// A pure rotation.
    #[must_use]
    pub fn from_rotation(rotation: &UnitQuaternion<f64>) -> Self {
        Self::new(rotation.to_homogeneous())
    }

    /// Builds `T · R · S` from translation, rotation and per-axis scale.
    ///
    /// # Example
    ///
    /// ```
    /// use pose_types::Pose;
    /// use nalgebra::{UnitQuaternion, Vector3};
    ///
    /// let pose = Pose::from_trs(
    ///     &Vector3::new(1.0, 2.0, 3.0),
    ///     &UnitQuaternion::identity(),
    ///     &Vector3::new(2.0, 2.0, 2.0),
    /// );
    /// assert!((pose.scale().x - 2.0).abs() < 1e-12);
    /// assert!((pose.position().z - 3.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn from_trs(
        translation: &Vector3<f64>,
        rotation: &UnitQuaternion<f64>,
        scale: &Vector3<f64>,
    ) -> Self {
        Self::new(
            Matrix4::new_translation(translation)
                * rotation.to_homogeneous()
                * Matrix4::new_nonuniform_scaling(scale),
        )
    }

    /// Builds a pose from 16 values in row-major order (`m00, m01, … m33`).
    #[must_use]
    pub fn from_row_major(values: [f64; 16]) -> Self {
        Self::new(Matrix4::from_row_slice(&values))
    }

    /// Builds a pose from a row-major slice.
    ///
    /// # Errors
    ///
    /// Returns [`PoseError::InvalidLength`] unless the slice holds exactly 16 values.
    pub fn from_slice(values: &[f64]) -> PoseResult<Self> {
        if values.len() != 16 {
            return Err(PoseError::InvalidLength {
                expected: 16,
                got: values.len(),
            });
        }
        Ok(Self::new(Matrix4::from_row_slice(values)))
    }

    /// Returns the 16 components in row-major order.
    #[must_use]
    pub fn to_row_major(&self) -> [f64; 16] {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[row * 4 + col] = self.matrix[(row, col)];
            }
        }
        out
    }

    /// The underlying matrix.
    #[must_use]
    pub const fn matrix(&self) -> &Matrix4<f64> {
        &self.matrix
    }

    /// Component at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is greater than 3.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.matrix[(row, col)]
    }

    /// Translation part `(m03, m13, m23)`.
    #[must_use]
    pub fn translation(&self) -> Vector3<f64> {
        Vector3::new(
            self.matrix[(0, 3)],
            self.matrix[(1, 3)],
            self.matrix[(2, 3)],
        )
    }

    /// Position of the pose; identical to [`Pose::translation`] as a point.
    #[must_use]
    pub fn position(&self) -> Point3<f64> {
        Point3::from(self.translation())
    }

    /// Per-axis scale, the lengths of the first three basis columns.
    #[must_use]
    pub fn scale(&self) -> Vector3<f64> {
        Vector3::new(
            self.basis_column(0).norm(),
            self.basis_column(1).norm(),
            self.basis_column(2).norm(),
        )
    }

    /// Rotation looking along the third basis column with the second as up.
    ///
    /// Degenerate axes fall back to +Z (forward) and +Y (up).
    #[must_use]
    pub fn rotation(&self) -> UnitQuaternion<f64> {
        let mut forward = self.basis_column(2);
        let mut up = self.basis_column(1);
        if forward.norm_squared() < EPSILON {
            forward = Vector3::z();
        }
        if up.norm_squared() < EPSILON {
            up = Vector3::y();
        }
        UnitQuaternion::face_towards(&forward, &up)
    }

    fn basis_column(&self, col: usize) -> Vector3<f64> {
        Vector3::new(
            self.matrix[(0, col)],
            self.matrix[(1, col)],
            self.matrix[(2, col)],
        )
    }

    /// Returns true if every component is finite and the 15 checked
    /// components are not all (near) zero.
    ///
    /// # Example
    ///
    /// ```
    /// use pose_types::Pose;
    /// use nalgebra::Matrix4;
    ///
    /// assert!(Pose::identity().is_valid());
    /// assert!(!Pose::new(Matrix4::zeros()).is_valid());
    /// ```
    #[must_use]
    pub fn is_valid(&self) -> bool {
        if self.matrix.iter().any(|v| !v.is_finite()) {
            return false;
        }
        let sum: f64 = CHECKED_COMPONENTS
            .iter()
            .map(|&(row, col)| self.matrix[(row, col)].abs())
            .sum();
        sum > EPSILON
    }

    /// Determinant of the full 4×4 matrix.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.matrix.determinant()
    }

    /// Returns true if `|det| > EPSILON`.
    #[must_use]
    pub fn is_invertible(&self) -> bool {
        self.determinant().abs() > EPSILON
    }

    /// General matrix inverse.
    ///
    /// # Errors
    ///
    /// Returns [`PoseError::Singular`] if the pose is not invertible.
    pub fn inverse(&self) -> PoseResult<Self> {
        let determinant = self.determinant();
        if !self.is_invertible() {
            return Err(PoseError::Singular { determinant });
        }
        self.matrix
            .try_inverse()
            .map(Self::new)
            .ok_or(PoseError::Singular { determinant })
    }

    /// Matrix product `self · other`: applies `other` first, then `self`.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        Self::new(self.matrix * other.matrix)
    }

    /// Applies the pose to a point.
    #[must_use]
    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        self.matrix.transform_point(point)
    }

    /// Squared distance between the translations of two poses.
    #[must_use]
    pub fn translation_distance_squared(&self, other: &Self) -> f64 {
        (self.translation() - other.translation()).norm_squared()
    }

    /// Component-wise equality: every checked component differs by strictly
    /// less than `tolerance`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        CHECKED_COMPONENTS
            .iter()
            .all(|&(row, col)| (self.matrix[(row, col)] - other.matrix[(row, col)]).abs() < tolerance)
    }

    /// Translation pre-filter followed by [`Pose::approx_eq`].
    ///
    /// # Example
    ///
    /// ```
    /// use pose_types::Pose;
    /// use nalgebra::Vector3;
    ///
    /// let a = Pose::from_translation(&Vector3::new(1.0, 0.0, 0.0));
    /// let b = Pose::from_translation(&Vector3::new(1.0005, 0.0, 0.0));
    /// assert!(a.is_close(&b, 1e-3));
    /// assert!(!a.is_close(&b, 1e-4));
    /// ```
    #[must_use]
    pub fn is_close(&self, other: &Self, tolerance: f64) -> bool {
        self.is_close_sq(other, tolerance, tolerance * tolerance)
    }

    /// [`Pose::is_close`] with a precomputed squared tolerance.
    #[must_use]
    pub fn is_close_sq(&self, other: &Self, tolerance: f64, tolerance_sq: f64) -> bool {
        self.translation_distance_squared(other) <= tolerance_sq
            && self.approx_eq(other, tolerance)
    }
}

impl From<Matrix4<f64>> for Pose {
    fn from(matrix: Matrix4<f64>) -> Self {
        Self::new(matrix)
    }
}

impl From<Pose> for Matrix4<f64> {
    fn from(pose: Pose) -> Self {
        pose.matrix
    }
}

impl Mul for Pose {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl Mul<&Pose> for &Pose {
    type Output = Pose;

    fn mul(self, rhs: &Pose) -> Pose {
        self.compose(rhs)
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.translation();
        write!(f, "Pose(t=[{:.6}, {:.6}, {:.6}]", t.x, t.y, t.z)?;
        let s = self.scale();
        write!(f, ", s=[{:.6}, {:.6}, {:.6}])", s.x, s.y, s.z)
    }
}
