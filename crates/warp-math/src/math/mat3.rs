// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::{Axis, Vec3};
use crate::MathError;

/// Row-major 3×3 matrix stored as three [`Vec3`] rows.
///
/// Only construction, row/column access, and the matrix-vector product are
/// provided; composition, transposition, and inversion belong to the
/// transform layer.
///
/// # Examples
/// The skew-symmetric matrix of `a` applies `a × v` as a linear map:
/// ```
/// use warp_math::{Mat3, Vec3};
/// let a = Vec3::new(1.0, 2.0, 3.0);
/// let v = Vec3::new(-4.0, 0.5, 2.0);
/// assert_eq!(Mat3::skew_symmetric(&a).mul_vec3(&v), a.cross(&v));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3 {
    rows: [Vec3; 3],
}

impl Mat3 {
    /// Builds a matrix from its rows.
    pub const fn from_rows(r0: Vec3, r1: Vec3, r2: Vec3) -> Self {
        Self { rows: [r0, r1, r2] }
    }

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::from_rows(Vec3::UNIT_X, Vec3::UNIT_Y, Vec3::UNIT_Z)
    }

    /// Skew-symmetric cross-product matrix of `v`.
    pub fn skew_symmetric(v: &Vec3) -> Self {
        Self {
            rows: v.skew_symmetric_rows(),
        }
    }

    /// Returns the rows as an array.
    pub fn to_rows(self) -> [Vec3; 3] {
        self.rows
    }

    /// Returns row `axis`.
    pub fn row(&self, axis: Axis) -> Vec3 {
        self.rows[axis.index()]
    }

    /// Returns column `axis` as `(r0[i], r1[i], r2[i])` with `w = 0`.
    pub fn column(&self, axis: Axis) -> Vec3 {
        Vec3::new(self.rows[0][axis], self.rows[1][axis], self.rows[2][axis])
    }

    /// Checked form of [`Mat3::row`] for raw indices.
    pub fn try_row(&self, index: usize) -> Result<Vec3, MathError> {
        Ok(self.row(Axis::try_from(index)?))
    }

    /// Checked form of [`Mat3::column`] for raw indices.
    pub fn try_column(&self, index: usize) -> Result<Vec3, MathError> {
        Ok(self.column(Axis::try_from(index)?))
    }

    /// Multiplies the matrix by a column vector: `(r0·v, r1·v, r2·v)`.
    pub fn mul_vec3(&self, v: &Vec3) -> Vec3 {
        Vec3::new(self.rows[0].dot(v), self.rows[1].dot(v), self.rows[2].dot(v))
    }
}
