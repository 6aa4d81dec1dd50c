// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines the `Mat3` rotation matrix type and associated operations.

use super::{Quaternion, Vec3};
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use std::ops::{Index, Mul};

// --- Mat3 ---

/// A 3x3 column-major matrix of `f64`, used here to hold rotation matrices.
///
/// Storage is column-major to match how the matrix acts on column vectors, while
/// [`Mat3::to_rows`] and [`Mat3::from_rows`] expose the conventional `m[row][col]`
/// layout.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat3 {
    /// The columns of the matrix. `cols[0]` is the first column, and so on.
    pub cols: [Vec3; 3],
}

impl Mat3 {
    /// The 3x3 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [Vec3::X, Vec3::Y, Vec3::Z],
    };

    /// A 3x3 matrix with all elements set to 0.
    pub const ZERO: Self = Self {
        cols: [Vec3::ZERO; 3],
    };

    /// Creates a new matrix from three column vectors.
    #[inline]
    pub fn from_cols(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self { cols: [c0, c1, c2] }
    }

    /// Creates a matrix from a row-major array, `rows[row][col]`.
    #[inline]
    pub fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self::from_cols(
            Vec3::new(rows[0][0], rows[1][0], rows[2][0]),
            Vec3::new(rows[0][1], rows[1][1], rows[2][1]),
            Vec3::new(rows[0][2], rows[1][2], rows[2][2]),
        )
    }

    /// Returns the matrix as a row-major array, `m[row][col]`.
    #[inline]
    pub fn to_rows(&self) -> [[f64; 3]; 3] {
        [
            [self.cols[0].x, self.cols[1].x, self.cols[2].x],
            [self.cols[0].y, self.cols[1].y, self.cols[2].y],
            [self.cols[0].z, self.cols[1].z, self.cols[2].z],
        ]
    }

    /// Returns a row of the matrix as a `Vec3`.
    ///
    /// # Panics
    /// Panics if `index` is greater than 2.
    #[inline]
    pub fn row(&self, index: usize) -> Vec3 {
        Vec3::new(
            self.cols[0][index],
            self.cols[1][index],
            self.cols[2][index],
        )
    }

    /// Creates a matrix for a rotation around the X-axis (roll).
    #[inline]
    pub fn from_rotation_x(angle_radians: f64) -> Self {
        let (s, c) = angle_radians.sin_cos();
        Self::from_cols(
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, c, s),
            Vec3::new(0.0, -s, c),
        )
    }

    /// Creates a matrix for a rotation around the Y-axis (pitch).
    #[inline]
    pub fn from_rotation_y(angle_radians: f64) -> Self {
        let (s, c) = angle_radians.sin_cos();
        Self::from_cols(
            Vec3::new(c, 0.0, -s),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(s, 0.0, c),
        )
    }

    /// Creates a matrix for a rotation around the Z-axis (yaw).
    #[inline]
    pub fn from_rotation_z(angle_radians: f64) -> Self {
        let (s, c) = angle_radians.sin_cos();
        Self::from_cols(
            Vec3::new(c, s, 0.0),
            Vec3::new(-s, c, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        )
    }

    /// Creates a rotation matrix from a quaternion.
    ///
    /// The quaternion is passed through [`Quaternion::unit`] first, so a zero
    /// quaternion yields a matrix of NaN. Use [`Quaternion::try_rot_mat`] to
    /// reject that case.
    #[inline]
    pub fn from_quat(q: Quaternion) -> Self {
        let Quaternion { w, x, y, z } = q.unit();

        Self::from_rows([
            [
                1.0 - 2.0 * (y * y + z * z),
                2.0 * (x * y - w * z),
                2.0 * (w * y + x * z),
            ],
            [
                2.0 * (w * z + y * x),
                1.0 - 2.0 * (z * z + x * x),
                2.0 * (y * z - w * x),
            ],
            [
                2.0 * (z * x - w * y),
                2.0 * (w * x + z * y),
                1.0 - 2.0 * (x * x + y * y),
            ],
        ])
    }

    /// Computes the determinant of the matrix.
    ///
    /// A proper rotation matrix has a determinant of 1.
    #[inline]
    pub fn determinant(&self) -> f64 {
        let c0 = self.cols[0];
        let c1 = self.cols[1];
        let c2 = self.cols[2];
        c0.x * (c1.y * c2.z - c2.y * c1.z) - c1.x * (c0.y * c2.z - c2.y * c0.z)
            + c2.x * (c0.y * c1.z - c1.y * c0.z)
    }

    /// Returns the transpose of the matrix, where rows and columns are swapped.
    ///
    /// For a rotation matrix this is also its inverse.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.row(0), self.row(1), self.row(2))
    }
}

// --- Operator Overloads ---

impl Default for Mat3 {
    /// Returns the 3x3 identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Mat3> for Mat3 {
    type Output = Self;
    /// Multiplies this matrix by another `Mat3`.
    #[inline]
    fn mul(self, rhs: Mat3) -> Self::Output {
        Self::from_cols(self * rhs.cols[0], self * rhs.cols[1], self * rhs.cols[2])
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;
    /// Transforms a `Vec3` by this matrix.
    #[inline]
    fn mul(self, v: Vec3) -> Self::Output {
        self.cols[0] * v.x + self.cols[1] * v.y + self.cols[2] * v.z
    }
}

impl Index<usize> for Mat3 {
    type Output = Vec3;
    /// Allows accessing a matrix column by index.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.cols[index]
    }
}

impl From<[[f64; 3]; 3]> for Mat3 {
    /// Builds a matrix from a row-major array.
    #[inline]
    fn from(rows: [[f64; 3]; 3]) -> Self {
        Self::from_rows(rows)
    }
}

impl From<Mat3> for [[f64; 3]; 3] {
    #[inline]
    fn from(m: Mat3) -> Self {
        m.to_rows()
    }
}

// --- Approximate Comparison ---

impl AbsDiffEq for Mat3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.cols
            .iter()
            .zip(other.cols.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Mat3 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.cols
            .iter()
            .zip(other.cols.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl UlpsEq for Mat3 {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.cols
            .iter()
            .zip(other.cols.iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{EPSILON, FRAC_PI_2, PI};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_identity_default() {
        assert_eq!(Mat3::default(), Mat3::IDENTITY);

        let m = Mat3::from_rotation_z(0.4);
        assert_relative_eq!(m * Mat3::IDENTITY, m, epsilon = EPSILON);
        assert_relative_eq!(Mat3::IDENTITY * m, m, epsilon = EPSILON);
    }

    #[test]
    fn test_rows_layout() {
        let rows = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
        let m = Mat3::from_rows(rows);
        assert_eq!(m.cols[0], Vec3::new(1.0, 4.0, 7.0));
        assert_eq!(m.row(1), Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(m.to_rows(), rows);
        assert_eq!(<[[f64; 3]; 3]>::from(Mat3::from(rows)), rows);
        assert_eq!(m.transpose().to_rows()[0], [1.0, 4.0, 7.0]);
    }

    #[test]
    fn test_axis_rotations() {
        let angle = PI / 6.0;
        let (s, c) = angle.sin_cos();

        let expected_x = Vec3::new(0.0, c, s);
        assert_relative_eq!(Mat3::from_rotation_x(angle) * Vec3::Y, expected_x, epsilon = EPSILON);

        let expected_y = Vec3::new(c, 0.0, -s);
        assert_relative_eq!(Mat3::from_rotation_y(angle) * Vec3::X, expected_y, epsilon = EPSILON);

        let expected_z = Vec3::new(c, s, 0.0);
        assert_relative_eq!(Mat3::from_rotation_z(angle) * Vec3::X, expected_z, epsilon = EPSILON);
    }

    #[test]
    fn test_from_quat_identity_is_exact() {
        assert_eq!(Mat3::from_quat(Quaternion::IDENTITY), Mat3::IDENTITY);
        assert_eq!(Mat3::from_quat(Quaternion::scalar(3.5)), Mat3::IDENTITY);
    }

    #[test]
    fn test_from_quat_matches_axis_rotation() {
        let angle = FRAC_PI_2 * 0.7;
        let qx = Quaternion::from_axis_angle(Vec3::X, angle);
        let qy = Quaternion::from_axis_angle(Vec3::Y, angle);
        let qz = Quaternion::from_axis_angle(Vec3::Z, angle);

        assert_abs_diff_eq!(Mat3::from_quat(qx), Mat3::from_rotation_x(angle), epsilon = EPSILON);
        assert_abs_diff_eq!(Mat3::from_quat(qy), Mat3::from_rotation_y(angle), epsilon = EPSILON);
        assert_abs_diff_eq!(Mat3::from_quat(qz), Mat3::from_rotation_z(angle), epsilon = EPSILON);
    }

    #[test]
    fn test_from_quat_is_orthonormal() {
        let q = Quaternion::new(0.3, -1.2, 0.8, 2.1);
        let m = Mat3::from_quat(q);

        assert_relative_eq!(m.determinant(), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(m * m.transpose(), Mat3::IDENTITY, epsilon = EPSILON);
        for i in 0..3 {
            assert_relative_eq!(m[i].length(), 1.0, epsilon = EPSILON);
            assert_relative_eq!(m.row(i).length(), 1.0, epsilon = EPSILON);
        }
        assert_abs_diff_eq!(m[0].dot(m[1]), 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(m[1].dot(m[2]), 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(m[2].dot(m[0]), 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_from_quat_zero_is_nan() {
        let m = Mat3::from_quat(Quaternion::ZERO);
        assert!(m.to_rows().iter().flatten().all(|v| v.is_nan()));
    }

    #[test]
    fn test_determinant() {
        assert_relative_eq!(Mat3::IDENTITY.determinant(), 1.0);
        assert_relative_eq!(Mat3::ZERO.determinant(), 0.0);
        let m = Mat3::from_rows([[2.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 4.0]]);
        assert_relative_eq!(m.determinant(), 24.0);
    }
}
