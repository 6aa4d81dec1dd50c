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

//! Provides a double-precision Quaternion type for representing 3D rotations.
//!
//! Multiplication follows the Hamilton convention (`i·j = k`, `j·k = i`,
//! `k·i = j`), and Euler angles use the aerospace roll-pitch-yaw sequence:
//! the rotation is `Rz(psi) · Ry(theta) · Rx(phi)`.

use super::{Mat3, Vec3};
use crate::error::QuaternionError;
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub};

/// Represents the quaternion `w + xi + yj + zk`.
///
/// No invariant is enforced on construction: any four `f64` values form a valid
/// `Quaternion`, including the zero quaternion and non-finite components. Unit
/// length is a property produced by [`Quaternion::unit`], not by the type.
///
/// Operations that divide by the norm ([`unit`](Self::unit), [`inv`](Self::inv),
/// [`euler`](Self::euler), [`rot_mat`](Self::rot_mat)) require a non-zero
/// quaternion. They do not check this; a zero input produces NaN or infinite
/// components following IEEE-754 division. The `try_*` variants check it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Quaternion {
    /// The scalar (real) part.
    pub w: f64,
    /// The `i` component.
    pub x: f64,
    /// The `j` component.
    pub y: f64,
    /// The `k` component.
    pub z: f64,
}

/// Roll-pitch-yaw angles in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerAngles {
    /// Roll, rotation about the X-axis.
    pub phi: f64,
    /// Pitch, rotation about the Y-axis.
    pub theta: f64,
    /// Yaw, rotation about the Z-axis.
    pub psi: f64,
}

impl EulerAngles {
    /// Creates a new set of angles.
    #[inline]
    pub const fn new(phi: f64, theta: f64, psi: f64) -> Self {
        Self { phi, theta, psi }
    }
}

impl From<(f64, f64, f64)> for EulerAngles {
    #[inline]
    fn from((phi, theta, psi): (f64, f64, f64)) -> Self {
        Self { phi, theta, psi }
    }
}

impl From<EulerAngles> for (f64, f64, f64) {
    #[inline]
    fn from(angles: EulerAngles) -> Self {
        (angles.phi, angles.theta, angles.psi)
    }
}

impl Quaternion {
    /// The multiplicative identity, representing no rotation.
    pub const IDENTITY: Quaternion = Quaternion {
        w: 1.0,
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// The additive identity.
    pub const ZERO: Quaternion = Quaternion {
        w: 0.0,
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a new quaternion from its raw components.
    ///
    /// Note: This does not guarantee a unit quaternion.
    #[inline]
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Creates a purely real quaternion `(w, 0, 0, 0)`.
    #[inline]
    pub const fn scalar(w: f64) -> Self {
        Self {
            w,
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Creates a pure quaternion `(0, v.x, v.y, v.z)`.
    #[inline]
    pub const fn from_vector(v: Vec3) -> Self {
        Self {
            w: 0.0,
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }

    /// Returns the imaginary part as a vector.
    #[inline]
    pub const fn vector(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Returns the components in `[w, x, y, z]` order.
    #[inline]
    pub const fn to_array(&self) -> [f64; 4] {
        [self.w, self.x, self.y, self.z]
    }

    /// Creates a quaternion representing a rotation around a given axis by a given angle.
    ///
    /// The axis is rescaled to unit length, so a zero axis yields NaN components.
    #[inline]
    pub fn from_axis_angle(axis: Vec3, angle_radians: f64) -> Self {
        let axis = axis * (1.0 / axis.length());
        let (s, c) = (angle_radians * 0.5).sin_cos();
        Self {
            w: c,
            x: axis.x * s,
            y: axis.y * s,
            z: axis.z * s,
        }
    }

    /// Computes the conjugate `(w, -x, -y, -z)`.
    #[inline]
    pub fn conj(&self) -> Self {
        Self {
            w: self.w,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }

    /// Calculates the squared norm `w² + x² + y² + z²`.
    #[inline]
    pub fn norm2(&self) -> f64 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Calculates the Euclidean norm.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm2().sqrt()
    }

    /// Computes the 4-vector dot product of two quaternions.
    #[inline]
    pub fn dot(&self, other: Self) -> f64 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Adds any number of quaternions component-wise.
    ///
    /// An empty sequence yields [`Quaternion::ZERO`].
    pub fn sum<I>(quaternions: I) -> Self
    where
        I: IntoIterator<Item = Quaternion>,
    {
        quaternions.into_iter().fold(Self::ZERO, |acc, q| acc + q)
    }

    /// Multiplies any number of quaternions left to right with the Hamilton product.
    ///
    /// The fold starts from [`Quaternion::IDENTITY`], so an empty sequence yields
    /// the identity. The order of the sequence matters.
    pub fn prod<I>(quaternions: I) -> Self
    where
        I: IntoIterator<Item = Quaternion>,
    {
        quaternions
            .into_iter()
            .fold(Self::IDENTITY, |acc, q| acc * q)
    }

    /// Rescales the quaternion to unit norm.
    ///
    /// Requires a non-zero quaternion: the zero quaternion divides by zero and
    /// returns NaN components.
    #[inline]
    pub fn unit(&self) -> Self {
        *self / self.norm()
    }

    /// Computes the multiplicative inverse `conj(q) / norm2(q)`.
    ///
    /// Requires a non-zero quaternion, like [`unit`](Self::unit).
    #[inline]
    pub fn inv(&self) -> Self {
        self.conj() / self.norm2()
    }

    /// Extracts roll, pitch and yaw `(phi, theta, psi)` in radians.
    ///
    /// The quaternion is normalized first. Near gimbal lock rounding can push the
    /// pitch `asin` argument just outside `[-1, 1]`; the value is not clamped and
    /// `theta` becomes NaN. [`try_euler`](Self::try_euler) reports that case.
    pub fn euler(&self) -> (f64, f64, f64) {
        let r = self.unit();
        let phi = (2.0 * (r.w * r.x + r.y * r.z)).atan2(1.0 - 2.0 * (r.x * r.x + r.y * r.y));
        let theta = pitch_sine(&r).asin();
        let psi = (2.0 * (r.x * r.y + r.w * r.z)).atan2(1.0 - 2.0 * (r.y * r.y + r.z * r.z));
        (phi, theta, psi)
    }

    /// Same as [`euler`](Self::euler), returned as [`EulerAngles`].
    #[inline]
    pub fn euler_angles(&self) -> EulerAngles {
        self.euler().into()
    }

    /// Builds the quaternion for roll `phi`, pitch `theta` and yaw `psi` in radians.
    ///
    /// The result is always a unit quaternion, equal to
    /// `q_z(psi) · q_y(theta) · q_x(phi)`.
    pub fn from_euler(phi: f64, theta: f64, psi: f64) -> Self {
        let (sp, cp) = (phi / 2.0).sin_cos();
        let (st, ct) = (theta / 2.0).sin_cos();
        let (ss, cs) = (psi / 2.0).sin_cos();
        Self {
            w: cp * ct * cs + sp * st * ss,
            x: sp * ct * cs - cp * st * ss,
            y: cp * st * cs + sp * ct * ss,
            z: cp * ct * ss - sp * st * cs,
        }
    }

    /// Same as [`from_euler`](Self::from_euler), taking [`EulerAngles`].
    #[inline]
    pub fn from_euler_angles(angles: EulerAngles) -> Self {
        Self::from_euler(angles.phi, angles.theta, angles.psi)
    }

    /// Returns the 3x3 rotation matrix of the normalized quaternion, `m[row][col]`.
    ///
    /// `q` and `-q` produce the same matrix.
    #[inline]
    pub fn rot_mat(&self) -> [[f64; 3]; 3] {
        Mat3::from_quat(*self).to_rows()
    }

    /// Rotates a 3D vector by the normalized quaternion.
    pub fn rotate_vec3(&self, v: Vec3) -> Vec3 {
        let r = self.unit();
        let u = r.vector();
        let s = r.w;
        2.0 * u.dot(v) * u + (s * s - u.dot(u)) * v + 2.0 * s * u.cross(v)
    }

    // --- Checked Variants ---

    /// Checked [`unit`](Self::unit): rejects zero-norm, overflowing and non-finite input.
    pub fn try_unit(&self) -> Result<Self, QuaternionError> {
        self.check_invertible()?;
        Ok(self.unit())
    }

    /// Checked [`inv`](Self::inv): rejects zero-norm, overflowing and non-finite input.
    pub fn try_inv(&self) -> Result<Self, QuaternionError> {
        self.check_invertible()?;
        Ok(self.inv())
    }

    /// Checked [`euler`](Self::euler).
    ///
    /// In addition to the zero-norm and non-finite checks, returns
    /// [`QuaternionError::GimbalDomain`] when the pitch argument falls outside
    /// `[-1, 1]` instead of returning a NaN pitch.
    pub fn try_euler(&self) -> Result<(f64, f64, f64), QuaternionError> {
        self.check_invertible()?;
        let value = pitch_sine(&self.unit());
        if !(-1.0..=1.0).contains(&value) {
            log::debug!("Rejecting Euler extraction, pitch argument {value} outside [-1, 1]");
            return Err(QuaternionError::GimbalDomain { value });
        }
        Ok(self.euler())
    }

    /// Checked [`rot_mat`](Self::rot_mat): rejects zero-norm, overflowing and non-finite input.
    pub fn try_rot_mat(&self) -> Result<[[f64; 3]; 3], QuaternionError> {
        self.check_invertible()?;
        Ok(self.rot_mat())
    }

    fn check_invertible(&self) -> Result<(), QuaternionError> {
        let components = [("w", self.w), ("x", self.x), ("y", self.y), ("z", self.z)];
        if let Some((component, _)) = components.into_iter().find(|(_, v)| !v.is_finite()) {
            log::debug!("Rejecting quaternion {}, component {component} is not finite", self);
            return Err(QuaternionError::NonFinite { component });
        }
        let norm2 = self.norm2();
        if norm2 == 0.0 {
            log::debug!("Rejecting zero-norm quaternion");
            return Err(QuaternionError::ZeroNorm);
        }
        if !norm2.is_finite() {
            log::debug!("Rejecting quaternion {}, squared norm overflows", self);
            return Err(QuaternionError::NormOverflow);
        }
        Ok(())
    }
}

/// Sine of the pitch angle, `2(wy - zx)`, for a unit quaternion.
#[inline]
fn pitch_sine(r: &Quaternion) -> f64 {
    2.0 * (r.w * r.y - r.z * r.x)
}

// --- Conversions ---

impl Default for Quaternion {
    /// Returns the identity quaternion, representing no rotation.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<f64> for Quaternion {
    #[inline]
    fn from(w: f64) -> Self {
        Self::scalar(w)
    }
}

impl From<[f64; 4]> for Quaternion {
    /// Builds a quaternion from `[w, x, y, z]`.
    #[inline]
    fn from([w, x, y, z]: [f64; 4]) -> Self {
        Self { w, x, y, z }
    }
}

impl From<Quaternion> for [f64; 4] {
    #[inline]
    fn from(q: Quaternion) -> Self {
        q.to_array()
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}i + {}j + {}k", self.w, self.x, self.y, self.z)
    }
}

// --- Operator Overloads ---

impl Mul<Quaternion> for Quaternion {
    type Output = Self;
    /// Combines two quaternions using the Hamilton product.
    /// Note that quaternion multiplication is not commutative.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y + self.y * rhs.w + self.z * rhs.x - self.x * rhs.z,
            z: self.w * rhs.z + self.z * rhs.w + self.x * rhs.y - self.y * rhs.x,
        }
    }
}

impl MulAssign<Quaternion> for Quaternion {
    /// Right-multiplies this quaternion by another.
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<Vec3> for Quaternion {
    type Output = Vec3;
    /// Rotates a `Vec3` by this quaternion.
    #[inline]
    fn mul(self, rhs: Vec3) -> Self::Output {
        self.rotate_vec3(rhs)
    }
}

impl Add<Quaternion> for Quaternion {
    type Output = Self;
    /// Adds two quaternions component-wise.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            w: self.w + rhs.w,
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl AddAssign<Quaternion> for Quaternion {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub<Quaternion> for Quaternion {
    type Output = Self;
    /// Subtracts two quaternions component-wise.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            w: self.w - rhs.w,
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Mul<f64> for Quaternion {
    type Output = Self;
    /// Scales all components of the quaternion by a scalar.
    #[inline]
    fn mul(self, scalar: f64) -> Self::Output {
        Self {
            w: self.w * scalar,
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl Div<f64> for Quaternion {
    type Output = Self;
    /// Divides all components of the quaternion by a scalar.
    #[inline]
    fn div(self, scalar: f64) -> Self::Output {
        Self {
            w: self.w / scalar,
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}

impl Neg for Quaternion {
    type Output = Self;
    /// Negates all components. The result represents the same rotation.
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            w: -self.w,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Sum for Quaternion {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Quaternion::sum(iter)
    }
}

impl<'a> Sum<&'a Quaternion> for Quaternion {
    fn sum<I: Iterator<Item = &'a Quaternion>>(iter: I) -> Self {
        Quaternion::sum(iter.copied())
    }
}

impl Product for Quaternion {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        Quaternion::prod(iter)
    }
}

impl<'a> Product<&'a Quaternion> for Quaternion {
    fn product<I: Iterator<Item = &'a Quaternion>>(iter: I) -> Self {
        Quaternion::prod(iter.copied())
    }
}

// --- Approximate Comparison ---

impl AbsDiffEq for Quaternion {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.w.abs_diff_eq(&other.w, epsilon)
            && self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Quaternion {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.w.relative_eq(&other.w, epsilon, max_relative)
            && self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl UlpsEq for Quaternion {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.w.ulps_eq(&other.w, epsilon, max_ulps)
            && self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
    }
}
