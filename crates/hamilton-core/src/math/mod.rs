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

//! Quaternion algebra and the small amount of linear algebra around it.
//!
//! All angles are in **radians**. Approximate comparisons go through the
//! [`approx`] traits implemented for [`Quaternion`], [`Vec3`] and [`Mat3`].
//!
//! ```
//! use approx::assert_abs_diff_eq;
//! use hamilton_core::math::{Quaternion, EPSILON, FRAC_PI_2};
//!
//! let yaw = Quaternion::from_euler(0.0, 0.0, FRAC_PI_2);
//! assert_abs_diff_eq!(yaw * yaw.inv(), Quaternion::IDENTITY, epsilon = EPSILON);
//! ```

/// Default tolerance for floating-point comparisons.
pub const EPSILON: f64 = 1e-9;

pub use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

pub mod matrix;
pub mod quaternion;
pub mod vector;

pub use self::matrix::Mat3;
pub use self::quaternion::{EulerAngles, Quaternion};
pub use self::vector::Vec3;
