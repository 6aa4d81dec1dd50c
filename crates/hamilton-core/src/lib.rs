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

//! # Hamilton Core
//!
//! Double-precision quaternion algebra for 3D orientation: Hamilton products,
//! normalization, inversion, and conversions to and from roll-pitch-yaw Euler
//! angles and 3x3 rotation matrices.
//!
//! Every operation is a pure function over `Copy` values. The base operations
//! follow IEEE-754 semantics on degenerate input (a zero quaternion normalizes
//! to NaN components); the `try_*` variants report those cases as
//! [`QuaternionError`] instead.

#![warn(missing_docs)]

pub mod error;
pub mod math;

pub use error::QuaternionError;
pub use math::{EulerAngles, Mat3, Quaternion, Vec3};
