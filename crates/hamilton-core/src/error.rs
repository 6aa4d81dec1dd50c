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

//! Error type returned by the checked quaternion operations.

use std::fmt;

/// Reasons a checked quaternion operation refused its input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuaternionError {
    /// The quaternion has zero norm, so it cannot be normalized or inverted.
    ZeroNorm,
    /// The squared norm overflows to infinity although every component is finite.
    NormOverflow,
    /// A component is NaN or infinite.
    NonFinite {
        /// Name of the offending component (`"w"`, `"x"`, `"y"` or `"z"`).
        component: &'static str,
    },
    /// The pitch `asin` argument left `[-1, 1]` through rounding near gimbal lock.
    GimbalDomain {
        /// The out-of-range argument that would have been passed to `asin`.
        value: f64,
    },
}

impl fmt::Display for QuaternionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuaternionError::ZeroNorm => write!(f, "Quaternion has zero norm"),
            QuaternionError::NormOverflow => write!(f, "Quaternion norm overflows f64"),
            QuaternionError::NonFinite { component } => {
                write!(f, "Quaternion component {component} is not finite")
            }
            QuaternionError::GimbalDomain { value } => {
                write!(f, "Pitch argument {value} is outside the asin domain [-1, 1]")
            }
        }
    }
}

impl std::error::Error for QuaternionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            QuaternionError::ZeroNorm.to_string(),
            "Quaternion has zero norm"
        );
        assert_eq!(
            QuaternionError::NormOverflow.to_string(),
            "Quaternion norm overflows f64"
        );
        assert_eq!(
            QuaternionError::NonFinite { component: "y" }.to_string(),
            "Quaternion component y is not finite"
        );
        assert!(QuaternionError::GimbalDomain { value: 1.5 }
            .to_string()
            .contains("1.5"));
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(QuaternionError::ZeroNorm);
        assert!(err.source().is_none());
    }
}
