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

//! Provides the small set of math value types the render pipeline passes around.
//!
//! The pipeline never performs shading math itself; it only carries view,
//! projection and world transforms, light directions and colours through to the
//! backend. These types are therefore deliberately minimal.

/// A small constant for floating-point comparisons.
pub const EPSILON: f32 = 1e-5;

pub mod color;
pub mod matrix;
pub mod vector;

pub use self::color::LinearRgba;
pub use self::matrix::Mat4;
pub use self::vector::{Vec3, Vec4};

/// Performs an approximate equality comparison using [`EPSILON`].
///
/// # Examples
///
/// ```
/// use lumen_core::math::{approx_eq, EPSILON};
/// assert!(approx_eq(1.0, 1.0 + EPSILON / 2.0));
/// assert!(!approx_eq(1.0, 1.1));
/// ```
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}
