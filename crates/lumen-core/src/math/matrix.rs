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

//! Defines the `Mat4` type.

use super::{Vec3, Vec4};
use std::ops::Mul;

/// A 4x4 column-major matrix.
///
/// Used for world transforms of drawable elements and for the view and
/// projection matrices bound before each pass.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Mat4 {
    /// The columns of the matrix. `cols[0]` is the first column, and so on.
    pub cols: [Vec4; 4],
}

impl Mat4 {
    /// The 4x4 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [Vec4::X, Vec4::Y, Vec4::Z, Vec4::W],
    };

    /// Creates a new matrix from four column vectors.
    #[inline]
    pub fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self {
            cols: [c0, c1, c2, c3],
        }
    }

    /// Returns a row of the matrix as a `Vec4`.
    #[inline]
    pub fn get_row(&self, index: usize) -> Vec4 {
        Vec4::new(
            self.cols[0].get(index),
            self.cols[1].get(index),
            self.cols[2].get(index),
            self.cols[3].get(index),
        )
    }

    /// Creates a translation matrix.
    #[inline]
    pub fn from_translation(v: Vec3) -> Self {
        Self::from_cols(Vec4::X, Vec4::Y, Vec4::Z, Vec4::from_vec3(v, 1.0))
    }

    /// Creates a non-uniform scaling matrix.
    #[inline]
    pub fn from_scale(scale: Vec3) -> Self {
        Self::from_cols(
            Vec4::new(scale.x, 0.0, 0.0, 0.0),
            Vec4::new(0.0, scale.y, 0.0, 0.0),
            Vec4::new(0.0, 0.0, scale.z, 0.0),
            Vec4::W,
        )
    }

    /// Creates a right-handed perspective projection with a [0, 1] depth range.
    ///
    /// `z_near` must be positive and smaller than `z_far`.
    #[inline]
    pub fn perspective_rh_zo(fov_y_radians: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        let f = 1.0 / (fov_y_radians / 2.0).tan();
        let range = z_near - z_far;
        Self::from_cols(
            Vec4::new(f / aspect_ratio, 0.0, 0.0, 0.0),
            Vec4::new(0.0, f, 0.0, 0.0),
            Vec4::new(0.0, 0.0, z_far / range, -1.0),
            Vec4::new(0.0, 0.0, (z_near * z_far) / range, 0.0),
        )
    }

    /// Creates a right-handed orthographic projection with a [0, 1] depth range.
    ///
    /// `z_near` and `z_far` may be given in either order but must differ.
    #[inline]
    pub fn orthographic_rh_zo(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        let width = right - left;
        let height = top - bottom;
        let depth = z_far - z_near;
        Self::from_cols(
            Vec4::new(2.0 / width, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 / height, 0.0, 0.0),
            Vec4::new(0.0, 0.0, -1.0 / depth, 0.0),
            Vec4::new(
                -(right + left) / width,
                -(top + bottom) / height,
                -z_near / depth,
                1.0,
            ),
        )
    }

    /// Returns the translation part of an affine matrix.
    #[inline]
    pub fn translation(&self) -> Vec3 {
        self.cols[3].truncate()
    }
}

impl Default for Mat4 {
    /// Returns the identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Mat4> for Mat4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Mat4) -> Self {
        let mut cols = [Vec4::ZERO; 4];
        for (col, rhs_col) in cols.iter_mut().zip(rhs.cols) {
            *col = Vec4::new(
                self.get_row(0).dot(rhs_col),
                self.get_row(1).dot(rhs_col),
                self.get_row(2).dot(rhs_col),
                self.get_row(3).dot(rhs_col),
            );
        }
        Mat4 { cols }
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;
    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        self.cols[0] * rhs.x + self.cols[1] * rhs.y + self.cols[2] * rhs.z + self.cols[3] * rhs.w
    }
}
