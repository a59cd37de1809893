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

//! Camera view data bound before a pass.

use crate::math::Mat4;

/// The view and projection matrices of one pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewInfo {
    /// World-to-view transform.
    pub view: Mat4,
    /// View-to-clip transform.
    pub projection: Mat4,
}

impl ViewInfo {
    /// Creates a new `ViewInfo`.
    pub fn new(view: Mat4, projection: Mat4) -> Self {
        Self { view, projection }
    }

    /// The view used for screen-space content: identity view and an orthographic
    /// projection covering clip space, with near and far planes swapped so that
    /// geometry at `z = 0` lands mid-way in the depth range.
    pub fn screen_space() -> Self {
        Self {
            view: Mat4::IDENTITY,
            projection: Mat4::orthographic_rh_zo(-1.0, 1.0, -1.0, 1.0, 1.0, -1.0),
        }
    }
}
