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

//! World transform sources for drawable elements.

use crate::math::Mat4;
use std::fmt::Debug;
use std::sync::{PoisonError, RwLock};

/// Something that owns the world transform of a drawable element, typically a
/// scene node.
///
/// The pipeline reads the transform lazily at draw time, so a node may move
/// between submission and draw.
pub trait TransformSource: Debug + Send + Sync {
    /// Returns the full world transform.
    fn world_transform(&self) -> Mat4;
}

/// A minimal scene node holding a mutable world transform.
#[derive(Debug, Default)]
pub struct TransformNode {
    transform: RwLock<Mat4>,
}

impl TransformNode {
    /// Creates a node with the given world transform.
    pub fn new(transform: Mat4) -> Self {
        Self {
            transform: RwLock::new(transform),
        }
    }

    /// Replaces the world transform.
    pub fn set_transform(&self, transform: Mat4) {
        *self
            .transform
            .write()
            .unwrap_or_else(PoisonError::into_inner) = transform;
    }
}

impl TransformSource for TransformNode {
    fn world_transform(&self) -> Mat4 {
        *self.transform.read().unwrap_or_else(PoisonError::into_inner)
    }
}
