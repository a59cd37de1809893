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

//! Capability traits for the externally owned resources the pipeline binds,
//! and the shared handle type used to reference them.

use super::ShadingModel;
use std::{fmt, ops::Deref, sync::Arc};

/// A thread-safe, reference-counted handle to a shared render resource.
///
/// Cloning a handle is cheap and never duplicates the resource. Two handles
/// are considered the same resource when they point to the same allocation;
/// the batch executor relies on this identity, never on value equality, to
/// decide whether a rebind is needed.
pub struct ResourceHandle<T: ?Sized>(Arc<T>);

impl<T> ResourceHandle<T> {
    /// Creates a new handle that takes ownership of the resource.
    pub fn new(resource: T) -> Self {
        Self(Arc::new(resource))
    }
}

impl<T: ?Sized> ResourceHandle<T> {
    /// Wraps an existing `Arc`, which may point to an unsized trait object.
    pub fn from_arc(resource: Arc<T>) -> Self {
        Self(resource)
    }

    /// Returns `true` if both handles point to the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }

    /// Returns the number of live handles to this resource.
    pub fn strong_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }
}

impl<T: ?Sized> Clone for ResourceHandle<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: ?Sized> Deref for ResourceHandle<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for ResourceHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ResourceHandle").field(&&*self.0).finish()
    }
}

/// A material: the shader programs and fixed state for every pass it supports.
pub trait Material: fmt::Debug + Send + Sync {
    /// A human-readable label for logging.
    fn label(&self) -> &str;

    /// Whether elements using this material respond to scene lights.
    fn shading_model(&self) -> ShadingModel;
}

/// A per-object parameter override of a material (textures, constants).
pub trait MaterialInstance: fmt::Debug + Send + Sync {
    /// A human-readable label for logging.
    fn label(&self) -> &str;

    /// The material this instance parameterizes.
    fn material(&self) -> &MaterialHandle;
}

/// Vertex/index data that can be drawn with a material.
pub trait Mesh: fmt::Debug + Send + Sync {
    /// A human-readable label for logging.
    fn label(&self) -> &str;

    /// Whether the mesh carries an instance buffer.
    ///
    /// The material binds a different vertex layout for instanced meshes.
    fn is_instanced(&self) -> bool {
        false
    }
}

/// An off-screen surface a frame can be rendered into instead of the backbuffer.
pub trait RenderTarget: fmt::Debug + Send + Sync {
    /// A human-readable label for logging.
    fn label(&self) -> &str;
}

/// Shared handle to a [`Material`].
pub type MaterialHandle = ResourceHandle<dyn Material>;
/// Shared handle to a [`MaterialInstance`].
pub type MaterialInstanceHandle = ResourceHandle<dyn MaterialInstance>;
/// Shared handle to a [`Mesh`].
pub type MeshHandle = ResourceHandle<dyn Mesh>;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct TestMaterial(&'static str);

    impl Material for TestMaterial {
        fn label(&self) -> &str {
            self.0
        }

        fn shading_model(&self) -> ShadingModel {
            ShadingModel::Lit
        }
    }

    #[test]
    fn test_handle_identity_is_by_allocation() {
        let a = MaterialHandle::from_arc(Arc::new(TestMaterial("a")));
        let a_clone = a.clone();
        let look_alike = MaterialHandle::from_arc(Arc::new(TestMaterial("a")));

        assert!(a.ptr_eq(&a_clone));
        assert!(!a.ptr_eq(&look_alike), "Equal content must not mean same resource");
    }

    #[test]
    fn test_handle_derefs_to_resource() {
        let a = MaterialHandle::from_arc(Arc::new(TestMaterial("brick")));
        assert_eq!(a.label(), "brick");
        assert_eq!(a.shading_model(), ShadingModel::Lit);
        assert_eq!(a.strong_count(), 1);
    }
}
