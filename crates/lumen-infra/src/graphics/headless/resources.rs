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

//! Label-only resources understood by the headless backend.

use lumen_core::renderer::{
    Material, MaterialHandle, MaterialInstance, MaterialInstanceHandle, Mesh, MeshHandle,
    RenderTarget, ShadingModel,
};
use std::sync::Arc;

/// A material with no GPU programs.
#[derive(Debug, Clone)]
pub struct HeadlessMaterial {
    label: String,
    shading_model: ShadingModel,
}

impl HeadlessMaterial {
    /// A material that responds to scene lights.
    pub fn lit(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            shading_model: ShadingModel::Lit,
        }
    }

    /// A material that ignores scene lights.
    pub fn unlit(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            shading_model: ShadingModel::Unlit,
        }
    }

    /// Wraps the material in a shared handle.
    pub fn into_handle(self) -> MaterialHandle {
        MaterialHandle::from_arc(Arc::new(self))
    }
}

impl Material for HeadlessMaterial {
    fn label(&self) -> &str {
        &self.label
    }

    fn shading_model(&self) -> ShadingModel {
        self.shading_model
    }
}

/// A parameter override of a material.
#[derive(Debug, Clone)]
pub struct HeadlessMaterialInstance {
    label: String,
    material: MaterialHandle,
}

impl HeadlessMaterialInstance {
    /// Creates an instance of `material`.
    pub fn new(label: impl Into<String>, material: MaterialHandle) -> Self {
        Self {
            label: label.into(),
            material,
        }
    }

    /// Wraps the instance in a shared handle.
    pub fn into_handle(self) -> MaterialInstanceHandle {
        MaterialInstanceHandle::from_arc(Arc::new(self))
    }
}

impl MaterialInstance for HeadlessMaterialInstance {
    fn label(&self) -> &str {
        &self.label
    }

    fn material(&self) -> &MaterialHandle {
        &self.material
    }
}

/// A mesh with no vertex data.
#[derive(Debug, Clone)]
pub struct HeadlessMesh {
    label: String,
    instanced: bool,
}

impl HeadlessMesh {
    /// A regular mesh.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            instanced: false,
        }
    }

    /// A mesh carrying an instance buffer.
    pub fn instanced(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            instanced: true,
        }
    }

    /// Wraps the mesh in a shared handle.
    pub fn into_handle(self) -> MeshHandle {
        MeshHandle::from_arc(Arc::new(self))
    }
}

impl Mesh for HeadlessMesh {
    fn label(&self) -> &str {
        &self.label
    }

    fn is_instanced(&self) -> bool {
        self.instanced
    }
}

/// An off-screen target.
#[derive(Debug, Clone)]
pub struct HeadlessRenderTarget {
    label: String,
}

impl HeadlessRenderTarget {
    /// Creates a target.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl RenderTarget for HeadlessRenderTarget {
    fn label(&self) -> &str {
        &self.label
    }
}
