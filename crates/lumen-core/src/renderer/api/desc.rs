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

//! Backend selection and renderer description types.

use super::RenderSettings;
use crate::renderer::error::RenderError;
use serde::{Deserialize, Serialize};

/// Identifies the underlying graphics API of a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GraphicsBackendType {
    /// Vulkan API.
    Vulkan,
    /// Microsoft's DirectX 12 API.
    Dx12,
    /// Microsoft's Direct3D 9 API.
    Direct3D9,
    /// OpenGL API.
    OpenGL,
    /// A backend with no GPU, recording commands instead of executing them.
    Headless,
    /// An unknown or unsupported backend.
    #[default]
    Unknown,
}

impl GraphicsBackendType {
    /// Returns the display name of the backend.
    pub fn name(&self) -> &'static str {
        match self {
            GraphicsBackendType::Vulkan => "Vulkan",
            GraphicsBackendType::Dx12 => "Direct3D12",
            GraphicsBackendType::Direct3D9 => "Direct3D9",
            GraphicsBackendType::OpenGL => "OpenGL",
            GraphicsBackendType::Headless => "Headless",
            GraphicsBackendType::Unknown => "Unknown",
        }
    }
}

/// Everything needed to create a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderDesc {
    /// The backend API requested.
    pub backend: GraphicsBackendType,
    /// An optional label for the created device.
    pub device_label: Option<String>,
    /// Settings the pipeline starts with.
    pub settings: RenderSettings,
}

impl RenderDesc {
    /// Creates a description for the given backend with default settings.
    pub fn new(backend: GraphicsBackendType) -> Self {
        Self {
            backend,
            device_label: None,
            settings: RenderSettings::default(),
        }
    }

    /// Returns `true` if a renderer can be created from this description.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Checks the description, explaining the first problem found.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.backend == GraphicsBackendType::Unknown {
            return Err(RenderError::InvalidDescription(
                "no backend type requested".to_string(),
            ));
        }
        self.settings
            .validate()
            .map_err(|e| RenderError::InvalidDescription(e.to_string()))
    }
}

impl Default for RenderDesc {
    fn default() -> Self {
        Self::new(GraphicsBackendType::Unknown)
    }
}
