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

//! Shading pass identifiers and material shading classification.

use serde::{Deserialize, Serialize};

/// Selects which shader/state configuration a material binds for a draw.
///
/// A lit material carries one program per light pass in addition to the unlit
/// and depth programs; the backend picks the right one from this identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RenderPassId {
    /// No lighting contribution. Also used for screen-space content and the
    /// deferred geometry (attribute) pass.
    Unlit,
    /// Depth only, no colour output.
    Depth,
    /// Lit by a single directional light.
    DirectionalLight,
    /// Lit by a single point light.
    PointLight,
    /// Lit by a single spot light.
    SpotLight,
}

impl RenderPassId {
    /// Returns a stable name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            RenderPassId::Unlit => "Unlit",
            RenderPassId::Depth => "Depth",
            RenderPassId::DirectionalLight => "DirectionalLight",
            RenderPassId::PointLight => "PointLight",
            RenderPassId::SpotLight => "SpotLight",
        }
    }

    /// Returns `true` for the passes that carry a light contribution.
    pub fn is_light_pass(&self) -> bool {
        matches!(
            self,
            RenderPassId::DirectionalLight | RenderPassId::PointLight | RenderPassId::SpotLight
        )
    }
}

/// The shading classification of a material, which decides the bucket an
/// element is queued into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShadingModel {
    /// Responds to scene lights.
    Lit,
    /// Ignores scene lights.
    #[default]
    Unlit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_passes() {
        assert!(RenderPassId::PointLight.is_light_pass());
        assert!(!RenderPassId::Unlit.is_light_pass());
        assert!(!RenderPassId::Depth.is_light_pass());
    }

    #[test]
    fn test_default_shading_is_unlit() {
        assert_eq!(ShadingModel::default(), ShadingModel::Unlit);
    }
}
