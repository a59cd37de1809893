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

//! Global settings for the render pipeline.

use crate::math::LinearRgba;
use crate::renderer::error::RenderError;
use serde::{Deserialize, Serialize};

/// Light count above which the deferred strategy is used.
///
/// At or below this count, N forward passes are cheaper than one deferred
/// geometry pass plus N light resolves.
pub const DEFAULT_DEFERRED_LIGHT_THRESHOLD: usize = 8;

/// A collection of global settings that affect how frames are rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// The deferred-lighting light-count threshold. Strictly more lights than
    /// this selects the deferred strategy.
    pub deferred_light_threshold: usize,
    /// The ambient colour bound for the first forward light pass.
    pub ambient_color: LinearRgba,
    /// The colour the backbuffer is cleared to.
    pub clear_color: LinearRgba,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            deferred_light_threshold: DEFAULT_DEFERRED_LIGHT_THRESHOLD,
            ambient_color: LinearRgba::from_rgba8(64, 64, 64, 255),
            clear_color: LinearRgba::from_rgba8(133, 153, 181, 255),
        }
    }
}

impl RenderSettings {
    /// Parses settings from a RON document. Missing fields take their defaults.
    pub fn from_ron_str(source: &str) -> Result<Self, RenderError> {
        let settings: Self = ron::de::from_str(source)
            .map_err(|e| RenderError::InvalidConfiguration(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serializes the settings to a pretty-printed RON document.
    pub fn to_ron_string(&self) -> Result<String, RenderError> {
        let pretty_config = ron::ser::PrettyConfig::default().indentor("  ".to_string());
        ron::ser::to_string_pretty(self, pretty_config)
            .map_err(|e| RenderError::InvalidConfiguration(e.to_string()))
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<(), RenderError> {
        if !self.ambient_color.is_finite() {
            return Err(RenderError::InvalidConfiguration(
                "ambient_color has non-finite components".to_string(),
            ));
        }
        if !self.clear_color.is_finite() {
            return Err(RenderError::InvalidConfiguration(
                "clear_color has non-finite components".to_string(),
            ));
        }
        Ok(())
    }
}
