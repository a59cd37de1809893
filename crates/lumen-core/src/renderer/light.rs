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

//! Defines light parameter types for the rendering system.
//!
//! The pipeline never evaluates these parameters; it hands them to the backend
//! when a light is bound for a forward pass or resolved in the deferred pass.
//! Each light type maps to the shading pass the backend must use for it.

use crate::math::{LinearRgba, Vec3};
use crate::renderer::api::RenderPassId;
use serde::{Deserialize, Serialize};

/// A directional light source that illuminates from a uniform direction.
///
/// # Examples
///
/// ```
/// use lumen_core::renderer::light::DirectionalLight;
/// use lumen_core::math::{Vec3, LinearRgba};
///
/// let sun = DirectionalLight {
///     direction: Vec3::new(0.55, -0.3, 0.75).normalize(),
///     color: LinearRgba::rgb(0.5, 0.5, 0.5),
///     intensity: 1.0,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLight {
    /// The direction the light is pointing (normalized), from the light towards the scene.
    pub direction: Vec3,
    /// The color of the light in linear RGB space.
    pub color: LinearRgba,
    /// The intensity multiplier for the light.
    pub intensity: f32,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            direction: Vec3::new(0.0, -1.0, -0.5).normalize(),
            color: LinearRgba::WHITE,
            intensity: 1.0,
        }
    }
}

/// A point light source that emits light in all directions from a single point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    /// The world-space position of the light.
    pub position: Vec3,
    /// The color of the light in linear RGB space.
    pub color: LinearRgba,
    /// The intensity of the light.
    pub intensity: f32,
    /// The maximum range of the light in world units.
    pub range: f32,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            color: LinearRgba::WHITE,
            intensity: 100.0,
            range: 10.0,
        }
    }
}

/// A spot light source that emits light in a cone from a single point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpotLight {
    /// The world-space position of the light.
    pub position: Vec3,
    /// The direction the spotlight is pointing (normalized).
    pub direction: Vec3,
    /// The color of the light in linear RGB space.
    pub color: LinearRgba,
    /// The intensity of the light.
    pub intensity: f32,
    /// The maximum range of the light in world units.
    pub range: f32,
    /// The angle in radians at which the light begins to fall off.
    pub inner_cone_angle: f32,
    /// The angle in radians at which the light is fully attenuated.
    pub outer_cone_angle: f32,
}

impl Default for SpotLight {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            direction: Vec3::new(0.0, -1.0, 0.0),
            color: LinearRgba::WHITE,
            intensity: 200.0,
            range: 15.0,
            inner_cone_angle: 20.0_f32.to_radians(),
            outer_cone_angle: 35.0_f32.to_radians(),
        }
    }
}

/// An enumeration of all supported light types.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LightType {
    /// A directional light (sun-like, infinite distance, no falloff).
    Directional(DirectionalLight),
    /// A point light (omni-directional with distance falloff).
    Point(PointLight),
    /// A spotlight (cone-shaped with distance and angular falloff).
    Spot(SpotLight),
}

impl LightType {
    /// Returns the shading pass a lit material must use to render under this light.
    pub fn pass(&self) -> RenderPassId {
        match self {
            LightType::Directional(_) => RenderPassId::DirectionalLight,
            LightType::Point(_) => RenderPassId::PointLight,
            LightType::Spot(_) => RenderPassId::SpotLight,
        }
    }

    /// Returns the colour of the light.
    pub fn color(&self) -> LinearRgba {
        match self {
            LightType::Directional(l) => l.color,
            LightType::Point(l) => l.color,
            LightType::Spot(l) => l.color,
        }
    }

    /// Returns the intensity of the light.
    pub fn intensity(&self) -> f32 {
        match self {
            LightType::Directional(l) => l.intensity,
            LightType::Point(l) => l.intensity,
            LightType::Spot(l) => l.intensity,
        }
    }
}

impl Default for LightType {
    fn default() -> Self {
        LightType::Directional(DirectionalLight::default())
    }
}
