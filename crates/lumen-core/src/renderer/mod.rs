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

//! Provides the public, backend-agnostic rendering contracts.
//!
//! This module defines the 'what' of rendering: the capability traits a backend
//! must implement ([`RenderBackend`], [`BackendFactory`]), the resources it binds
//! ([`Material`], [`Mesh`], ...), and the value types exchanged with it. The
//! 'how' lives in a concrete backend crate, and the orchestration that decides
//! what to draw lives in `lumen-lanes` and `lumen-agents`.

pub mod api;
pub mod error;
pub mod light;
pub mod traits;

pub use self::api::*;
pub use self::error::RenderError;
pub use self::light::{DirectionalLight, LightType, PointLight, SpotLight};
pub use self::traits::{BackendFactory, RenderBackend};
