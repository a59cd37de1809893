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

//! Acts as the **[A]gent** for the rendering subsystem.
//!
//! This module provides the per-frame orchestration of the scene render
//! pipeline. The agent accepts the frame's drawable elements and lights,
//! selects one rendering strategy from the light count, and delegates the
//! backend calls of that strategy to the matching `render_lane`.

mod agent;
mod strategy;

pub use agent::*;
pub use strategy::*;
