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

//! Per-frame statistics for the render pipeline.

/// Counters gathered while executing a single frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// A sequential counter for rendered frames.
    pub frame_number: u64,
    /// The name of the main-scene strategy that ran, if any pass ran at all.
    pub strategy: Option<&'static str>,
    /// Every draw call issued to the backend.
    pub draw_calls: u32,
    /// Distinct elements drawn this frame. A lit element drawn once per light
    /// in a multi-pass frame counts once.
    pub elements_drawn: u32,
    /// Material binds issued by the batch executor.
    pub material_binds: u32,
    /// Mesh binds issued by the batch executor.
    pub mesh_binds: u32,
    /// Forward light binds.
    pub light_binds: u32,
    /// Deferred light resolves.
    pub deferred_light_resolves: u32,
    /// Ambient state binds.
    pub ambient_binds: u32,
    /// Additive multi-pass scopes opened.
    pub multi_pass_scopes: u32,
    /// Batch executor runs (one per bucket per pass).
    pub batches: u32,
}

impl FrameStats {
    /// Creates empty counters for the given frame number.
    pub fn new(frame_number: u64) -> Self {
        Self {
            frame_number,
            ..Default::default()
        }
    }
}
