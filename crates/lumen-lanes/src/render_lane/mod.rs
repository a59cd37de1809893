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

//! Rendering lane - hot path for the per-frame passes

use lumen_core::{
    math::LinearRgba,
    renderer::{FrameStats, RenderBackend, ViewInfo},
};

mod deferred_lane;
mod depth_only_lane;
mod element;
#[cfg(test)]
mod fixtures;
mod lit_forward_lane;
mod lock;
mod mesh_batch;
mod queue;
mod screen_space_lane;
mod simple_unlit_lane;

pub use deferred_lane::*;
pub use depth_only_lane::*;
pub use element::*;
pub use lit_forward_lane::*;
pub use lock::*;
pub use mesh_batch::*;
pub use queue::*;
pub use screen_space_lane::*;
pub use simple_unlit_lane::*;

/// Everything a lane may touch while it executes.
pub struct LaneContext<'a> {
    /// The backend of the pipeline, inside an open frame.
    pub backend: &'a mut dyn RenderBackend,
    /// The camera of the main-scene passes.
    pub view: &'a ViewInfo,
    /// The ambient colour of the frame's first lit pass.
    pub ambient_color: LinearRgba,
    /// Counters for the frame being rendered.
    pub stats: &'a mut FrameStats,
}

impl LaneContext<'_> {
    /// Binds `color` as ambient state and counts it.
    pub fn bind_ambient(&mut self, color: LinearRgba) {
        self.backend.bind_ambient_state(color);
        self.stats.ambient_binds += 1;
    }

    /// Binds the frame camera.
    pub fn bind_view(&mut self) {
        self.backend
            .bind_view_proj(&self.view.view, &self.view.projection);
    }
}

/// A trait defining the behavior of a rendering lane.
///
/// A lane executes one branch of the per-frame pass sequence against the
/// queued buckets. Lanes are stateless: the `RenderAgent` decides which lane
/// runs, and the lane only issues backend calls through the batch executor.
pub trait RenderLane: Send + Sync + std::fmt::Debug {
    /// Returns a human-readable identifier for this rendering strategy.
    ///
    /// The `RenderAgent` uses it to look lanes up and for logging.
    fn strategy_name(&self) -> &'static str;

    /// Issues the pass sequence of this strategy.
    ///
    /// # Arguments
    ///
    /// * `queue`: The buckets of the current frame.
    /// * `ctx`: The backend, camera and counters of the current frame.
    fn render(&self, queue: &FrameQueue, ctx: &mut LaneContext<'_>);
}
