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

//! Implements the deferred strategy used for light-heavy frames.

use super::{mesh_batch::render_meshes, FrameQueue, LaneContext, RenderLane};
use lumen_core::renderer::RenderPassId;

/// Draws all geometry once into the attribute targets, then resolves each
/// queued light in screen space.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeferredLane;

impl DeferredLane {
    /// Creates a new `DeferredLane`.
    pub fn new() -> Self {
        Self
    }
}

impl RenderLane for DeferredLane {
    fn strategy_name(&self) -> &'static str {
        "Deferred"
    }

    fn render(&self, queue: &FrameQueue, ctx: &mut LaneContext<'_>) {
        ctx.backend.bind_deferred_state();
        ctx.bind_view();

        // Geometry pass.
        for bucket in [queue.lit(), queue.unlit()] {
            render_meshes(
                bucket,
                RenderPassId::Unlit,
                queue.epoch(),
                ctx.backend,
                ctx.stats,
            );
        }

        for light in queue.lights() {
            ctx.backend.render_deferred_light(light.light());
            ctx.stats.deferred_light_resolves += 1;
        }
    }
}
