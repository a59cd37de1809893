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

//! Implements the forward strategy used when no light is queued.

use super::{mesh_batch::render_meshes, FrameQueue, LaneContext, RenderLane};
use lumen_core::{math::LinearRgba, renderer::RenderPassId};

/// A lane that draws the whole scene once without lighting.
///
/// Ambient is bound black, then the lit bucket and the unlit bucket are both
/// drawn with the unlit pass. Lit elements are never skipped for lack of
/// lights.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleUnlitLane;

impl SimpleUnlitLane {
    /// Creates a new `SimpleUnlitLane`.
    pub fn new() -> Self {
        Self
    }
}

impl RenderLane for SimpleUnlitLane {
    fn strategy_name(&self) -> &'static str {
        "SimpleUnlit"
    }

    fn render(&self, queue: &FrameQueue, ctx: &mut LaneContext<'_>) {
        ctx.bind_ambient(LinearRgba::BLACK);
        ctx.bind_view();
        for bucket in [queue.lit(), queue.unlit()] {
            render_meshes(
                bucket,
                RenderPassId::Unlit,
                queue.epoch(),
                ctx.backend,
                ctx.stats,
            );
        }
    }
}
