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

//! Implements the depth-only strategy.

use super::{mesh_batch::render_meshes, FrameQueue, LaneContext, RenderLane};
use lumen_core::{math::LinearRgba, renderer::RenderPassId};

/// Draws the lit then unlit buckets with the depth pass. No light is bound,
/// whatever the light count.
#[derive(Debug, Default, Clone, Copy)]
pub struct DepthOnlyLane;

impl DepthOnlyLane {
    /// Creates a new `DepthOnlyLane`.
    pub fn new() -> Self {
        Self
    }
}

impl RenderLane for DepthOnlyLane {
    fn strategy_name(&self) -> &'static str {
        "DepthOnly"
    }

    fn render(&self, queue: &FrameQueue, ctx: &mut LaneContext<'_>) {
        ctx.bind_ambient(LinearRgba::BLACK);
        ctx.bind_view();
        for bucket in [queue.lit(), queue.unlit()] {
            render_meshes(
                bucket,
                RenderPassId::Depth,
                queue.epoch(),
                ctx.backend,
                ctx.stats,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_lane::fixtures::Frame;
    use lumen_infra::BackendCommand;

    #[test]
    fn test_lights_are_ignored() {
        let mut frame = Frame::new();
        frame.lit("wall");
        frame.unlit("sky");
        frame.lights(3);
        frame.run(&DepthOnlyLane::new());

        assert_eq!(
            frame.log.count(|c| matches!(
                c,
                BackendCommand::BindLight(_) | BackendCommand::RenderDeferredLight(_)
            )),
            0
        );
        assert_eq!(frame.log.draw_calls(), 2);
        assert!(frame.log.snapshot().iter().all(|c| !matches!(
            c,
            BackendCommand::BindMaterial { pass, .. } if *pass != RenderPassId::Depth
        )));
    }
}
