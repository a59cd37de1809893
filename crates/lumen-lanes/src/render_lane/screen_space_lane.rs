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

//! The screen-space pre-pass.

use super::{mesh_batch::render_meshes, FrameQueue, LaneContext, RenderLane};
use lumen_core::renderer::{RenderPassId, ViewInfo};

/// Draws the screen-space bucket with an identity view and a clip-space
/// orthographic projection, using the unlit pass.
///
/// It runs before any main-scene lane so screen-space content is never
/// occluded by scene geometry.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScreenSpaceLane;

impl ScreenSpaceLane {
    /// Creates a new `ScreenSpaceLane`.
    pub fn new() -> Self {
        Self
    }
}

impl RenderLane for ScreenSpaceLane {
    fn strategy_name(&self) -> &'static str {
        "ScreenSpace"
    }

    fn render(&self, queue: &FrameQueue, ctx: &mut LaneContext<'_>) {
        if queue.screen_space().is_empty() {
            return;
        }
        let screen = ViewInfo::screen_space();
        ctx.backend.bind_view_proj(&screen.view, &screen.projection);
        render_meshes(
            queue.screen_space(),
            RenderPassId::Unlit,
            queue.epoch(),
            ctx.backend,
            ctx.stats,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_lane::fixtures::Frame;
    use lumen_core::math::Mat4;
    use lumen_infra::BackendCommand;

    #[test]
    fn test_skips_empty_bucket() {
        let mut frame = Frame::new();
        frame.lit("scene");
        frame.run(&ScreenSpaceLane::new());
        assert!(frame.log.is_empty(), "No state is bound without screen-space content");
    }

    #[test]
    fn test_binds_ortho_identity_view() {
        let mut frame = Frame::new();
        frame.screen_space("hud");
        frame.run(&ScreenSpaceLane::new());

        let commands = frame.log.snapshot();
        assert_eq!(
            commands[0],
            BackendCommand::BindViewProj {
                view: Mat4::IDENTITY,
                projection: Mat4::orthographic_rh_zo(-1.0, 1.0, -1.0, 1.0, 1.0, -1.0),
            }
        );
        assert!(commands.iter().any(|c| matches!(
            c,
            BackendCommand::BindMaterial {
                pass: RenderPassId::Unlit,
                ..
            }
        )));
        assert_eq!(frame.log.draw_calls(), 1);
    }
}
