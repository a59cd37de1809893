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

//! Implements the forward multi-pass lighting strategy.
//!
//! The lit bucket is drawn once per queued light. The first pass carries the
//! scene ambient term; every following pass is accumulated additively against
//! black ambient, inside a single multi-pass scope. Unlit geometry is drawn
//! once, after all light passes, and is never re-lit.

use super::{mesh_batch::render_meshes, FrameQueue, LaneContext, RenderLane, SimpleUnlitLane};
use lumen_core::{math::LinearRgba, renderer::RenderPassId};

/// A lane that implements forward lighting with one pass per light.
#[derive(Debug, Default, Clone, Copy)]
pub struct LitForwardLane;

impl LitForwardLane {
    /// Creates a new `LitForwardLane`.
    pub fn new() -> Self {
        Self
    }
}

impl RenderLane for LitForwardLane {
    fn strategy_name(&self) -> &'static str {
        "LitForward"
    }

    fn render(&self, queue: &FrameQueue, ctx: &mut LaneContext<'_>) {
        let Some((first, rest)) = queue.lights().split_first() else {
            log::warn!("LitForwardLane ran without lights, drawing the frame unlit");
            SimpleUnlitLane::new().render(queue, ctx);
            return;
        };

        ctx.bind_ambient(ctx.ambient_color);
        ctx.bind_view();

        // The first light also carries the ambient contribution.
        ctx.backend.bind_light(first.light());
        ctx.stats.light_binds += 1;
        render_meshes(
            queue.lit(),
            first.pass(),
            queue.epoch(),
            ctx.backend,
            ctx.stats,
        );
        queue.release_light(first);

        if !rest.is_empty() {
            ctx.bind_ambient(LinearRgba::BLACK);
            ctx.backend.begin_multi_pass();
            ctx.stats.multi_pass_scopes += 1;
            for light in rest {
                ctx.backend.bind_light(light.light());
                ctx.stats.light_binds += 1;
                render_meshes(
                    queue.lit(),
                    light.pass(),
                    queue.epoch(),
                    ctx.backend,
                    ctx.stats,
                );
                queue.release_light(light);
            }
            ctx.backend.end_multi_pass();
        }

        render_meshes(
            queue.unlit(),
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
    use crate::render_lane::fixtures::{Frame, AMBIENT};
    use lumen_infra::BackendCommand;

    #[test]
    fn test_single_light_opens_no_scope() {
        let mut frame = Frame::new();
        for i in 0..5 {
            frame.lit(&format!("lit{i}"));
        }
        frame.lights(1);
        frame.run(&LitForwardLane::new());

        assert_eq!(
            frame.log.count(|c| matches!(c, BackendCommand::BindLight(_))),
            1
        );
        assert_eq!(
            frame.log.count(|c| matches!(c, BackendCommand::BindAmbientState(_))),
            1
        );
        assert_eq!(
            frame.log.count(|c| *c == BackendCommand::BeginMultiPass),
            0
        );
        assert_eq!(frame.log.snapshot()[0], BackendCommand::BindAmbientState(AMBIENT));
        assert_eq!(frame.log.draw_calls(), 5);
        assert!(frame.log.snapshot().iter().all(|c| !matches!(
            c,
            BackendCommand::BindMaterial { pass, .. } if *pass != RenderPassId::PointLight
        )));
        assert!(!frame.light_sources[0].is_locked(), "Light released after its pass");
    }

    #[test]
    fn test_remaining_lights_are_additive_against_black() {
        let mut frame = Frame::new();
        frame.lit("wall");
        frame.unlit("sky");
        frame.lights(3);
        frame.run(&LitForwardLane::new());

        let commands = frame.log.snapshot();
        let begin = commands
            .iter()
            .position(|c| *c == BackendCommand::BeginMultiPass)
            .unwrap();
        let end = commands
            .iter()
            .position(|c| *c == BackendCommand::EndMultiPass)
            .unwrap();
        assert_eq!(
            commands[begin - 1],
            BackendCommand::BindAmbientState(LinearRgba::BLACK),
            "Ambient switches to black before the additive scope"
        );

        let light_binds: Vec<_> = commands
            .iter()
            .enumerate()
            .filter(|(_, c)| matches!(c, BackendCommand::BindLight(_)))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(light_binds.len(), 3);
        assert!(light_binds[0] < begin, "First light is outside the scope");
        assert!(light_binds[1..].iter().all(|&i| begin < i && i < end));

        // The wall is drawn once per light, the sky once after the scope.
        assert_eq!(frame.log.draw_calls(), 4);
        let sky_draw = commands
            .iter()
            .position(|c| matches!(c, BackendCommand::DrawMesh { mesh, .. } if mesh == "sky"))
            .unwrap();
        assert!(sky_draw > end);
        assert_eq!(frame.stats.elements_drawn, 2);
        assert_eq!(frame.stats.multi_pass_scopes, 1);
    }
}
