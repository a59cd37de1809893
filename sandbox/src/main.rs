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

// Lumen Sandbox
// Renders a small scene through the headless backend and logs what happened.
//
// Usage: sandbox [settings.ron]

use std::sync::Arc;

use anyhow::{Context, Result};
use lumen_agents::RenderAgent;
use lumen_core::math::{Mat4, Vec3};
use lumen_core::renderer::{
    DirectionalLight, GraphicsBackendType, LightType, PointLight, RenderDesc, RenderSettings,
    SpotLight, TransformNode,
};
use lumen_infra::{
    HeadlessBackendFactory, HeadlessMaterial, HeadlessMaterialInstance, HeadlessMesh,
    HeadlessRenderTarget,
};
use lumen_lanes::render_lane::{DrawableElement, LightSource};

struct Scene {
    elements: Vec<Arc<DrawableElement>>,
    lights: Vec<Arc<LightSource>>,
    // Shared world transform of every crate.
    stack: Arc<TransformNode>,
}

impl Scene {
    fn build() -> Self {
        let brick = HeadlessMaterial::lit("brick").into_handle();
        let sky = HeadlessMaterial::unlit("sky").into_handle();
        let hud = HeadlessMaterial::unlit("hud").into_handle();
        let weathered = HeadlessMaterialInstance::new("brick#weathered", brick.clone()).into_handle();

        let cube = HeadlessMesh::new("cube").into_handle();
        let stack = Arc::new(TransformNode::default());

        let mut elements = vec![Arc::new(
            DrawableElement::new("ground")
                .with_mesh(HeadlessMesh::new("plane").into_handle())
                .with_material(brick),
        )];
        for i in 0..4 {
            elements.push(Arc::new(
                DrawableElement::new(format!("crate{i}"))
                    .with_mesh(cube.clone())
                    .with_material_instance(weathered.clone())
                    .with_transform_source(stack.clone()),
            ));
        }
        elements.push(Arc::new(
            DrawableElement::new("skydome")
                .with_mesh(HeadlessMesh::new("dome").into_handle())
                .with_material(sky),
        ));
        elements.push(Arc::new(
            DrawableElement::new("crosshair")
                .with_mesh(HeadlessMesh::new("quad").into_handle())
                .with_material(hud)
                .with_screen_space(true),
        ));

        let lights = (0..10)
            .map(|i| {
                let light = match i % 3 {
                    0 => LightType::Directional(DirectionalLight::default()),
                    1 => LightType::Point(PointLight {
                        position: Vec3::new(i as f32, 3.0, 0.0),
                        ..Default::default()
                    }),
                    _ => LightType::Spot(SpotLight::default()),
                };
                Arc::new(LightSource::new(light))
            })
            .collect();

        Self {
            elements,
            lights,
            stack,
        }
    }

    fn submit(&self, agent: &mut RenderAgent, light_count: usize) {
        for element in &self.elements {
            agent.submit_drawable(element);
        }
        for light in self.lights.iter().take(light_count) {
            agent.submit_light(light);
        }
    }
}

fn load_settings() -> Result<RenderSettings> {
    match std::env::args().nth(1) {
        Some(path) => {
            let source = std::fs::read_to_string(&path)
                .with_context(|| format!("reading settings from {path}"))?;
            let settings = RenderSettings::from_ron_str(&source)
                .with_context(|| format!("parsing settings from {path}"))?;
            log::info!("Loaded settings from {path}");
            Ok(settings)
        }
        None => Ok(RenderSettings::default()),
    }
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut desc = RenderDesc::new(GraphicsBackendType::Headless);
    desc.device_label = Some("sandbox".to_string());
    desc.settings = load_settings()?;

    let factory = HeadlessBackendFactory::new();
    let commands = factory.log();
    let mut agent = RenderAgent::create(&desc, &factory)?;

    let scene = Scene::build();
    let view = Mat4::from_translation(Vec3::new(0.0, -2.0, -12.0));
    let projection = Mat4::perspective_rh_zo(std::f32::consts::FRAC_PI_4, 16.0 / 9.0, 0.1, 200.0);

    for light_count in [0, 1, 3, scene.lights.len()] {
        scene
            .stack
            .set_transform(Mat4::from_translation(Vec3::new(0.0, light_count as f32, 0.0)));
        agent.clear_buffers();
        scene.submit(&mut agent, light_count);
        let stats = agent.render(&view, &projection, None, false)?;
        log::info!(
            "Frame {} with {} lights: {:?}, {} draws, {} material binds, {} commands",
            stats.frame_number,
            light_count,
            stats.strategy,
            stats.draw_calls,
            stats.material_binds,
            commands.take().len()
        );
    }

    // Depth-only pass into an off-screen target.
    let shadow_map = HeadlessRenderTarget::new("shadow-map");
    scene.submit(&mut agent, scene.lights.len());
    let stats = agent.render(&view, &projection, Some(&shadow_map), true)?;
    log::info!(
        "Shadow frame {}: {:?}, {} draws, {} commands",
        stats.frame_number,
        stats.strategy,
        stats.draw_calls,
        commands.take().len()
    );

    log::info!(
        "Rendered {} frames on {} ({}), last frame took {:?}",
        agent.frame_count(),
        agent.device_name(),
        agent.backend_type().name(),
        agent.last_frame_time()
    );
    Ok(())
}
