#![allow(dead_code)]

use lumen_agents::RenderAgent;
use lumen_core::math::{Mat4, Vec3};
use lumen_core::renderer::{
    DirectionalLight, GraphicsBackendType, LightType, MaterialHandle, PointLight, RenderDesc,
    RenderError, RenderPassId, RenderTarget, SpotLight,
};
use lumen_infra::{
    BackendCommand, CommandLog, FaultInjector, HeadlessBackendFactory, HeadlessMaterial,
    HeadlessMesh,
};
use lumen_lanes::render_lane::{DrawableElement, LightSource};
use std::sync::Arc;

/// A headless agent plus handles on its backend's log and fault injector.
pub struct Harness {
    pub agent: RenderAgent,
    pub log: CommandLog,
    pub faults: FaultInjector,
    pub lit: MaterialHandle,
    pub unlit: MaterialHandle,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_threshold(lumen_core::renderer::DEFAULT_DEFERRED_LIGHT_THRESHOLD)
    }

    pub fn with_threshold(threshold: usize) -> Self {
        let factory = HeadlessBackendFactory::new();
        let mut desc = RenderDesc::new(GraphicsBackendType::Headless);
        desc.settings.deferred_light_threshold = threshold;
        let agent = RenderAgent::create(&desc, &factory).unwrap();
        Self {
            agent,
            log: factory.log(),
            faults: factory.faults(),
            lit: HeadlessMaterial::lit("lit").into_handle(),
            unlit: HeadlessMaterial::unlit("unlit").into_handle(),
        }
    }

    pub fn lit(&self, label: &str) -> Arc<DrawableElement> {
        element(label, self.lit.clone(), false)
    }

    pub fn unlit(&self, label: &str) -> Arc<DrawableElement> {
        element(label, self.unlit.clone(), false)
    }

    pub fn screen_space(&self, label: &str) -> Arc<DrawableElement> {
        element(label, self.unlit.clone(), true)
    }

    pub fn submit_all(&mut self, elements: &[Arc<DrawableElement>]) {
        for e in elements {
            assert!(self.agent.submit_drawable(e), "Failed to submit '{}'", e.label());
        }
    }

    pub fn submit_lights(&mut self, lights: &[Arc<LightSource>]) {
        for l in lights {
            assert!(self.agent.submit_light(l));
        }
    }

    pub fn render(&mut self) -> Result<lumen_core::renderer::FrameStats, RenderError> {
        self.render_with(None, false)
    }

    pub fn render_with(
        &mut self,
        target: Option<&dyn RenderTarget>,
        depth_only: bool,
    ) -> Result<lumen_core::renderer::FrameStats, RenderError> {
        self.agent
            .render(&camera_view(), &camera_projection(), target, depth_only)
    }

    pub fn count(&self, predicate: impl Fn(&BackendCommand) -> bool) -> usize {
        self.log.count(predicate)
    }

    pub fn draws(&self) -> Vec<String> {
        self.log
            .snapshot()
            .into_iter()
            .filter_map(|c| match c {
                BackendCommand::DrawMesh { mesh, .. } => Some(mesh),
                _ => None,
            })
            .collect()
    }

    pub fn material_passes(&self) -> Vec<RenderPassId> {
        self.log
            .snapshot()
            .into_iter()
            .filter_map(|c| match c {
                BackendCommand::BindMaterial { pass, .. } => Some(pass),
                _ => None,
            })
            .collect()
    }
}

/// An element whose mesh carries the element's label.
pub fn element(label: &str, material: MaterialHandle, screen_space: bool) -> Arc<DrawableElement> {
    Arc::new(
        DrawableElement::new(label)
            .with_mesh(HeadlessMesh::new(label).into_handle())
            .with_material(material)
            .with_screen_space(screen_space),
    )
}

/// `count` lights cycling through the three light types.
pub fn lights(count: usize) -> Vec<Arc<LightSource>> {
    (0..count)
        .map(|i| {
            let light = match i % 3 {
                0 => LightType::Directional(DirectionalLight::default()),
                1 => LightType::Point(PointLight::default()),
                _ => LightType::Spot(SpotLight::default()),
            };
            Arc::new(LightSource::new(light))
        })
        .collect()
}

pub fn point_lights(count: usize) -> Vec<Arc<LightSource>> {
    (0..count)
        .map(|_| Arc::new(LightSource::new(LightType::Point(PointLight::default()))))
        .collect()
}

pub fn camera_view() -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, -2.0, -10.0))
}

pub fn camera_projection() -> Mat4 {
    Mat4::perspective_rh_zo(std::f32::consts::FRAC_PI_4, 16.0 / 9.0, 0.1, 100.0)
}

pub fn is_light_bind(c: &BackendCommand) -> bool {
    matches!(c, BackendCommand::BindLight(_))
}

pub fn is_deferred_resolve(c: &BackendCommand) -> bool {
    matches!(c, BackendCommand::RenderDeferredLight(_))
}
