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

//! Shared setup for lane unit tests.

use super::{DrawableElement, FrameQueue, LaneContext, LightSource, RenderLane};
use lumen_core::{
    math::LinearRgba,
    renderer::{FrameStats, LightType, MaterialHandle, PointLight, RenderBackend, ViewInfo},
};
use lumen_infra::{CommandLog, HeadlessBackend, HeadlessMaterial, HeadlessMesh};
use std::sync::Arc;

pub const AMBIENT: LinearRgba = LinearRgba::new(0.25, 0.25, 0.25, 1.0);

/// A queue, an open headless frame and the log it records into.
pub struct Frame {
    pub log: CommandLog,
    pub backend: HeadlessBackend,
    pub queue: FrameQueue,
    pub stats: FrameStats,
    pub elements: Vec<Arc<DrawableElement>>,
    pub light_sources: Vec<Arc<LightSource>>,
    lit_material: MaterialHandle,
    unlit_material: MaterialHandle,
}

impl Frame {
    pub fn new() -> Self {
        let log = CommandLog::new();
        Self {
            backend: HeadlessBackend::new(log.clone()),
            log,
            queue: FrameQueue::new(),
            stats: FrameStats::default(),
            elements: Vec::new(),
            light_sources: Vec::new(),
            lit_material: HeadlessMaterial::lit("lit").into_handle(),
            unlit_material: HeadlessMaterial::unlit("unlit").into_handle(),
        }
    }

    fn push(&mut self, label: &str, material: MaterialHandle, screen_space: bool) {
        let element = Arc::new(
            DrawableElement::new(label)
                .with_mesh(HeadlessMesh::new(label).into_handle())
                .with_material(material)
                .with_screen_space(screen_space),
        );
        self.queue.push_drawable(&element).unwrap();
        self.elements.push(element);
    }

    pub fn lit(&mut self, label: &str) {
        self.push(label, self.lit_material.clone(), false);
    }

    pub fn unlit(&mut self, label: &str) {
        self.push(label, self.unlit_material.clone(), false);
    }

    pub fn screen_space(&mut self, label: &str) {
        self.push(label, self.unlit_material.clone(), true);
    }

    pub fn lights(&mut self, count: usize) {
        for _ in 0..count {
            let light = Arc::new(LightSource::new(LightType::Point(PointLight::default())));
            self.queue.push_light(&light).unwrap();
            self.light_sources.push(light);
        }
    }

    /// Runs `lane` inside an open frame. Only the lane's own calls stay logged.
    pub fn run(&mut self, lane: &dyn RenderLane) {
        self.backend.begin_render().unwrap();
        self.log.clear();
        let view = ViewInfo::default();
        let mut ctx = LaneContext {
            backend: &mut self.backend,
            view: &view,
            ambient_color: AMBIENT,
            stats: &mut self.stats,
        };
        lane.render(&self.queue, &mut ctx);
    }
}
