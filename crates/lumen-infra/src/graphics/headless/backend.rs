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

use super::command_log::{BackendCommand, CommandLog};
use lumen_core::{
    math::{LinearRgba, Mat4},
    renderer::{
        GraphicsBackendType, LightType, Material, MaterialInstance, Mesh, RenderBackend,
        RenderError, RenderPassId, RenderTarget,
    },
};
use std::sync::{
    atomic::{AtomicU32, Ordering},
    Arc,
};

/// Default device name reported by headless backends.
pub const HEADLESS_DEVICE_NAME: &str = "Headless Recorder";

/// A shared switch that makes upcoming `begin_render` calls fail.
///
/// Clones share the same counter, so a test can keep one while the backend
/// is owned by the render agent.
#[derive(Debug, Clone, Default)]
pub struct FaultInjector {
    pending_begin_failures: Arc<AtomicU32>,
}

impl FaultInjector {
    /// Creates an injector with no pending failures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next `count` calls to `begin_render` fail.
    pub fn fail_next_begin(&self, count: u32) {
        self.pending_begin_failures
            .fetch_add(count, Ordering::SeqCst);
    }

    /// Consumes one pending failure, returning `true` if there was one.
    fn take_begin_failure(&self) -> bool {
        self.pending_begin_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

/// A [`RenderBackend`] that records every call into a [`CommandLog`].
#[derive(Debug)]
pub struct HeadlessBackend {
    log: CommandLog,
    faults: FaultInjector,
    device_name: String,
    ready: bool,
    in_frame: bool,
}

impl HeadlessBackend {
    /// Creates a ready backend recording into `log`.
    pub fn new(log: CommandLog) -> Self {
        Self {
            log,
            faults: FaultInjector::new(),
            device_name: HEADLESS_DEVICE_NAME.to_string(),
            ready: true,
            in_frame: false,
        }
    }

    /// Overrides the reported device name.
    pub fn with_device_name(mut self, name: impl Into<String>) -> Self {
        self.device_name = name.into();
        self
    }

    /// Sets whether the backend reports itself as ready.
    pub fn with_ready(mut self, ready: bool) -> Self {
        self.ready = ready;
        self
    }

    /// Shares an existing fault injector with this backend.
    pub fn with_faults(mut self, faults: FaultInjector) -> Self {
        self.faults = faults;
        self
    }

    /// A handle to this backend's fault injector.
    pub fn faults(&self) -> FaultInjector {
        self.faults.clone()
    }

    /// A handle to this backend's command log.
    pub fn log(&self) -> CommandLog {
        self.log.clone()
    }

    /// Whether a frame is open.
    pub fn in_frame(&self) -> bool {
        self.in_frame
    }

    fn record(&self, command: BackendCommand) {
        if !self.in_frame {
            log::warn!("Headless backend received {:?} outside of a frame", command);
        }
        self.log.record(command);
    }
}

impl RenderBackend for HeadlessBackend {
    fn backend_type(&self) -> GraphicsBackendType {
        GraphicsBackendType::Headless
    }

    fn device_name(&self) -> &str {
        &self.device_name
    }

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn begin_render(&mut self) -> Result<(), RenderError> {
        if self.in_frame {
            log::warn!("begin_render called while a frame is already open");
        }
        if self.faults.take_begin_failure() {
            self.log
                .record(BackendCommand::BeginRender { succeeded: false });
            return Err(RenderError::BeginFrameFailed(
                "injected headless failure".to_string(),
            ));
        }
        self.in_frame = true;
        self.log.record(BackendCommand::BeginRender { succeeded: true });
        Ok(())
    }

    fn end_render(&mut self) {
        self.record(BackendCommand::EndRender);
        self.in_frame = false;
    }

    // Clears may be issued between frames.
    fn clear_buffers(&mut self, color: LinearRgba) {
        self.log.record(BackendCommand::ClearBuffers(color));
    }

    fn bind_view_proj(&mut self, view: &Mat4, projection: &Mat4) {
        self.record(BackendCommand::BindViewProj {
            view: *view,
            projection: *projection,
        });
    }

    fn bind_ambient_state(&mut self, color: LinearRgba) {
        self.record(BackendCommand::BindAmbientState(color));
    }

    fn bind_deferred_state(&mut self) {
        self.record(BackendCommand::BindDeferredState);
    }

    fn begin_multi_pass(&mut self) {
        self.record(BackendCommand::BeginMultiPass);
    }

    fn end_multi_pass(&mut self) {
        self.record(BackendCommand::EndMultiPass);
    }

    // Targets are bound around `begin_render`, so they bypass the frame check.
    fn bind_render_target(&mut self, target: &dyn RenderTarget) {
        self.log
            .record(BackendCommand::BindRenderTarget(target.label().to_string()));
    }

    fn unbind_render_target(&mut self, target: &dyn RenderTarget) {
        self.log
            .record(BackendCommand::UnbindRenderTarget(target.label().to_string()));
    }

    fn bind_mesh_context(&mut self, transform: &Mat4) {
        self.record(BackendCommand::BindMeshContext(*transform));
    }

    fn bind_material(
        &mut self,
        material: &dyn Material,
        instance: Option<&dyn MaterialInstance>,
        pass: RenderPassId,
        instanced: bool,
    ) {
        self.record(BackendCommand::BindMaterial {
            material: material.label().to_string(),
            instance: instance.map(|i| i.label().to_string()),
            pass,
            instanced,
        });
    }

    fn bind_mesh_state(&mut self, material: &dyn Material, instanced: bool) {
        self.record(BackendCommand::BindMeshState {
            material: material.label().to_string(),
            instanced,
        });
    }

    fn unbind_material(&mut self, material: &dyn Material) {
        self.record(BackendCommand::UnbindMaterial(material.label().to_string()));
    }

    fn bind_mesh(&mut self, mesh: &dyn Mesh) {
        self.record(BackendCommand::BindMesh(mesh.label().to_string()));
    }

    fn unbind_mesh(&mut self, mesh: &dyn Mesh) {
        self.record(BackendCommand::UnbindMesh(mesh.label().to_string()));
    }

    fn draw_mesh(&mut self, mesh: &dyn Mesh, material: &dyn Material) {
        self.record(BackendCommand::DrawMesh {
            mesh: mesh.label().to_string(),
            material: material.label().to_string(),
        });
    }

    fn bind_light(&mut self, light: &LightType) {
        self.record(BackendCommand::BindLight(light.pass()));
    }

    fn render_deferred_light(&mut self, light: &LightType) {
        self.record(BackendCommand::RenderDeferredLight(light.pass()));
    }
}
