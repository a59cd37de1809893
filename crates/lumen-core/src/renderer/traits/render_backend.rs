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

use crate::math::{LinearRgba, Mat4};
use crate::renderer::api::*;
use crate::renderer::error::RenderError;
use crate::renderer::light::LightType;
use std::fmt::Debug;

/// The capability interface of a graphics backend.
///
/// The render pipeline drives exactly one implementation, selected at startup
/// through a [`BackendFactory`](super::BackendFactory). All calls are made from
/// the frame-driving thread, in the order the pipeline decides; the backend
/// never reorders, merges or skips them.
pub trait RenderBackend: Send + Debug + 'static {
    /// The graphics API of this backend.
    fn backend_type(&self) -> GraphicsBackendType;

    /// The name of the hardware device.
    fn device_name(&self) -> &str;

    /// Whether the backend finished initialization and can render.
    /// ## Returns
    /// `false` if device creation partially failed; the pipeline then refuses
    /// to adopt the backend.
    fn is_ready(&self) -> bool {
        true
    }

    /// Begins a frame.
    /// ## Errors
    /// * `RenderError::BeginFrameFailed` - the frame must be dropped. No pass
    ///   is issued and `end_render` is not called for this frame.
    fn begin_render(&mut self) -> Result<(), RenderError>;

    /// Ends a frame started by a successful `begin_render`.
    fn end_render(&mut self);

    /// Clears the colour and depth buffers of the current target.
    fn clear_buffers(&mut self, color: LinearRgba);

    /// Binds the view and projection matrices for subsequent draws.
    fn bind_view_proj(&mut self, view: &Mat4, projection: &Mat4);

    /// Binds the ambient lighting colour. Opaque black disables ambient light.
    fn bind_ambient_state(&mut self, color: LinearRgba);

    /// Binds the attribute (G-buffer) targets for the deferred geometry pass.
    fn bind_deferred_state(&mut self);

    /// Opens an additive blending scope for sequential light passes.
    fn begin_multi_pass(&mut self);

    /// Closes the scope opened by `begin_multi_pass`.
    fn end_multi_pass(&mut self);

    /// Redirects rendering into an off-screen target.
    fn bind_render_target(&mut self, target: &dyn RenderTarget);

    /// Restores the target that was active before `bind_render_target`.
    fn unbind_render_target(&mut self, target: &dyn RenderTarget);

    /// Binds per-draw mesh context state (the world transform).
    fn bind_mesh_context(&mut self, transform: &Mat4);

    /// Binds a material's programs for a pass.
    /// ## Arguments
    /// * `material` - The material to bind.
    /// * `instance` - An optional parameter override of `material`.
    /// * `pass` - Which of the material's programs to use.
    /// * `instanced` - Whether the next mesh carries an instance buffer.
    fn bind_material(
        &mut self,
        material: &dyn Material,
        instance: Option<&dyn MaterialInstance>,
        pass: RenderPassId,
        instanced: bool,
    );

    /// Binds the vertex-layout dependent state of the bound material.
    fn bind_mesh_state(&mut self, material: &dyn Material, instanced: bool);

    /// Unbinds a material bound by `bind_material`.
    fn unbind_material(&mut self, material: &dyn Material);

    /// Binds a mesh's vertex and index buffers.
    fn bind_mesh(&mut self, mesh: &dyn Mesh);

    /// Unbinds a mesh bound by `bind_mesh`.
    fn unbind_mesh(&mut self, mesh: &dyn Mesh);

    /// Issues the draw call of the bound mesh with the bound material.
    fn draw_mesh(&mut self, mesh: &dyn Mesh, material: &dyn Material);

    /// Binds a light for the following forward pass.
    fn bind_light(&mut self, light: &LightType);

    /// Accumulates one light's contribution in screen space from the deferred
    /// attribute targets.
    fn render_deferred_light(&mut self, light: &LightType);
}
