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

use lumen_core::{
    math::{LinearRgba, Mat4},
    renderer::RenderPassId,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// One recorded backend call. Resources are recorded by label.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCommand {
    /// `begin_render`, recorded whether it succeeded or not.
    BeginRender {
        /// Whether the call reported success.
        succeeded: bool,
    },
    /// `end_render`.
    EndRender,
    /// `clear_buffers`.
    ClearBuffers(LinearRgba),
    /// `bind_view_proj`.
    BindViewProj {
        /// The bound view matrix.
        view: Mat4,
        /// The bound projection matrix.
        projection: Mat4,
    },
    /// `bind_ambient_state`.
    BindAmbientState(LinearRgba),
    /// `bind_deferred_state`.
    BindDeferredState,
    /// `begin_multi_pass`.
    BeginMultiPass,
    /// `end_multi_pass`.
    EndMultiPass,
    /// `bind_render_target`.
    BindRenderTarget(String),
    /// `unbind_render_target`.
    UnbindRenderTarget(String),
    /// `bind_mesh_context`.
    BindMeshContext(Mat4),
    /// `bind_material`.
    BindMaterial {
        /// Label of the material.
        material: String,
        /// Label of the instance override, if any.
        instance: Option<String>,
        /// The pass the material was bound for.
        pass: RenderPassId,
        /// Whether the instanced vertex layout was requested.
        instanced: bool,
    },
    /// `bind_mesh_state`.
    BindMeshState {
        /// Label of the material.
        material: String,
        /// Whether the instanced vertex layout was requested.
        instanced: bool,
    },
    /// `unbind_material`.
    UnbindMaterial(String),
    /// `bind_mesh`.
    BindMesh(String),
    /// `unbind_mesh`.
    UnbindMesh(String),
    /// `draw_mesh`.
    DrawMesh {
        /// Label of the mesh.
        mesh: String,
        /// Label of the material the mesh was drawn with.
        material: String,
    },
    /// `bind_light`, recorded by the light's pass.
    BindLight(RenderPassId),
    /// `render_deferred_light`, recorded by the light's pass.
    RenderDeferredLight(RenderPassId),
}

impl BackendCommand {
    /// Returns `true` for draw calls.
    pub fn is_draw(&self) -> bool {
        matches!(self, BackendCommand::DrawMesh { .. })
    }
}

/// A cloneable, shared recording of the commands issued to headless backends.
///
/// Every clone observes the same recording, so a test can keep one clone
/// while the backend itself is owned by the render agent.
#[derive(Debug, Clone, Default)]
pub struct CommandLog {
    commands: Arc<Mutex<Vec<BackendCommand>>>,
}

impl CommandLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<BackendCommand>> {
        self.commands.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends a command.
    pub fn record(&self, command: BackendCommand) {
        self.lock().push(command);
    }

    /// Returns a copy of everything recorded so far.
    pub fn snapshot(&self) -> Vec<BackendCommand> {
        self.lock().clone()
    }

    /// Returns a copy of the recording and empties the log.
    pub fn take(&self) -> Vec<BackendCommand> {
        std::mem::take(&mut *self.lock())
    }

    /// Empties the log.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Counts the recorded commands matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&BackendCommand) -> bool) -> usize {
        self.lock().iter().filter(|c| predicate(c)).count()
    }

    /// Counts recorded draw calls.
    pub fn draw_calls(&self) -> usize {
        self.count(BackendCommand::is_draw)
    }
}
