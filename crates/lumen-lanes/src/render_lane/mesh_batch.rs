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

//! The batch executor: draws a bucket while eliding redundant binds.
//!
//! Resources are compared by handle identity, never by value. Two distinct
//! instances with identical parameters still cause a rebind.

use super::element::DrawableElement;
use super::lock::FrameEpoch;
use lumen_core::renderer::{
    FrameStats, MaterialHandle, MaterialInstanceHandle, MeshHandle, RenderBackend, RenderPassId,
    ResourceHandle,
};
use std::sync::Arc;

/// The resources last bound during one batch. Reset for every batch.
#[derive(Debug, Default)]
pub struct StateCache {
    material: Option<MaterialHandle>,
    instance: Option<MaterialInstanceHandle>,
    mesh: Option<MeshHandle>,
}

fn is_cached<T: ?Sized>(cached: &Option<ResourceHandle<T>>, incoming: &ResourceHandle<T>) -> bool {
    cached.as_ref().is_some_and(|c| c.ptr_eq(incoming))
}

impl StateCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The material currently bound, if any.
    pub fn material(&self) -> Option<&MaterialHandle> {
        self.material.as_ref()
    }

    /// The mesh currently bound, if any.
    pub fn mesh(&self) -> Option<&MeshHandle> {
        self.mesh.as_ref()
    }

    fn rebind_material(
        &mut self,
        backend: &mut dyn RenderBackend,
        material: &MaterialHandle,
        instance: Option<&MaterialInstanceHandle>,
        pass: RenderPassId,
        instanced: bool,
        stats: &mut FrameStats,
    ) {
        if let Some(previous) = self.material.take() {
            backend.unbind_material(&*previous);
        }
        backend.bind_material(&**material, instance.map(|i| &**i), pass, instanced);
        stats.material_binds += 1;
        self.material = Some(material.clone());
        self.instance = instance.cloned();
    }

    fn rebind_mesh(
        &mut self,
        backend: &mut dyn RenderBackend,
        mesh: &MeshHandle,
        stats: &mut FrameStats,
    ) {
        if let Some(previous) = self.mesh.take() {
            backend.unbind_mesh(&*previous);
        }
        backend.bind_mesh(&**mesh);
        stats.mesh_binds += 1;
        self.mesh = Some(mesh.clone());
    }

    /// Unbinds the cached mesh, then the cached material.
    fn flush(&mut self, backend: &mut dyn RenderBackend) {
        if let Some(mesh) = self.mesh.take() {
            backend.unbind_mesh(&*mesh);
        }
        if let Some(material) = self.material.take() {
            backend.unbind_material(&*material);
        }
        self.instance = None;
    }
}

/// Draws `elements` in order with the given shading pass.
///
/// Each element's frame lock is released right after its draw. Elements whose
/// lock was still live when drawn are counted in `stats.elements_drawn`; every
/// draw is counted in `stats.draw_calls`.
pub fn render_meshes(
    elements: &[Arc<DrawableElement>],
    pass: RenderPassId,
    epoch: &FrameEpoch,
    backend: &mut dyn RenderBackend,
    stats: &mut FrameStats,
) {
    if elements.is_empty() {
        return;
    }
    stats.batches += 1;

    let mut cache = StateCache::new();
    for element in elements {
        let (Some(mesh), Some(material)) = (element.mesh(), element.material()) else {
            log::warn!("Skipping drawable element '{}' with no mesh or material", element.label());
            continue;
        };
        let instanced = mesh.is_instanced();

        backend.bind_mesh_context(&element.transform());

        match element.material_instance() {
            Some(instance) if !is_cached(&cache.instance, instance) => {
                cache.rebind_material(
                    backend,
                    instance.material(),
                    Some(instance),
                    pass,
                    instanced,
                    stats,
                );
            }
            _ if !is_cached(&cache.material, material) => {
                cache.rebind_material(backend, material, None, pass, instanced, stats);
            }
            _ => {}
        }

        if let Some(bound) = &cache.material {
            backend.bind_mesh_state(&**bound, instanced);
        }

        if !is_cached(&cache.mesh, mesh) {
            cache.rebind_mesh(backend, mesh, stats);
        }

        backend.draw_mesh(&**mesh, &**material);
        stats.draw_calls += 1;

        if element.lock_slot().release(epoch) {
            stats.elements_drawn += 1;
        }
    }
    cache.flush(backend);
}
