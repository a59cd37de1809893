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

//! The per-frame submissions: drawable elements and light sources.

use super::lock::LockSlot;
use lumen_core::{
    math::Mat4,
    renderer::{
        LightType, MaterialHandle, MaterialInstanceHandle, MeshHandle, RenderPassId,
        ShadingModel, TransformSource,
    },
};
use std::sync::Arc;

/// One mesh, drawn with one material, at the transform of its owning node.
///
/// Elements are owned by scene content and shared with the pipeline through
/// `Arc`. Setters need `&mut self`, so the mesh and material of a queued
/// element cannot change while the pipeline holds it. Its transform can, since
/// it is read from the owning node at draw time.
#[derive(Debug, Default)]
pub struct DrawableElement {
    label: String,
    mesh: Option<MeshHandle>,
    material: Option<MaterialHandle>,
    material_instance: Option<MaterialInstanceHandle>,
    transform_source: Option<Arc<dyn TransformSource>>,
    screen_space: bool,
    lock: LockSlot,
}

impl DrawableElement {
    /// Creates an empty, invalid element.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    /// Sets the mesh, builder style.
    pub fn with_mesh(mut self, mesh: MeshHandle) -> Self {
        self.set_mesh(mesh);
        self
    }

    /// Sets the base material, builder style.
    pub fn with_material(mut self, material: MaterialHandle) -> Self {
        self.set_material(material);
        self
    }

    /// Sets the material instance override, builder style.
    pub fn with_material_instance(mut self, instance: MaterialInstanceHandle) -> Self {
        self.set_material_instance(Some(instance));
        self
    }

    /// Attaches the element to a transform source, builder style.
    pub fn with_transform_source(mut self, source: Arc<dyn TransformSource>) -> Self {
        self.attach_to(source);
        self
    }

    /// Flags the element as screen-space, builder style.
    pub fn with_screen_space(mut self, screen_space: bool) -> Self {
        self.set_screen_space(screen_space);
        self
    }

    /// A label for logging.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replaces the mesh.
    pub fn set_mesh(&mut self, mesh: MeshHandle) {
        self.mesh = Some(mesh);
    }

    /// Replaces the base material.
    pub fn set_material(&mut self, material: MaterialHandle) {
        self.material = Some(material);
    }

    /// Replaces or removes the material instance override.
    pub fn set_material_instance(&mut self, instance: Option<MaterialInstanceHandle>) {
        self.material_instance = instance;
    }

    /// Makes `source` the owner of this element's world transform.
    pub fn attach_to(&mut self, source: Arc<dyn TransformSource>) {
        self.transform_source = Some(source);
    }

    /// Detaches the element from its transform source. It then draws at identity.
    pub fn detach(&mut self) {
        self.transform_source = None;
    }

    /// Sets whether the element is drawn in the screen-space pass.
    pub fn set_screen_space(&mut self, screen_space: bool) {
        self.screen_space = screen_space;
    }

    /// The mesh, if set.
    pub fn mesh(&self) -> Option<&MeshHandle> {
        self.mesh.as_ref()
    }

    /// The material instance override, if set.
    pub fn material_instance(&self) -> Option<&MaterialInstanceHandle> {
        self.material_instance.as_ref()
    }

    /// The material the element is drawn with: the instance's material when an
    /// override is present, else the base material.
    pub fn material(&self) -> Option<&MaterialHandle> {
        match &self.material_instance {
            Some(instance) => Some(instance.material()),
            None => self.material.as_ref(),
        }
    }

    /// The shading model of the resolved material.
    pub fn shading_model(&self) -> Option<ShadingModel> {
        self.material().map(|m| m.shading_model())
    }

    /// The current world transform, or identity when detached.
    pub fn transform(&self) -> Mat4 {
        self.transform_source
            .as_ref()
            .map_or(Mat4::IDENTITY, |source| source.world_transform())
    }

    /// Whether the element is drawn in the screen-space pass.
    pub fn is_screen_space(&self) -> bool {
        self.screen_space
    }

    /// An element is drawable once it has a mesh and a resolvable material.
    pub fn is_valid(&self) -> bool {
        self.mesh.is_some() && self.material().is_some()
    }

    /// Whether a pipeline currently holds this element.
    pub fn is_locked(&self) -> bool {
        self.lock.is_locked()
    }

    pub(crate) fn lock_slot(&self) -> &LockSlot {
        &self.lock
    }
}

/// One light submitted for a frame.
#[derive(Debug, Default)]
pub struct LightSource {
    light: LightType,
    lock: LockSlot,
}

impl LightSource {
    /// Creates an unlocked light.
    pub fn new(light: LightType) -> Self {
        Self {
            light,
            lock: LockSlot::new(),
        }
    }

    /// The light parameters.
    pub fn light(&self) -> &LightType {
        &self.light
    }

    /// Replaces the light parameters.
    pub fn set_light(&mut self, light: LightType) {
        self.light = light;
    }

    /// The shading pass lit geometry uses under this light.
    pub fn pass(&self) -> RenderPassId {
        self.light.pass()
    }

    /// Whether a pipeline currently holds this light.
    pub fn is_locked(&self) -> bool {
        self.lock.is_locked()
    }

    pub(crate) fn lock_slot(&self) -> &LockSlot {
        &self.lock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::{
        math::Vec3,
        renderer::{PointLight, SpotLight, TransformNode},
    };
    use lumen_infra::{HeadlessMaterial, HeadlessMaterialInstance, HeadlessMesh};

    #[test]
    fn test_element_needs_mesh_and_material() {
        let mesh = HeadlessMesh::new("quad").into_handle();
        let material = HeadlessMaterial::unlit("flat").into_handle();

        assert!(!DrawableElement::new("empty").is_valid());
        assert!(!DrawableElement::new("no-material")
            .with_mesh(mesh.clone())
            .is_valid());
        assert!(!DrawableElement::new("no-mesh")
            .with_material(material.clone())
            .is_valid());
        assert!(DrawableElement::new("ok")
            .with_mesh(mesh)
            .with_material(material)
            .is_valid());
    }

    #[test]
    fn test_instance_overrides_base_material() {
        let base = HeadlessMaterial::unlit("base").into_handle();
        let lit = HeadlessMaterial::lit("lit").into_handle();
        let instance = HeadlessMaterialInstance::new("lit#red", lit.clone()).into_handle();

        let element = DrawableElement::new("e")
            .with_mesh(HeadlessMesh::new("m").into_handle())
            .with_material(base)
            .with_material_instance(instance);

        let resolved = element.material().unwrap();
        assert!(resolved.ptr_eq(&lit));
        assert_eq!(element.shading_model(), Some(ShadingModel::Lit));
    }

    #[test]
    fn test_instance_alone_makes_element_valid() {
        let lit = HeadlessMaterial::lit("lit").into_handle();
        let element = DrawableElement::new("e")
            .with_mesh(HeadlessMesh::new("m").into_handle())
            .with_material_instance(HeadlessMaterialInstance::new("i", lit).into_handle());
        assert!(element.is_valid());
    }

    #[test]
    fn test_transform_follows_owning_node() {
        let node = Arc::new(TransformNode::default());
        let element = DrawableElement::new("e").with_transform_source(node.clone());
        assert_eq!(element.transform(), Mat4::IDENTITY);

        let moved = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        node.set_transform(moved);
        assert_eq!(element.transform(), moved, "Transform must be read lazily");

        let mut element = element;
        element.detach();
        assert_eq!(element.transform(), Mat4::IDENTITY);
    }

    #[test]
    fn test_light_pass_follows_light_type() {
        let mut light = LightSource::new(LightType::Point(PointLight::default()));
        assert_eq!(light.pass(), RenderPassId::PointLight);
        light.set_light(LightType::Spot(SpotLight::default()));
        assert_eq!(light.pass(), RenderPassId::SpotLight);
        assert!(!light.is_locked());
    }
}
