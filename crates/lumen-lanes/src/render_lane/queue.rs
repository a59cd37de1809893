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

//! The per-frame queue of drawable elements and lights.

use super::element::{DrawableElement, LightSource};
use super::lock::FrameEpoch;
use lumen_core::renderer::ShadingModel;
use std::sync::Arc;
use thiserror::Error;

/// The bucket a drawable element was routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    /// Drawn first, in the screen-space pass.
    ScreenSpace,
    /// Drawn under the scene lights.
    Lit,
    /// Drawn without lighting.
    Unlit,
}

/// Why a submission was dropped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The element has no mesh or no resolvable material.
    #[error("drawable element '{0}' has no mesh or no material")]
    InvalidElement(String),
    /// The element is already held by a pipeline this frame.
    #[error("drawable element '{0}' is already locked to a pipeline")]
    AlreadyLocked(String),
    /// The light is already held by a pipeline this frame.
    #[error("light source is already locked to a pipeline")]
    LightAlreadyLocked,
}

/// The buckets one pipeline accumulates between two renders.
///
/// Insertion order within a bucket is the draw order. The queue owns the
/// pipeline's [`FrameEpoch`]; every element or light it accepts is locked to
/// that epoch until [`FrameQueue::clear`] runs.
#[derive(Debug)]
pub struct FrameQueue {
    epoch: Arc<FrameEpoch>,
    screen_space: Vec<Arc<DrawableElement>>,
    lit: Vec<Arc<DrawableElement>>,
    unlit: Vec<Arc<DrawableElement>>,
    lights: Vec<Arc<LightSource>>,
}

impl Default for FrameQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameQueue {
    /// Creates an empty queue with a fresh epoch.
    pub fn new() -> Self {
        Self {
            epoch: FrameEpoch::new(),
            screen_space: Vec::new(),
            lit: Vec::new(),
            unlit: Vec::new(),
            lights: Vec::new(),
        }
    }

    /// The lock authority of this queue.
    pub fn epoch(&self) -> &FrameEpoch {
        &self.epoch
    }

    /// Locks and queues a drawable element.
    ///
    /// Screen-space elements go to the screen-space bucket whatever their
    /// material; the others are routed by the shading model of their resolved
    /// material.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::InvalidElement`] or
    /// [`SubmissionError::AlreadyLocked`]; the queue is unchanged in both cases.
    pub fn push_drawable(
        &mut self,
        element: &Arc<DrawableElement>,
    ) -> Result<Bucket, SubmissionError> {
        let shading_model = match element.shading_model() {
            Some(model) if element.is_valid() => model,
            _ => {
                return Err(SubmissionError::InvalidElement(
                    element.label().to_string(),
                ))
            }
        };
        if !element.lock_slot().try_acquire(&self.epoch) {
            return Err(SubmissionError::AlreadyLocked(element.label().to_string()));
        }

        let bucket = if element.is_screen_space() {
            Bucket::ScreenSpace
        } else if shading_model == ShadingModel::Lit {
            Bucket::Lit
        } else {
            Bucket::Unlit
        };
        match bucket {
            Bucket::ScreenSpace => self.screen_space.push(Arc::clone(element)),
            Bucket::Lit => self.lit.push(Arc::clone(element)),
            Bucket::Unlit => self.unlit.push(Arc::clone(element)),
        }
        Ok(bucket)
    }

    /// Locks and queues a light.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::LightAlreadyLocked`] if another submission
    /// holds the light this frame.
    pub fn push_light(&mut self, light: &Arc<LightSource>) -> Result<(), SubmissionError> {
        if !light.lock_slot().try_acquire(&self.epoch) {
            return Err(SubmissionError::LightAlreadyLocked);
        }
        self.lights.push(Arc::clone(light));
        Ok(())
    }

    /// Releases a queued light before the end of the frame.
    pub fn release_light(&self, light: &LightSource) -> bool {
        light.lock_slot().release(&self.epoch)
    }

    /// Releases every lock, empties all buckets and advances the epoch.
    ///
    /// Any lock this queue issued that is not reached through a bucket is still
    /// invalidated by the epoch advance.
    pub fn clear(&mut self) {
        let epoch = &self.epoch;
        for element in self
            .screen_space
            .drain(..)
            .chain(self.lit.drain(..))
            .chain(self.unlit.drain(..))
        {
            element.lock_slot().release(epoch);
        }
        for light in self.lights.drain(..) {
            light.lock_slot().release(epoch);
        }
        epoch.advance();
    }

    /// Elements queued for the screen-space pass.
    pub fn screen_space(&self) -> &[Arc<DrawableElement>] {
        &self.screen_space
    }

    /// Elements drawn under the scene lights.
    pub fn lit(&self) -> &[Arc<DrawableElement>] {
        &self.lit
    }

    /// Elements drawn without lighting.
    pub fn unlit(&self) -> &[Arc<DrawableElement>] {
        &self.unlit
    }

    /// Queued lights.
    pub fn lights(&self) -> &[Arc<LightSource>] {
        &self.lights
    }

    /// Number of queued lights.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Number of queued drawable elements, across all three buckets.
    pub fn len(&self) -> usize {
        self.screen_space.len() + self.lit.len() + self.unlit.len()
    }

    /// Whether all four buckets are empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0 && self.lights.is_empty()
    }
}

impl Drop for FrameQueue {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::renderer::{DirectionalLight, LightType};
    use lumen_infra::{HeadlessMaterial, HeadlessMesh};

    fn element(label: &str, lit: bool) -> Arc<DrawableElement> {
        let material = if lit {
            HeadlessMaterial::lit("lit")
        } else {
            HeadlessMaterial::unlit("unlit")
        };
        Arc::new(
            DrawableElement::new(label)
                .with_mesh(HeadlessMesh::new("mesh").into_handle())
                .with_material(material.into_handle()),
        )
    }

    #[test]
    fn test_routing_by_screen_space_then_shading_model() {
        let mut queue = FrameQueue::new();
        let hud = Arc::new(
            DrawableElement::new("hud")
                .with_mesh(HeadlessMesh::new("quad").into_handle())
                .with_material(HeadlessMaterial::lit("hud").into_handle())
                .with_screen_space(true),
        );

        assert_eq!(queue.push_drawable(&element("a", true)), Ok(Bucket::Lit));
        assert_eq!(queue.push_drawable(&element("b", false)), Ok(Bucket::Unlit));
        assert_eq!(queue.push_drawable(&hud), Ok(Bucket::ScreenSpace));
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn test_double_submission_is_rejected() {
        let mut queue = FrameQueue::new();
        let e = element("twice", true);

        assert!(queue.push_drawable(&e).is_ok());
        assert_eq!(
            queue.push_drawable(&e),
            Err(SubmissionError::AlreadyLocked("twice".to_string()))
        );
        assert_eq!(queue.lit().len(), 1, "Element must be queued exactly once");
    }

    #[test]
    fn test_invalid_element_leaves_queue_untouched() {
        let mut queue = FrameQueue::new();
        let broken = Arc::new(DrawableElement::new("broken"));

        assert!(matches!(
            queue.push_drawable(&broken),
            Err(SubmissionError::InvalidElement(_))
        ));
        assert!(queue.is_empty());
        assert!(!broken.is_locked());
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut queue = FrameQueue::new();
        let elements: Vec<_> = (0..4).map(|i| element(&format!("e{i}"), false)).collect();
        for e in &elements {
            queue.push_drawable(e).unwrap();
        }
        let labels: Vec<_> = queue.unlit().iter().map(|e| e.label().to_string()).collect();
        assert_eq!(labels, vec!["e0", "e1", "e2", "e3"]);
    }

    #[test]
    fn test_clear_unlocks_everything() {
        let mut queue = FrameQueue::new();
        let e = element("e", true);
        let light = Arc::new(LightSource::new(LightType::Directional(
            DirectionalLight::default(),
        )));
        queue.push_drawable(&e).unwrap();
        queue.push_light(&light).unwrap();
        assert_eq!(queue.push_light(&light), Err(SubmissionError::LightAlreadyLocked));
        assert!(e.is_locked() && light.is_locked());

        queue.clear();
        assert!(queue.is_empty());
        assert!(!e.is_locked());
        assert!(!light.is_locked());
        assert!(queue.push_drawable(&e).is_ok(), "Element is reusable next frame");
    }

    #[test]
    fn test_element_is_exclusive_across_queues() {
        let mut first = FrameQueue::new();
        let mut second = FrameQueue::new();
        let e = element("shared", false);

        first.push_drawable(&e).unwrap();
        assert!(matches!(
            second.push_drawable(&e),
            Err(SubmissionError::AlreadyLocked(_))
        ));

        drop(first);
        assert!(!e.is_locked());
        assert!(second.push_drawable(&e).is_ok());
    }
}
