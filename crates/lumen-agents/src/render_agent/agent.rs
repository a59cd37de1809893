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

//! Defines the RenderAgent, the central orchestrator for the rendering subsystem.

use super::strategy::{RenderingStrategy, StrategySelector};
use lumen_core::{
    math::{LinearRgba, Mat4},
    renderer::{
        BackendFactory, FrameStats, GraphicsBackendType, RenderBackend, RenderDesc, RenderError,
        RenderSettings, RenderTarget, ViewInfo,
    },
};
use lumen_lanes::render_lane::{
    DeferredLane, DepthOnlyLane, DrawableElement, FrameQueue, LaneContext, LightSource,
    LitForwardLane, RenderLane, ScreenSpaceLane, SimpleUnlitLane,
};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Finds a lane by its strategy name.
fn find_lane_by_name<'a>(lanes: &'a [Box<dyn RenderLane>], name: &str) -> Option<&'a dyn RenderLane> {
    lanes
        .iter()
        .find(|lane| lane.strategy_name() == name)
        .map(|boxed| boxed.as_ref())
}

/// The agent responsible for managing the state and logic of the rendering pipeline.
///
/// Each frame, scene traversal submits drawable elements and lights, then the
/// frame driver calls [`RenderAgent::render`] once. Queued elements and lights
/// are locked to this agent until that call returns.
///
/// The agent is single-threaded and frame synchronous. `render` is not
/// re-entrant; taking `&mut self` leaves that to the caller.
#[derive(Debug)]
pub struct RenderAgent {
    // The startup-selected backend. Every call goes through it.
    backend: Box<dyn RenderBackend>,
    settings: RenderSettings,
    selector: StrategySelector,
    // Buckets of the frame being accumulated.
    queue: FrameQueue,
    // Runs ahead of the main-scene lane on non depth-only frames.
    screen_space_lane: ScreenSpaceLane,
    // One lane per main-scene strategy.
    lanes: Vec<Box<dyn RenderLane>>,
    // --- Frame metrics ---
    last_stats: FrameStats,
    last_frame_time: Duration,
    frame_count: u64,
}

impl RenderAgent {
    /// Creates the agent and its backend from a description.
    ///
    /// # Errors
    ///
    /// * `RenderError::InvalidDescription` - `desc` is not valid.
    /// * `RenderError::InitializationFailed` - the factory could not create a
    ///   backend, or the created backend is not ready.
    pub fn create(desc: &RenderDesc, factory: &dyn BackendFactory) -> Result<Self, RenderError> {
        if let Err(e) = desc.validate() {
            log::error!("Refusing to create renderer: {e}");
            return Err(e);
        }
        if !factory.is_backend_supported(desc.backend) {
            let e = RenderError::InitializationFailed(format!(
                "{} is not supported on this platform",
                desc.backend.name()
            ));
            log::error!("{e}");
            return Err(e);
        }
        let backend = factory.create_backend(desc).inspect_err(|e| {
            log::error!("Backend creation failed: {e}");
        })?;
        Self::with_backend(backend, desc.settings.clone())
    }

    /// Creates the agent around an already created backend.
    ///
    /// # Errors
    ///
    /// * `RenderError::InitializationFailed` - the backend is not ready. It is
    ///   dropped.
    /// * `RenderError::InvalidConfiguration` - `settings` are not usable.
    pub fn with_backend(
        backend: Box<dyn RenderBackend>,
        settings: RenderSettings,
    ) -> Result<Self, RenderError> {
        if !backend.is_ready() {
            let e = RenderError::InitializationFailed(format!(
                "{} backend on '{}' did not finish initialization",
                backend.backend_type().name(),
                backend.device_name()
            ));
            log::error!("{e}");
            return Err(e);
        }
        settings.validate()?;

        log::info!(
            "RenderAgent created on {} ({}), deferred above {} lights",
            backend.backend_type().name(),
            backend.device_name(),
            settings.deferred_light_threshold
        );

        let lanes: Vec<Box<dyn RenderLane>> = vec![
            Box::new(SimpleUnlitLane::new()),
            Box::new(LitForwardLane::new()),
            Box::new(DeferredLane::new()),
            Box::new(DepthOnlyLane::new()),
        ];

        let mut settings = settings;
        settings.ambient_color = settings.ambient_color.opaque();
        settings.clear_color = settings.clear_color.opaque();

        Ok(Self {
            backend,
            selector: StrategySelector::new(settings.deferred_light_threshold),
            settings,
            queue: FrameQueue::new(),
            screen_space_lane: ScreenSpaceLane::new(),
            lanes,
            last_stats: FrameStats::default(),
            last_frame_time: Duration::ZERO,
            frame_count: 0,
        })
    }

    /// Queues a drawable element for the next `render`.
    ///
    /// Invalid elements and elements already locked to a pipeline are dropped
    /// with a warning. Returns whether the element was queued.
    pub fn submit_drawable(&mut self, element: &Arc<DrawableElement>) -> bool {
        match self.queue.push_drawable(element) {
            Ok(bucket) => {
                log::trace!("Queued '{}' in the {:?} bucket", element.label(), bucket);
                true
            }
            Err(e) => {
                log::warn!("Dropped drawable submission: {e}");
                false
            }
        }
    }

    /// Queues a light for the next `render`.
    ///
    /// A light already locked to a pipeline is dropped with a warning. Returns
    /// whether the light was queued.
    pub fn submit_light(&mut self, light: &Arc<LightSource>) -> bool {
        match self.queue.push_light(light) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Dropped light submission: {e}");
                false
            }
        }
    }

    /// Renders the queued frame and clears the queue.
    ///
    /// # Arguments
    ///
    /// * `view`, `projection` - The camera of the main-scene passes.
    /// * `target` - Renders into this target instead of the backbuffer. It is
    ///   bound before the frame begins and unbound after it ends.
    /// * `depth_only` - Renders only depth; lights and screen-space content are
    ///   ignored.
    ///
    /// # Errors
    ///
    /// Returns the backend error if the frame could not begin. No pass runs,
    /// but the queue is still cleared and the agent stays usable.
    pub fn render(
        &mut self,
        view: &Mat4,
        projection: &Mat4,
        target: Option<&dyn RenderTarget>,
        depth_only: bool,
    ) -> Result<FrameStats, RenderError> {
        let frame_start = Instant::now();
        self.frame_count += 1;
        let mut stats = FrameStats::new(self.frame_count);

        if let Some(target) = target {
            self.backend.bind_render_target(target);
        }

        let begun = self.backend.begin_render();
        match &begun {
            Ok(()) => {
                let view_info = ViewInfo::new(*view, *projection);
                self.execute_passes(&view_info, depth_only, &mut stats);
                self.backend.end_render();
            }
            Err(e) => {
                log::warn!(
                    "Frame {} dropped, {} elements and {} lights discarded: {e}",
                    self.frame_count,
                    self.queue.len(),
                    self.queue.light_count()
                );
            }
        }

        if let Some(target) = target {
            self.backend.unbind_render_target(target);
        }
        self.queue.clear();

        self.last_frame_time = frame_start.elapsed();
        self.last_stats = stats.clone();
        log::trace!("RenderAgent: frame {} complete: {:?}", self.frame_count, stats);
        begun.map(|()| stats)
    }

    fn execute_passes(&mut self, view: &ViewInfo, depth_only: bool, stats: &mut FrameStats) {
        let strategy = self.selector.select(self.queue.light_count(), depth_only);
        log::debug!(
            "Frame {}: {} lights, strategy {:?}",
            self.frame_count,
            self.queue.light_count(),
            strategy
        );

        let mut ctx = LaneContext {
            backend: self.backend.as_mut(),
            view,
            ambient_color: self.settings.ambient_color,
            stats,
        };

        if !depth_only {
            self.screen_space_lane.render(&self.queue, &mut ctx);
        }

        match find_lane_by_name(&self.lanes, strategy.lane_name()) {
            Some(lane) => {
                ctx.stats.strategy = Some(lane.strategy_name());
                lane.render(&self.queue, &mut ctx);
            }
            None => log::error!("No lane registered for strategy {:?}", strategy),
        }
    }

    /// Selects the strategy the queued frame would be rendered with.
    pub fn select_strategy(&self, depth_only: bool) -> RenderingStrategy {
        self.selector.select(self.queue.light_count(), depth_only)
    }

    /// Forwards the clear colour to the backend.
    pub fn clear_buffers(&mut self) {
        self.backend.clear_buffers(self.settings.clear_color);
    }

    /// Sets the ambient colour of the first forward light pass. Alpha is
    /// forced to fully opaque.
    pub fn set_ambient_color(&mut self, color: LinearRgba) {
        self.settings.ambient_color = color.opaque();
    }

    /// Returns the ambient colour.
    pub fn ambient_color(&self) -> LinearRgba {
        self.settings.ambient_color
    }

    /// Sets the clear colour. Alpha is forced to fully opaque.
    pub fn set_clear_color(&mut self, color: LinearRgba) {
        self.settings.clear_color = color.opaque();
    }

    /// Returns the clear colour.
    pub fn clear_color(&self) -> LinearRgba {
        self.settings.clear_color
    }

    /// Changes the light count above which frames are rendered deferred.
    pub fn set_deferred_light_threshold(&mut self, threshold: usize) {
        self.settings.deferred_light_threshold = threshold;
        self.selector = StrategySelector::new(threshold);
    }

    /// Returns the current settings.
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// The buckets accumulated for the next frame.
    pub fn queued(&self) -> &FrameQueue {
        &self.queue
    }

    /// Returns a reference to the available main-scene lanes.
    pub fn lanes(&self) -> &[Box<dyn RenderLane>] {
        &self.lanes
    }

    /// The graphics API of the backend.
    pub fn backend_type(&self) -> GraphicsBackendType {
        self.backend.backend_type()
    }

    /// The hardware device name reported by the backend.
    pub fn device_name(&self) -> &str {
        self.backend.device_name()
    }

    /// Returns the statistics of the last `render` call.
    pub fn last_stats(&self) -> &FrameStats {
        &self.last_stats
    }

    /// Returns the duration of the last `render` call.
    pub fn last_frame_time(&self) -> Duration {
        self.last_frame_time
    }

    /// Returns the total number of `render` calls, including dropped frames.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
