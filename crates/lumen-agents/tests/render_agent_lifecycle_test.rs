mod common;

use common::{point_lights, Harness};
use lumen_agents::RenderAgent;
use lumen_core::math::LinearRgba;
use lumen_core::renderer::{
    GraphicsBackendType, RenderBackend, RenderDesc, RenderError, RenderSettings,
};
use lumen_infra::{
    BackendCommand, CommandLog, HeadlessBackend, HeadlessBackendFactory, HeadlessRenderTarget,
};

// --- Construction ---

#[test]
fn test_unsupported_backend_fails_construction() {
    let result = RenderAgent::create(
        &RenderDesc::new(GraphicsBackendType::Vulkan),
        &HeadlessBackendFactory::new(),
    );
    assert!(matches!(result, Err(RenderError::InitializationFailed(_))));
}

#[test]
fn test_invalid_description_fails_construction() {
    let result = RenderAgent::create(&RenderDesc::default(), &HeadlessBackendFactory::new());
    assert!(matches!(result, Err(RenderError::InvalidDescription(_))));
}

#[test]
fn test_unavailable_device_fails_construction() {
    let result = RenderAgent::create(
        &RenderDesc::new(GraphicsBackendType::Headless),
        &HeadlessBackendFactory::unavailable(),
    );
    assert!(matches!(result, Err(RenderError::InitializationFailed(_))));
}

#[test]
fn test_backend_not_ready_fails_construction() {
    let result = RenderAgent::create(
        &RenderDesc::new(GraphicsBackendType::Headless),
        &HeadlessBackendFactory::not_ready(),
    );
    assert!(matches!(result, Err(RenderError::InitializationFailed(_))));

    let backend = HeadlessBackend::new(CommandLog::new()).with_ready(false);
    assert!(RenderAgent::with_backend(Box::new(backend), RenderSettings::default()).is_err());
}

#[test]
fn test_with_backend_reports_device() {
    let log = CommandLog::new();
    let backend = HeadlessBackend::new(log).with_device_name("offscreen-capture");
    let agent = RenderAgent::with_backend(Box::new(backend), RenderSettings::default()).unwrap();
    assert_eq!(agent.device_name(), "offscreen-capture");
    assert_eq!(agent.backend_type(), GraphicsBackendType::Headless);
}

// --- Frame failure and cleanup ---

#[test]
fn test_begin_failure_skips_passes_and_clears_queue() {
    let mut h = Harness::new();
    let elements = vec![h.lit("a"), h.unlit("b"), h.screen_space("hud")];
    h.submit_all(&elements);
    let lights = point_lights(2);
    h.submit_lights(&lights);
    h.faults.fail_next_begin(1);

    let result = h.render();

    assert!(matches!(result, Err(RenderError::BeginFrameFailed(_))));
    assert_eq!(
        h.log.snapshot(),
        vec![BackendCommand::BeginRender { succeeded: false }],
        "No pass and no end_render after a failed begin"
    );
    assert!(h.agent.queued().is_empty());
    assert!(elements.iter().all(|e| !e.is_locked()));
    assert!(lights.iter().all(|l| !l.is_locked()));
}

#[test]
fn test_agent_recovers_after_begin_failure() {
    let mut h = Harness::new();
    h.faults.fail_next_begin(1);
    let first = vec![h.unlit("dropped")];
    h.submit_all(&first);
    assert!(h.render().is_err());

    // The same element can be queued again next frame.
    h.log.clear();
    h.submit_all(&first);
    let stats = h.render().unwrap();
    assert_eq!(h.draws(), vec!["dropped"]);
    assert_eq!(stats.frame_number, 2);
    assert_eq!(h.agent.frame_count(), 2);
}

#[test]
fn test_elements_unlocked_after_successful_frame() {
    let mut h = Harness::new();
    let elements = vec![h.lit("a"), h.unlit("b"), h.screen_space("c")];
    h.submit_all(&elements);
    let lights = point_lights(12);
    h.submit_lights(&lights);

    h.render().unwrap();

    assert!(h.agent.queued().is_empty());
    assert!(elements.iter().all(|e| !e.is_locked()));
    assert!(lights.iter().all(|l| !l.is_locked()));
    for e in &elements {
        assert!(h.agent.submit_drawable(e), "'{}' must be reusable", e.label());
    }
}

#[test]
fn test_element_is_exclusive_between_agents() {
    let mut first = Harness::new();
    let mut second = Harness::new();
    let shared = first.unlit("shared");

    assert!(first.agent.submit_drawable(&shared));
    assert!(!second.agent.submit_drawable(&shared), "Locked to the first agent");

    first.render().unwrap();
    assert!(second.agent.submit_drawable(&shared));
}

#[test]
fn test_dropping_agent_releases_its_locks() {
    let h = Harness::new();
    let e = h.unlit("orphan");
    {
        let mut doomed = Harness::new();
        assert!(doomed.agent.submit_drawable(&e));
        assert!(e.is_locked());
    }
    assert!(!e.is_locked());
}

// --- Render targets ---

#[test]
fn test_target_wraps_the_frame() {
    let mut h = Harness::new();
    let elements = vec![h.unlit("a")];
    h.submit_all(&elements);
    let target = HeadlessRenderTarget::new("shadow-map");

    h.render_with(Some(&target), false).unwrap();

    let commands = h.log.snapshot();
    assert_eq!(commands.first(), Some(&BackendCommand::BindRenderTarget("shadow-map".into())));
    assert_eq!(commands[1], BackendCommand::BeginRender { succeeded: true });
    assert_eq!(commands[commands.len() - 2], BackendCommand::EndRender);
    assert_eq!(
        commands.last(),
        Some(&BackendCommand::UnbindRenderTarget("shadow-map".into()))
    );
}

#[test]
fn test_target_unbound_after_begin_failure() {
    let mut h = Harness::new();
    h.faults.fail_next_begin(1);
    let target = HeadlessRenderTarget::new("reflection");

    assert!(h.render_with(Some(&target), false).is_err());
    assert_eq!(
        h.log.snapshot(),
        vec![
            BackendCommand::BindRenderTarget("reflection".into()),
            BackendCommand::BeginRender { succeeded: false },
            BackendCommand::UnbindRenderTarget("reflection".into()),
        ]
    );
}

#[test]
fn test_target_unbound_with_empty_queue() {
    let mut h = Harness::new();
    let target = HeadlessRenderTarget::new("empty");
    h.render_with(Some(&target), true).unwrap();
    assert_eq!(h.count(|c| matches!(c, BackendCommand::UnbindRenderTarget(_))), 1);
    assert_eq!(h.log.draw_calls(), 0);
}

// --- Settings and statistics ---

#[test]
fn test_clear_buffers_uses_opaque_clear_color() {
    let mut h = Harness::new();
    h.agent.set_clear_color(LinearRgba::new(0.2, 0.4, 0.6, 0.0));
    h.agent.clear_buffers();
    assert_eq!(
        h.log.snapshot(),
        vec![BackendCommand::ClearBuffers(LinearRgba::new(0.2, 0.4, 0.6, 1.0))]
    );
}

#[test]
fn test_custom_ambient_is_bound_for_first_light() {
    let mut h = Harness::new();
    let ambient = LinearRgba::rgb(0.1, 0.1, 0.3);
    h.agent.set_ambient_color(ambient);
    let elements = vec![h.lit("a")];
    h.submit_all(&elements);
    h.submit_lights(&point_lights(1));

    h.render().unwrap();
    assert!(h.log.snapshot().contains(&BackendCommand::BindAmbientState(ambient)));
}

#[test]
fn test_last_stats_track_the_last_frame() {
    let mut h = Harness::new();
    let elements = vec![h.unlit("a"), h.unlit("b")];
    h.submit_all(&elements);
    let stats = h.render().unwrap();
    assert_eq!(h.agent.last_stats(), &stats);
    assert_eq!(stats.frame_number, 1);
    assert_eq!(stats.batches, 1);

    let empty = h.render().unwrap();
    assert_eq!(empty.frame_number, 2);
    assert_eq!(empty.draw_calls, 0);
    assert_eq!(h.agent.last_stats().frame_number, 2);
}

#[test]
fn test_settings_from_ron_drive_the_agent() {
    let settings = RenderSettings::from_ron_str("(deferred_light_threshold: 1)").unwrap();
    let log = CommandLog::new();
    let mut agent = RenderAgent::with_backend(
        Box::new(HeadlessBackend::new(log.clone())),
        settings,
    )
    .unwrap();
    for light in point_lights(2) {
        assert!(agent.submit_light(&light));
    }

    let stats = agent
        .render(&common::camera_view(), &common::camera_projection(), None, false)
        .unwrap();
    assert_eq!(stats.strategy, Some("Deferred"));
    assert_eq!(log.count(|c| matches!(c, BackendCommand::RenderDeferredLight(_))), 2);
}

#[test]
fn test_headless_backend_reports_identity_through_trait() {
    let backend: Box<dyn RenderBackend> = Box::new(HeadlessBackend::new(CommandLog::new()));
    assert_eq!(backend.backend_type().name(), "Headless");
}
