use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use crate::controllers::ports::renderer::RendererPort;
use crate::controllers::preview::events::{PreviewEvent, RefreshData, RefreshFailure};
use crate::controllers::preview::pipeline::RenderPipeline;
use crate::controllers::preview::ports::PreviewPresenterPort;
use crate::core::config::RendererConfig;
use crate::core::model::ParameterModel;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    /// Single-slot mailbox: a new submission overwrites any request the
    /// worker has not picked up yet.
    latest_request: Mutex<Option<(u64, ParameterModel)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    pipeline: RenderPipeline,
    presenter_port: Arc<dyn PreviewPresenterPort>,
}

/// Drives the on-every-change preview refresh cycle.
///
/// Each settled parameter edit submits a model snapshot; a single worker
/// thread renders the most recent one. Because the worker is the only
/// writer, no two preview invocations ever target the temporary output
/// file concurrently, and an external render that finishes after a newer
/// edit arrived is dropped unpresented. The spawned process itself cannot
/// be interrupted mid-render, so superseding happens at the result
/// boundary rather than by cancellation.
pub struct PreviewController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl PreviewController {
    pub fn new(
        config: RendererConfig,
        renderer: Arc<dyn RendererPort>,
        presenter_port: Arc<dyn PreviewPresenterPort>,
    ) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            pipeline: RenderPipeline::new(config, renderer),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Requests a preview refresh for the current model state and returns
    /// the generation assigned to it.
    pub fn submit_refresh(&self, model: &ParameterModel) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self.shared.latest_request.lock().unwrap();
            *guard = Some((generation, model.clone()));
        }

        self.shared.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, model) = {
                let mut guard = shared.latest_request.lock().unwrap();
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(request) = guard.take() {
                        break request;
                    }

                    guard = shared.wake.wait(guard).unwrap();
                }
            };

            let start = Instant::now();
            let result = shared.pipeline.refresh_preview(&model);
            let render_duration = start.elapsed();

            // A newer edit arrived while the renderer ran; its refresh is
            // already queued, so this result is stale.
            let current_generation = shared.generation.load(Ordering::Acquire);
            if job_generation != current_generation {
                continue;
            }

            match result {
                Ok(image_path) => {
                    shared.presenter_port.present(PreviewEvent::Refreshed(RefreshData {
                        generation: job_generation,
                        image_path,
                        render_duration,
                    }));
                }
                Err(error) => {
                    shared.presenter_port.present(PreviewEvent::Failed(RefreshFailure {
                        generation: job_generation,
                        message: error.to_string(),
                    }));
                }
            }

            shared
                .last_completed_generation
                .store(job_generation, Ordering::Release);
        }
    }
}

impl Drop for PreviewController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    use crate::controllers::ports::renderer::RendererError;
    use crate::core::data::invocation::RenderInvocation;
    use crate::core::data::parameter_id::ParameterId;

    #[derive(Default)]
    struct MockPresenterPort {
        events: Mutex<Vec<PreviewEvent>>,
    }

    impl MockPresenterPort {
        fn take_events(&self) -> Vec<PreviewEvent> {
            let mut guard = self.events.lock().unwrap();
            std::mem::take(&mut *guard)
        }
    }

    impl PreviewPresenterPort for MockPresenterPort {
        fn present(&self, event: PreviewEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    struct FakeRenderer {
        invocations: Mutex<Vec<RenderInvocation>>,
        fail: bool,
    }

    impl FakeRenderer {
        fn new(fail: bool) -> Self {
            Self {
                invocations: Mutex::new(Vec::new()),
                fail,
            }
        }
    }

    impl RendererPort for FakeRenderer {
        fn render(&self, invocation: &RenderInvocation) -> Result<(), RendererError> {
            self.invocations.lock().unwrap().push(invocation.clone());

            if self.fail {
                return Err(RendererError::Exit {
                    program: invocation.program().to_string(),
                    code: Some(1),
                });
            }
            Ok(())
        }
    }

    fn wait_for_events(sink: &MockPresenterPort, timeout: Duration) -> Vec<PreviewEvent> {
        let start = Instant::now();
        loop {
            let events = sink.take_events();
            if !events.is_empty() {
                return events;
            }
            if start.elapsed() >= timeout {
                return events;
            }
            thread::sleep(Duration::from_millis(10));
        }
    }

    fn test_config() -> RendererConfig {
        RendererConfig {
            program: "fblt".to_string(),
            preview_path: PathBuf::from("/tmp/controller-test-preview.svg"),
        }
    }

    fn controller_with(
        fail: bool,
    ) -> (PreviewController, Arc<MockPresenterPort>, Arc<FakeRenderer>) {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let renderer = Arc::new(FakeRenderer::new(fail));
        let controller = PreviewController::new(
            test_config(),
            Arc::clone(&renderer) as Arc<dyn RendererPort>,
            Arc::clone(&presenter_port) as Arc<dyn PreviewPresenterPort>,
        );
        (controller, presenter_port, renderer)
    }

    fn extract_generation(events: &[PreviewEvent]) -> u64 {
        events
            .iter()
            .map(|event| match event {
                PreviewEvent::Refreshed(data) => data.generation,
                PreviewEvent::Failed(failure) => failure.generation,
            })
            .next()
            .expect("expected at least one event with a generation")
    }

    #[test]
    fn test_submit_refresh_emits_refreshed_event_with_preview_path() {
        let (mut controller, presenter_port, _renderer) = controller_with(false);

        let generation = controller.submit_refresh(&ParameterModel::default());
        let events = wait_for_events(presenter_port.as_ref(), Duration::from_secs(2));

        assert!(!events.is_empty(), "expected a preview event");
        match &events[0] {
            PreviewEvent::Refreshed(data) => {
                assert_eq!(data.generation, generation);
                assert_eq!(
                    data.image_path,
                    PathBuf::from("/tmp/controller-test-preview.svg")
                );
            }
            PreviewEvent::Failed(failure) => {
                panic!("unexpected refresh failure: {}", failure.message);
            }
        }

        controller.shutdown();
    }

    #[test]
    fn test_generations_increment_across_submissions() {
        let (mut controller, presenter_port, _renderer) = controller_with(false);
        let model = ParameterModel::default();

        controller.submit_refresh(&model);
        let events_a = wait_for_events(presenter_port.as_ref(), Duration::from_secs(2));
        assert!(!events_a.is_empty(), "expected events from first refresh");
        let gen_a = extract_generation(&events_a);

        controller.submit_refresh(&model);
        let events_b = wait_for_events(presenter_port.as_ref(), Duration::from_secs(2));
        assert!(!events_b.is_empty(), "expected events from second refresh");
        let gen_b = extract_generation(&events_b);

        assert!(
            gen_b > gen_a,
            "generation {gen_b} should be greater than {gen_a}"
        );

        controller.shutdown();
    }

    #[test]
    fn test_last_completed_generation_starts_at_zero() {
        let (mut controller, _presenter_port, _renderer) = controller_with(false);

        assert_eq!(controller.last_completed_generation(), 0);

        controller.shutdown();
    }

    #[test]
    fn test_renderer_failure_emits_failed_event_and_no_reload() {
        let (mut controller, presenter_port, _renderer) = controller_with(true);

        let generation = controller.submit_refresh(&ParameterModel::default());
        let events = wait_for_events(presenter_port.as_ref(), Duration::from_secs(2));

        assert!(!events.is_empty(), "expected a failure event");
        for event in &events {
            match event {
                PreviewEvent::Failed(failure) => {
                    assert_eq!(failure.generation, generation);
                    assert!(failure.message.contains("fblt"));
                }
                PreviewEvent::Refreshed(_) => {
                    panic!("a failed render must not ask the display to reload");
                }
            }
        }
        assert_eq!(controller.last_completed_generation(), generation);

        controller.shutdown();
    }

    #[test]
    fn test_rapid_edits_issue_at_most_one_render_per_settled_state() {
        let (mut controller, presenter_port, renderer) = controller_with(false);
        let mut model = ParameterModel::default();

        let mut last_generation = 0;
        for fret_count in 20..30 {
            model.set(ParameterId::FretCount, f64::from(fret_count));
            last_generation = controller.submit_refresh(&model);
        }

        thread::sleep(Duration::from_millis(300));
        let events = presenter_port.take_events();

        let max_presented = events
            .iter()
            .map(|event| match event {
                PreviewEvent::Refreshed(data) => data.generation,
                PreviewEvent::Failed(failure) => failure.generation,
            })
            .max()
            .unwrap_or(0);

        assert!(max_presented > 0, "expected at least one presented refresh");
        assert!(max_presented <= last_generation);
        // Superseded submissions were overwritten in the mailbox, so the
        // renderer ran fewer times than the user edited.
        assert!(renderer.invocations.lock().unwrap().len() <= 10);

        controller.shutdown();
    }

    #[test]
    fn test_display_layer_keeps_prior_image_across_failures() {
        // Simulates the presenter-side policy: a Failed event surfaces a
        // message but never replaces the image shown for the last
        // successful generation.
        struct DisplayState {
            shown_image_generation: u64,
            status_message: Option<String>,
        }

        impl DisplayState {
            fn apply(&mut self, event: &PreviewEvent) {
                match event {
                    PreviewEvent::Refreshed(data) => {
                        if data.generation > self.shown_image_generation {
                            self.shown_image_generation = data.generation;
                            self.status_message = None;
                        }
                    }
                    PreviewEvent::Failed(failure) => {
                        if failure.generation >= self.shown_image_generation {
                            self.status_message = Some(failure.message.clone());
                        }
                    }
                }
            }
        }

        let mut display = DisplayState {
            shown_image_generation: 0,
            status_message: None,
        };

        display.apply(&PreviewEvent::Refreshed(RefreshData {
            generation: 1,
            image_path: PathBuf::from("/tmp/p.svg"),
            render_duration: Duration::ZERO,
        }));
        assert_eq!(display.shown_image_generation, 1);

        display.apply(&PreviewEvent::Failed(RefreshFailure {
            generation: 2,
            message: "renderer exited with status 1".to_string(),
        }));
        assert_eq!(
            display.shown_image_generation, 1,
            "failure must leave the previously displayed preview unchanged"
        );
        assert!(display.status_message.is_some());

        // A stale refresh arriving late must not regress the display.
        display.apply(&PreviewEvent::Refreshed(RefreshData {
            generation: 1,
            image_path: PathBuf::from("/tmp/p.svg"),
            render_duration: Duration::ZERO,
        }));
        assert_eq!(display.shown_image_generation, 1);

        display.apply(&PreviewEvent::Refreshed(RefreshData {
            generation: 3,
            image_path: PathBuf::from("/tmp/p.svg"),
            render_duration: Duration::ZERO,
        }));
        assert_eq!(display.shown_image_generation, 3);
        assert!(display.status_message.is_none());
    }
}
