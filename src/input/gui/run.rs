use std::sync::Arc;

use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoopBuilder,
    window::{Window, WindowBuilder},
};

use crate::adapters::process_renderer::ProcessRenderer;
use crate::controllers::export::ExportAction;
use crate::controllers::ports::renderer::RendererPort;
use crate::controllers::preview::PreviewController;
use crate::core::config::RendererConfig;
use crate::input::gui::events::GuiEvent;
use crate::input::gui::gui_app::GuiApp;
use crate::input::gui::ports::GuiPresenterPort;
use crate::presenters::pixels::presenter::PixelsPresenter;

/// Opens the editor window and runs until it is closed.
///
/// Wires the session together: one process-backed renderer shared by the
/// preview controller and the export action, one presenter owning the
/// framebuffer, one injected renderer configuration.
pub fn run_gui() {
    let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event()
        .build()
        .expect("Failed to create event loop");

    let event_loop_proxy = event_loop.create_proxy();

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Fretboard Layout Editor")
            .with_inner_size(LogicalSize::new(900.0, 640.0))
            .with_min_inner_size(LogicalSize::new(300.0, 240.0))
            .build(&event_loop)
            .expect("Failed to create window"),
    ));

    let config = RendererConfig::default();
    let renderer: Arc<dyn RendererPort> = Arc::new(ProcessRenderer::new());

    let presenter = PixelsPresenter::new(window, event_loop_proxy);
    let controller = PreviewController::new(
        config.clone(),
        Arc::clone(&renderer),
        presenter.share_adapter(),
    );
    let export = ExportAction::new(config, renderer);

    let mut app = GuiApp::new(window, &event_loop, presenter, controller, export);

    event_loop
        .run(move |event, elwt| {
            match event {
                Event::UserEvent(GuiEvent::Wake) => {
                    window.request_redraw();
                }
                Event::WindowEvent {
                    ref event,
                    window_id,
                } if window_id == window.id() => {
                    let (consumed, repaint) = app.handle_window_event(window, event);

                    match event {
                        WindowEvent::CloseRequested => {
                            elwt.exit();
                        }
                        WindowEvent::RedrawRequested => {
                            let mut egui_output = app.update_ui(window);

                            let platform_output = std::mem::take(&mut egui_output.platform_output);
                            app.egui_state.handle_platform_output(window, platform_output);

                            // Edits have settled into the model; one refresh
                            // per changed snapshot.
                            app.submit_refresh_if_needed();

                            let repaint_now = egui_output
                                .viewport_output
                                .values()
                                .any(|v| v.repaint_delay.is_zero());

                            if let Err(error) = app.render(egui_output) {
                                eprintln!("Render error: {error}");
                                elwt.exit();
                            }

                            if repaint_now {
                                window.request_redraw();
                            }
                        }
                        WindowEvent::Resized(size) => {
                            app.resize(size.width, size.height);
                            window.request_redraw();
                        }
                        WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                            app.scale_factor = *scale_factor;
                            app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                            let size = window.inner_size();
                            app.resize(size.width, size.height);
                            window.request_redraw();
                        }
                        _ => {
                            if consumed || repaint {
                                window.request_redraw();
                            }
                        }
                    }
                }
                Event::AboutToWait => {}
                _ => {}
            }
        })
        .expect("Event loop error");
}
