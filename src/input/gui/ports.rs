use std::sync::Arc;
use std::time::Duration;

use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use crate::controllers::preview::PreviewPresenterPort;
use crate::input::gui::events::GuiEvent;

/// Presentation surface the GUI application draws through.
pub trait GuiPresenterPort {
    fn new(window: &'static Window, event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self;

    /// The thread-safe adapter handed to the preview controller.
    fn share_adapter(&self) -> Arc<dyn PreviewPresenterPort>;

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &egui::Context,
    ) -> Result<(), pixels::Error>;

    fn resize(&mut self, width: u32, height: u32);

    /// Message for the transient status line, if the last refresh failed.
    fn status_message(&self) -> Option<String>;

    fn last_render_duration(&self) -> Option<Duration>;
}
