use std::sync::Mutex;

use winit::event_loop::EventLoopProxy;

use crate::controllers::preview::{PreviewEvent, PreviewPresenterPort};
use crate::input::gui::events::GuiEvent;

/// Bridges the preview worker thread to the UI thread.
///
/// Holds the most recent preview outcome in a single-slot mailbox and
/// wakes the event loop; the presenter drains the slot on the next frame.
/// An older outcome still in the slot is overwritten, which is correct:
/// only the newest one matters to the display.
pub struct PreviewAdapter {
    event: Mutex<Option<PreviewEvent>>,
    event_loop_proxy: EventLoopProxy<GuiEvent>,
}

impl PreviewPresenterPort for PreviewAdapter {
    fn present(&self, event: PreviewEvent) {
        *self.event.lock().unwrap() = Some(event);
        let _ = self.event_loop_proxy.send_event(GuiEvent::Wake);
    }
}

impl PreviewAdapter {
    #[must_use]
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            event: Mutex::new(None),
            event_loop_proxy,
        }
    }

    pub fn take_event(&self) -> Option<PreviewEvent> {
        self.event.lock().unwrap().take()
    }
}
