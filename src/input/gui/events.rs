/// Custom user events for the GUI event loop.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// A preview outcome arrived from the worker thread. The handler
    /// requests a redraw; the presenter picks the event up from its
    /// mailbox during the next frame.
    Wake,
}
