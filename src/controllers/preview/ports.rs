use crate::controllers::preview::events::PreviewEvent;

/// Receives preview refresh outcomes on the worker thread.
///
/// The GUI adapter forwards events to the UI thread; tests collect them
/// directly.
pub trait PreviewPresenterPort: Send + Sync {
    fn present(&self, event: PreviewEvent);
}
