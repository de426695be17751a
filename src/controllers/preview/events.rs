use std::path::PathBuf;
use std::time::Duration;

/// Outcome of one preview refresh, delivered to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewEvent {
    Refreshed(RefreshData),
    Failed(RefreshFailure),
}

/// A preview render completed; the image at `image_path` should be
/// (re)loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshData {
    pub generation: u64,
    pub image_path: PathBuf,
    pub render_duration: Duration,
}

/// A preview render failed. The previously displayed image stays valid;
/// the message is suitable for a transient status indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshFailure {
    pub generation: u64,
    pub message: String,
}
