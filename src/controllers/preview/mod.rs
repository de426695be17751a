//! Preview refresh cycle.
//!
//! Follows the ports & adapters pattern:
//! - **Input**: model snapshots submitted after each settled edit
//! - **Output**: [`PreviewEvent`]s delivered through a presenter port
//! - **Core**: [`RenderPipeline`] derives and executes one invocation

mod controller;
pub mod events;
mod pipeline;
pub mod ports;

pub use controller::PreviewController;
pub use events::{PreviewEvent, RefreshData, RefreshFailure};
pub use pipeline::RenderPipeline;
pub use ports::PreviewPresenterPort;
