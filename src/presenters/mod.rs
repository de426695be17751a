//! Presentation adapters for the preview image.

#[cfg(feature = "gui")]
pub mod pixels;
