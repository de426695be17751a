//! Input adapters translating user interaction into model mutations.

#[cfg(feature = "gui")]
pub mod gui;
