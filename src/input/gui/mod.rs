//! Windowed editor: winit for the window and event loop, pixels for the
//! preview framebuffer, egui for the control panel.

pub mod events;
mod gui_app;
pub mod ports;
mod run;
mod ui_state;

pub use run::run_gui;
