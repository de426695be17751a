//! Adapters binding the controller ports to the outside world.

pub mod process_renderer;
