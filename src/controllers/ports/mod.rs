//! Port definitions shared by the controllers.
//!
//! Traits that decouple the refresh/export logic from process execution
//! and from the presentation layer.

pub mod renderer;
