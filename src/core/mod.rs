//! Domain layer: parameter state and invocation derivation.
//!
//! Everything here is synchronous and side-effect free; process execution
//! and display concerns live behind ports in the controller layer.

pub mod command_builder;
pub mod config;
pub mod data;
pub mod linked_pair;
pub mod model;
