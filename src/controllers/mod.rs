//! Application layer: orchestration of the refresh and export flows.

pub mod export;
pub mod ports;
pub mod preview;
