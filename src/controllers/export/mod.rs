mod action;

pub use action::{ExportAction, ExportError};
