pub mod adapter;
pub mod presenter;
pub mod svg;
