mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use adapters::process_renderer::ProcessRenderer;
pub use controllers::export::{ExportAction, ExportError};
pub use controllers::ports::renderer::{RendererError, RendererPort};
pub use controllers::preview::{
    PreviewController, PreviewEvent, PreviewPresenterPort, RefreshData, RefreshFailure,
    RenderPipeline,
};
pub use core::command_builder::CommandBuilder;
pub use core::config::RendererConfig;
pub use core::data::invocation::{OutputMode, RenderInvocation};
pub use core::data::parameter::Parameter;
pub use core::data::parameter_id::ParameterId;
pub use core::linked_pair::{ControlEndpoint, DisplayValue, LinkedControlPair};
pub use core::model::ParameterModel;

#[cfg(feature = "gui")]
pub use input::gui::run_gui;
