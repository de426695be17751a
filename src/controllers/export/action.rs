use std::error::Error;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::controllers::ports::renderer::{RendererError, RendererPort};
use crate::core::command_builder::CommandBuilder;
use crate::core::config::RendererConfig;
use crate::core::data::invocation::OutputMode;
use crate::core::model::ParameterModel;

/// Explicit save request: one save-mode render into the configured
/// destination, optionally handed off to the external viewer.
///
/// Runs once, synchronously, independent of the live preview cycle; the
/// model is only read. Failure comes back as an error for the user-visible
/// layer, since a user-initiated save must not fail silently.
pub struct ExportAction {
    builder: CommandBuilder,
    renderer: Arc<dyn RendererPort>,
}

impl ExportAction {
    #[must_use]
    pub fn new(config: RendererConfig, renderer: Arc<dyn RendererPort>) -> Self {
        Self {
            builder: CommandBuilder::new(config),
            renderer,
        }
    }

    /// Renders the current model state into its save path and returns that
    /// path on success.
    pub fn save(&self, model: &ParameterModel) -> Result<PathBuf, ExportError> {
        let invocation = self.builder.build(model, OutputMode::Save);
        let destination = model.save_path().to_string();

        self.renderer
            .render(&invocation)
            .map_err(|source| ExportError::Renderer {
                destination: destination.clone(),
                source,
            })?;

        Ok(PathBuf::from(destination))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    Renderer {
        destination: String,
        source: RendererError,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Renderer {
                destination,
                source,
            } => write!(f, "failed to save '{destination}': {source}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Renderer { source, .. } => Some(source),
        }
    }
}
