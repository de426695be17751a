use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::controllers::ports::renderer::{RendererError, RendererPort};
use crate::core::command_builder::CommandBuilder;
use crate::core::config::RendererConfig;
use crate::core::data::invocation::OutputMode;
use crate::core::model::ParameterModel;

/// One synchronous preview refresh: derive the invocation, execute it
/// against the fixed temporary path, and hand back that path for the
/// image display to reload.
///
/// A failed refresh returns the error without touching anything; the
/// previously rendered preview on disk stays as it was, so the display
/// keeps showing the last good image.
pub struct RenderPipeline {
    builder: CommandBuilder,
    preview_path: PathBuf,
    renderer: Arc<dyn RendererPort>,
}

impl RenderPipeline {
    #[must_use]
    pub fn new(config: RendererConfig, renderer: Arc<dyn RendererPort>) -> Self {
        Self {
            preview_path: config.preview_path.clone(),
            builder: CommandBuilder::new(config),
            renderer,
        }
    }

    #[must_use]
    pub fn preview_path(&self) -> &Path {
        &self.preview_path
    }

    /// Builds and executes a preview invocation for the current model
    /// state. On success the returned path is ready to be reloaded.
    pub fn refresh_preview(&self, model: &ParameterModel) -> Result<PathBuf, RendererError> {
        let invocation = self.builder.build(model, OutputMode::Preview);
        self.renderer.render(&invocation)?;

        Ok(self.preview_path.clone())
    }
}
