use std::process::{Command, Stdio};

use crate::controllers::ports::renderer::{RendererError, RendererPort};
use crate::core::data::invocation::RenderInvocation;

/// [`RendererPort`] backed by the real external renderer process.
///
/// The invocation's tokens are passed as discrete argv entries; the
/// renderer's stdout is discarded, stderr is left attached for diagnosis.
/// The call blocks until the process exits.
#[derive(Debug, Default)]
pub struct ProcessRenderer;

impl ProcessRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RendererPort for ProcessRenderer {
    fn render(&self, invocation: &RenderInvocation) -> Result<(), RendererError> {
        let status = Command::new(invocation.program())
            .args(invocation.args())
            .stdout(Stdio::null())
            .status()
            .map_err(|error| RendererError::Launch {
                program: invocation.program().to_string(),
                message: error.to_string(),
            })?;

        if !status.success() {
            return Err(RendererError::Exit {
                program: invocation.program().to_string(),
                code: status.code(),
            });
        }

        // Success means the destination was written; a renderer that exits
        // zero without producing it is still a failure for the caller.
        if let Some(path) = invocation.output_path() {
            if std::fs::metadata(path).is_err() {
                return Err(RendererError::MissingOutput { path: path.into() });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_program_reports_launch_failure() {
        let renderer = ProcessRenderer::new();
        let invocation = RenderInvocation::new(
            "definitely-not-an-installed-renderer".to_string(),
            vec!["655.0".to_string()],
        );

        let error = renderer.render(&invocation).unwrap_err();

        assert!(matches!(error, RendererError::Launch { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_exit_without_output_file_is_missing_output() {
        let renderer = ProcessRenderer::new();
        let invocation = RenderInvocation::new(
            "true".to_string(),
            vec![
                "-o".to_string(),
                "/nonexistent-dir/never-written.svg".to_string(),
            ],
        );

        let error = renderer.render(&invocation).unwrap_err();

        assert_eq!(
            error,
            RendererError::MissingOutput {
                path: "/nonexistent-dir/never-written.svg".into(),
            }
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_reports_status() {
        let renderer = ProcessRenderer::new();
        let invocation = RenderInvocation::new("false".to_string(), Vec::new());

        let error = renderer.render(&invocation).unwrap_err();

        assert_eq!(
            error,
            RendererError::Exit {
                program: "false".to_string(),
                code: Some(1),
            }
        );
    }
}
