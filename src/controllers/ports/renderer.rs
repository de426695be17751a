use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use crate::core::data::invocation::RenderInvocation;

/// Capability interface over the external layout renderer.
///
/// Executing an invocation is the only side effect the controllers need;
/// tests substitute a fake that records invocations instead of spawning a
/// process.
pub trait RendererPort: Send + Sync {
    fn render(&self, invocation: &RenderInvocation) -> Result<(), RendererError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RendererError {
    /// The renderer process could not be started at all.
    Launch { program: String, message: String },
    /// The renderer ran but reported failure.
    Exit { program: String, code: Option<i32> },
    /// The renderer reported success but the output file is not readable.
    MissingOutput { path: PathBuf },
}

impl fmt::Display for RendererError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Launch { program, message } => {
                write!(f, "failed to launch renderer '{program}': {message}")
            }
            Self::Exit { program, code } => match code {
                Some(code) => write!(f, "renderer '{program}' exited with status {code}"),
                None => write!(f, "renderer '{program}' was terminated by a signal"),
            },
            Self::MissingOutput { path } => {
                write!(f, "renderer produced no output at {}", path.display())
            }
        }
    }
}

impl Error for RendererError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_program() {
        let error = RendererError::Exit {
            program: "fblt".to_string(),
            code: Some(2),
        };

        assert_eq!(error.to_string(), "renderer 'fblt' exited with status 2");
    }

    #[test]
    fn test_display_for_missing_output_names_the_path() {
        let error = RendererError::MissingOutput {
            path: PathBuf::from("/tmp/preview.svg"),
        };

        assert!(error.to_string().contains("/tmp/preview.svg"));
    }
}
