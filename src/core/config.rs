use std::path::PathBuf;

/// Injected configuration for the external layout renderer.
///
/// The preview path is a single well-known location reused for every
/// preview render of a session; it is configuration rather than a
/// hardcoded constant so tests can point it at an isolated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererConfig {
    pub program: String,
    pub preview_path: PathBuf,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            program: "fblt".to_string(),
            preview_path: std::env::temp_dir().join("fretboard-preview.svg"),
        }
    }
}
