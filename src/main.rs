use std::sync::Arc;

use fretboard_editor::{ExportAction, ParameterModel, ProcessRenderer, RendererConfig};

/// Headless one-shot: render the default layout into its save path.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let model = ParameterModel::default();
    let renderer = Arc::new(ProcessRenderer::new());
    let export = ExportAction::new(RendererConfig::default(), renderer);

    let destination = export.save(&model)?;
    println!("wrote {}", destination.display());

    Ok(())
}
