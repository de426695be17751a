use crate::core::config::RendererConfig;
use crate::core::data::invocation::{OutputMode, RenderInvocation};
use crate::core::data::parameter_id::ParameterId;
use crate::core::model::ParameterModel;

/// Derives the ordered argument list for the external layout renderer from
/// the current parameter state.
///
/// `build` is pure: identical model state always yields the identical token
/// sequence, and the token order is fixed by the renderer's positional and
/// flag conventions:
///
/// `<program> <scale> [-m <scale2>] -n <nut> -b <bridge> -p <perp>
/// -B <border> -c <frets> -o <output> [-e <viewer>]`
pub struct CommandBuilder {
    config: RendererConfig,
}

impl CommandBuilder {
    #[must_use]
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    #[must_use]
    pub fn build(&self, model: &ParameterModel, mode: OutputMode) -> RenderInvocation {
        let mut args = Vec::new();

        args.push(model.parameter(ParameterId::ScaleLength).format_value());

        if model.multiscale_enabled() {
            args.push("-m".to_string());
            args.push(model.parameter(ParameterId::MultiscaleLength).format_value());
        }

        args.push("-n".to_string());
        args.push(model.parameter(ParameterId::NutWidth).format_value());
        args.push("-b".to_string());
        args.push(model.parameter(ParameterId::BridgeSpacing).format_value());
        args.push("-p".to_string());
        args.push(model.parameter(ParameterId::PerpendicularFret).format_value());
        args.push("-B".to_string());
        args.push(model.parameter(ParameterId::Border).format_value());
        args.push("-c".to_string());
        args.push(model.parameter(ParameterId::FretCount).format_value());

        args.push("-o".to_string());
        match mode {
            OutputMode::Preview => {
                args.push(self.config.preview_path.display().to_string());
            }
            OutputMode::Save => {
                args.push(model.save_path().to_string());

                if model.use_viewer() {
                    args.push("-e".to_string());
                    args.push(model.viewer_command().to_string());
                }
            }
        }

        RenderInvocation::new(self.config.program.clone(), args)
    }
}
