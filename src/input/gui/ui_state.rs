use crate::core::data::parameter_id::ParameterId;
use crate::core::linked_pair::{DisplayValue, LinkedControlPair};
use crate::core::model::ParameterModel;

/// Mutable state behind the control panel.
///
/// Holds the parameter model, the two linked control pairs, and the text
/// buffers the path/viewer fields edit. Submission is diff-based: after
/// each frame the preview-relevant state is compared against the last
/// submitted snapshot, so a settled edit triggers exactly one refresh no
/// matter how many widgets it rippled through, and edits to the save path
/// or viewer fields trigger none at all.
pub struct GuiAppState {
    pub model: ParameterModel,
    pub scale_pair: LinkedControlPair<DisplayValue, DisplayValue>,
    pub multiscale_pair: LinkedControlPair<DisplayValue, DisplayValue>,
    pub save_path_input: String,
    pub viewer_input: String,
    pub status_line: Option<String>,
    last_submitted_model: Option<ParameterModel>,
}

impl Default for GuiAppState {
    fn default() -> Self {
        let model = ParameterModel::default();
        let scale_pair = LinkedControlPair::for_parameter(&model, ParameterId::ScaleLength);
        let multiscale_pair =
            LinkedControlPair::for_parameter(&model, ParameterId::MultiscaleLength);
        let save_path_input = model.save_path().to_string();
        let viewer_input = model.viewer_command().to_string();

        Self {
            model,
            scale_pair,
            multiscale_pair,
            save_path_input,
            viewer_input,
            status_line: None,
            last_submitted_model: None,
        }
    }
}

impl GuiAppState {
    /// Whether the preview-relevant state drifted from the last submitted
    /// snapshot.
    #[must_use]
    pub fn should_submit(&self) -> bool {
        self.last_submitted_model
            .as_ref()
            .is_none_or(|last| !last.same_preview_state(&self.model))
    }

    pub fn record_submission(&mut self) {
        self.last_submitted_model = Some(self.model.clone());
    }
}
