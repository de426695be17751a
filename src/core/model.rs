use crate::core::data::parameter::Parameter;
use crate::core::data::parameter_id::ParameterId;

/// Single source of truth for every renderer-relevant parameter.
///
/// Created once at startup with the documented defaults and mutated in
/// place for the life of the session. All writes go through [`Self::set`],
/// which clamps and rounds at this boundary so no other component ever
/// sees an out-of-range value.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterModel {
    parameters: Vec<Parameter>,
    multiscale_enabled: bool,
    save_path: String,
    viewer_command: String,
    use_viewer: bool,
}

impl Default for ParameterModel {
    fn default() -> Self {
        let parameters = vec![
            Parameter::new(ParameterId::ScaleLength, 655.0, 100.0, 1000.0, 0.1, 1),
            Parameter::new(ParameterId::MultiscaleLength, 610.0, 100.0, 1000.0, 0.1, 1),
            Parameter::new(ParameterId::FretCount, 24.0, 8.0, 36.0, 1.0, 0),
            Parameter::new(ParameterId::PerpendicularFret, 8.0, 1.0, 12.0, 1.0, 0),
            Parameter::new(ParameterId::NutWidth, 43.0, 20.0, 100.0, 0.1, 1),
            Parameter::new(ParameterId::BridgeSpacing, 56.0, 20.0, 100.0, 0.1, 1),
            Parameter::new(ParameterId::Border, 10.0, 0.0, 20.0, 1.0, 0),
        ];

        debug_assert_eq!(parameters.len(), ParameterId::ALL.len());

        Self {
            parameters,
            multiscale_enabled: false,
            save_path: "output.svg".to_string(),
            viewer_command: "inkscape".to_string(),
            use_viewer: false,
        }
    }
}

impl ParameterModel {
    /// Writes `value` to the parameter, clamped and rounded, and reports
    /// whether the stored value changed.
    pub fn set(&mut self, id: ParameterId, value: f64) -> bool {
        self.parameter_mut(id).set(value)
    }

    #[must_use]
    pub fn get(&self, id: ParameterId) -> f64 {
        self.parameter(id).value()
    }

    #[must_use]
    pub fn parameter(&self, id: ParameterId) -> &Parameter {
        &self.parameters[Self::index(id)]
    }

    fn parameter_mut(&mut self, id: ParameterId) -> &mut Parameter {
        &mut self.parameters[Self::index(id)]
    }

    fn index(id: ParameterId) -> usize {
        match id {
            ParameterId::ScaleLength => 0,
            ParameterId::MultiscaleLength => 1,
            ParameterId::FretCount => 2,
            ParameterId::PerpendicularFret => 3,
            ParameterId::NutWidth => 4,
            ParameterId::BridgeSpacing => 5,
            ParameterId::Border => 6,
        }
    }

    /// Toggles the multiscale flag and reports whether it changed.
    ///
    /// Disabling keeps the secondary length's stored value so re-enabling
    /// restores it; the parameter is only excluded from editing and from
    /// built invocations while disabled.
    pub fn set_multiscale_enabled(&mut self, enabled: bool) -> bool {
        let changed = self.multiscale_enabled != enabled;
        self.multiscale_enabled = enabled;
        changed
    }

    #[must_use]
    pub fn multiscale_enabled(&self) -> bool {
        self.multiscale_enabled
    }

    /// Whether the parameter is currently user-editable.
    #[must_use]
    pub fn is_editable(&self, id: ParameterId) -> bool {
        match id {
            ParameterId::MultiscaleLength => self.multiscale_enabled,
            _ => true,
        }
    }

    #[must_use]
    pub fn save_path(&self) -> &str {
        &self.save_path
    }

    pub fn set_save_path(&mut self, path: impl Into<String>) {
        self.save_path = path.into();
    }

    #[must_use]
    pub fn viewer_command(&self) -> &str {
        &self.viewer_command
    }

    pub fn set_viewer_command(&mut self, command: impl Into<String>) {
        self.viewer_command = command.into();
    }

    #[must_use]
    pub fn use_viewer(&self) -> bool {
        self.use_viewer
    }

    pub fn set_use_viewer(&mut self, enabled: bool) {
        self.use_viewer = enabled;
    }

    /// Whether both states derive the same preview invocation.
    ///
    /// The save path and viewer settings only affect save-mode
    /// invocations, so editing them must not count as a preview change.
    #[must_use]
    pub fn same_preview_state(&self, other: &Self) -> bool {
        self.parameters == other.parameters && self.multiscale_enabled == other.multiscale_enabled
    }
}
