use crate::core::data::parameter_id::ParameterId;
use crate::core::model::ParameterModel;

/// One user-facing representation of a parameter value.
///
/// The editor shows some parameters twice, as a coarse continuous control
/// and a fine stepper. Each representation keeps its own displayed value
/// and an epsilon below which it cannot distinguish two values.
pub trait ControlEndpoint {
    fn displayed(&self) -> f64;
    fn set_displayed(&mut self, value: f64);
    fn epsilon(&self) -> f64;
}

/// Plain endpoint backing a widget's displayed value.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayValue {
    pub value: f64,
    epsilon: f64,
}

impl DisplayValue {
    #[must_use]
    pub fn new(value: f64, epsilon: f64) -> Self {
        Self { value, epsilon }
    }
}

impl ControlEndpoint for DisplayValue {
    fn displayed(&self) -> f64 {
        self.value
    }

    fn set_displayed(&mut self, value: f64) {
        self.value = value;
    }

    fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

/// Keeps the two representations of one parameter from diverging without
/// feedback loops.
///
/// Every update flows through [`ParameterModel::set`], so clamping and
/// rounding happen exactly once and both representations agree with the
/// canonical stored value, not merely with each other. A representation is
/// rewritten only when it differs from the stored value by more than its
/// own epsilon; the echo from a representation's own change handler
/// therefore never re-triggers the side that just wrote to it.
pub struct LinkedControlPair<C: ControlEndpoint, F: ControlEndpoint> {
    id: ParameterId,
    coarse: C,
    fine: F,
}

impl LinkedControlPair<DisplayValue, DisplayValue> {
    /// A pair of plain endpoints seeded from the model: a coarse side that
    /// resolves whole steps and a fine side that resolves the parameter's
    /// full precision.
    #[must_use]
    pub fn for_parameter(model: &ParameterModel, id: ParameterId) -> Self {
        let parameter = model.parameter(id);
        let value = parameter.value();

        Self::new(
            id,
            DisplayValue::new(value, parameter.step() / 2.0),
            DisplayValue::new(value, parameter.epsilon()),
        )
    }
}

impl<C: ControlEndpoint, F: ControlEndpoint> LinkedControlPair<C, F> {
    #[must_use]
    pub fn new(id: ParameterId, coarse: C, fine: F) -> Self {
        Self { id, coarse, fine }
    }

    #[must_use]
    pub fn id(&self) -> ParameterId {
        self.id
    }

    #[must_use]
    pub fn coarse(&self) -> &C {
        &self.coarse
    }

    #[must_use]
    pub fn coarse_mut(&mut self) -> &mut C {
        &mut self.coarse
    }

    #[must_use]
    pub fn fine(&self) -> &F {
        &self.fine
    }

    #[must_use]
    pub fn fine_mut(&mut self) -> &mut F {
        &mut self.fine
    }

    /// The user edited the coarse representation. Returns whether the
    /// stored parameter value changed, i.e. whether a preview refresh is
    /// due for this edit.
    pub fn on_coarse_changed(&mut self, model: &mut ParameterModel, value: f64) -> bool {
        self.apply(model, value)
    }

    /// The user edited the fine representation; symmetric to
    /// [`Self::on_coarse_changed`].
    pub fn on_fine_changed(&mut self, model: &mut ParameterModel, value: f64) -> bool {
        self.apply(model, value)
    }

    fn apply(&mut self, model: &mut ParameterModel, value: f64) -> bool {
        let changed = model.set(self.id, value);
        let stored = model.get(self.id);

        if (self.coarse.displayed() - stored).abs() > self.coarse.epsilon() {
            self.coarse.set_displayed(stored);
        }
        if (self.fine.displayed() - stored).abs() > self.fine.epsilon() {
            self.fine.set_displayed(stored);
        }

        changed
    }
}
