use crate::core::data::parameter_id::ParameterId;

/// A named scalar with a valid range, step granularity and display precision.
///
/// The stored value is always inside `[min, max]` and rounded to `precision`
/// decimal digits; out-of-range writes are clamped, never stored unclamped.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    id: ParameterId,
    value: f64,
    min: f64,
    max: f64,
    step: f64,
    precision: u8,
}

impl Parameter {
    #[must_use]
    pub fn new(id: ParameterId, default: f64, min: f64, max: f64, step: f64, precision: u8) -> Self {
        let mut parameter = Self {
            id,
            value: default,
            min,
            max,
            step,
            precision,
        };
        // The default goes through the same clamp/round path as any write.
        parameter.set(default);
        parameter
    }

    /// Clamps `value` into `[min, max]`, rounds it to `precision` digits,
    /// stores it, and reports whether the stored value changed.
    pub fn set(&mut self, value: f64) -> bool {
        let clamped = value.clamp(self.min, self.max);
        let rounded = round_to_precision(clamped, self.precision);

        let changed = rounded != self.value;
        self.value = rounded;
        changed
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn id(&self) -> ParameterId {
        self.id
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Decimal digits the value is rounded to; zero for integer parameters.
    #[must_use]
    pub fn precision(&self) -> u8 {
        self.precision
    }

    /// Half of the smallest representable increment at this precision.
    ///
    /// Two values closer than this are indistinguishable once rounded, which
    /// is what lets linked representations break propagation cycles.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        10f64.powi(-i32::from(self.precision)) / 2.0
    }

    /// The stored value formatted with exactly `precision` decimal digits.
    #[must_use]
    pub fn format_value(&self) -> String {
        format!("{:.*}", usize::from(self.precision), self.value)
    }
}

fn round_to_precision(value: f64, precision: u8) -> f64 {
    let factor = 10f64.powi(i32::from(precision));
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale_parameter() -> Parameter {
        Parameter::new(ParameterId::ScaleLength, 655.0, 100.0, 1000.0, 0.1, 1)
    }

    #[test]
    fn test_set_clamps_below_min_to_min() {
        let mut parameter = scale_parameter();

        parameter.set(50.0);

        assert_eq!(parameter.value(), 100.0);
    }

    #[test]
    fn test_set_clamps_above_max_to_max() {
        let mut parameter = scale_parameter();

        parameter.set(2500.0);

        assert_eq!(parameter.value(), 1000.0);
    }

    #[test]
    fn test_set_rounds_to_precision() {
        let mut parameter = scale_parameter();

        parameter.set(650.04);
        assert_eq!(parameter.value(), 650.0);

        parameter.set(650.06);
        assert_eq!(parameter.value(), 650.1);
    }

    #[test]
    fn test_set_reports_whether_value_changed() {
        let mut parameter = scale_parameter();

        assert!(parameter.set(650.0));
        assert!(!parameter.set(650.0));
        // Sub-precision writes round back to the stored value.
        assert!(!parameter.set(650.04));
    }

    #[test]
    fn test_default_is_clamped_and_rounded() {
        let parameter = Parameter::new(ParameterId::Border, 99.0, 0.0, 20.0, 1.0, 0);

        assert_eq!(parameter.value(), 20.0);
    }

    #[test]
    fn test_format_value_uses_precision() {
        let mut parameter = scale_parameter();
        parameter.set(650.0);
        assert_eq!(parameter.format_value(), "650.0");

        let integer = Parameter::new(ParameterId::FretCount, 24.0, 8.0, 36.0, 1.0, 0);
        assert_eq!(integer.format_value(), "24");
    }

    #[test]
    fn test_integer_parameter_rounds_fractional_writes() {
        let mut parameter = Parameter::new(ParameterId::FretCount, 24.0, 8.0, 36.0, 1.0, 0);

        parameter.set(21.7);

        assert_eq!(parameter.value(), 22.0);
    }
}
