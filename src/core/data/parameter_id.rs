use std::fmt;

/// Identifier for every renderer-relevant scalar parameter.
///
/// A closed enum rather than a string key: an invalid identifier is
/// unrepresentable, so parameter lookup can never fail at runtime.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ParameterId {
    ScaleLength,
    MultiscaleLength,
    FretCount,
    PerpendicularFret,
    NutWidth,
    BridgeSpacing,
    Border,
}

impl ParameterId {
    /// All parameters, in the order the model stores them.
    pub const ALL: &'static [ParameterId] = &[
        Self::ScaleLength,
        Self::MultiscaleLength,
        Self::FretCount,
        Self::PerpendicularFret,
        Self::NutWidth,
        Self::BridgeSpacing,
        Self::Border,
    ];

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ScaleLength => "Scale Length",
            Self::MultiscaleLength => "Multiscale Length",
            Self::FretCount => "Fret Count",
            Self::PerpendicularFret => "Perpendicular Fret",
            Self::NutWidth => "Nut Width",
            Self::BridgeSpacing => "Bridge Spacing",
            Self::Border => "Border",
        }
    }
}

impl fmt::Display for ParameterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_lists_every_parameter_once() {
        assert_eq!(ParameterId::ALL.len(), 7);

        for (i, a) in ParameterId::ALL.iter().enumerate() {
            for b in &ParameterId::ALL[i + 1..] {
                assert_ne!(a, b, "duplicate parameter id in ALL");
            }
        }
    }

    #[test]
    fn test_display_names_are_unique() {
        for (i, a) in ParameterId::ALL.iter().enumerate() {
            for b in &ParameterId::ALL[i + 1..] {
                assert_ne!(a.display_name(), b.display_name());
            }
        }
    }
}
