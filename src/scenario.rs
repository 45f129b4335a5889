//! Closed-form scenario target functions
//!
//! Each scenario maps 1-3 input features to a ground-truth target value
//! and is used to generate synthetic evaluation data. All six are pure
//! math with no error paths; inputs are expected to be positive (the
//! log/root terms are otherwise non-finite, which the metric layer
//! propagates rather than guards).

use serde::{Deserialize, Serialize};

/// A named synthetic ground-truth function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scenario {
    /// `ln(x) + 3`
    A,
    /// `3 + sqrt(x) + ln(x)`
    B,
    /// `0.1*x1 + 0.1*x2 + 0.3*(x1*x2)^(1/2)`
    C,
    /// `0.1*x1 + 0.1*x2 + 0.1*x3 + 0.3*(x1*x2*x3)^(1/3)`
    D,
    /// `0.1*x1 + 0.1*x2 + 0.3*(x1*x2)^(1/3)`
    E,
    /// `0.1*x1 + 0.1*x2 + 0.1*x3 + 0.3*(x1*x2*x3)^(1/4)`
    F,
}

impl Scenario {
    /// All scenarios, in sweep order.
    pub const ALL: [Self; 6] = [Self::A, Self::B, Self::C, Self::D, Self::E, Self::F];

    /// Number of input features the scenario consumes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::A | Self::B => 1,
            Self::C | Self::E => 2,
            Self::D | Self::F => 3,
        }
    }

    /// The token used in report file names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::A => "scenario_a",
            Self::B => "scenario_b",
            Self::C => "scenario_c",
            Self::D => "scenario_d",
            Self::E => "scenario_e",
            Self::F => "scenario_f",
        }
    }

    /// Ground-truth target for one observation.
    ///
    /// # Panics
    ///
    /// Panics if `x.len() != self.arity()`.
    #[must_use]
    pub fn target(self, x: &[f64]) -> f64 {
        assert_eq!(
            x.len(),
            self.arity(),
            "{} takes {} features",
            self.name(),
            self.arity()
        );
        match self {
            Self::A => x[0].ln() + 3.0,
            Self::B => 3.0 + x[0].sqrt() + x[0].ln(),
            Self::C => 0.1 * x[0] + 0.1 * x[1] + 0.3 * (x[0] * x[1]).sqrt(),
            Self::D => {
                0.1 * x[0] + 0.1 * x[1] + 0.1 * x[2] + 0.3 * (x[0] * x[1] * x[2]).cbrt()
            }
            Self::E => 0.1 * x[0] + 0.1 * x[1] + 0.3 * (x[0] * x[1]).cbrt(),
            Self::F => {
                0.1 * x[0] + 0.1 * x[1] + 0.1 * x[2] + 0.3 * (x[0] * x[1] * x[2]).powf(0.25)
            }
        }
    }
}
