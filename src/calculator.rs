//! Pluggable calculator strategies.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A binary numeric operation installed on the device.
///
/// `Scientific` multiplies. The name is historical and the behavior is
/// kept as is.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Calculator {
    /// Adds the operands.
    #[strum(to_string = "Basic Calculator")]
    Basic,
    /// Multiplies the operands.
    #[strum(to_string = "Scientific Calculator")]
    Scientific,
}

impl Calculator {
    /// Applies the operation. Total over finite inputs.
    #[instrument]
    pub fn calculate(self, a: f64, b: f64) -> f64 {
        match self {
            Calculator::Basic => a + b,
            Calculator::Scientific => a * b,
        }
    }

    /// Maps a 1-based menu selection to a calculator.
    #[instrument]
    pub fn from_menu_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(Calculator::Basic),
            2 => Some(Calculator::Scientific),
            _ => None,
        }
    }
}

/// One entry in the device's calculation log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
pub struct CalculationResult {
    /// Free-form label supplied by the user.
    #[new(into)]
    description: String,
    /// Computed value, or the 0.0 sentinel when no calculator was installed.
    value: f64,
}

impl std::fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Description: {}\nResult: {}", self.description, self.value)
    }
}
