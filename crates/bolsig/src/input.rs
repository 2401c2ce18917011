//! Solver input generation from a reference template

// external crates
use log::warn;
use serde::Serialize;

/// Gas mixture as mole fractions
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Mixture {
    /// Argon fraction
    pub argon: f64,
    /// Nitrogen (N2) fraction
    pub nitrogen: f64,
}

impl std::fmt::Display for Mixture {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Ar {} / N2 {}", self.argon, self.nitrogen)
    }
}

/// Everything that changes between solver runs
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Conditions {
    /// Gas temperature (K)
    pub gas_temperature: f64,
    /// Reduced electric field E/N (Td)
    pub reduced_field: f64,
    /// Gas composition
    pub mixture: Mixture,
}

/// Template placeholders, in the order they are substituted
const PLACEHOLDERS: [&str; 4] = ["ReducedElectricField", "GasTemp", "ArRat", "NRat"];

/// Fill in a reference input template
///
/// Every occurrence of the placeholders `ReducedElectricField`, `GasTemp`,
/// `ArRat`, and `NRat` is replaced with the corresponding value. A warning is
/// logged for any placeholder missing from the template.
///
/// ```rust
/// # use nphys_bolsig::{render_input, Conditions, Mixture};
/// let conditions = Conditions {
///     gas_temperature: 293.0,
///     reduced_field: 0.1,
///     mixture: Mixture { argon: 0.999, nitrogen: 0.001 },
/// };
///
/// let input = render_input("ReducedElectricField / GasTemp / ArRat NRat", &conditions);
/// assert_eq!(input, "0.1 / 293 / 0.999 0.001");
/// ```
pub fn render_input(template: &str, conditions: &Conditions) -> String {
    let values = [
        conditions.reduced_field,
        conditions.gas_temperature,
        conditions.mixture.argon,
        conditions.mixture.nitrogen,
    ];

    let mut input = template.to_string();
    for (placeholder, value) in PLACEHOLDERS.iter().zip(values) {
        if !input.contains(placeholder) {
            warn!("Placeholder \"{placeholder}\" not found in input template");
        }
        input = input.replace(placeholder, &value.to_string());
    }

    input
}
