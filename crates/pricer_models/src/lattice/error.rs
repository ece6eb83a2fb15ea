//! Lattice pricing error types.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Binomial lattice errors.
///
/// # Variants
/// - `InvalidSteps`: step count below one (or too large to index)
/// - `UnknownScheme`: unrecognised lattice parameterisation name
/// - `DegenerateFactors`: up and down factors coincide (u - d is not positive)
/// - `NonPositiveDownFactor`: the down move would produce non-positive prices
/// - `ProbabilityOutOfRange`: risk-neutral probability outside [0, 1]
/// - `NonFiniteValue`: backward induction produced NaN or infinity
///
/// # Examples
/// ```
/// use pricer_models::lattice::LatticeError;
///
/// let err = LatticeError::ProbabilityOutOfRange { probability: 1.2 };
/// assert!(format!("{}", err).contains("1.2"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LatticeError {
    /// Step count outside the supported range.
    #[error("Invalid step count: n = {steps} (must be between 1 and {max})")]
    InvalidSteps {
        /// The rejected step count
        steps: usize,
        /// Largest supported step count
        max: usize,
    },

    /// Unrecognised scheme name.
    #[error("Unknown lattice scheme: '{name}'. Use 'first-order' or 'crr'")]
    UnknownScheme {
        /// The rejected name
        name: String,
    },

    /// Up and down factors are equal, so p = (e^(r·dt) - d) / (u - d) divides by zero.
    #[error("Degenerate lattice factors: u = {up}, d = {down}")]
    DegenerateFactors {
        /// Up factor
        up: f64,
        /// Down factor
        down: f64,
    },

    /// Down factor is not positive.
    #[error("Non-positive down factor: d = {down}")]
    NonPositiveDownFactor {
        /// Down factor
        down: f64,
    },

    /// Risk-neutral up probability is not a probability.
    #[error("Risk-neutral probability outside [0, 1]: p = {probability}")]
    ProbabilityOutOfRange {
        /// The computed probability
        probability: f64,
    },

    /// Backward induction produced a non-finite value.
    #[error("Non-finite lattice value: {message}")]
    NonFiniteValue {
        /// Description of where the value appeared
        message: String,
    },
}

impl From<LatticeError> for PricingError {
    fn from(err: LatticeError) -> Self {
        match err {
            LatticeError::InvalidSteps { .. } | LatticeError::UnknownScheme { .. } => {
                PricingError::InvalidArgument(err.to_string())
            }
            LatticeError::DegenerateFactors { .. }
            | LatticeError::NonPositiveDownFactor { .. }
            | LatticeError::ProbabilityOutOfRange { .. }
            | LatticeError::NonFiniteValue { .. } => {
                PricingError::NumericDegeneracy(err.to_string())
            }
        }
    }
}
