//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: the error taxonomy shared by every pricer in the workspace

use thiserror::Error;

/// Categorised pricing errors.
///
/// Every pricing entry point reports failures through this type. Model-level
/// errors (closed form, lattice) convert into it via `From`.
///
/// # Variants
/// - `InvalidArgument`: out-of-domain input (non-positive spot, strike,
///   expiry or volatility, zero lattice steps, unknown option type)
/// - `NumericDegeneracy`: the computation would divide by zero or produce a
///   meaningless value (e.g. equal lattice factors, probability outside [0, 1])
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidArgument("spot must be positive".to_string());
/// assert_eq!(format!("{}", err), "Invalid argument: spot must be positive");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Input outside the domain of the pricer.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Computation is numerically degenerate for the given inputs.
    #[error("Numeric degeneracy: {0}")]
    NumericDegeneracy(String),
}

impl PricingError {
    /// Builds an `InvalidArgument` error for a named parameter.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::PricingError;
    ///
    /// let err = PricingError::invalid_parameter("spot", -1.0, "must be positive");
    /// assert_eq!(format!("{}", err), "Invalid argument: spot = -1 (must be positive)");
    /// ```
    pub fn invalid_parameter(name: &str, value: f64, reason: &str) -> Self {
        PricingError::InvalidArgument(format!("{} = {} ({})", name, value, reason))
    }

    /// Returns true for `InvalidArgument`.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, PricingError::InvalidArgument(_))
    }

    /// Returns true for `NumericDegeneracy`.
    #[inline]
    pub fn is_numeric_degeneracy(&self) -> bool {
        matches!(self, PricingError::NumericDegeneracy(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = PricingError::InvalidArgument("steps must be >= 1".to_string());
        assert_eq!(format!("{}", err), "Invalid argument: steps must be >= 1");
    }

    #[test]
    fn test_numeric_degeneracy_display() {
        let err = PricingError::NumericDegeneracy("u == d".to_string());
        assert_eq!(format!("{}", err), "Numeric degeneracy: u == d");
    }

    #[test]
    fn test_invalid_parameter_formatting() {
        let err = PricingError::invalid_parameter("volatility", 0.0, "must be positive");
        assert_eq!(
            format!("{}", err),
            "Invalid argument: volatility = 0 (must be positive)"
        );
        assert!(err.is_invalid_argument());
        assert!(!err.is_numeric_degeneracy());
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::NumericDegeneracy("overflow".to_string());
        let _: &dyn std::error::Error = &err;
        assert!(err.is_numeric_degeneracy());
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = PricingError::InvalidArgument("x".to_string());
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
