//! Cross-check of the lattice against the closed form.
//!
//! Prices one quote with Black-Scholes and with binomial trees of
//! increasing depth, recording the absolute gap at each step count.

use pricer_core::types::{OptionQuote, PricingError};

use crate::analytical::BlackScholes;
use crate::lattice::{BinomialTree, LatticeScheme};

/// Step counts used when the caller does not supply any.
pub const DEFAULT_STEP_LADDER: [usize; 4] = [1, 10, 100, 1000];

/// Lattice result at one step count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergencePoint {
    /// Number of lattice steps.
    pub steps: usize,
    /// Lattice price.
    pub lattice_price: f64,
    /// |lattice price - closed-form price|.
    pub abs_error: f64,
}

/// Closed-form reference and the lattice prices compared against it.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceReport {
    /// Black-Scholes price of the quote.
    pub reference_price: f64,
    /// Lattice parameterisation used for every point.
    pub scheme: LatticeScheme,
    /// One entry per requested step count, in request order.
    pub points: Vec<ConvergencePoint>,
}

impl ConvergenceReport {
    /// Largest absolute error across all points.
    pub fn max_abs_error(&self) -> f64 {
        self.points
            .iter()
            .map(|point| point.abs_error)
            .fold(0.0, f64::max)
    }

    /// Absolute error of the last point, if any.
    pub fn final_abs_error(&self) -> Option<f64> {
        self.points.last().map(|point| point.abs_error)
    }
}

/// Prices `quote` with the closed form and with a lattice per step count.
///
/// # Errors
/// - `PricingError::InvalidArgument` if `steps` is empty or contains 0
/// - any error from either pricer, converted into `PricingError`
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionQuote, OptionType};
/// use pricer_models::convergence::{convergence_profile, DEFAULT_STEP_LADDER};
/// use pricer_models::lattice::LatticeScheme;
///
/// let quote = OptionQuote::new(100.0, 100.0, 0.05, 1.0, 0.2, OptionType::Call).unwrap();
/// let report = convergence_profile(&quote, &DEFAULT_STEP_LADDER, LatticeScheme::FirstOrder).unwrap();
/// assert_eq!(report.points.len(), 4);
/// assert!(report.final_abs_error().unwrap() < report.points[0].abs_error);
/// ```
pub fn convergence_profile(
    quote: &OptionQuote,
    steps: &[usize],
    scheme: LatticeScheme,
) -> Result<ConvergenceReport, PricingError> {
    if steps.is_empty() {
        return Err(PricingError::InvalidArgument(
            "at least one step count is required".to_string(),
        ));
    }

    let reference_price = BlackScholes::price_quote(quote)?;

    let points = steps
        .iter()
        .map(|&n| {
            let lattice_price = BinomialTree::with_scheme(n, scheme)?.price_quote(quote)?;
            Ok(ConvergencePoint {
                steps: n,
                lattice_price,
                abs_error: (lattice_price - reference_price).abs(),
            })
        })
        .collect::<Result<Vec<_>, PricingError>>()?;

    Ok(ConvergenceReport {
        reference_price,
        scheme,
        points,
    })
}
