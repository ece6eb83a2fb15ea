//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes model for lognormal dynamics
//! - Standard normal CDF/PDF used by the formula
//!
//! ## Design Principles
//!
//! - **Validated inputs**: constructors and pricing calls return `Result`
//! - **Numerical Stability**: Uses an erfc-based CDF for tail accuracy

pub mod black_scholes;
pub mod distributions;
pub mod error;

// Re-export main types at module level
pub use black_scholes::{price_black_scholes, BlackScholes};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
