//! Core quote and error types.
//!
//! This module provides:
//! - `option_type`: the closed call/put enum with string parsing
//! - `quote`: the validated quote request consumed by every pricer
//! - `error`: the `PricingError` taxonomy
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`OptionType`] from `option_type`
//! - [`OptionQuote`] from `quote`
//! - [`PricingError`] from `error`

pub mod error;
pub mod option_type;
pub mod quote;

// Re-export commonly used types at module level
pub use error::PricingError;
pub use option_type::OptionType;
pub use quote::OptionQuote;
