//! # pricer_core: Foundation Types for Vanilla Option Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - The call/put enum with string parsing (`types::option_type`)
//! - The validated quote request shared by all pricers (`types::quote`)
//! - The error taxonomy: `PricingError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{OptionQuote, OptionType, PricingError};
//!
//! let option_type: OptionType = "call".parse().unwrap();
//! let quote = OptionQuote::new(100.0, 105.0, 0.03, 0.5, 0.25, option_type).unwrap();
//! assert_eq!(quote.strike(), 105.0);
//!
//! let err = "straddle".parse::<OptionType>().unwrap_err();
//! assert!(matches!(err, PricingError::InvalidArgument(_)));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `OptionType`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
