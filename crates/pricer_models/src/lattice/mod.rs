//! Binomial lattice pricing for European options.
//!
//! This module provides:
//! - `BinomialTree`: recombining tree priced by backward induction
//! - `LatticeFactors`: per-step up/down factors, probability and discount
//! - `LatticeScheme`: first-order (default) or Cox-Ross-Rubinstein factors
//! - `LatticeError`: lattice-specific failures
//!
//! ## Design Principles
//!
//! - **Rolling layer**: only the current layer is kept, O(n) memory
//! - **No silent nonsense**: factors with `u == d`, `d <= 0` or `p ∉ [0, 1]`
//!   are rejected before any induction runs

pub mod binomial;
pub mod error;

pub use binomial::{price_binomial, BinomialTree, LatticeFactors, LatticeScheme, MAX_STEPS};
pub use error::LatticeError;
