//! # Pricer Models (L2: Business Logic)
//!
//! European vanilla option pricers on a non-dividend-paying underlying.
//!
//! This crate provides:
//! - Closed-form Black-Scholes pricing (`analytical`)
//! - Binomial lattice pricing by backward induction (`lattice`)
//! - Lattice-versus-closed-form convergence reports (`convergence`)
//!
//! The two pricers are independent leaves; both are pure functions of
//! their inputs and safe to call from any thread.
//!
//! ```
//! use pricer_core::types::OptionType;
//! use pricer_models::{price_binomial, price_black_scholes};
//!
//! let closed = price_black_scholes(100.0, 100.0, 0.05, 1.0, 0.2, OptionType::Call).unwrap();
//! let lattice = price_binomial(100.0, 100.0, 0.05, 1.0, 0.2, 1000, OptionType::Call).unwrap();
//! assert!((closed - lattice).abs() < 0.05);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod convergence;
pub mod lattice;

pub use analytical::price_black_scholes;
pub use lattice::price_binomial;
