//! Demo command
//!
//! Prices the sample contract (S = 100, K = 100, r = 5%, T = 1y, σ = 20%,
//! call) with the closed form and with a 100-step lattice.

use pricer_models::lattice::LatticeScheme;
use tracing::info;

use crate::config::QuoteDefaults;
use crate::Result;

/// Lattice depth used by the demo.
pub const DEMO_STEPS: usize = 100;

/// Runs both sample calculations.
pub fn run() -> Result<()> {
    let quote = QuoteDefaults::default().to_quote()?;

    info!("[Demo] Black-Scholes closed form");
    super::black_scholes::run(&quote)?;

    info!("[Demo] Binomial lattice, {} steps", DEMO_STEPS);
    super::binomial::run(&quote, DEMO_STEPS, LatticeScheme::FirstOrder)?;

    Ok(())
}
