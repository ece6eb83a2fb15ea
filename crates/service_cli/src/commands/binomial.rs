//! Binomial command implementation
//!
//! Prices a single contract on a recombining lattice.

use pricer_core::types::{OptionQuote, PricingError};
use pricer_models::lattice::{BinomialTree, LatticeScheme};
use tracing::{debug, info};

use super::price_line;
use crate::Result;

/// Lattice price of `quote` with `steps` steps.
pub fn price(quote: &OptionQuote, steps: usize, scheme: LatticeScheme) -> Result<f64> {
    let tree = BinomialTree::with_scheme(steps, scheme).map_err(PricingError::from)?;
    let factors = tree.factors(quote).map_err(PricingError::from)?;
    debug!(
        "Lattice factors: u = {}, d = {}, p = {}",
        factors.up(),
        factors.down(),
        factors.probability()
    );
    Ok(tree.price_quote(quote).map_err(PricingError::from)?)
}

/// Run the binomial command
pub fn run(quote: &OptionQuote, steps: usize, scheme: LatticeScheme) -> Result<()> {
    info!("Pricing on a {} lattice with {} steps", scheme, steps);

    let value = price(quote, steps, scheme)?;
    println!("{}", price_line(quote.option_type(), value));
    Ok(())
}
