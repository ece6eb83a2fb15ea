//! Black-Scholes command implementation
//!
//! Prices a single contract with the closed form.

use pricer_core::types::{OptionQuote, PricingError};
use pricer_models::analytical::BlackScholes;
use tracing::{debug, info};

use super::price_line;
use crate::Result;

/// Run the black-scholes command
pub fn run(quote: &OptionQuote) -> Result<()> {
    info!("Pricing with Black-Scholes closed form");
    debug!("Quote: {:?}", quote);

    let price = BlackScholes::price_quote(quote).map_err(PricingError::from)?;
    debug!("Unrounded price: {}", price);

    println!("{}", price_line(quote.option_type(), price));
    Ok(())
}
