//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod binomial;
pub mod black_scholes;
pub mod compare;
pub mod demo;

use clap::Args;
use pricer_core::types::{OptionQuote, OptionType};

use crate::config::QuoteDefaults;
use crate::Result;

/// Contract flags shared by the pricing commands.
///
/// Omitted flags are filled from the config's `[defaults]` section.
#[derive(Debug, Clone, Default, Args)]
pub struct QuoteArgs {
    /// Current price of the underlying
    #[arg(short, long)]
    pub spot: Option<f64>,

    /// Strike price
    #[arg(short = 'k', long)]
    pub strike: Option<f64>,

    /// Continuously compounded risk-free rate
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: Option<f64>,

    /// Time to expiry in years
    #[arg(short = 't', long)]
    pub expiry: Option<f64>,

    /// Annualised volatility
    #[arg(long)]
    pub volatility: Option<f64>,

    /// Option type (call or put)
    #[arg(short, long)]
    pub option_type: Option<String>,
}

impl QuoteArgs {
    /// Merges the flags over `defaults` and validates the result.
    pub fn resolve(&self, defaults: &QuoteDefaults) -> Result<OptionQuote> {
        let option_type = match &self.option_type {
            Some(name) => name.parse::<OptionType>()?,
            None => defaults.option_type,
        };

        Ok(OptionQuote::new(
            self.spot.unwrap_or(defaults.spot),
            self.strike.unwrap_or(defaults.strike),
            self.rate.unwrap_or(defaults.rate),
            self.expiry.unwrap_or(defaults.expiry),
            self.volatility.unwrap_or(defaults.volatility),
            option_type,
        )?)
    }
}

/// Result line printed by the pricing commands.
pub fn price_line(option_type: OptionType, price: f64) -> String {
    format!("The {} option price is: {:.2}", option_type.label(), price)
}
