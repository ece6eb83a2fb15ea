//! Black-Scholes pricing model for European options.
//!
//! This module provides the closed-form Black-Scholes price of European
//! call and put options on a non-dividend-paying underlying.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use pricer_core::types::{OptionQuote, OptionType, PricingError};

use super::distributions::norm_cdf;
use super::error::AnalyticalError;

/// Black-Scholes model for European option pricing.
///
/// Holds the market state (spot, rate, volatility); strike, expiry and
/// option type are supplied per pricing call.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0).unwrap();
/// let put_price = bs.price_put(100.0, 1.0).unwrap();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    /// Spot price (S)
    spot: f64,
    /// Risk-free interest rate (r)
    rate: f64,
    /// Volatility (σ)
    volatility: f64,
}

impl BlackScholes {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised, may be negative)
    /// * `volatility` - Volatility (must be positive)
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0 or not finite
    /// - `AnalyticalError::InvalidRate` if rate is not finite
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0 or not finite
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0, 0.05, 0.2).is_ok());
    /// assert!(BlackScholes::new(-100.0, 0.05, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0, 0.05, 0.0).is_err());
    /// ```
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Result<Self, AnalyticalError> {
        if !(spot.is_finite() && spot > 0.0) {
            return Err(AnalyticalError::InvalidSpot { spot });
        }

        if !rate.is_finite() {
            return Err(AnalyticalError::InvalidRate { rate });
        }

        if !(volatility.is_finite() && volatility > 0.0) {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Builds the model from the market part of a validated quote.
    pub fn from_quote(quote: &OptionQuote) -> Result<Self, AnalyticalError> {
        Self::new(quote.spot(), quote.rate(), quote.volatility())
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    ///
    /// # Errors
    /// - `InvalidStrike` / `InvalidExpiry` for non-positive inputs
    /// - `NumericalInstability` if σ√T underflows to zero or d₁ is not finite
    pub fn d1(&self, strike: f64, expiry: f64) -> Result<f64, AnalyticalError> {
        check_contract(strike, expiry)?;

        let vol_sqrt_t = self.vol_sqrt_t(expiry)?;
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + 0.5 * self.volatility * self.volatility) * expiry;
        let d1 = (log_moneyness + drift) / vol_sqrt_t;

        if !d1.is_finite() {
            return Err(AnalyticalError::NumericalInstability {
                message: format!("d1 is not finite (σ√T = {})", vol_sqrt_t),
            });
        }
        Ok(d1)
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    pub fn d2(&self, strike: f64, expiry: f64) -> Result<f64, AnalyticalError> {
        let d1 = self.d1(strike, expiry)?;
        Ok(d1 - self.volatility * expiry.sqrt())
    }

    /// Computes European call option price.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
    /// let price = bs.price_call(100.0, 1.0).unwrap();
    /// assert!((price - 10.4506).abs() < 1e-3);
    /// ```
    pub fn price_call(&self, strike: f64, expiry: f64) -> Result<f64, AnalyticalError> {
        self.price(strike, expiry, OptionType::Call)
    }

    /// Computes European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    pub fn price_put(&self, strike: f64, expiry: f64) -> Result<f64, AnalyticalError> {
        self.price(strike, expiry, OptionType::Put)
    }

    /// Computes the price of a European option of the given type.
    pub fn price(
        &self,
        strike: f64,
        expiry: f64,
        option_type: OptionType,
    ) -> Result<f64, AnalyticalError> {
        let d1 = self.d1(strike, expiry)?;
        let d2 = d1 - self.volatility * expiry.sqrt();
        let discounted_strike = strike * (-self.rate * expiry).exp();

        let price = match option_type {
            OptionType::Call => self.spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
            OptionType::Put => discounted_strike * norm_cdf(-d2) - self.spot * norm_cdf(-d1),
        };

        if !price.is_finite() {
            return Err(AnalyticalError::NumericalInstability {
                message: format!("{} price is not finite", option_type),
            });
        }

        // Only round-off can push the formula below zero
        Ok(price.max(0.0))
    }

    /// Prices a validated quote.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::{OptionQuote, OptionType};
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let quote = OptionQuote::new(100.0, 100.0, 0.05, 1.0, 0.2, OptionType::Put).unwrap();
    /// let price = BlackScholes::price_quote(&quote).unwrap();
    /// assert!((price - 5.5735).abs() < 1e-3);
    /// ```
    pub fn price_quote(quote: &OptionQuote) -> Result<f64, AnalyticalError> {
        Self::from_quote(quote)?.price(quote.strike(), quote.expiry(), quote.option_type())
    }

    fn vol_sqrt_t(&self, expiry: f64) -> Result<f64, AnalyticalError> {
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        if vol_sqrt_t > 0.0 && vol_sqrt_t.is_finite() {
            Ok(vol_sqrt_t)
        } else {
            Err(AnalyticalError::NumericalInstability {
                message: format!(
                    "σ√T = {} (σ = {}, T = {}) is not a usable denominator",
                    vol_sqrt_t, self.volatility, expiry
                ),
            })
        }
    }
}

fn check_contract(strike: f64, expiry: f64) -> Result<(), AnalyticalError> {
    if !(strike.is_finite() && strike > 0.0) {
        return Err(AnalyticalError::InvalidStrike { strike });
    }
    if !(expiry.is_finite() && expiry > 0.0) {
        return Err(AnalyticalError::InvalidExpiry { expiry });
    }
    Ok(())
}

/// Closed-form Black-Scholes price of a European option.
///
/// # Arguments
/// * `spot` - Underlying price S
/// * `strike` - Strike price K
/// * `rate` - Risk-free rate r (continuously compounded)
/// * `expiry` - Time to expiry T in years
/// * `volatility` - Annualised volatility σ
/// * `option_type` - Call or put
///
/// # Errors
/// - `PricingError::InvalidArgument` for non-positive S, K, T or σ
/// - `PricingError::NumericDegeneracy` if σ√T underflows or the price is not finite
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_models::price_black_scholes;
///
/// let call = price_black_scholes(100.0, 100.0, 0.05, 1.0, 0.2, OptionType::Call).unwrap();
/// assert!((call - 10.4506).abs() < 1e-3);
/// ```
pub fn price_black_scholes(
    spot: f64,
    strike: f64,
    rate: f64,
    expiry: f64,
    volatility: f64,
    option_type: OptionType,
) -> Result<f64, PricingError> {
    let quote = OptionQuote::new(spot, strike, rate, expiry, volatility, option_type)?;
    Ok(BlackScholes::price_quote(&quote)?)
}
