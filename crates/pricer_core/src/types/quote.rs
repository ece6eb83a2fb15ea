//! Validated option quote request.
//!
//! An [`OptionQuote`] bundles the market and contract inputs shared by every
//! pricer: spot, strike, risk-free rate, time to expiry and volatility,
//! together with the option type. Construction validates the domain once so
//! that pricers can work on trusted values.

use super::error::PricingError;
use super::option_type::OptionType;

/// Market and contract parameters for a European vanilla option.
///
/// # Invariants
/// - `spot`, `strike`, `expiry` and `volatility` are finite and strictly positive
/// - `rate` is finite (zero and negative rates are allowed)
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionQuote, OptionType};
///
/// let quote = OptionQuote::new(100.0, 100.0, 0.05, 1.0, 0.2, OptionType::Call).unwrap();
/// assert_eq!(quote.spot(), 100.0);
/// assert!((quote.discount_factor() - (-0.05_f64).exp()).abs() < 1e-15);
///
/// // Non-positive volatility is rejected
/// assert!(OptionQuote::new(100.0, 100.0, 0.05, 1.0, 0.0, OptionType::Call).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionQuote {
    spot: f64,
    strike: f64,
    rate: f64,
    expiry: f64,
    volatility: f64,
    option_type: OptionType,
}

impl OptionQuote {
    /// Creates a quote after validating every numeric input.
    ///
    /// # Arguments
    /// * `spot` - Current underlying price S (must be positive)
    /// * `strike` - Strike price K (must be positive)
    /// * `rate` - Continuously compounded risk-free rate r (any finite value)
    /// * `expiry` - Time to expiry T in years (must be positive)
    /// * `volatility` - Annualised volatility σ (must be positive)
    /// * `option_type` - Call or put
    ///
    /// # Errors
    /// `PricingError::InvalidArgument` naming the first offending parameter.
    pub fn new(
        spot: f64,
        strike: f64,
        rate: f64,
        expiry: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> Result<Self, PricingError> {
        check_positive("spot", spot)?;
        check_positive("strike", strike)?;
        if !rate.is_finite() {
            return Err(PricingError::invalid_parameter("rate", rate, "must be finite"));
        }
        check_positive("expiry", expiry)?;
        check_positive("volatility", volatility)?;

        Ok(Self {
            spot,
            strike,
            rate,
            expiry,
            volatility,
            option_type,
        })
    }

    /// Returns the underlying price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Same quote with a different option type.
    #[inline]
    pub fn with_option_type(self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..self
        }
    }

    /// Discount factor to expiry, e^(-rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.expiry).exp()
    }

    /// Model-free call minus put value, S - K·e^(-rT).
    #[inline]
    pub fn parity_forward(&self) -> f64 {
        self.spot - self.strike * self.discount_factor()
    }
}

fn check_positive(name: &str, value: f64) -> Result<(), PricingError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PricingError::invalid_parameter(
            name,
            value,
            "must be positive and finite",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call_quote() -> OptionQuote {
        OptionQuote::new(100.0, 100.0, 0.05, 1.0, 0.2, OptionType::Call).unwrap()
    }

    #[test]
    fn test_new_valid_quote() {
        let quote = call_quote();
        assert_eq!(quote.spot(), 100.0);
        assert_eq!(quote.strike(), 100.0);
        assert_eq!(quote.rate(), 0.05);
        assert_eq!(quote.expiry(), 1.0);
        assert_eq!(quote.volatility(), 0.2);
        assert_eq!(quote.option_type(), OptionType::Call);
    }

    #[test]
    fn test_negative_rate_allowed() {
        assert!(OptionQuote::new(100.0, 100.0, -0.01, 1.0, 0.2, OptionType::Put).is_ok());
    }

    #[test]
    fn test_invalid_spot() {
        let err = OptionQuote::new(0.0, 100.0, 0.05, 1.0, 0.2, OptionType::Call).unwrap_err();
        match err {
            PricingError::InvalidArgument(msg) => assert!(msg.starts_with("spot")),
            _ => panic!("Expected InvalidArgument variant"),
        }
    }

    #[test]
    fn test_invalid_strike() {
        let err = OptionQuote::new(100.0, -5.0, 0.05, 1.0, 0.2, OptionType::Call).unwrap_err();
        match err {
            PricingError::InvalidArgument(msg) => assert!(msg.starts_with("strike")),
            _ => panic!("Expected InvalidArgument variant"),
        }
    }

    #[test]
    fn test_invalid_expiry() {
        let err = OptionQuote::new(100.0, 100.0, 0.05, 0.0, 0.2, OptionType::Call).unwrap_err();
        match err {
            PricingError::InvalidArgument(msg) => assert!(msg.starts_with("expiry")),
            _ => panic!("Expected InvalidArgument variant"),
        }
    }

    #[test]
    fn test_invalid_volatility() {
        let err = OptionQuote::new(100.0, 100.0, 0.05, 1.0, -0.2, OptionType::Call).unwrap_err();
        match err {
            PricingError::InvalidArgument(msg) => assert!(msg.starts_with("volatility")),
            _ => panic!("Expected InvalidArgument variant"),
        }
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        assert!(OptionQuote::new(f64::NAN, 100.0, 0.05, 1.0, 0.2, OptionType::Call).is_err());
        assert!(OptionQuote::new(100.0, f64::INFINITY, 0.05, 1.0, 0.2, OptionType::Call).is_err());
        assert!(OptionQuote::new(100.0, 100.0, f64::NAN, 1.0, 0.2, OptionType::Call).is_err());
    }

    #[test]
    fn test_with_option_type() {
        let put = call_quote().with_option_type(OptionType::Put);
        assert_eq!(put.option_type(), OptionType::Put);
        assert_eq!(put.spot(), 100.0);
    }

    #[test]
    fn test_parity_forward() {
        let quote = call_quote();
        let expected = 100.0 - 100.0 * (-0.05_f64).exp();
        assert!((quote.parity_forward() - expected).abs() < 1e-12);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_positive_inputs_always_accepted(
                spot in 1e-6..1e6_f64,
                strike in 1e-6..1e6_f64,
                rate in -0.5..0.5_f64,
                expiry in 1e-6..50.0_f64,
                volatility in 1e-6..5.0_f64,
            ) {
                let quote = OptionQuote::new(spot, strike, rate, expiry, volatility, OptionType::Put);
                prop_assert!(quote.is_ok());
            }

            #[test]
            fn test_non_positive_spot_always_rejected(
                spot in -1e6..=0.0_f64,
            ) {
                let quote = OptionQuote::new(spot, 100.0, 0.05, 1.0, 0.2, OptionType::Call);
                prop_assert!(quote.is_err());
            }
        }
    }
}
