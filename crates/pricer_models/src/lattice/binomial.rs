//! Recombining binomial tree for European options.
//!
//! The underlying moves over `n` steps of length `dt = T/n`, multiplying by
//! `u` or `d` at each step. Node `j` of the terminal layer (counted from the
//! top) carries `S·u^(n-j)·d^j`. Option values are discounted back to the
//! root with the risk-neutral up probability
//!
//! p = (e^(r·dt) - d) / (u - d)
//!
//! and per-step discount e^(-r·dt). There is no early-exercise check.
//!
//! Backward induction at layer `i` only reads layer `i+1`, so a single
//! buffer of `n+1` values is updated in place: O(n²) time, O(n) space.

use std::fmt;
use std::str::FromStr;

use pricer_core::types::{OptionQuote, OptionType, PricingError};

use super::error::LatticeError;

/// Largest step count accepted (exponents are evaluated with `powi`).
pub const MAX_STEPS: usize = i32::MAX as usize;

/// Up/down factor parameterisation.
///
/// # Variants
/// - `FirstOrder`: `u = 1 + r·dt + σ√dt`, `d = 1 + r·dt - σ√dt` (default)
/// - `CoxRossRubinstein`: `u = e^(σ√dt)`, `d = 1/u`
///
/// # Examples
/// ```
/// use pricer_models::lattice::LatticeScheme;
///
/// assert_eq!(LatticeScheme::default(), LatticeScheme::FirstOrder);
/// assert_eq!("crr".parse::<LatticeScheme>().unwrap(), LatticeScheme::CoxRossRubinstein);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LatticeScheme {
    /// First-order expansion of the lognormal step around the risk-free drift.
    #[default]
    FirstOrder,
    /// Cox-Ross-Rubinstein (1979) symmetric log-space step.
    CoxRossRubinstein,
}

impl fmt::Display for LatticeScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LatticeScheme::FirstOrder => write!(f, "first-order"),
            LatticeScheme::CoxRossRubinstein => write!(f, "crr"),
        }
    }
}

impl FromStr for LatticeScheme {
    type Err = LatticeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first-order" | "first_order" | "firstorder" => Ok(LatticeScheme::FirstOrder),
            "crr" | "cox-ross-rubinstein" => Ok(LatticeScheme::CoxRossRubinstein),
            other => Err(LatticeError::UnknownScheme {
                name: other.to_string(),
            }),
        }
    }
}

/// Per-step lattice parameters.
///
/// Construction checks that the tree is usable: `u > d`, `d > 0` and
/// `p ∈ [0, 1]`. Anything else would yield a price that is not an
/// arbitrage-free expectation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeFactors {
    dt: f64,
    up: f64,
    down: f64,
    probability: f64,
    discount: f64,
}

impl LatticeFactors {
    /// Computes the factors for one step of length `dt`.
    ///
    /// # Errors
    /// - `DegenerateFactors` if `u - d` is not positive and finite
    /// - `NonPositiveDownFactor` if `d <= 0`
    /// - `ProbabilityOutOfRange` if `p` is NaN or outside [0, 1]
    ///
    /// # Examples
    /// ```
    /// use pricer_models::lattice::{LatticeFactors, LatticeScheme};
    ///
    /// let f = LatticeFactors::new(0.05, 0.2, 1.0, LatticeScheme::FirstOrder).unwrap();
    /// assert!((f.up() - 1.25).abs() < 1e-12);
    /// assert!((f.down() - 0.85).abs() < 1e-12);
    /// ```
    pub fn new(
        rate: f64,
        volatility: f64,
        dt: f64,
        scheme: LatticeScheme,
    ) -> Result<Self, LatticeError> {
        let vol_sqrt_dt = volatility * dt.sqrt();
        let (up, down) = match scheme {
            LatticeScheme::FirstOrder => {
                let drift = 1.0 + rate * dt;
                (drift + vol_sqrt_dt, drift - vol_sqrt_dt)
            }
            LatticeScheme::CoxRossRubinstein => {
                let up = vol_sqrt_dt.exp();
                (up, 1.0 / up)
            }
        };

        let spread = up - down;
        if !(spread > 0.0 && spread.is_finite()) {
            return Err(LatticeError::DegenerateFactors { up, down });
        }
        if down <= 0.0 {
            return Err(LatticeError::NonPositiveDownFactor { down });
        }

        let probability = ((rate * dt).exp() - down) / spread;
        if !(0.0..=1.0).contains(&probability) {
            return Err(LatticeError::ProbabilityOutOfRange { probability });
        }

        Ok(Self {
            dt,
            up,
            down,
            probability,
            discount: (-rate * dt).exp(),
        })
    }

    /// Step length in years.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Up factor u.
    #[inline]
    pub fn up(&self) -> f64 {
        self.up
    }

    /// Down factor d.
    #[inline]
    pub fn down(&self) -> f64 {
        self.down
    }

    /// Risk-neutral up probability p.
    #[inline]
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Per-step discount factor e^(-r·dt).
    #[inline]
    pub fn discount(&self) -> f64 {
        self.discount
    }

    /// Underlying price at node `j` of layer `i`: S·u^(i-j)·d^j.
    #[inline]
    pub fn node_price(&self, spot: f64, i: usize, j: usize) -> f64 {
        spot * self.up.powi((i - j) as i32) * self.down.powi(j as i32)
    }
}

/// Binomial tree pricer for European options.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionQuote, OptionType};
/// use pricer_models::lattice::BinomialTree;
///
/// let quote = OptionQuote::new(100.0, 100.0, 0.05, 1.0, 0.2, OptionType::Call).unwrap();
/// let tree = BinomialTree::new(100).unwrap();
/// let price = tree.price_quote(&quote).unwrap();
/// assert!((price - 10.45).abs() < 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinomialTree {
    steps: usize,
    scheme: LatticeScheme,
}

impl BinomialTree {
    /// Creates a tree with the default (first-order) parameterisation.
    ///
    /// # Errors
    /// `LatticeError::InvalidSteps` if `steps` is 0 or exceeds [`MAX_STEPS`].
    pub fn new(steps: usize) -> Result<Self, LatticeError> {
        Self::with_scheme(steps, LatticeScheme::default())
    }

    /// Creates a tree with an explicit parameterisation.
    pub fn with_scheme(steps: usize, scheme: LatticeScheme) -> Result<Self, LatticeError> {
        if steps == 0 || steps > MAX_STEPS {
            return Err(LatticeError::InvalidSteps {
                steps,
                max: MAX_STEPS,
            });
        }
        Ok(Self { steps, scheme })
    }

    /// Number of time steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Factor parameterisation.
    #[inline]
    pub fn scheme(&self) -> LatticeScheme {
        self.scheme
    }

    /// Per-step factors for a quote.
    pub fn factors(&self, quote: &OptionQuote) -> Result<LatticeFactors, LatticeError> {
        let dt = quote.expiry() / self.steps as f64;
        LatticeFactors::new(quote.rate(), quote.volatility(), dt, self.scheme)
    }

    /// Option values on the terminal layer, node 0 being the highest price.
    pub fn terminal_values(&self, quote: &OptionQuote, factors: &LatticeFactors) -> Vec<f64> {
        let n = self.steps;
        let option_type = quote.option_type();
        (0..=n)
            .map(|j| option_type.intrinsic(factors.node_price(quote.spot(), n, j), quote.strike()))
            .collect()
    }

    /// Prices a validated quote by backward induction.
    ///
    /// Calls whose top terminal node S·u^n overflows are priced through the
    /// put, which stays bounded by K, and discrete put-call parity.
    pub fn price_quote(&self, quote: &OptionQuote) -> Result<f64, LatticeError> {
        let factors = self.factors(quote)?;
        let root = self.roll_back(self.terminal_values(quote, &factors), &factors);
        if root.is_finite() {
            return Ok(root);
        }

        if quote.option_type().is_call() {
            let put = quote.with_option_type(OptionType::Put);
            let put_root = self.roll_back(self.terminal_values(&put, &factors), &factors);
            if put_root.is_finite() {
                return Ok((put_root + quote.parity_forward()).max(0.0));
            }
        }

        Err(LatticeError::NonFiniteValue {
            message: format!("root value {} after {} steps", root, self.steps),
        })
    }

    /// Discounts a terminal layer back to the root in place.
    fn roll_back(&self, mut values: Vec<f64>, factors: &LatticeFactors) -> f64 {
        let p = factors.probability();
        let q = 1.0 - p;
        let discount = factors.discount();

        // values[j] at layer i reads values[j] and values[j + 1] of layer i + 1,
        // both still unwritten when j advances upwards.
        for i in (0..self.steps).rev() {
            for j in 0..=i {
                values[j] = discount * (p * values[j] + q * values[j + 1]);
            }
        }
        values[0]
    }
}

/// Binomial lattice price of a European option (first-order factors).
///
/// # Arguments
/// * `spot` - Underlying price S
/// * `strike` - Strike price K
/// * `rate` - Risk-free rate r
/// * `expiry` - Time to expiry T in years
/// * `volatility` - Annualised volatility σ
/// * `steps` - Number of time steps n (at least 1)
/// * `option_type` - Call or put
///
/// # Errors
/// - `PricingError::InvalidArgument` for invalid quote fields or `steps == 0`
/// - `PricingError::NumericDegeneracy` when the lattice factors are unusable
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_models::{price_binomial, price_black_scholes};
///
/// let lattice = price_binomial(100.0, 100.0, 0.05, 1.0, 0.2, 100, OptionType::Call).unwrap();
/// let closed = price_black_scholes(100.0, 100.0, 0.05, 1.0, 0.2, OptionType::Call).unwrap();
/// assert!((lattice - closed).abs() / closed < 0.05);
/// ```
pub fn price_binomial(
    spot: f64,
    strike: f64,
    rate: f64,
    expiry: f64,
    volatility: f64,
    steps: usize,
    option_type: OptionType,
) -> Result<f64, PricingError> {
    let quote = OptionQuote::new(spot, strike, rate, expiry, volatility, option_type)?;
    let tree = BinomialTree::new(steps)?;
    Ok(tree.price_quote(&quote)?)
}
