//! TOML configuration for the CLI.
//!
//! Every field is optional in the file; missing entries fall back to the
//! sample contract S = 100, K = 100, r = 5%, T = 1y, σ = 20% (call).
//!
//! ```toml
//! [defaults]
//! spot = 100.0
//! strike = 105.0
//! option_type = "put"
//! steps = 250
//!
//! [compare]
//! steps = [1, 10, 100, 1000]
//! scheme = "crr"
//! ```

use std::path::Path;

use pricer_core::types::{OptionQuote, OptionType};
use pricer_models::convergence::DEFAULT_STEP_LADDER;
use pricer_models::lattice::LatticeScheme;
use serde::Deserialize;
use tracing::debug;

use crate::{CliError, Result};

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "vanilla-pricer.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Contract parameters used when a flag is omitted.
    pub defaults: QuoteDefaults,
    /// Settings for the `compare` command.
    pub compare: CompareSettings,
}

/// Fallback contract and lattice depth.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuoteDefaults {
    pub spot: f64,
    pub strike: f64,
    pub rate: f64,
    pub expiry: f64,
    pub volatility: f64,
    pub option_type: OptionType,
    pub steps: usize,
}

impl Default for QuoteDefaults {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            rate: 0.05,
            expiry: 1.0,
            volatility: 0.2,
            option_type: OptionType::Call,
            steps: 100,
        }
    }
}

impl QuoteDefaults {
    /// Validated quote built from these values alone.
    pub fn to_quote(&self) -> Result<OptionQuote> {
        Ok(OptionQuote::new(
            self.spot,
            self.strike,
            self.rate,
            self.expiry,
            self.volatility,
            self.option_type,
        )?)
    }
}

/// Step ladder and scheme for lattice/closed-form comparisons.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompareSettings {
    pub steps: Vec<usize>,
    pub scheme: String,
}

impl Default for CompareSettings {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEP_LADDER.to_vec(),
            scheme: LatticeScheme::default().to_string(),
        }
    }
}

impl CompareSettings {
    /// Parsed lattice scheme.
    pub fn scheme(&self) -> Result<LatticeScheme> {
        self.scheme
            .parse()
            .map_err(|e| CliError::Config(format!("compare.scheme: {}", e)))
    }
}

impl CliConfig {
    /// Parses a configuration document.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| CliError::Config(e.to_string()))
    }

    /// Loads the configuration for a run.
    ///
    /// With `path == None` the default file is read if present, otherwise
    /// built-in values are used. An explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p, true),
            None => (Path::new(DEFAULT_CONFIG_PATH), false),
        };

        if !path.exists() {
            if explicit {
                return Err(CliError::FileNotFound(path.display().to_string()));
            }
            debug!("No config at {}, using built-in defaults", path.display());
            return Ok(Self::default());
        }

        debug!("Loading config from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}
