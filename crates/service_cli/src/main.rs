//! Vanilla Pricer CLI - European option pricing from the command line
//!
//! # Commands
//!
//! - `vanilla-pricer black-scholes` - Closed-form price of one contract
//! - `vanilla-pricer binomial --steps <n>` - Binomial lattice price
//! - `vanilla-pricer compare --steps-list 1,10,100,1000` - Lattice convergence table
//! - `vanilla-pricer demo` - Both sample calculations
//!
//! Contract flags left out on the command line are taken from the
//! `[defaults]` section of the config file.
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate wires the pricers in
//! `pricer_models` to flags, configuration and logging.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pricer_models::lattice::LatticeScheme;
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::QuoteArgs;
use config::CliConfig;

/// European vanilla option pricer
#[derive(Parser)]
#[command(name = "vanilla-pricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (defaults to ./vanilla-pricer.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price with the Black-Scholes closed form
    BlackScholes {
        #[command(flatten)]
        quote: QuoteArgs,
    },

    /// Price on a binomial lattice
    Binomial {
        #[command(flatten)]
        quote: QuoteArgs,

        /// Number of time steps
        #[arg(short = 'n', long)]
        steps: Option<usize>,

        /// Lattice parameterisation (first-order, crr)
        #[arg(long, default_value = "first-order")]
        scheme: LatticeScheme,
    },

    /// Compare lattice prices against the closed form
    Compare {
        #[command(flatten)]
        quote: QuoteArgs,

        /// Comma-separated step counts
        #[arg(long, value_delimiter = ',')]
        steps_list: Option<Vec<usize>>,

        /// Lattice parameterisation (first-order, crr)
        #[arg(long)]
        scheme: Option<LatticeScheme>,
    },

    /// Run both sample calculations
    Demo,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = CliConfig::load(cli.config.as_deref())?;
    debug!("Effective config: {:?}", config);

    match cli.command {
        Commands::BlackScholes { quote } => {
            let quote = quote.resolve(&config.defaults)?;
            commands::black_scholes::run(&quote)
        }
        Commands::Binomial {
            quote,
            steps,
            scheme,
        } => {
            let quote = quote.resolve(&config.defaults)?;
            let steps = steps.unwrap_or(config.defaults.steps);
            commands::binomial::run(&quote, steps, scheme)
        }
        Commands::Compare {
            quote,
            steps_list,
            scheme,
        } => {
            let quote = quote.resolve(&config.defaults)?;
            let steps = steps_list.unwrap_or_else(|| config.compare.steps.clone());
            let scheme = match scheme {
                Some(scheme) => scheme,
                None => config.compare.scheme()?,
            };
            commands::compare::run(&quote, &steps, scheme)
        }
        Commands::Demo => commands::demo::run(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    run(cli).inspect_err(|e| error!("{}", e))
}
