//! Compare command implementation
//!
//! Tabulates lattice prices against the closed form for a ladder of
//! step counts.

use pricer_core::types::OptionQuote;
use pricer_models::convergence::{convergence_profile, ConvergenceReport};
use pricer_models::lattice::LatticeScheme;
use tracing::{info, warn};

use crate::{CliError, Result};

/// Renders a report as a fixed-width table.
pub fn render_table(report: &ConvergenceReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Black-Scholes reference: {:.6} (lattice scheme: {})\n",
        report.reference_price, report.scheme
    ));
    out.push_str("┌────────────┬────────────────┬────────────────┐\n");
    out.push_str("│ Steps      │ Lattice price  │ Abs error      │\n");
    out.push_str("├────────────┼────────────────┼────────────────┤\n");
    for point in &report.points {
        out.push_str(&format!(
            "│ {:<10} │ {:<14.6} │ {:<14.6e} │\n",
            point.steps, point.lattice_price, point.abs_error
        ));
    }
    out.push_str("└────────────┴────────────────┴────────────────┘");
    out
}

/// First pair of consecutive step counts where the error grows.
pub fn first_error_increase(report: &ConvergenceReport) -> Option<(usize, usize)> {
    report
        .points
        .windows(2)
        .find(|pair| pair[1].abs_error > pair[0].abs_error)
        .map(|pair| (pair[0].steps, pair[1].steps))
}

/// Run the compare command
pub fn run(quote: &OptionQuote, steps: &[usize], scheme: LatticeScheme) -> Result<()> {
    info!("Comparing {} lattice against closed form", scheme);
    info!("  Step counts: {:?}", steps);

    if steps.is_empty() {
        return Err(CliError::InvalidArgument(
            "--steps-list needs at least one step count".to_string(),
        ));
    }

    let report = convergence_profile(quote, steps, scheme)?;

    if let Some((from, to)) = first_error_increase(&report) {
        warn!(
            "Lattice error does not shrink monotonically: grows from n = {} to n = {}",
            from, to
        );
    }

    println!("{}", render_table(&report));
    Ok(())
}
