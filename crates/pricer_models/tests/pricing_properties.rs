//! Behavioural properties shared by the closed-form and lattice pricers.

use approx::assert_relative_eq;
use pricer_core::types::{OptionQuote, OptionType, PricingError};
use pricer_models::convergence::{convergence_profile, DEFAULT_STEP_LADDER};
use pricer_models::lattice::LatticeScheme;
use pricer_models::{price_binomial, price_black_scholes};

const S: f64 = 100.0;
const K: f64 = 100.0;
const R: f64 = 0.05;
const T: f64 = 1.0;
const SIGMA: f64 = 0.2;

// ==========================================================
// Reference values
// ==========================================================

#[test]
fn test_at_the_money_call_reference() {
    let price = price_black_scholes(S, K, R, T, SIGMA, OptionType::Call).unwrap();
    assert_relative_eq!(price, 10.4506, epsilon = 1e-3);
}

#[test]
fn test_binomial_hundred_steps_within_five_percent() {
    let closed = price_black_scholes(S, K, R, T, SIGMA, OptionType::Call).unwrap();
    let lattice = price_binomial(S, K, R, T, SIGMA, 100, OptionType::Call).unwrap();
    assert!(
        (lattice - closed).abs() <= 0.05 * closed,
        "lattice {} vs closed form {}",
        lattice,
        closed
    );
}

#[test]
fn test_demo_output_rounding() {
    // Closed form 10.4506, 100-step lattice 10.4572
    let closed = price_black_scholes(S, K, R, T, SIGMA, OptionType::Call).unwrap();
    let lattice = price_binomial(S, K, R, T, SIGMA, 100, OptionType::Call).unwrap();
    assert_relative_eq!(lattice, 10.457219834605457, epsilon = 1e-9);
    assert_eq!(format!("{:.2}", closed), "10.45");
    assert_eq!(format!("{:.2}", lattice), "10.46");
}

// ==========================================================
// Convergence
// ==========================================================

#[test]
fn test_convergence_across_step_ladder() {
    for option_type in [OptionType::Call, OptionType::Put] {
        let closed = price_black_scholes(S, K, R, T, SIGMA, option_type).unwrap();
        let errors: Vec<f64> = DEFAULT_STEP_LADDER
            .iter()
            .map(|&n| {
                let lattice = price_binomial(S, K, R, T, SIGMA, n, option_type).unwrap();
                (lattice - closed).abs()
            })
            .collect();

        for pair in errors.windows(2) {
            assert!(pair[1] <= pair[0], "errors not shrinking: {:?}", errors);
        }
        assert!(errors[3] < 0.05, "n = 1000 error too large: {}", errors[3]);
    }
}

#[test]
fn test_crr_scheme_also_converges() {
    let quote = OptionQuote::new(S, K, R, T, SIGMA, OptionType::Put).unwrap();
    let report =
        convergence_profile(&quote, &DEFAULT_STEP_LADDER, LatticeScheme::CoxRossRubinstein)
            .unwrap();
    assert!(report.final_abs_error().unwrap() < 0.01);
    assert!(report.points[0].abs_error > report.points[3].abs_error);
}

// ==========================================================
// Limits and errors
// ==========================================================

#[test]
fn test_vanishing_volatility_gives_discounted_intrinsic() {
    for spot in [105.0, 120.0, 200.0] {
        let price = price_black_scholes(spot, K, R, T, 1e-9, OptionType::Call).unwrap();
        let deterministic = (spot - K * (-R * T).exp()).max(0.0);
        assert_relative_eq!(price, deterministic, epsilon = 1e-8);
    }
}

#[test]
fn test_unknown_option_type_rejected() {
    let parsed = "straddle".parse::<OptionType>();
    assert!(matches!(parsed, Err(PricingError::InvalidArgument(_))));
}

#[test]
fn test_non_positive_inputs_rejected_by_both_pricers() {
    let bad_inputs = [
        (-1.0, K, T, SIGMA),
        (S, 0.0, T, SIGMA),
        (S, K, 0.0, SIGMA),
        (S, K, T, -0.1),
    ];
    for (spot, strike, expiry, vol) in bad_inputs {
        let closed = price_black_scholes(spot, strike, R, expiry, vol, OptionType::Call);
        let lattice = price_binomial(spot, strike, R, expiry, vol, 10, OptionType::Call);
        assert!(closed.unwrap_err().is_invalid_argument());
        assert!(lattice.unwrap_err().is_invalid_argument());
    }
}

#[test]
fn test_lattice_step_count_must_be_positive() {
    let err = price_binomial(S, K, R, T, SIGMA, 0, OptionType::Put).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_long_dated_high_vol_call_prices_on_lattice() {
    // S·u^n overflows f64 here while every lattice factor is usable
    let call = price_binomial(S, K, R, 60.0, 1.0, 10_000, OptionType::Call).unwrap();
    let put = price_binomial(S, K, R, 60.0, 1.0, 10_000, OptionType::Put).unwrap();
    let closed = price_black_scholes(S, K, R, 60.0, 1.0, OptionType::Call).unwrap();

    assert!(call.is_finite() && call >= 0.0);
    assert_relative_eq!(call, closed, max_relative = 1e-3);
    assert_relative_eq!(call - put, S - K * (-R * 60.0).exp(), epsilon = 1e-9);
}

#[test]
fn test_degenerate_lattice_reported() {
    // u == d once σ√dt is lost against 1 + r·dt
    let err = price_binomial(S, K, R, T, 1e-20, 1, OptionType::Call).unwrap_err();
    assert!(err.is_numeric_degeneracy());
}

// ==========================================================
// Purity
// ==========================================================

#[test]
fn test_repeated_calls_are_identical() {
    let closed = price_black_scholes(S, 95.0, R, 0.5, 0.3, OptionType::Put).unwrap();
    let lattice = price_binomial(S, 95.0, R, 0.5, 0.3, 250, OptionType::Put).unwrap();
    for _ in 0..5 {
        let closed_again = price_black_scholes(S, 95.0, R, 0.5, 0.3, OptionType::Put).unwrap();
        let lattice_again = price_binomial(S, 95.0, R, 0.5, 0.3, 250, OptionType::Put).unwrap();
        assert_eq!(closed.to_bits(), closed_again.to_bits());
        assert_eq!(lattice.to_bits(), lattice_again.to_bits());
    }
}

#[test]
fn test_concurrent_calls_match_sequential() {
    let strikes = [80.0, 90.0, 100.0, 110.0, 120.0];
    let sequential: Vec<f64> = strikes
        .iter()
        .map(|&k| price_binomial(S, k, R, T, SIGMA, 300, OptionType::Call).unwrap())
        .collect();

    let concurrent: Vec<f64> = std::thread::scope(|scope| {
        let handles: Vec<_> = strikes
            .iter()
            .map(|&k| {
                scope.spawn(move || price_binomial(S, k, R, T, SIGMA, 300, OptionType::Call))
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap().unwrap())
            .collect()
    });

    assert_eq!(sequential, concurrent);
}

// ==========================================================
// Property-based tests
// ==========================================================

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn test_closed_form_non_negative(
            spot in 1.0..500.0_f64,
            strike in 1.0..500.0_f64,
            rate in -0.05..0.15_f64,
            expiry in 0.01..5.0_f64,
            vol in 0.01..1.5_f64,
            is_call in any::<bool>(),
        ) {
            let option_type = if is_call { OptionType::Call } else { OptionType::Put };
            let price = price_black_scholes(spot, strike, rate, expiry, vol, option_type).unwrap();
            prop_assert!(price >= 0.0);
        }

        #[test]
        fn test_closed_form_put_call_parity(
            spot in 1.0..500.0_f64,
            strike in 1.0..500.0_f64,
            rate in -0.05..0.15_f64,
            expiry in 0.01..5.0_f64,
            vol in 0.01..1.5_f64,
        ) {
            let call = price_black_scholes(spot, strike, rate, expiry, vol, OptionType::Call).unwrap();
            let put = price_black_scholes(spot, strike, rate, expiry, vol, OptionType::Put).unwrap();
            let forward = spot - strike * (-rate * expiry).exp();
            prop_assert!(
                (call - put - forward).abs() < 1e-6,
                "parity gap {} for S={}, K={}, r={}, T={}, σ={}",
                call - put - forward, spot, strike, rate, expiry, vol
            );
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_lattice_non_negative_in_usable_region(
            spot in 10.0..300.0_f64,
            strike in 10.0..300.0_f64,
            rate in -0.05..0.1_f64,
            expiry in 0.1..2.0_f64,
            vol in 0.05..0.6_f64,
            steps in 10_usize..200,
            is_call in any::<bool>(),
        ) {
            let option_type = if is_call { OptionType::Call } else { OptionType::Put };
            let price = price_binomial(spot, strike, rate, expiry, vol, steps, option_type).unwrap();
            prop_assert!(price >= 0.0);
        }

        #[test]
        fn test_lattice_never_returns_nonsense(
            rate in -0.2..0.5_f64,
            expiry in 0.01..5.0_f64,
            vol in 0.001..3.0_f64,
            steps in 1_usize..20,
        ) {
            // Either a non-negative price or a reported degeneracy
            match price_binomial(100.0, 100.0, rate, expiry, vol, steps, OptionType::Call) {
                Ok(price) => prop_assert!(price >= 0.0 && price.is_finite()),
                Err(err) => prop_assert!(err.is_numeric_degeneracy()),
            }
        }
    }
}
