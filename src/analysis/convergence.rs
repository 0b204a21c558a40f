// src/analysis/convergence.rs

use statrs::statistics::Statistics;

use crate::config::CONVERGENCE_THRESHOLD;
use crate::error::SimError;
use crate::types::ConvergenceReport;

/// Summarizes how well a price path tracked the true outcome probability.
///
/// `convergence_time` is the earliest step at which the price came within
/// [`CONVERGENCE_THRESHOLD`] of the truth, or -1 if it never did. Volatility
/// is the population standard deviation of the step-to-step price changes.
pub fn analyze_convergence(prices: &[f64], true_prob: f64) -> Result<ConvergenceReport, SimError> {
    if prices.is_empty() {
        return Err(SimError::EmptySeries);
    }

    let errors: Vec<f64> = prices.iter().map(|p| (p - true_prob).abs()).collect();

    let mean_error = errors.iter().mean();
    let final_error = errors[errors.len() - 1];
    let convergence_time = errors
        .iter()
        .position(|e| *e < CONVERGENCE_THRESHOLD)
        .map_or(-1, |t| t as i64);

    // A single price has no step-to-step movement to measure.
    let volatility = if prices.len() < 2 {
        0.0
    } else {
        prices.windows(2).map(|w| w[1] - w[0]).population_std_dev()
    };

    Ok(ConvergenceReport {
        mean_error,
        final_error,
        convergence_time,
        volatility,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_is_rejected() {
        assert!(matches!(
            analyze_convergence(&[], 0.7),
            Err(SimError::EmptySeries)
        ));
    }

    #[test]
    fn mean_and_final_error_match_hand_computation() {
        let prices = [0.5, 0.6, 0.65];
        let report = analyze_convergence(&prices, 0.7).unwrap();

        // errors are [0.2, 0.1, 0.05]
        assert!((report.mean_error - 0.35 / 3.0).abs() < 1e-12);
        assert!((report.final_error - 0.05).abs() < 1e-12);
    }

    #[test]
    fn convergence_time_is_the_first_crossing() {
        // errors are [0.2, 0.02, 0.2, 0.01]; only index 1 may win.
        let prices = [0.5, 0.68, 0.9, 0.71];
        let report = analyze_convergence(&prices, 0.7).unwrap();
        assert_eq!(report.convergence_time, 1);
    }

    #[test]
    fn threshold_is_strict() {
        // An error of 0.05 on the nose does not count as converged.
        let report = analyze_convergence(&[0.55], 0.5).unwrap();
        assert_eq!(report.convergence_time, -1);
    }

    #[test]
    fn never_converging_yields_sentinel() {
        let prices = [0.2; 5];
        let report = analyze_convergence(&prices, 0.7).unwrap();
        assert_eq!(report.convergence_time, -1);
        assert!((report.mean_error - 0.5).abs() < 1e-12);
    }

    #[test]
    fn volatility_of_a_steady_drift_is_zero() {
        // Constant step-to-step change, so the diffs have no spread.
        let prices = [0.1, 0.2, 0.3, 0.4];
        let report = analyze_convergence(&prices, 0.4).unwrap();
        assert!(report.volatility.abs() < 1e-12);
    }

    #[test]
    fn volatility_matches_hand_computation() {
        // diffs are [0.2, -0.2]: mean 0, population variance 0.04.
        let prices = [0.5, 0.7, 0.5];
        let report = analyze_convergence(&prices, 0.5).unwrap();
        assert!((report.volatility - 0.2).abs() < 1e-12);
    }

    #[test]
    fn single_price_has_zero_volatility() {
        let report = analyze_convergence(&[0.72], 0.7).unwrap();
        assert_eq!(report.volatility, 0.0);
        assert!((report.mean_error - report.final_error).abs() < 1e-12);
        assert_eq!(report.convergence_time, 0);
    }
}
