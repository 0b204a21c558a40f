// src/config.rs

//! A centralized place for the market model's tuning parameters.

use serde::{Deserialize, Serialize};

use crate::error::SimError;

// --- Market mechanics ---
/// Every market opens here, before any trader has weighed in.
pub const INITIAL_MARKET_PROB: f64 = 0.5;
/// Price impact applied per unit of scaled trade size.
pub const PRICE_IMPACT: f64 = 0.001;
/// Converts signal-price divergence into a trade size.
pub const TRADE_SIZE_SCALE: f64 = 100.0;
// Quoted prices are pinned inside this band at the end of every step.
pub const PRICE_FLOOR: f64 = 0.01;
pub const PRICE_CEILING: f64 = 0.99;

// --- Trader signals ---
/// Standard deviation of the Gaussian noise around the true probability.
pub const SIGNAL_NOISE_STD: f64 = 0.1;

// --- Convergence analysis ---
/// A price within this distance of the truth counts as converged.
pub const CONVERGENCE_THRESHOLD: f64 = 0.05;

/// The three scalars that define one simulation run.
///
/// `true_prob` is stored unchanged; finite out-of-range values are legal and
/// get absorbed by the clamping in the trading loop. Negative trader or step
/// counts are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub true_prob: f64,
    pub n_traders: usize,
    pub n_steps: usize,
}

impl SimulationConfig {
    pub fn new(true_prob: f64, n_traders: usize, n_steps: usize) -> Result<Self, SimError> {
        if !true_prob.is_finite() {
            return Err(SimError::InvalidConfig(format!(
                "true_prob must be finite, got {true_prob}"
            )));
        }
        Ok(Self {
            true_prob,
            n_traders,
            n_steps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_true_prob_is_rejected() {
        assert!(matches!(
            SimulationConfig::new(f64::NAN, 10, 10),
            Err(SimError::InvalidConfig(_))
        ));
        assert!(matches!(
            SimulationConfig::new(f64::INFINITY, 10, 10),
            Err(SimError::InvalidConfig(_))
        ));
    }

    #[test]
    fn out_of_range_true_prob_is_accepted() {
        // Finite values outside [0, 1] fall through to the clamping logic.
        let config = SimulationConfig::new(1.5, 10, 10).unwrap();
        assert_eq!(config.true_prob, 1.5);
    }
}
