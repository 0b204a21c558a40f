// src/types/report.rs

use serde::{Deserialize, Serialize};

/// Summary statistics for one simulated price path.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceReport {
    /// Mean absolute distance between the market price and the true probability.
    pub mean_error: f64,
    /// Absolute distance at the last simulated step.
    pub final_error: f64,
    /// First step at which the price came within the convergence threshold of
    /// the truth, or -1 if it never did within the run.
    pub convergence_time: i64,
    /// Standard deviation of the step-to-step price changes.
    pub volatility: f64,
}
