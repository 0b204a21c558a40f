// src/simulators/yes_no.rs

use super::market_trait::Marketable;
use crate::analysis;
use crate::config::{
    INITIAL_MARKET_PROB, PRICE_CEILING, PRICE_FLOOR, PRICE_IMPACT, SIGNAL_NOISE_STD,
    SimulationConfig, TRADE_SIZE_SCALE,
};
use crate::error::SimError;
use crate::types::ConvergenceReport;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

/// Simulates yes-no prediction market dynamics.
///
/// Each step, `n_traders` arrive with noisy private signals of the true
/// outcome probability and nudge the quoted price toward their own estimate.
/// The simulator owns its random generator, so a seeded instance replays the
/// same run bit-for-bit.
pub struct MarketSimulator {
    config: SimulationConfig,
    market_prob: f64,
    last_volume: f64,
    rng: StdRng,
    noise_dist: Normal<f64>,
}

impl MarketSimulator {
    pub fn new(config: SimulationConfig) -> Self {
        Self::from_rng(config, StdRng::from_entropy())
    }

    /// Seeded variant for reproducible runs and tests.
    pub fn with_seed(config: SimulationConfig, seed: u64) -> Self {
        Self::from_rng(config, StdRng::seed_from_u64(seed))
    }

    fn from_rng(config: SimulationConfig, rng: StdRng) -> Self {
        Self {
            config,
            market_prob: INITIAL_MARKET_PROB,
            last_volume: 0.0,
            rng,
            noise_dist: Normal::new(0.0, SIGNAL_NOISE_STD).unwrap(),
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Total trade size absorbed by the market in the most recent step.
    pub fn last_volume(&self) -> f64 {
        self.last_volume
    }

    /// Runs one full market simulation from a fresh starting price and
    /// returns the per-step price and volume paths, aligned index-for-index.
    pub fn simulate(&mut self) -> (Vec<f64>, Vec<f64>) {
        self.reset();

        let mut prices = Vec::with_capacity(self.config.n_steps);
        let mut volumes = Vec::with_capacity(self.config.n_steps);

        for _ in 0..self.config.n_steps {
            prices.push(self.step());
            volumes.push(self.last_volume);
        }

        (prices, volumes)
    }

    /// Summarizes how well a price path tracked this market's true
    /// probability.
    pub fn analyze_convergence(&self, prices: &[f64]) -> Result<ConvergenceReport, SimError> {
        analysis::analyze_convergence(prices, self.config.true_prob)
    }
}

impl Marketable for MarketSimulator {
    /// One market step: every trader draws a private signal and trades on it
    /// against the price as it stands *at that moment*. Later traders in the
    /// same step therefore react to the moves left by earlier ones, so the
    /// trader loop must stay sequential.
    fn step(&mut self) -> f64 {
        let mut volume = 0.0;

        for _ in 0..self.config.n_traders {
            let noise = self.noise_dist.sample(&mut self.rng);
            let signal = (self.config.true_prob + noise).clamp(0.0, 1.0);

            let trade_size = if signal > self.market_prob {
                // Buy YES shares, pushing the price up toward the signal.
                let size = (signal - self.market_prob) * TRADE_SIZE_SCALE;
                self.market_prob += PRICE_IMPACT * size;
                size
            } else {
                // Buy NO shares, pushing the price down toward the signal.
                let size = (self.market_prob - signal) * TRADE_SIZE_SCALE;
                self.market_prob -= PRICE_IMPACT * size;
                size
            };
            volume += trade_size;
        }

        // Trading within a step may overshoot the band; the quoted price never does.
        self.market_prob = self.market_prob.clamp(PRICE_FLOOR, PRICE_CEILING);
        self.last_volume = volume;
        self.market_prob
    }

    fn current_price(&self) -> f64 {
        self.market_prob
    }

    fn reset(&mut self) {
        // The rng is left untouched so seeded construction stays reproducible.
        self.market_prob = INITIAL_MARKET_PROB;
        self.last_volume = 0.0;
    }
}
