// src/lib.rs

// === 1. Declare all the top-level modules ===
pub mod analysis;
pub mod config;
pub mod error;
pub mod simulators;
pub mod types;

// === 2. Re-export the public-facing components to create a clean API ===

// --- From `config` ---
pub use config::SimulationConfig;

// --- From `simulators` ---
pub use simulators::market_trait::Marketable;
pub use simulators::yes_no::MarketSimulator;

// --- From `analysis` ---
pub use analysis::convergence::analyze_convergence;

// --- From `types` ---
pub use types::report::ConvergenceReport;

// --- From `error` ---
pub use error::SimError;
