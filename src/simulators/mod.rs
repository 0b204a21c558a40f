// src/simulators/mod.rs

pub mod market_trait;
pub mod yes_no;

pub use market_trait::Marketable;
pub use yes_no::MarketSimulator;
