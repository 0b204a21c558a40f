// src/simulators/market_trait.rs

/// Anything that can produce a market price path one step at a time.
/// Keeps the price engine swappable behind a single seam.
pub trait Marketable {
    /// Advances the market by one time step and returns the new quoted price.
    fn step(&mut self) -> f64;

    /// The current quoted price, without advancing the market.
    fn current_price(&self) -> f64;

    /// Puts the market back into its pre-trade starting state.
    fn reset(&mut self);
}
