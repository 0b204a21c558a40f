// src/bin/convergence_report.rs

use prediction_market_sim::{MarketSimulator, SimError, SimulationConfig};

fn main() -> Result<(), SimError> {
    let config = SimulationConfig::new(0.7, 100, 1000)?;
    let mut simulator = MarketSimulator::new(config);

    let (prices, _volumes) = simulator.simulate();
    let report = simulator.analyze_convergence(&prices)?;

    println!("Convergence Analysis:");
    println!("  Mean Error: {:.4}", report.mean_error);
    println!("  Final Error: {:.4}", report.final_error);
    println!("  Convergence Time: {} steps", report.convergence_time);

    Ok(())
}
