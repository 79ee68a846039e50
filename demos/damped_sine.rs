//! Maximizes `f(x) = x * sin(alpha * x)` over 8-bit chromosomes with a plain
//! tournament. Without sharing the population usually collapses onto one peak.
//!
//! Run with `cargo run --example damped_sine [seed]`.

use nichealg::{
    evolution::{EvolutionLauncher, EvolutionOptions, Objective},
    rng::RandomNumberGenerator,
    Result,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut rng = match std::env::args().nth(1).and_then(|s| s.parse().ok()) {
        Some(seed) => RandomNumberGenerator::from_seed(seed),
        None => RandomNumberGenerator::new(),
    };

    let launcher = EvolutionLauncher::single_peak(Objective::damped_sine());
    let options = EvolutionOptions::damped_sine();

    let outcome = launcher.evolve_with(&options, &mut rng, |report| {
        if let Some(best) = report.best() {
            println!(
                "Gen {:02} | best: {}, x={}, fitness={:.4}",
                report.generation, best.chromosome, best.phenotype, best.score
            );
        }
    })?;

    if let Some(best) = outcome.best() {
        println!("\n=== Final result ===");
        println!("Best chromosome: {}", best.chromosome);
        println!("Best x: {}", best.phenotype);
        println!("Fitness: {:.4}", best.score);
    }

    Ok(())
}
