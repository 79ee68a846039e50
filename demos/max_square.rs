//! Maximizes `f(x) = x^2` over 5-bit chromosomes with tournament selection.
//!
//! Run with `cargo run --example max_square`.

use nichealg::{
    evolution::{EvolutionLauncher, EvolutionOptions, LogLevel, Objective},
    rng::RandomNumberGenerator,
    Result,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let launcher = EvolutionLauncher::single_peak(Objective::Square);
    let mut options = EvolutionOptions::single_peak();
    options.set_log_level(LogLevel::Minimal);
    let mut rng = RandomNumberGenerator::new();

    let outcome = launcher.evolve_with(&options, &mut rng, |report| {
        if let Some(best) = report.best() {
            println!(
                "Generation {}: best chromosome = {}, x = {}, fitness = {}",
                report.generation, best.chromosome, best.phenotype, best.score
            );
        }
    })?;

    if let Some(best) = outcome.best() {
        println!("\n=== Final result ===");
        println!("Best chromosome: {}", best.chromosome);
        println!("Best x: {}", best.phenotype);
        println!("Fitness: {}", best.score);
    }

    Ok(())
}
