//! Searches the damped sine for several peaks at once using fitness sharing
//! (niche radius 5, triangular kernel) and roulette wheel selection.
//!
//! Run with `cargo run --example multimodal [seed]`.

use nichealg::{
    evolution::{EvolutionLauncher, EvolutionOptions, LogLevel, Objective},
    rng::RandomNumberGenerator,
    sharing::FitnessSharing,
    Result,
};
use tracing::Level;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let mut rng = match std::env::args().nth(1).and_then(|s| s.parse().ok()) {
        Some(seed) => RandomNumberGenerator::from_seed(seed),
        None => RandomNumberGenerator::new(),
    };

    let sharing = FitnessSharing::new(5.0, 1.0)?;
    let launcher = EvolutionLauncher::multimodal(Objective::damped_sine(), sharing);
    let mut options = EvolutionOptions::multimodal();
    options.set_log_level(LogLevel::Verbose);

    let outcome = launcher.evolve_with(&options, &mut rng, |report| {
        let top: Vec<String> = report
            .leaders
            .iter()
            .map(|r| format!("x={} (f={:.2})", r.phenotype, r.score))
            .collect();
        println!("Generation {:02} | Top {}: {}", report.generation, top.len(), top.join(", "));
    })?;

    println!("\n=== Final population (Top {}) ===", outcome.leaders.len());
    for result in &outcome.leaders {
        println!("{}", result);
    }

    Ok(())
}
