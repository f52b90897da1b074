//! Fit `2x + 3` from four noiseless samples.
//!
//! Run with `RUST_LOG=debug cargo run --example fit_curve` to see every
//! generation's statistics; without `RUST_LOG` only the start/every-50th
//! summary (emitted at `info`) is shown.

use regression_ga::prelude::*;

fn main() {
    env_logger::init();

    let config: RunConfig = RunConfigBuilder::new()
        .with_population_size(150)
        .with_max_generations(300)
        .with_bounds(Bounds::uniform(-10.0, 10.0))
        .with_function_mask(FunctionMask::all())
        .with_operator_mask(OperatorMask::all())
        .with_chrom_len(1)
        .with_crossover_scheme(CrossoverScheme::BlxAlpha { alpha: 0.5 })
        .with_mutation_scheme(MutationScheme::Gaussian { scale: 8.0 })
        .with_selection_scheme(SelectionScheme::Tournament { size: 3 })
        .try_into()
        .expect("valid run configuration");

    let fitness_fn = FitnessFunction::new(
        vec![0.0, 1.0, 2.0, 3.0],
        vec![3.0, 5.0, 7.0, 9.0],
        ErrorMetric::LeastSquares,
    )
    .expect("x and y must line up");

    let mut ga: Ga = Ga::builder()
        .with_config(config)
        .with_fitness_function(fitness_fn)
        .with_rng(GaRng::from_seed_u64(1))
        .with_callback(|state| {
            if state.generation % 50 == 0 {
                println!(
                    "gen {:>4}  max={:.6}  mean={:.6}",
                    state.generation, state.stats.max, state.stats.mean
                );
            }
        })
        .try_into()
        .expect("valid driver");

    let best = &ga.run()[0];
    println!("best fit: {}", print_infix(&best.chromosome.genes));
    println!("fitness: {:?}", best.fitness());
}
