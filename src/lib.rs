//! Symbolic regression of a univariate function by a mixed-encoded genetic
//! algorithm.
//!
//! Given a sample of real-valued points `(xᵢ, yᵢ)`, [`ga::Ga`] evolves a
//! closed-form function `f(x)`, drawn from a fixed library of 19
//! parameterised [`functions`] combined by infix arithmetic operators, that
//! minimises one of four selectable [`fitness::ErrorMetric`]s against the
//! sample.
//!
//! There are four main elements:
//! * The [expression model](crate::gene) — genes, chromosomes, candidates.
//! * The [decoder](crate::decoder) — chromosome → infix → postfix → values.
//! * The [fitness function](crate::fitness) — decode, then score.
//! * The [Ga](crate::ga::Ga) driver — the generational loop itself.
//!
//! ## Quick usage
//!
//! ```no_run
//! use regression_ga::prelude::*;
//!
//! let config = RunConfigBuilder::new()
//!     .with_population_size(100)
//!     .with_max_generations(200)
//!     .with_bounds(Bounds::uniform(-10.0, 10.0))
//!     .with_function_mask(FunctionMask::all())
//!     .with_operator_mask(OperatorMask::all())
//!     .with_chrom_len(2)
//!     .try_into()
//!     .unwrap();
//!
//! let fitness_fn = FitnessFunction::new(
//!     vec![0.0, 1.0, 2.0, 3.0],
//!     vec![3.0, 5.0, 7.0, 9.0],
//!     ErrorMetric::LeastSquares,
//! )
//! .unwrap();
//!
//! let mut ga: Ga = Ga::builder()
//!     .with_config(config)
//!     .with_fitness_function(fitness_fn)
//!     .try_into()
//!     .unwrap();
//!
//! let best = &ga.run()[0];
//! println!("{}", print_infix(&best.chromosome.genes));
//! ```

pub mod config;
pub mod crossover;
pub mod data;
pub mod decoder;
pub mod error;
pub mod fitness;
pub mod ga;
pub mod gene;
pub mod generate;
pub mod mutate;
pub mod preset;
pub mod printer;
pub mod rng;
pub mod select;
pub mod stats;
pub mod token;

pub mod functions;

/// Common imports for driving a run end to end, mirroring the teacher's
/// `strategy::evolve::prelude` re-export pattern.
pub mod prelude {
    pub use crate::config::{
        Bounds, CrossoverScheme, FormSpec, FunctionMask, MutationScheme, OperatorMask, RunConfig,
        RunConfigBuilder, SelectionScheme,
    };
    pub use crate::decoder::{decode, sample_curve};
    pub use crate::error::{ConfigError, DataError, GaError};
    pub use crate::fitness::{ErrorMetric, FitnessFunction};
    pub use crate::ga::{Ga, GaBuilder, GaState};
    pub use crate::gene::{Candidate, Chromosome, Gene};
    pub use crate::printer::print_infix;
    pub use crate::rng::GaRng;
    pub use crate::token::Operator;
}
