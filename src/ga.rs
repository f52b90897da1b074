//! The GA driver (spec §4.6, §5): holds the run configuration, produces the
//! initial population, and drives the generational loop
//! evaluate → statistics → callback → select → crossover → mutate.
//!
//! Construction follows the teacher's builder-then-`TryFrom` idiom (see
//! `strategy::hill_climb::{HillClimbBuilder, HillClimb}` in the pack this
//! crate grew out of).

use crate::config::RunConfig;
use crate::crossover;
use crate::error::ConfigError;
use crate::fitness::FitnessFunction;
use crate::gene::Candidate;
use crate::generate;
use crate::mutate;
use crate::rng::GaRng;
use crate::select::{self, Select};
use crate::stats::{GenerationStats, History};
use itertools::Itertools;
use std::fmt;

/// A read-only snapshot handed to the end-of-generation callback (spec §9
/// "Callback hook"). Borrowed, not owned: the callback is expected to look
/// and return promptly, not to retain this past its call.
pub struct GaState<'a> {
    pub generation: usize,
    pub population: &'a [Candidate],
    pub stats: GenerationStats,
    pub history: &'a History,
}

type Callback = Box<dyn FnMut(&GaState)>;

/// The symbolic-regression GA itself. Single-threaded and cooperative
/// (spec §5): one call to [`Ga::run`] drives the whole generational loop on
/// the calling thread.
pub struct Ga {
    config: RunConfig,
    fitness_fn: FitnessFunction,
    rng: GaRng,
    population: Vec<Candidate>,
    history: History,
    generation: usize,
    callback: Option<Callback>,
}

impl Ga {
    pub fn builder() -> GaBuilder {
        GaBuilder::new()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn population(&self) -> &[Candidate] {
        &self.population
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Run the full `max_generations` loop, then return the population
    /// sorted by fitness descending (spec §4.6 "Return the population
    /// sorted by fitness descending").
    pub fn run(&mut self) -> &[Candidate] {
        log::info!(
            "starting GA run: population_size={}, max_generations={}, chrom_len={}",
            self.config.population_size,
            self.config.max_generations,
            self.config.chrom_len()
        );

        for _ in 0..self.config.max_generations {
            self.step();
        }

        // `step()` leaves `self.population` as freshly produced children,
        // most of which were crossed-over or mutated and so are tainted back
        // to unevaluated (spec §3 "is_evaluated"). Evaluate once more before
        // ranking, or the fitness of most of the final generation would
        // never have been computed.
        self.fitness_fn.evaluate_population(&mut self.population);

        self.population
            .sort_by_key(|c| std::cmp::Reverse(ordered_float::OrderedFloat(c.fitness_value().unwrap())));
        &self.population
    }

    /// One generation: evaluate → statistics → callback → select →
    /// crossover → mutate → replace (spec §5 "Ordering").
    fn step(&mut self) {
        self.fitness_fn.evaluate_population(&mut self.population);

        let stats = GenerationStats::compute(&self.population);
        self.history.push(stats);

        if self.generation % 50 == 0 {
            log::info!(
                "generation {}: max={:.6} mean={:.6} sd={:.6}",
                self.generation,
                stats.max,
                stats.mean,
                stats.sd
            );
        } else {
            log::debug!(
                "generation {}: max={:.6} mean={:.6} sd={:.6}",
                self.generation,
                stats.max,
                stats.mean,
                stats.sd
            );
        }

        if let Some(callback) = self.callback.as_mut() {
            let state = GaState {
                generation: self.generation,
                population: &self.population,
                stats,
                history: &self.history,
            };
            callback(&state);
        }

        let elite = if self.config.elitism {
            self.population
                .iter()
                .max_by_key(|c| ordered_float::OrderedFloat(c.fitness_value().unwrap()))
                .cloned()
        } else {
            None
        };

        let selector = select::scheme_impl(self.config.selection_scheme);
        let parent_indices = selector.select(&self.population, self.config.population_size, &mut self.rng);

        let mut children = Vec::with_capacity(self.config.population_size);
        for pair in parent_indices.iter().copied().chunks(2).into_iter() {
            let pair: Vec<usize> = pair.collect();
            let p1 = &self.population[pair[0]];
            let p2 = if pair.len() > 1 { &self.population[pair[1]] } else { p1 };

            let (mut c1, mut c2) = crossover::crossover_pair(p1, p2, &self.config, &mut self.rng);
            mutate::mutate_candidate(&mut c1, &self.config, &mut self.rng);
            children.push(c1);
            if pair.len() > 1 {
                mutate::mutate_candidate(&mut c2, &self.config, &mut self.rng);
                children.push(c2);
            }
        }
        children.truncate(self.config.population_size);

        // Elitism (spec §9 Open Question, resolved in DESIGN.md): the fittest
        // candidate of this generation always survives untouched into the
        // next one, unconditionally replacing slot 0. Children are freshly
        // crossed-over/mutated and so almost never carry a usable fitness
        // yet, which rules out comparing "worst child vs elite" here.
        if let Some(elite) = elite {
            if let Some(slot) = children.first_mut() {
                *slot = elite;
            }
        }

        self.population = children;
        self.generation += 1;
    }
}

impl fmt::Display for Ga {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ga:")?;
        writeln!(f, "  population_size: {}", self.config.population_size)?;
        writeln!(f, "  max_generations: {}", self.config.max_generations)?;
        writeln!(f, "  chrom_len: {}", self.config.chrom_len())?;
        writeln!(f, "  generation: {}", self.generation)?;
        writeln!(f, "  generations recorded: {}", self.history.generations())
    }
}

/// Fluent builder for [`Ga`].
pub struct GaBuilder {
    config: Option<RunConfig>,
    fitness_fn: Option<FitnessFunction>,
    rng: Option<GaRng>,
    callback: Option<Callback>,
}

impl Default for GaBuilder {
    fn default() -> Self {
        Self {
            config: None,
            fitness_fn: None,
            rng: None,
            callback: None,
        }
    }
}

impl GaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: RunConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_fitness_function(mut self, fitness_fn: FitnessFunction) -> Self {
        self.fitness_fn = Some(fitness_fn);
        self
    }

    pub fn with_rng(mut self, rng: GaRng) -> Self {
        self.rng = Some(rng);
        self
    }

    pub fn with_callback(mut self, callback: impl FnMut(&GaState) + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }
}

impl TryFrom<GaBuilder> for Ga {
    type Error = ConfigError;

    fn try_from(b: GaBuilder) -> Result<Self, Self::Error> {
        let config = b.config.ok_or_else(|| ConfigError::new("Ga requires a config"))?;
        let fitness_fn = b
            .fitness_fn
            .ok_or_else(|| ConfigError::new("Ga requires a fitness function"))?;
        let mut rng = b.rng.unwrap_or_default();

        let population = generate::random_population(&config, &mut rng);

        Ok(Ga {
            config,
            fitness_fn,
            rng,
            population,
            history: History::new(),
            generation: 0,
            callback: b.callback,
        })
    }
}
