//! Per-generation statistics and run history (spec §3 "Lifecycle", §4.6).

use crate::gene::Candidate;

/// `max`, `mean`, and *population* standard deviation of a generation's
/// scalar fitness values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    pub max: f64,
    pub mean: f64,
    pub sd: f64,
}

impl GenerationStats {
    /// Compute statistics over an already-evaluated population. Panics if
    /// `population` is empty or any candidate is unevaluated.
    pub fn compute(population: &[Candidate]) -> Self {
        assert!(!population.is_empty(), "cannot compute statistics over an empty population");
        let values: Vec<f64> = population
            .iter()
            .map(|c| c.fitness_value().expect("statistics require a fully evaluated population"))
            .collect();

        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
        let sd = variance.sqrt();

        Self { max, mean, sd }
    }
}

/// The accumulated history of one run: one entry per generation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    pub fitness_max: Vec<f64>,
    pub fitness_mean: Vec<f64>,
    pub fitness_sd: Vec<f64>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, stats: GenerationStats) {
        self.fitness_max.push(stats.max);
        self.fitness_mean.push(stats.mean);
        self.fitness_sd.push(stats.sd);
    }

    pub fn generations(&self) -> usize {
        self.fitness_max.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gene::{Chromosome, Gene};
    use crate::token::Operator;

    fn pop_with(values: &[f64]) -> Vec<Candidate> {
        values
            .iter()
            .map(|&f| {
                let mut c = Candidate::new(Chromosome::new(vec![Gene::new(0, [0.0; 5], Operator::Add)]));
                c.set_fitness(f);
                c
            })
            .collect()
    }

    #[test]
    fn stats_match_hand_computed_values() {
        let pop = pop_with(&[1.0, 2.0, 3.0]);
        let stats = GenerationStats::compute(&pop);
        assert_eq!(stats.max, 3.0);
        assert_eq!(stats.mean, 2.0);
        assert!((stats.sd - (2.0_f64 / 3.0).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn history_accumulates_one_entry_per_push() {
        let mut history = History::new();
        history.push(GenerationStats { max: 1.0, mean: 0.5, sd: 0.1 });
        history.push(GenerationStats { max: 2.0, mean: 1.0, sd: 0.2 });
        assert_eq!(history.generations(), 2);
        assert_eq!(history.fitness_max, vec![1.0, 2.0]);
    }

    #[test]
    #[should_panic]
    fn empty_population_panics() {
        GenerationStats::compute(&[]);
    }
}
