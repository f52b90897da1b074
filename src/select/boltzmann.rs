use super::{fitness_values, weighted_pick, Select};
use crate::gene::Candidate;
use crate::rng::GaRng;

/// Boltzmann selection: weight `exp(fitness / temperature)`. Low
/// temperature sharpens selection pressure towards the fittest; high
/// temperature approaches uniform random selection.
pub struct Boltzmann {
    pub temperature: f64,
}

impl Select for Boltzmann {
    fn select(&self, population: &[Candidate], n: usize, rng: &mut GaRng) -> Vec<usize> {
        let fitness = fitness_values(population);
        // Subtract the max before exponentiating (the standard softmax
        // stabiliser) so a population with large fitness values doesn't
        // overflow to all-infinite weights.
        let max_fitness = fitness.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let weights: Vec<f64> = fitness
            .iter()
            .map(|f| ((f - max_fitness) / self.temperature.max(f64::MIN_POSITIVE)).exp())
            .collect();

        (0..n).map(|_| weighted_pick(&weights, rng)).collect()
    }
}
