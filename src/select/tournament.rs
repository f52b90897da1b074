use super::{fitness_values, Select};
use crate::gene::Candidate;
use crate::rng::GaRng;

/// Draw `size` candidates uniformly (with replacement) and keep the fittest.
pub struct Tournament {
    pub size: usize,
}

impl Select for Tournament {
    fn select(&self, population: &[Candidate], n: usize, rng: &mut GaRng) -> Vec<usize> {
        let fitness = fitness_values(population);
        let size = self.size.max(1).min(population.len());
        (0..n)
            .map(|_| {
                let mut best = rng.idx(population.len());
                for _ in 1..size {
                    let candidate = rng.idx(population.len());
                    if fitness[candidate] > fitness[best] {
                        best = candidate;
                    }
                }
                best
            })
            .collect()
    }
}
