use super::{fitness_values, weighted_pick, Select};
use crate::gene::Candidate;
use crate::rng::GaRng;

/// Fitness-proportionate selection: probability of being picked is
/// proportional to raw fitness.
pub struct Roulette;

impl Select for Roulette {
    fn select(&self, population: &[Candidate], n: usize, rng: &mut GaRng) -> Vec<usize> {
        let weights = fitness_values(population);
        (0..n).map(|_| weighted_pick(&weights, rng)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::tests::population_with_fitness;

    #[test]
    fn never_picks_an_out_of_range_index() {
        let pop = population_with_fitness(&[3.0, 1.0, 0.0, 2.0]);
        let mut rng = GaRng::from_seed_u64(21);
        let picked = Roulette.select(&pop, 50, &mut rng);
        assert!(picked.iter().all(|&i| i < pop.len()));
    }
}
