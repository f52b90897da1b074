use super::{weighted_pick, Select};
use crate::gene::Candidate;
use crate::rng::GaRng;

/// Linear ranking: sort ascending by fitness, weight index `i` (0 = worst)
/// by `i + 1`. Immune to fitness magnitude, unlike raw roulette — useful
/// when a handful of super-fit individuals would otherwise dominate.
pub struct Rank;

impl Select for Rank {
    fn select(&self, population: &[Candidate], n: usize, rng: &mut GaRng) -> Vec<usize> {
        let mut order: Vec<usize> = (0..population.len()).collect();
        order.sort_by_key(|&i| ordered_float::OrderedFloat(population[i].fitness_value().unwrap()));

        let weights: Vec<f64> = (0..order.len()).map(|rank| (rank + 1) as f64).collect();
        (0..n)
            .map(|_| {
                let rank_pick = weighted_pick(&weights, rng);
                order[rank_pick]
            })
            .collect()
    }
}
