use super::{fitness_values, weighted_pick, Select};
use crate::gene::Candidate;
use crate::rng::GaRng;

/// Sigma scaling: each candidate's selection weight is
/// `1 + (fitness - mean) / (2 * sd)`, floored at a small positive value so
/// a candidate more than two standard deviations below the mean still has
/// some (tiny) chance of being picked rather than a weight of zero or less.
/// Falls back to uniform weighting when the population has zero spread.
pub struct Sigma;

const MIN_WEIGHT: f64 = 0.1;

impl Select for Sigma {
    fn select(&self, population: &[Candidate], n: usize, rng: &mut GaRng) -> Vec<usize> {
        let fitness = fitness_values(population);
        let mean = fitness.iter().sum::<f64>() / fitness.len() as f64;
        let variance = fitness.iter().map(|f| (f - mean).powi(2)).sum::<f64>() / fitness.len() as f64;
        let sd = variance.sqrt();

        let weights: Vec<f64> = if sd > 0.0 {
            fitness
                .iter()
                .map(|f| (1.0 + (f - mean) / (2.0 * sd)).max(MIN_WEIGHT))
                .collect()
        } else {
            vec![1.0; fitness.len()]
        };

        (0..n).map(|_| weighted_pick(&weights, rng)).collect()
    }
}
