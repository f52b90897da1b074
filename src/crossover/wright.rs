use super::Blend;
use crate::rng::GaRng;

/// Wright's heuristic crossover: both children extrapolate from the fitter
/// parent towards (and potentially past) the weaker one, each along an
/// independently drawn weight (spec §4.5). Requires scalar fitness on both
/// parents; falls back to treating parent1 as the better one when fitness
/// is missing (an unevaluated pair should not reach crossover in the normal
/// generational loop, but this keeps the operator total).
pub struct Wright;

impl Blend for Wright {
    fn blend(
        &self,
        parent1: &[f64; 5],
        parent2: &[f64; 5],
        fitness1: Option<f64>,
        fitness2: Option<f64>,
        rng: &mut GaRng,
    ) -> ([f64; 5], [f64; 5]) {
        let p1_is_better = match (fitness1, fitness2) {
            (Some(f1), Some(f2)) => f1 >= f2,
            _ => true,
        };
        let (better, worse) = if p1_is_better {
            (parent1, parent2)
        } else {
            (parent2, parent1)
        };

        let w1 = rng.real();
        let w2 = rng.real();

        let mut c1 = [0.0; 5];
        let mut c2 = [0.0; 5];
        for j in 0..5 {
            let delta = better[j] - worse[j];
            c1[j] = w1 * delta + better[j];
            c2[j] = w2 * delta + better[j];
        }
        (c1, c2)
    }
}
