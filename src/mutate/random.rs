use super::CoefficientMutation;
use crate::rng::GaRng;

/// Resample the coefficient uniformly within its bound (spec §4.5 "Random").
pub struct Random;

impl CoefficientMutation for Random {
    fn mutate_one(&self, _value: f64, bound: (f64, f64), rng: &mut GaRng) -> f64 {
        rng.real_range(bound.0, bound.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_within_bound() {
        let mut rng = GaRng::from_seed_u64(9);
        for _ in 0..100 {
            let v = Random.mutate_one(0.0, (-3.0, 7.0), &mut rng);
            assert!((-3.0..=7.0).contains(&v));
        }
    }
}
