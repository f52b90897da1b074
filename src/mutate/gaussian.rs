use super::CoefficientMutation;
use crate::rng::GaRng;

/// Perturb the coefficient by `N(0, (hi-lo)/scale)`, then clamp into bound
/// (spec §4.5 "Gaussian"). The caller ([`super::mutate_coeffs`]) performs
/// the final clamp for every coefficient unconditionally, so this only
/// needs to add the perturbation.
pub struct Gaussian {
    pub scale: f64,
}

impl CoefficientMutation for Gaussian {
    fn mutate_one(&self, value: f64, bound: (f64, f64), rng: &mut GaRng) -> f64 {
        let sigma = (bound.1 - bound.0) / self.scale;
        value + rng.normal(0.0, sigma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_scale_sigma_is_a_no_op() {
        // sigma <= 0 path in GaRng::normal returns mu (0.0) unperturbed.
        let mut rng = GaRng::from_seed_u64(13);
        let v = Gaussian { scale: f64::INFINITY }.mutate_one(3.0, (0.0, 10.0), &mut rng);
        assert_eq!(v, 3.0);
    }

    #[test]
    fn perturbation_is_centred_near_original_value() {
        let mut rng = GaRng::from_seed_u64(17);
        let samples: Vec<f64> = (0..500)
            .map(|_| Gaussian { scale: 6.0 }.mutate_one(0.0, (-3.0, 3.0), &mut rng))
            .collect();
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        assert!(mean.abs() < 0.5);
    }
}
