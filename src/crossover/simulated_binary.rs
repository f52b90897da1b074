use super::Blend;
use crate::rng::GaRng;

/// Simulated binary crossover (SBX): one `β` is drawn per crossover call
/// (not per coefficient, spec §4.5) from the distribution with index `η`,
/// then applied identically to every coefficient.
pub struct SimulatedBinary {
    pub eta: f64,
}

impl Blend for SimulatedBinary {
    fn blend(
        &self,
        parent1: &[f64; 5],
        parent2: &[f64; 5],
        _fitness1: Option<f64>,
        _fitness2: Option<f64>,
        rng: &mut GaRng,
    ) -> ([f64; 5], [f64; 5]) {
        let u = rng.real();
        let exponent = 1.0 / (self.eta + 1.0);
        let beta = if u <= 0.5 {
            (2.0 * u).powf(exponent)
        } else {
            (1.0 / (2.0 * (1.0 - u))).powf(exponent)
        };

        let mut c1 = [0.0; 5];
        let mut c2 = [0.0; 5];
        for j in 0..5 {
            c1[j] = 0.5 * ((1.0 - beta) * parent1[j] + (1.0 + beta) * parent2[j]);
            c2[j] = 0.5 * ((1.0 + beta) * parent1[j] + (1.0 - beta) * parent2[j]);
        }
        (c1, c2)
    }
}
