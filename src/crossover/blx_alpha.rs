use super::Blend;
use crate::rng::GaRng;

/// BLX-α: both children's coefficients are drawn independently from the
/// interval `[min - e, max + e]`, `e = α·(max - min)` (spec §4.5).
pub struct BlxAlpha {
    pub alpha: f64,
}

impl Blend for BlxAlpha {
    fn blend(
        &self,
        parent1: &[f64; 5],
        parent2: &[f64; 5],
        _fitness1: Option<f64>,
        _fitness2: Option<f64>,
        rng: &mut GaRng,
    ) -> ([f64; 5], [f64; 5]) {
        let mut c1 = [0.0; 5];
        let mut c2 = [0.0; 5];
        for j in 0..5 {
            let r_min = parent1[j].min(parent2[j]);
            let r_max = parent1[j].max(parent2[j]);
            let e = self.alpha * (r_max - r_min);
            c1[j] = rng.real_range(r_min - e, r_max + e);
            c2[j] = rng.real_range(r_min - e, r_max + e);
        }
        (c1, c2)
    }
}
