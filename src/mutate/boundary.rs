use super::CoefficientMutation;
use crate::rng::GaRng;

/// Snap the coefficient to `lo` or `hi` with equal probability (spec §4.5
/// "Boundary").
pub struct Boundary;

impl CoefficientMutation for Boundary {
    fn mutate_one(&self, _value: f64, bound: (f64, f64), rng: &mut GaRng) -> f64 {
        if rng.bool_() {
            bound.0
        } else {
            bound.1
        }
    }
}
