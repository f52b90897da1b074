//! Fitness evaluation (spec §4.3): turn a candidate's decoded curve into a
//! single scalar that selection can compare.
//!
//! `fitness = 1 / error`, with `error` computed by one of four metrics and
//! clamped to `f64::MAX` before the reciprocal is taken. An `error` of `NaN`
//! (e.g. the decoded curve itself went NaN somewhere) maps to a fitness of
//! `0.0` rather than propagating — a numerical anomaly is absorbed, never
//! allowed to panic or poison the population (spec §7).

use crate::decoder;
use crate::gene::Candidate;

/// The four selectable error metrics (spec §4.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorMetric {
    /// Sum of squared residuals.
    LeastSquares,
    /// Sum of absolute residuals.
    LeastAbsoluteDeviation,
    /// Root-mean-square residual.
    RootMeanSquare,
    /// Largest absolute residual.
    MinMax,
}

/// A fitness function bound to one data set and one error metric.
///
/// `x` and `y` must have the same length; this is checked once at
/// construction rather than on every evaluation.
pub struct FitnessFunction {
    x: Vec<f64>,
    y: Vec<f64>,
    metric: ErrorMetric,
}

impl FitnessFunction {
    /// `x.len() != y.len()` is a data error (the surrounding file reader
    /// produced mismatched columns); fewer than 2 sample points is a
    /// configuration error (spec §7: no regression is possible against a
    /// single point, surfaced before the run starts, not from the loader).
    pub fn new(x: Vec<f64>, y: Vec<f64>, metric: ErrorMetric) -> Result<Self, crate::error::GaError> {
        if x.len() != y.len() {
            return Err(crate::error::DataError::new(format!(
                "x and y must have the same length (got {} and {})",
                x.len(),
                y.len()
            ))
            .into());
        }
        if x.len() < 2 {
            return Err(crate::error::ConfigError::new(
                "at least 2 sample points are required",
            )
            .into());
        }
        Ok(Self { x, y, metric })
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn metric(&self) -> ErrorMetric {
        self.metric
    }

    /// Decode `candidate`'s chromosome and compute its error under this
    /// function's metric. Every per-point term is clamped to `f64::MAX`
    /// before it is folded into the running accumulator (spec §4.3), so a
    /// single infinite residual cannot turn the whole error into `inf`
    /// while a metric is still summing the rest.
    pub fn error(&self, candidate: &Candidate) -> f64 {
        let predicted = decoder::decode(&candidate.chromosome.genes, &self.x);
        let n = self.x.len() as f64;

        match self.metric {
            ErrorMetric::LeastSquares => {
                predicted
                    .iter()
                    .zip(&self.y)
                    .map(|(p, y)| ((p - y) * (p - y)).min(f64::MAX))
                    .sum::<f64>()
                    / n
            }
            ErrorMetric::LeastAbsoluteDeviation => {
                predicted
                    .iter()
                    .zip(&self.y)
                    .map(|(p, y)| (p - y).abs().min(f64::MAX))
                    .sum::<f64>()
                    / n
            }
            ErrorMetric::RootMeanSquare => {
                let mean_sq = predicted
                    .iter()
                    .zip(&self.y)
                    .map(|(p, y)| ((p - y) * (p - y)).min(f64::MAX))
                    .sum::<f64>()
                    / n;
                mean_sq.sqrt()
            }
            ErrorMetric::MinMax => predicted
                .iter()
                .zip(&self.y)
                .map(|(p, y)| (p - y).abs().min(f64::MAX))
                .fold(0.0_f64, f64::max),
        }
    }

    /// `1 / error(candidate)`, with `NaN` error mapped to `0.0` fitness.
    pub fn fitness(&self, candidate: &Candidate) -> f64 {
        let error = self.error(candidate);
        if error.is_nan() {
            0.0
        } else {
            1.0 / error
        }
    }

    /// Evaluate `candidate` in place, setting its fitness.
    pub fn evaluate(&self, candidate: &mut Candidate) {
        let fitness = self.fitness(candidate);
        candidate.set_fitness(fitness);
    }

    /// Evaluate every candidate in `population` that is not already marked
    /// evaluated (spec §5: re-evaluation is skipped for untouched
    /// candidates, e.g. unmutated elites carried across generations).
    pub fn evaluate_population(&self, population: &mut [Candidate]) {
        for candidate in population.iter_mut() {
            if !candidate.is_evaluated() {
                self.evaluate(candidate);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gene::{Chromosome, Gene};
    use crate::token::Operator;
    use approx::assert_relative_eq;

    fn perfect_linear_candidate() -> Candidate {
        // 2x + 3
        Candidate::new(Chromosome::new(vec![Gene::new(
            1,
            [2.0, 0.0, 0.0, 3.0, 0.0],
            Operator::Add,
        )]))
    }

    #[test]
    fn least_squares_zero_error_gives_max_fitness_reciprocal() {
        let ff = FitnessFunction::new(
            vec![0.0, 1.0, 2.0],
            vec![3.0, 5.0, 7.0],
            ErrorMetric::LeastSquares,
        )
        .unwrap();
        let cand = perfect_linear_candidate();
        assert_relative_eq!(ff.error(&cand), 0.0);
        assert_eq!(ff.fitness(&cand), f64::INFINITY);
    }

    #[test]
    fn lad_and_rmse_agree_on_perfect_fit() {
        let x = vec![0.0, 1.0, 2.0];
        let y = vec![3.0, 5.0, 7.0];
        let lad = FitnessFunction::new(x.clone(), y.clone(), ErrorMetric::LeastAbsoluteDeviation).unwrap();
        let rmse = FitnessFunction::new(x, y, ErrorMetric::RootMeanSquare).unwrap();
        let cand = perfect_linear_candidate();
        assert_relative_eq!(lad.error(&cand), 0.0);
        assert_relative_eq!(rmse.error(&cand), 0.0);
    }

    #[test]
    fn minmax_picks_worst_residual() {
        let ff = FitnessFunction::new(
            vec![0.0, 1.0, 2.0],
            vec![3.0, 10.0, 7.0],
            ErrorMetric::MinMax,
        )
        .unwrap();
        let cand = perfect_linear_candidate();
        // residuals: 0, -5, 0 -> minmax = 5
        assert_relative_eq!(ff.error(&cand), 5.0);
    }

    #[test]
    fn nan_error_gives_zero_fitness() {
        // log of a negative argument is NaN everywhere
        let ff = FitnessFunction::new(vec![-1.0, -2.0], vec![0.0, 0.0], ErrorMetric::LeastSquares).unwrap();
        let cand = Candidate::new(Chromosome::new(vec![Gene::new(
            6,
            [1.0, 1.0, 0.0, 0.0, 0.0],
            Operator::Add,
        )]));
        assert_eq!(ff.fitness(&cand), 0.0);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = FitnessFunction::new(vec![0.0, 1.0], vec![0.0], ErrorMetric::LeastSquares);
        assert!(err.is_err());
    }

    #[test]
    fn evaluate_population_skips_already_evaluated() {
        let ff = FitnessFunction::new(
            vec![0.0, 1.0, 2.0],
            vec![3.0, 5.0, 7.0],
            ErrorMetric::LeastSquares,
        )
        .unwrap();
        let mut cand = perfect_linear_candidate();
        cand.set_fitness(-99.0);
        let mut pop = vec![cand];
        ff.evaluate_population(&mut pop);
        assert_eq!(pop[0].fitness_value(), Some(-99.0));
    }
}
