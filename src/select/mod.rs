//! Selection schemes (spec §6): named as an external collaborator in the
//! original system, with implementation details left unspecified there.
//! This crate has no generic GA base to depend on, so each of the five
//! named schemes is implemented directly, shaped after the teacher's
//! `Compete` trait (select `N` parents from an evaluated population,
//! returning indices into it).

mod boltzmann;
mod rank;
mod roulette;
mod sigma;
mod tournament;

pub use boltzmann::Boltzmann;
pub use rank::Rank;
pub use roulette::Roulette;
pub use sigma::Sigma;
pub use tournament::Tournament;

use crate::config::SelectionScheme;
use crate::gene::Candidate;
use crate::rng::GaRng;

/// Choose `n` parent indices from `population`, which must be fully
/// evaluated (every candidate's `fitness_value()` is `Some`).
pub trait Select {
    fn select(&self, population: &[Candidate], n: usize, rng: &mut GaRng) -> Vec<usize>;
}

pub fn scheme_impl(scheme: SelectionScheme) -> Box<dyn Select> {
    match scheme {
        SelectionScheme::Roulette => Box::new(Roulette),
        SelectionScheme::Tournament { size } => Box::new(Tournament { size }),
        SelectionScheme::Rank => Box::new(Rank),
        SelectionScheme::Sigma => Box::new(Sigma),
        SelectionScheme::Boltzmann { temperature } => Box::new(Boltzmann { temperature }),
    }
}

/// Fitness values of `population`, panicking if any candidate is
/// unevaluated (an internal invariant violation: selection never runs
/// before the generation has been fully scored).
pub(crate) fn fitness_values(population: &[Candidate]) -> Vec<f64> {
    population
        .iter()
        .map(|c| c.fitness_value().expect("selection requires a fully evaluated population"))
        .collect()
}

/// Weighted sampling from `weights` (assumed non-negative, need not sum to
/// 1): draw `u ~ U[0, total)`, walk the cumulative sum, return the first
/// index whose cumulative weight exceeds `u`. Shared by roulette, sigma,
/// and Boltzmann, which differ only in how they compute `weights`.
pub(crate) fn weighted_pick(weights: &[f64], rng: &mut GaRng) -> usize {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return rng.idx(weights.len());
    }
    let u = rng.real_range(0.0, total);
    let mut cumulative = 0.0;
    for (i, w) in weights.iter().enumerate() {
        cumulative += w;
        if u < cumulative {
            return i;
        }
    }
    weights.len() - 1
}
