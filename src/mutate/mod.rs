//! Mutation operators (spec §4.5): coefficient mutation (three schemes) and
//! form mutation (function/operator resampling).

mod boundary;
mod gaussian;
mod random;

pub use boundary::Boundary;
pub use gaussian::Gaussian;
pub use random::Random;

use crate::config::{Bounds, MutationScheme, RunConfig};
use crate::gene::Candidate;
use crate::rng::GaRng;

/// A coefficient-mutation scheme: for one coefficient, decide its
/// post-mutation value given its current value and bound. Called only when
/// the per-coefficient `U[0,1) <= pm` draw has already succeeded.
pub trait CoefficientMutation {
    fn mutate_one(&self, value: f64, bound: (f64, f64), rng: &mut GaRng) -> f64;
}

fn scheme_impl(scheme: MutationScheme) -> Box<dyn CoefficientMutation> {
    match scheme {
        MutationScheme::Random => Box::new(Random),
        MutationScheme::Boundary => Box::new(Boundary),
        MutationScheme::Gaussian { scale } => Box::new(Gaussian { scale }),
    }
}

/// Mutate every coefficient of every gene in `coeffs`, independently, with
/// probability `pm` per spec §4.5. Always clamps into bound regardless of
/// whether a draw fired, matching the crossover operators' unconditional
/// clamp.
fn mutate_coeffs(
    coeffs: &mut [f64; 5],
    bounds: &Bounds,
    pm: f64,
    scheme: &dyn CoefficientMutation,
    rng: &mut GaRng,
) -> bool {
    let mut changed = false;
    for (j, value) in coeffs.iter_mut().enumerate() {
        if rng.real() <= pm {
            *value = scheme.mutate_one(*value, bounds.0[j], rng);
            changed = true;
        }
    }
    bounds.clamp(coeffs);
    changed
}

/// Form mutation (spec §4.5): for each gene, independently with probability
/// `pm` resample `fid` under `fmask`; independently with probability `pm`
/// resample `opid` under `opmask`. Skipped entirely in preset-form mode
/// (spec §9 Open Question: coefficient mutation still runs in that mode).
fn mutate_form(candidate: &mut Candidate, cfg: &RunConfig, rng: &mut GaRng) -> bool {
    let pm = cfg.mutation_probability;
    let allowed_fids = cfg.function_mask.allowed_indices();
    let allowed_ops = cfg.operator_mask.allowed_operators();
    let mut changed = false;

    for gene in candidate.chromosome.genes.iter_mut() {
        if rng.real() <= pm {
            gene.fid = allowed_fids[rng.idx(allowed_fids.len())];
            changed = true;
        }
        if rng.real() <= pm {
            gene.opid = allowed_ops[rng.idx(allowed_ops.len())];
            changed = true;
        }
    }
    changed
}

/// Mutate one candidate in place per `cfg`'s configured mutation scheme:
/// coefficient mutation on every gene, then (unless running in preset-form
/// mode) form mutation. Clears `is_evaluated` if anything actually changed.
pub fn mutate_candidate(candidate: &mut Candidate, cfg: &RunConfig, rng: &mut GaRng) {
    let scheme = scheme_impl(cfg.mutation_scheme);
    let mut changed = false;

    for gene in candidate.chromosome.genes.iter_mut() {
        if mutate_coeffs(&mut gene.coeffs, &cfg.bounds, cfg.mutation_probability, scheme.as_ref(), rng) {
            changed = true;
        }
    }

    if !cfg.form.is_preset() && mutate_form(candidate, cfg, rng) {
        changed = true;
    }

    if changed {
        candidate.taint();
    }
}
