//! Crossover operators (spec §4.5): three real-coded blending schemes
//! sharing one skeleton, plus uniform crossover on the combinatorial
//! (`fid`/`opid`) fields.

mod blx_alpha;
mod simulated_binary;
mod wright;

pub use blx_alpha::BlxAlpha;
pub use simulated_binary::SimulatedBinary;
pub use wright::Wright;

use crate::config::{CrossoverScheme, RunConfig};
use crate::gene::Candidate;
use crate::rng::GaRng;

/// A real-coded coefficient blending scheme. Produces both children's
/// coefficient vectors from both parents' in one call (SBX and Wright need
/// to draw their random parameter once per call, not once per
/// coefficient — see spec §4.5).
pub trait Blend {
    fn blend(
        &self,
        parent1: &[f64; 5],
        parent2: &[f64; 5],
        fitness1: Option<f64>,
        fitness2: Option<f64>,
        rng: &mut GaRng,
    ) -> ([f64; 5], [f64; 5]);
}

fn scheme_impl(scheme: CrossoverScheme) -> Box<dyn Blend> {
    match scheme {
        CrossoverScheme::BlxAlpha { alpha } => Box::new(BlxAlpha { alpha }),
        CrossoverScheme::SimulatedBinary { eta } => Box::new(SimulatedBinary { eta }),
        CrossoverScheme::Wright => Box::new(Wright),
    }
}

/// Uniform crossover on the combinatorial fields, gene-by-gene: with
/// probability ½ swap `(fid, coeffs)` between the two children, and
/// independently with probability ½ swap `opid` (spec §4.5). Operates on
/// already-blended coefficient vectors, so `(fid, coeffs)` travel together.
fn uniform_combinatorial_crossover(
    child1_genes: &mut [(usize, [f64; 5], crate::token::Operator)],
    child2_genes: &mut [(usize, [f64; 5], crate::token::Operator)],
    rng: &mut GaRng,
) {
    for (g1, g2) in child1_genes.iter_mut().zip(child2_genes.iter_mut()) {
        if rng.bool_() {
            std::mem::swap(&mut g1.0, &mut g2.0);
            std::mem::swap(&mut g1.1, &mut g2.1);
        }
        if rng.bool_() {
            std::mem::swap(&mut g1.2, &mut g2.2);
        }
    }
}

/// Apply crossover to a pair of parents, producing two children.
///
/// Shared skeleton for all three schemes (spec §4.5): draw `u ~ U[0,1)`; if
/// `u > pc`, clone the parents unchanged; otherwise blend coefficients
/// per-gene with the configured scheme, apply uniform crossover on the
/// combinatorial fields, clear `is_evaluated` on both children, and clamp
/// every coefficient into bound.
pub fn crossover_pair(parent1: &Candidate, parent2: &Candidate, cfg: &RunConfig, rng: &mut GaRng) -> (Candidate, Candidate) {
    if rng.real() > cfg.crossover_probability {
        return (parent1.clone(), parent2.clone());
    }

    let scheme = scheme_impl(cfg.crossover_scheme);
    let fitness1 = parent1.fitness_value();
    let fitness2 = parent2.fitness_value();

    let mut child1_genes: Vec<(usize, [f64; 5], crate::token::Operator)> = Vec::with_capacity(parent1.chromosome.len());
    let mut child2_genes: Vec<(usize, [f64; 5], crate::token::Operator)> = Vec::with_capacity(parent1.chromosome.len());

    for (g1, g2) in parent1.chromosome.genes.iter().zip(&parent2.chromosome.genes) {
        let (c1, c2) = scheme.blend(&g1.coeffs, &g2.coeffs, fitness1, fitness2, rng);
        child1_genes.push((g1.fid, c1, g1.opid));
        child2_genes.push((g2.fid, c2, g2.opid));
    }

    uniform_combinatorial_crossover(&mut child1_genes, &mut child2_genes, rng);

    let finish = |genes: Vec<(usize, [f64; 5], crate::token::Operator)>| -> Candidate {
        let genes = genes
            .into_iter()
            .map(|(fid, mut coeffs, opid)| {
                cfg.bounds.clamp(&mut coeffs);
                crate::gene::Gene::new(fid, coeffs, opid)
            })
            .collect();
        crate::gene::Candidate::new(crate::gene::Chromosome::new(genes))
    };

    (finish(child1_genes), finish(child2_genes))
}
