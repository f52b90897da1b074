//! Initial-population generation (spec §4.4): random or preset-form.

use crate::config::RunConfig;
use crate::gene::{Candidate, Chromosome, Gene};
use crate::rng::GaRng;
use crate::token::Operator;

fn random_coeffs(cfg: &RunConfig, rng: &mut GaRng) -> [f64; 5] {
    let mut coeffs = [0.0; 5];
    for (slot, (lo, hi)) in coeffs.iter_mut().zip(cfg.bounds.0) {
        *slot = rng.real_range(lo, hi);
    }
    coeffs
}

fn random_fid(cfg: &RunConfig, rng: &mut GaRng) -> usize {
    let allowed = cfg.function_mask.allowed_indices();
    allowed[rng.idx(allowed.len())]
}

fn random_opid(cfg: &RunConfig, rng: &mut GaRng) -> Operator {
    let allowed = cfg.operator_mask.allowed_operators();
    allowed[rng.idx(allowed.len())]
}

/// One randomly generated gene: `fid` and `opid` drawn uniformly from the
/// masks, coefficients drawn uniformly within bounds (spec §4.4 "Random").
fn random_gene(cfg: &RunConfig, rng: &mut GaRng) -> Gene {
    Gene::new(random_fid(cfg, rng), random_coeffs(cfg, rng), random_opid(cfg, rng))
}

/// One preset-shaped gene: `fid`/`opid` come from the preset pattern,
/// coefficients are still drawn at random within bounds (spec §4.4
/// "Preset"). The last gene's `opid` is the smallest operator code, unused.
fn preset_gene(cfg: &RunConfig, preset: &crate::preset::PresetForm, gene_idx: usize, rng: &mut GaRng) -> Gene {
    let fid = preset.fid_at(gene_idx);
    let opid = if gene_idx + 1 < preset.chrom_len() {
        preset.operator_at(gene_idx)
    } else {
        Operator::Add
    };
    Gene::new(fid, random_coeffs(cfg, rng), opid)
}

/// Generate one fresh, unevaluated candidate matching `cfg`'s form spec.
pub fn random_candidate(cfg: &RunConfig, rng: &mut GaRng) -> Candidate {
    let genes = match &cfg.form {
        crate::config::FormSpec::Random { chrom_len } => {
            (0..*chrom_len).map(|_| random_gene(cfg, rng)).collect()
        }
        crate::config::FormSpec::Preset(preset) => (0..preset.chrom_len())
            .map(|i| preset_gene(cfg, preset, i, rng))
            .collect(),
    };
    Candidate::new(Chromosome::new(genes))
}

/// Generate a population of `cfg.population_size` fresh candidates.
pub fn random_population(cfg: &RunConfig, rng: &mut GaRng) -> Vec<Candidate> {
    (0..cfg.population_size)
        .map(|_| random_candidate(cfg, rng))
        .collect()
}
