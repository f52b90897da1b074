//! Gene, chromosome, and candidate types (spec §3).

use crate::token::Operator;

/// One term of the evolved expression: a base-function id, its 5
/// coefficients (conventionally `a, b, c, d, n`), and the operator joining
/// this term to the next one in the chromosome.
#[derive(Debug, Clone, PartialEq)]
pub struct Gene {
    pub fid: usize,
    pub coeffs: [f64; 5],
    pub opid: Operator,
}

impl Gene {
    pub fn new(fid: usize, coeffs: [f64; 5], opid: Operator) -> Self {
        Self { fid, coeffs, opid }
    }
}

/// An ordered sequence of one or more genes. The operator carried by the
/// last gene is dead data: decoding discards it.
#[derive(Debug, Clone, PartialEq)]
pub struct Chromosome {
    pub genes: Vec<Gene>,
}

impl Chromosome {
    pub fn new(genes: Vec<Gene>) -> Self {
        assert!(!genes.is_empty(), "a chromosome must have at least one gene");
        Self { genes }
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

/// A chromosome plus its (possibly stale) fitness. `fitness` is `Some` iff
/// `is_evaluated` is true; any mutation of a gene must clear both together
/// (see [`Candidate::taint`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub chromosome: Chromosome,
    fitness: Option<[f64; 1]>,
}

impl Candidate {
    pub fn new(chromosome: Chromosome) -> Self {
        Self {
            chromosome,
            fitness: None,
        }
    }

    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    pub fn fitness(&self) -> Option<[f64; 1]> {
        self.fitness
    }

    pub fn fitness_value(&self) -> Option<f64> {
        self.fitness.map(|f| f[0])
    }

    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = Some([fitness]);
    }

    /// Clear the fitness, marking the candidate as not (yet) evaluated.
    /// Called after any mutation of a gene field.
    pub fn taint(&mut self) {
        self.fitness = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taint_clears_fitness() {
        let mut cand = Candidate::new(Chromosome::new(vec![Gene::new(
            0,
            [0.0; 5],
            Operator::Add,
        )]));
        cand.set_fitness(1.5);
        assert!(cand.is_evaluated());
        cand.taint();
        assert!(!cand.is_evaluated());
        assert_eq!(cand.fitness(), None);
    }

    #[test]
    #[should_panic]
    fn empty_chromosome_panics() {
        Chromosome::new(vec![]);
    }
}
