//! Chromosome -> infix -> postfix -> vector-value decoding pipeline (spec §4.2).
//!
//! Every function here is pure: no RNG, no mutable state, nothing but the
//! chromosome/token sequence it is handed. That purity is what makes the
//! testable properties in spec §8 ("infix token count", "postfix is
//! permutation-stable on operands", "evaluate round-trip") checkable directly.

use crate::functions;
use crate::token::{Operator, Token};

/// Expand a chromosome into its infix token sequence: operand, operator,
/// operand, operator, ..., operand. The operator of the last gene is dropped
/// (spec §3 "dead data"). Result length is `2*L - 1` for a chromosome of
/// length `L`.
pub fn chromosome_to_infix(genes: &[crate::gene::Gene]) -> Vec<Token> {
    assert!(!genes.is_empty(), "a chromosome must have at least one gene");

    let mut infix = Vec::with_capacity(2 * genes.len() - 1);
    for gene in &genes[..genes.len() - 1] {
        infix.push(Token::Operand {
            fid: gene.fid,
            coeffs: gene.coeffs,
        });
        infix.push(Token::Operator(gene.opid));
    }
    let last = genes.last().unwrap();
    infix.push(Token::Operand {
        fid: last.fid,
        coeffs: last.coeffs,
    });
    infix
}

/// Shunting-yard: infix -> postfix, with a single operator stack.
///
/// For each token: operands go straight to the output; for an operator, pop
/// every stacked operator whose precedence is `>=` the incoming one's before
/// pushing it. The `>=` (not `>`) comparison is the contract: it makes every
/// operator left-associative, including `^` — deliberately not honouring
/// exponentiation's usual right-associativity (spec §4.2, §9).
pub fn infix_to_postfix(infix: &[Token]) -> Vec<Token> {
    let mut postfix = Vec::with_capacity(infix.len());
    let mut operator_stack: Vec<Operator> = Vec::new();

    for token in infix {
        match token {
            Token::Operand { .. } => postfix.push(token.clone()),
            Token::Operator(op) => {
                while let Some(top) = operator_stack.last() {
                    if top.precedence() >= op.precedence() {
                        postfix.push(Token::Operator(operator_stack.pop().unwrap()));
                    } else {
                        break;
                    }
                }
                operator_stack.push(*op);
            }
        }
    }
    while let Some(op) = operator_stack.pop() {
        postfix.push(Token::Operator(op));
    }
    postfix
}

/// Stack-machine evaluation of a postfix expression over the sample vector
/// `x`. Operands evaluate their base function entrywise over `x`; operators
/// pop two vectors (first pop is the right-hand side) and push the entrywise
/// result. Panics if the stack does not end with exactly one vector — that
/// is an internal invariant violation (a malformed postfix sequence), not a
/// recoverable error.
pub fn eval_postfix(postfix: &[Token], x: &[f64]) -> Vec<f64> {
    let mut stack: Vec<Vec<f64>> = Vec::new();

    for token in postfix {
        match token {
            Token::Operand { fid, coeffs } => {
                stack.push(functions::evaluate(*fid, x, coeffs));
            }
            Token::Operator(op) => {
                let rhs = stack.pop().expect("postfix underflow: missing rhs operand");
                let lhs = stack.pop().expect("postfix underflow: missing lhs operand");
                stack.push(op.apply_vec(&lhs, &rhs));
            }
        }
    }

    assert_eq!(
        stack.len(),
        1,
        "postfix evaluation must leave exactly one vector on the stack"
    );
    stack.pop().unwrap()
}

/// Decode a chromosome directly to values over `x` (infix -> postfix -> eval
/// composed together; this is what the fitness function calls).
pub fn decode(genes: &[crate::gene::Gene], x: &[f64]) -> Vec<f64> {
    let infix = chromosome_to_infix(genes);
    let postfix = infix_to_postfix(&infix);
    eval_postfix(&postfix, x)
}

/// Sample a decoded postfix expression at `num_points` equally spaced points
/// between `lo` and `hi` (inclusive of `lo`, per the original's increment
/// loop). Grounded in `original_source/io_utils.cpp::drawFunction`: a pure,
/// GUI-free helper the chart renderer used to plot a fitted curve, kept here
/// so consumers of this crate without a GUI can still export one.
pub fn sample_curve(genes: &[crate::gene::Gene], lo: f64, hi: f64, num_points: usize) -> Vec<(f64, f64)> {
    assert!(lo < hi, "lo must be < hi");
    assert!(num_points > 0, "num_points must be > 0");

    let increment = (hi - lo) / num_points as f64;
    let xs: Vec<f64> = (0..num_points).map(|i| lo + increment * i as f64).collect();
    let ys = decode(genes, &xs);
    xs.into_iter().zip(ys).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gene::Gene;
    use approx::assert_relative_eq;

    fn gene(fid: usize, coeffs: [f64; 5], opid: Operator) -> Gene {
        Gene::new(fid, coeffs, opid)
    }

    #[test]
    fn infix_length_and_alternation() {
        let genes = vec![
            gene(1, [1.0, 0.0, 0.0, 0.0, 0.0], Operator::Mul),
            gene(0, [0.0, 0.0, 2.0, 0.0, 0.0], Operator::Add),
            gene(2, [1.0, 0.0, 0.0, 0.0, 2.0], Operator::Pow),
        ];
        let infix = chromosome_to_infix(&genes);
        assert_eq!(infix.len(), 2 * genes.len() - 1);
        for (i, tok) in infix.iter().enumerate() {
            if i % 2 == 0 {
                assert!(!tok.is_operator());
            } else {
                assert!(tok.is_operator());
            }
        }
        assert!(!infix.first().unwrap().is_operator());
        assert!(!infix.last().unwrap().is_operator());
    }

    #[test]
    fn postfix_preserves_operand_order_and_length() {
        let genes = vec![
            gene(1, [2.0, 0.0, 0.0, 0.0, 0.0], Operator::Mul),
            gene(0, [0.0, 0.0, 3.0, 0.0, 0.0], Operator::Add),
            gene(0, [0.0, 0.0, 4.0, 0.0, 0.0], Operator::Sub),
        ];
        let infix = chromosome_to_infix(&genes);
        let postfix = infix_to_postfix(&infix);
        assert_eq!(postfix.len(), infix.len());

        let operand_order = |tokens: &[Token]| -> Vec<usize> {
            tokens
                .iter()
                .filter_map(|t| match t {
                    Token::Operand { fid, .. } => Some(*fid),
                    Token::Operator(_) => None,
                })
                .collect()
        };
        assert_eq!(operand_order(&infix), operand_order(&postfix));
    }

    #[test]
    fn single_linear_gene_decodes_to_spec_scenario() {
        // [{fid=1, coeffs=[2,_,_,3,_], opid=ADD}] = 2x+3 on x=[0,1,2] -> [3,5,7]
        let genes = vec![gene(1, [2.0, 0.0, 0.0, 3.0, 0.0], Operator::Add)];
        let out = decode(&genes, &[0.0, 1.0, 2.0]);
        assert_relative_eq!(out.as_slice(), [3.0, 5.0, 7.0].as_slice());
    }

    #[test]
    fn two_gene_mul_decodes_to_spec_scenario() {
        // {lin, a=1,d=0, opid=MUL}, {c, c=2, opid=ADD} on x=[4] -> lin*c = 4*2=8
        let genes = vec![
            gene(1, [1.0, 0.0, 0.0, 0.0, 0.0], Operator::Mul),
            gene(0, [0.0, 0.0, 2.0, 0.0, 0.0], Operator::Add),
        ];
        let infix = chromosome_to_infix(&genes);
        let postfix = infix_to_postfix(&infix);
        // postfix should be: lin c *
        assert_eq!(postfix.len(), 3);
        assert!(matches!(postfix[2], Token::Operator(Operator::Mul)));

        let out = eval_postfix(&postfix, &[4.0]);
        assert_relative_eq!(out.as_slice(), [8.0].as_slice());
    }

    #[test]
    fn power_is_left_associative() {
        // 2 ^ 3 ^ 2 should decode as (2^3)^2 = 64, not 2^(3^2) = 512
        let genes = vec![
            gene(0, [0.0, 0.0, 2.0, 0.0, 0.0], Operator::Pow),
            gene(0, [0.0, 0.0, 3.0, 0.0, 0.0], Operator::Pow),
            gene(0, [0.0, 0.0, 2.0, 0.0, 0.0], Operator::Add),
        ];
        let out = decode(&genes, &[0.0]);
        assert_relative_eq!(out[0], 64.0);
    }

    #[test]
    fn sample_curve_has_requested_length() {
        let genes = vec![gene(1, [1.0, 0.0, 0.0, 0.0, 0.0], Operator::Add)];
        let points = sample_curve(&genes, 0.0, 10.0, 5);
        assert_eq!(points.len(), 5);
    }
}
