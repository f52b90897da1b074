//! Preset-form grammar parser (spec §4.7, §6): `digits (op digits)*`.
//!
//! A preset string like `"2*4-1/6"` fixes the function/operator shape of
//! every candidate in a run, leaving only coefficients free to evolve
//! (spec §4.4 "Preset" generation mode).

use crate::error::ConfigError;
use crate::token::Operator;

/// A parsed preset-form vector: the `2L - 1` sequence of 0-based function
/// indices and operators described in spec §4.4.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetForm {
    /// `fids[i]` is gene `i`'s function id, `operators[i]` is gene `i`'s
    /// operator (the operator after gene `L-1` is never stored: it is dead
    /// data, spec §3).
    fids: Vec<usize>,
    operators: Vec<Operator>,
}

impl PresetForm {
    pub fn chrom_len(&self) -> usize {
        self.fids.len()
    }

    pub fn fids(&self) -> impl Iterator<Item = usize> + '_ {
        self.fids.iter().copied()
    }

    pub fn operators(&self) -> impl Iterator<Item = Operator> + '_ {
        self.operators.iter().copied()
    }

    pub fn fid_at(&self, gene_idx: usize) -> usize {
        self.fids[gene_idx]
    }

    /// The operator joining gene `gene_idx` to the next one. Panics for the
    /// last gene, whose operator is dead data and was never recorded.
    pub fn operator_at(&self, gene_idx: usize) -> Operator {
        self.operators[gene_idx]
    }
}

/// Parse a preset-form surface string into its vector form.
///
/// Tokenises alternating digit-runs and single-character operators; rejects
/// an even token count (an expression must start and end on an operand);
/// each digit-run must parse as `1..=19` (converted to the 0-based function
/// index used everywhere else in this crate).
pub fn parse_preset_form(expr: &str) -> Result<PresetForm, ConfigError> {
    let tokens = tokenize(expr)?;
    if tokens.is_empty() {
        return Err(ConfigError::new("preset form must not be empty"));
    }
    if tokens.len() % 2 == 0 {
        return Err(ConfigError::new(format!(
            "preset form must have an odd token count, got {}",
            tokens.len()
        )));
    }

    let mut fids = Vec::new();
    let mut operators = Vec::new();
    for (i, tok) in tokens.iter().enumerate() {
        match tok {
            RawToken::Digits(n) => {
                if !(1..=19).contains(n) {
                    return Err(ConfigError::new(format!(
                        "preset function index {n} out of range 1..=19"
                    )));
                }
                fids.push((*n - 1) as usize);
            }
            RawToken::Op(c) => {
                let op = Operator::from_char(*c).ok_or_else(|| {
                    ConfigError::new(format!("preset form: unrecognised operator '{c}' at token {i}"))
                })?;
                operators.push(op);
            }
        }
    }

    Ok(PresetForm { fids, operators })
}

enum RawToken {
    Digits(u32),
    Op(char),
}

fn tokenize(expr: &str) -> Result<Vec<RawToken>, ConfigError> {
    let mut tokens = Vec::new();
    let mut chars = expr.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            let mut digits = String::new();
            while let Some(&d) = chars.peek() {
                if d.is_ascii_digit() {
                    digits.push(d);
                    chars.next();
                } else {
                    break;
                }
            }
            let n: u32 = digits
                .parse()
                .map_err(|_| ConfigError::new(format!("preset form: bad digit run '{digits}'")))?;
            tokens.push(RawToken::Digits(n));
        } else if Operator::from_char(c).is_some() {
            tokens.push(RawToken::Op(c));
            chars.next();
        } else {
            return Err(ConfigError::new(format!(
                "preset form: unexpected character '{c}'"
            )));
        }
    }
    Ok(tokens)
}
