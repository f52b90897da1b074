//! Run configuration (spec §3 "Run configuration", §4.4, §7).
//!
//! Follows the teacher's builder idiom: a plain `RunConfigBuilder` collects
//! `with_*` calls, and `TryFrom<RunConfigBuilder>` performs every validation
//! spec §7 calls out as a configuration error, all before the generational
//! loop ever starts.

use crate::error::ConfigError;
use crate::fitness::ErrorMetric;
use crate::functions::FUNCTION_COUNT;
use crate::preset;
use crate::token::{Operator, ALL_OPERATORS};

/// Inclusive per-coefficient bounds, one pair per `[a, b, c, d, n]` slot.
/// A tuple rather than `std::ops::Range` because `lo == hi` (a pinned
/// coefficient) must be representable and `Range`'s `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds(pub [(f64, f64); 5]);

impl Bounds {
    pub fn uniform(lo: f64, hi: f64) -> Self {
        Self([(lo, hi); 5])
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (j, (lo, hi)) in self.0.iter().enumerate() {
            if lo > hi {
                return Err(ConfigError::new(format!(
                    "bound {j}: lo ({lo}) must be <= hi ({hi})"
                )));
            }
        }
        Ok(())
    }

    pub fn clamp(&self, coeffs: &mut [f64; 5]) {
        for (v, (lo, hi)) in coeffs.iter_mut().zip(self.0) {
            *v = v.clamp(lo, hi);
        }
    }
}

/// A `0`/`1` bitmask selecting which of the 19 base functions are
/// admissible. Must name at least one function.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionMask(Vec<bool>);

impl FunctionMask {
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let bits = parse_bitmask(s, FUNCTION_COUNT, "function mask")?;
        Ok(Self(bits))
    }

    pub fn all() -> Self {
        Self(vec![true; FUNCTION_COUNT])
    }

    pub fn is_allowed(&self, fid: usize) -> bool {
        self.0[fid]
    }

    /// Every index `i` with `fmask[i] == '1'`, in ascending order.
    pub fn allowed_indices(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, &bit)| bit.then_some(i))
            .collect()
    }
}

/// A `0`/`1` bitmask selecting which of the 5 operators are admissible.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorMask(Vec<bool>);

impl OperatorMask {
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let bits = parse_bitmask(s, ALL_OPERATORS.len(), "operator mask")?;
        Ok(Self(bits))
    }

    pub fn all() -> Self {
        Self(vec![true; ALL_OPERATORS.len()])
    }

    pub fn is_allowed(&self, op: Operator) -> bool {
        self.0[op.index()]
    }

    pub fn allowed_operators(&self) -> Vec<Operator> {
        ALL_OPERATORS
            .into_iter()
            .filter(|op| self.is_allowed(*op))
            .collect()
    }
}

fn parse_bitmask(s: &str, expected_len: usize, name: &str) -> Result<Vec<bool>, ConfigError> {
    if s.len() != expected_len {
        return Err(ConfigError::new(format!(
            "{name} must have length {expected_len}, got {}",
            s.len()
        )));
    }
    let mut bits = Vec::with_capacity(expected_len);
    for c in s.chars() {
        match c {
            '0' => bits.push(false),
            '1' => bits.push(true),
            other => {
                return Err(ConfigError::new(format!(
                    "{name} must contain only '0'/'1', found '{other}'"
                )))
            }
        }
    }
    if !bits.iter().any(|&b| b) {
        return Err(ConfigError::new(format!("{name} must have at least one '1'")));
    }
    Ok(bits)
}

/// The three real-coded crossover schemes of spec §4.5, each with its scalar
/// parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CrossoverScheme {
    /// `α`, the blend-exploration factor.
    BlxAlpha { alpha: f64 },
    /// `η`, the distribution index (larger = children closer to parents).
    SimulatedBinary { eta: f64 },
    /// No free parameter; draws two independent weights per call.
    Wright,
}

/// The three coefficient-mutation schemes of spec §4.5.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MutationScheme {
    Random,
    Boundary,
    /// `scale` divides `(hi - lo)` to produce each coefficient's `σ`.
    Gaussian { scale: f64 },
}

/// The five named selection schemes of spec §6. The core spec delegates
/// their implementation to an external generic GA base; this crate has no
/// such collaborator to depend on, so [`crate::select`] implements all five
/// directly, parameterised the way GA literature and the teacher's own
/// `Compete` trait shape them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionScheme {
    Roulette,
    Tournament { size: usize },
    Rank,
    Sigma,
    Boltzmann { temperature: f64 },
}

/// Either a chromosome length for random generation, or a parsed preset
/// form that also fixes the length.
#[derive(Debug, Clone, PartialEq)]
pub enum FormSpec {
    Random { chrom_len: usize },
    Preset(preset::PresetForm),
}

impl FormSpec {
    pub fn chrom_len(&self) -> usize {
        match self {
            FormSpec::Random { chrom_len } => *chrom_len,
            FormSpec::Preset(p) => p.chrom_len(),
        }
    }

    pub fn is_preset(&self) -> bool {
        matches!(self, FormSpec::Preset(_))
    }
}

/// Fully validated run configuration. Construct via [`RunConfigBuilder`].
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub population_size: usize,
    pub max_generations: usize,
    pub crossover_probability: f64,
    pub mutation_probability: f64,
    pub bounds: Bounds,
    pub function_mask: FunctionMask,
    pub operator_mask: OperatorMask,
    pub crossover_scheme: CrossoverScheme,
    pub mutation_scheme: MutationScheme,
    pub selection_scheme: SelectionScheme,
    pub error_metric: ErrorMetric,
    pub form: FormSpec,
    pub elitism: bool,
}

impl RunConfig {
    pub fn chrom_len(&self) -> usize {
        self.form.chrom_len()
    }
}

/// Fluent builder for [`RunConfig`], mirroring the teacher's
/// `with_*`-then-`TryFrom` construction pattern.
#[derive(Debug, Clone)]
pub struct RunConfigBuilder {
    population_size: Option<usize>,
    max_generations: Option<usize>,
    crossover_probability: f64,
    mutation_probability: f64,
    bounds: Option<Bounds>,
    function_mask: Option<FunctionMask>,
    operator_mask: Option<OperatorMask>,
    crossover_scheme: CrossoverScheme,
    mutation_scheme: MutationScheme,
    selection_scheme: SelectionScheme,
    error_metric: ErrorMetric,
    form: Option<FormSpec>,
    elitism: bool,
}

impl Default for RunConfigBuilder {
    fn default() -> Self {
        Self {
            population_size: None,
            max_generations: None,
            crossover_probability: 0.8,
            mutation_probability: 0.05,
            bounds: None,
            function_mask: None,
            operator_mask: None,
            crossover_scheme: CrossoverScheme::BlxAlpha { alpha: 0.5 },
            mutation_scheme: MutationScheme::Gaussian { scale: 10.0 },
            selection_scheme: SelectionScheme::Tournament { size: 3 },
            error_metric: ErrorMetric::LeastSquares,
            form: None,
            elitism: true,
        }
    }
}

impl RunConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = Some(n);
        self
    }

    pub fn with_max_generations(mut self, g: usize) -> Self {
        self.max_generations = Some(g);
        self
    }

    pub fn with_crossover_probability(mut self, pc: f64) -> Self {
        self.crossover_probability = pc;
        self
    }

    pub fn with_mutation_probability(mut self, pm: f64) -> Self {
        self.mutation_probability = pm;
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn with_function_mask(mut self, mask: FunctionMask) -> Self {
        self.function_mask = Some(mask);
        self
    }

    pub fn with_operator_mask(mut self, mask: OperatorMask) -> Self {
        self.operator_mask = Some(mask);
        self
    }

    pub fn with_crossover_scheme(mut self, scheme: CrossoverScheme) -> Self {
        self.crossover_scheme = scheme;
        self
    }

    pub fn with_mutation_scheme(mut self, scheme: MutationScheme) -> Self {
        self.mutation_scheme = scheme;
        self
    }

    pub fn with_selection_scheme(mut self, scheme: SelectionScheme) -> Self {
        self.selection_scheme = scheme;
        self
    }

    pub fn with_error_metric(mut self, metric: ErrorMetric) -> Self {
        self.error_metric = metric;
        self
    }

    pub fn with_chrom_len(mut self, chrom_len: usize) -> Self {
        self.form = Some(FormSpec::Random { chrom_len });
        self
    }

    /// Parse `expr` with [`crate::preset::parse_preset_form`] and fix the
    /// chromosome to that pattern (spec §4.7).
    pub fn with_preset_form(mut self, expr: &str) -> Result<Self, ConfigError> {
        let preset = preset::parse_preset_form(expr)?;
        self.form = Some(FormSpec::Preset(preset));
        Ok(self)
    }

    pub fn with_elitism(mut self, elitism: bool) -> Self {
        self.elitism = elitism;
        self
    }
}

impl TryFrom<RunConfigBuilder> for RunConfig {
    type Error = ConfigError;

    fn try_from(b: RunConfigBuilder) -> Result<Self, Self::Error> {
        let population_size = b
            .population_size
            .ok_or_else(|| ConfigError::new("population_size is required"))?;
        if population_size == 0 {
            return Err(ConfigError::new("population_size must be > 0"));
        }

        let max_generations = b
            .max_generations
            .ok_or_else(|| ConfigError::new("max_generations is required"))?;

        if !(0.0..=1.0).contains(&b.crossover_probability) {
            return Err(ConfigError::new("crossover_probability must be in [0,1]"));
        }
        if !(0.0..=1.0).contains(&b.mutation_probability) {
            return Err(ConfigError::new("mutation_probability must be in [0,1]"));
        }

        let bounds = b.bounds.ok_or_else(|| ConfigError::new("bounds are required"))?;
        bounds.validate()?;

        let function_mask = b
            .function_mask
            .ok_or_else(|| ConfigError::new("function_mask is required"))?;
        let operator_mask = b
            .operator_mask
            .ok_or_else(|| ConfigError::new("operator_mask is required"))?;

        let form = b.form.ok_or_else(|| {
            ConfigError::new("either with_chrom_len or with_preset_form is required")
        })?;
        if form.chrom_len() == 0 {
            return Err(ConfigError::new("chrom_len must be > 0"));
        }

        if let FormSpec::Preset(preset) = &form {
            for fid in preset.fids() {
                if !function_mask.is_allowed(fid) {
                    return Err(ConfigError::new(format!(
                        "preset form uses fid {fid} which function_mask disallows"
                    )));
                }
            }
            for op in preset.operators() {
                if !operator_mask.is_allowed(op) {
                    return Err(ConfigError::new(format!(
                        "preset form uses operator '{op}' which operator_mask disallows"
                    )));
                }
            }
        }

        Ok(RunConfig {
            population_size,
            max_generations,
            crossover_probability: b.crossover_probability,
            mutation_probability: b.mutation_probability,
            bounds,
            function_mask,
            operator_mask,
            crossover_scheme: b.crossover_scheme,
            mutation_scheme: b.mutation_scheme,
            selection_scheme: b.selection_scheme,
            error_metric: b.error_metric,
            form,
            elitism: b.elitism,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_builder() -> RunConfigBuilder {
        RunConfigBuilder::new()
            .with_population_size(20)
            .with_max_generations(10)
            .with_bounds(Bounds::uniform(-10.0, 10.0))
            .with_function_mask(FunctionMask::all())
            .with_operator_mask(OperatorMask::all())
            .with_chrom_len(3)
    }

    #[test]
    fn valid_config_builds() {
        let cfg = RunConfig::try_from(base_builder()).unwrap();
        assert_eq!(cfg.chrom_len(), 3);
    }

    #[test]
    fn missing_population_size_is_rejected() {
        let b = RunConfigBuilder::new()
            .with_max_generations(10)
            .with_bounds(Bounds::uniform(-1.0, 1.0))
            .with_function_mask(FunctionMask::all())
            .with_operator_mask(OperatorMask::all())
            .with_chrom_len(1);
        assert!(RunConfig::try_from(b).is_err());
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let b = base_builder().with_bounds(Bounds([(1.0, -1.0); 5]));
        assert!(RunConfig::try_from(b).is_err());
    }

    #[test]
    fn function_mask_wrong_length_is_rejected() {
        assert!(FunctionMask::parse("01").is_err());
    }

    #[test]
    fn function_mask_all_zero_is_rejected() {
        assert!(FunctionMask::parse(&"0".repeat(FUNCTION_COUNT)).is_err());
    }

    #[test]
    fn preset_form_outside_mask_is_rejected() {
        let mask = "1".to_string() + &"0".repeat(FUNCTION_COUNT - 1); // only fid 0 allowed
        let b = RunConfigBuilder::new()
            .with_population_size(5)
            .with_max_generations(1)
            .with_bounds(Bounds::uniform(-1.0, 1.0))
            .with_function_mask(FunctionMask::parse(&mask).unwrap())
            .with_operator_mask(OperatorMask::all())
            .with_preset_form("2+1")
            .unwrap();
        assert!(RunConfig::try_from(b).is_err());
    }

    #[test]
    fn crossover_probability_out_of_range_is_rejected() {
        let b = base_builder().with_crossover_probability(1.5);
        assert!(RunConfig::try_from(b).is_err());
    }
}
