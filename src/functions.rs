//! The fixed library of 19 base functions (spec §4.1).
//!
//! Every base function takes the sample vector `x` and a gene's 5
//! coefficients `[a, b, c, d, n]` and returns one value per entry of `x`. The
//! indices below are part of the interface: `fmask` bit positions and
//! preset-form digit runs refer to this exact order. Out-of-domain inputs
//! (negative log argument, division by zero, ...) are not pre-checked; they
//! produce IEEE infinities/NaNs, absorbed later by the fitness stage.

/// Number of base functions in the library.
pub const FUNCTION_COUNT: usize = 19;

pub const FUNCTION_NAMES: [&str; FUNCTION_COUNT] = [
    "c", "lin", "poly", "rec", "root", "exp", "log", "abs", "sgn", "cos", "arcsin", "arctan",
    "arcsec", "arsinh", "arcosh", "artanh", "arctgh", "arsech", "arcsch",
];

type BaseFn = fn(&[f64], &[f64; 5]) -> Vec<f64>;

const BASE_FUNCTIONS: [BaseFn; FUNCTION_COUNT] = [
    c, lin, poly, rec, root, exp, log, abs, sgn, cos, arcsin, arctan, arcsec, arsinh, arcosh,
    artanh, arctgh, arsech, arcsch,
];

/// Evaluate base function `fid` over every point of `x`. Panics if `fid` is
/// out of range — an out-of-range `fid` is an internal invariant violation
/// (every gene is validated against `fmask` at construction/mutation time).
pub fn evaluate(fid: usize, x: &[f64], coeffs: &[f64; 5]) -> Vec<f64> {
    BASE_FUNCTIONS[fid](x, coeffs)
}

fn c(x: &[f64], coeffs: &[f64; 5]) -> Vec<f64> {
    vec![coeffs[2]; x.len()]
}

fn lin(x: &[f64], coeffs: &[f64; 5]) -> Vec<f64> {
    x.iter().map(|xi| coeffs[0] * xi + coeffs[3]).collect()
}

fn poly(x: &[f64], coeffs: &[f64; 5]) -> Vec<f64> {
    x.iter()
        .map(|xi| coeffs[0] * xi.powf(coeffs[4]) + coeffs[3])
        .collect()
}

fn rec(x: &[f64], coeffs: &[f64; 5]) -> Vec<f64> {
    x.iter()
        .map(|xi| coeffs[0] / (coeffs[1] * xi + coeffs[2]).powf(coeffs[4]) + coeffs[3])
        .collect()
}

fn root(x: &[f64], coeffs: &[f64; 5]) -> Vec<f64> {
    x.iter()
        .map(|xi| coeffs[0] * (coeffs[1] * xi + coeffs[2]).powf(1.0 / coeffs[4]) + coeffs[3])
        .collect()
}

fn exp(x: &[f64], coeffs: &[f64; 5]) -> Vec<f64> {
    x.iter()
        .map(|xi| coeffs[0] * (coeffs[1] * xi + coeffs[2]).exp() + coeffs[3])
        .collect()
}

fn log(x: &[f64], coeffs: &[f64; 5]) -> Vec<f64> {
    x.iter()
        .map(|xi| coeffs[0] * (coeffs[1] * xi + coeffs[2]).ln() + coeffs[3])
        .collect()
}

fn abs(x: &[f64], coeffs: &[f64; 5]) -> Vec<f64> {
    x.iter()
        .map(|xi| coeffs[0] * (xi + coeffs[2]).abs() + coeffs[3])
        .collect()
}

fn sgn(x: &[f64], coeffs: &[f64; 5]) -> Vec<f64> {
    x.iter()
        .map(|xi| {
            let v = xi - coeffs[2];
            if v < 0.0 {
                coeffs[3]
            } else if v == 0.0 {
                coeffs[0] / 2.0 + coeffs[3]
            } else {
                coeffs[0] + coeffs[3]
            }
        })
        .collect()
}

fn cos(x: &[f64], coeffs: &[f64; 5]) -> Vec<f64> {
    x.iter()
        .map(|xi| coeffs[0] * (coeffs[1] * xi + coeffs[2]).cos() + coeffs[3])
        .collect()
}

fn arcsin(x: &[f64], coeffs: &[f64; 5]) -> Vec<f64> {
    x.iter()
        .map(|xi| coeffs[0] * (coeffs[1] * xi + coeffs[2]).asin() + coeffs[3])
        .collect()
}

fn arctan(x: &[f64], coeffs: &[f64; 5]) -> Vec<f64> {
    x.iter()
        .map(|xi| coeffs[0] * (coeffs[1] * xi + coeffs[2]).atan() + coeffs[3])
        .collect()
}

fn arcsec(x: &[f64], coeffs: &[f64; 5]) -> Vec<f64> {
    x.iter()
        .map(|xi| coeffs[0] * (1.0 / (coeffs[1] * xi + coeffs[2])).acos() + coeffs[3])
        .collect()
}

fn arsinh(x: &[f64], coeffs: &[f64; 5]) -> Vec<f64> {
    x.iter()
        .map(|xi| coeffs[0] * (coeffs[1] * xi + coeffs[2]).asinh() + coeffs[3])
        .collect()
}

fn arcosh(x: &[f64], coeffs: &[f64; 5]) -> Vec<f64> {
    x.iter()
        .map(|xi| coeffs[0] * (coeffs[1] * xi + coeffs[2]).acosh() + coeffs[3])
        .collect()
}

/// `a*atanh(b*x*c) + d` — note the `*` between `b*x` and `c`, not `+`. This
/// reproduces a likely bug in the original engine
/// (`original_source/include/regression_ga/src/fitness/decoder.cpp::artanh`);
/// spec §9 records it as an Open Question and asks implementers to flag it
/// rather than silently "fix" it, so the behaviour is preserved as-is.
fn artanh(x: &[f64], coeffs: &[f64; 5]) -> Vec<f64> {
    x.iter()
        .map(|xi| coeffs[0] * (coeffs[1] * xi * coeffs[2]).atanh() + coeffs[3])
        .collect()
}

fn arctgh(x: &[f64], coeffs: &[f64; 5]) -> Vec<f64> {
    x.iter()
        .map(|xi| {
            let u = coeffs[1] * xi + coeffs[2];
            coeffs[0] / 2.0 * ((u + 1.0) / (u - 1.0)).ln() + coeffs[3]
        })
        .collect()
}

fn arsech(x: &[f64], coeffs: &[f64; 5]) -> Vec<f64> {
    x.iter()
        .map(|xi| {
            let u = coeffs[1] * xi + coeffs[2];
            let inner = (1.0 + (1.0 - u * u).sqrt()) / u;
            coeffs[0] * inner.ln() + coeffs[3]
        })
        .collect()
}

fn arcsch(x: &[f64], coeffs: &[f64; 5]) -> Vec<f64> {
    x.iter()
        .map(|xi| {
            let u = coeffs[1] * xi + coeffs[2];
            let inner = (1.0 + (1.0 + u * u).sqrt()) / u;
            coeffs[0] * inner.ln() + coeffs[3]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn constant_broadcasts() {
        let coeffs = [0.0, 0.0, 2.0, 0.0, 0.0];
        assert_eq!(evaluate(0, &[1.0, 2.0, 3.0], &coeffs), vec![2.0, 2.0, 2.0]);
    }

    #[test]
    fn linear_matches_formula() {
        // 2x + 3
        let coeffs = [2.0, 0.0, 0.0, 3.0, 0.0];
        assert_eq!(evaluate(1, &[0.0, 1.0, 2.0], &coeffs), vec![3.0, 5.0, 7.0]);
    }

    #[test]
    fn sgn_is_piecewise_at_the_shift() {
        // a=2, c=1, d=1: x - c compared against 0
        let coeffs = [2.0, 0.0, 1.0, 1.0, 0.0];
        let out = evaluate(8, &[0.0, 1.0, 2.0], &coeffs);
        assert_relative_eq!(out[0], 1.0); // x=0 -> x-c=-1 <0 -> d
        assert_relative_eq!(out[1], 2.0); // x=1 -> x-c=0 -> a/2+d
        assert_relative_eq!(out[2], 3.0); // x=2 -> x-c=1 >0 -> a+d
    }

    #[test]
    fn artanh_multiplies_c_per_spec_bug() {
        let coeffs = [1.0, 1.0, 0.0, 0.0, 0.0];
        // b*x*c with c=0 is always 0 regardless of x, so atanh(0) = 0
        let out = evaluate(15, &[0.5, 0.9], &coeffs);
        assert_relative_eq!(out[0], 0.0);
        assert_relative_eq!(out[1], 0.0);
    }

    #[test]
    fn all_19_functions_are_wired() {
        let coeffs = [1.1, 1.2, 1.3, 0.1, 2.0];
        for fid in 0..FUNCTION_COUNT {
            let out = evaluate(fid, &[1.5, 2.5], &coeffs);
            assert_eq!(out.len(), 2);
        }
    }
}
