//! Human-readable infix printer (spec §6 "Printer output").
//!
//! Each operand prints as a bracketed atom (`[…]`) filled in from the
//! function's own formula template (spec §4.1's table); operators print as
//! their glyphs. Numbers use 3-significant-digit formatting, and a leading
//! `+` is inserted before a non-negative trailing constant so two adjacent
//! terms never run together without a visible join.

use crate::gene::Gene;

/// Printed names of the inverse hyperbolic functions differ from their
/// internal identifiers (spec §6): `arsinh→arsh`, `arcosh→arch`,
/// `artanh→arth`; `arctgh`, `arsech`, `arcsch` keep their internal name.
fn printed_name(fid: usize) -> &'static str {
    match fid {
        13 => "arsh",
        14 => "arch",
        15 => "arth",
        _ => crate::functions::FUNCTION_NAMES[fid],
    }
}

/// Format `x` to 3 significant digits, trimming any trailing zeros (and a
/// bare trailing decimal point) the fixed-precision formatting leaves behind.
pub fn format_sig3(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    let magnitude = x.abs().log10().floor() as i32;
    let decimals = (2 - magnitude).max(0) as usize;
    let formatted = format!("{x:.decimals$}");
    if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        formatted
    }
}

/// `x` formatted with an explicit leading sign: `+1.23` or `-1.23`. Used
/// for a coefficient that follows another term inside an atom, so the atom
/// reads as a single joined expression rather than two concatenated numbers.
fn signed(x: f64) -> String {
    if x >= 0.0 {
        format!("+{}", format_sig3(x))
    } else {
        format_sig3(x)
    }
}

/// `b·x + c`, the linear argument shared by most base functions.
fn bxc(b: f64, c: f64) -> String {
    format!("{}x{}", format_sig3(b), signed(c))
}

fn operand_body(fid: usize, coeffs: &[f64; 5]) -> String {
    let [a, b, c, d, n] = *coeffs;
    let name = printed_name(fid);
    match fid {
        0 => format_sig3(c),
        1 => format!("{}x{}", format_sig3(a), signed(d)),
        2 => format!("{}x^{}{}", format_sig3(a), format_sig3(n), signed(d)),
        3 => format!("{}/({})^{}{}", format_sig3(a), bxc(b, c), format_sig3(n), signed(d)),
        4 => format!("{}({})^(1/{}){}", format_sig3(a), bxc(b, c), format_sig3(n), signed(d)),
        5 => format!("{}e^({}){}", format_sig3(a), bxc(b, c), signed(d)),
        6 => format!("{}ln({}){}", format_sig3(a), bxc(b, c), signed(d)),
        7 => format!("{}|x{}|{}", format_sig3(a), signed(c), signed(d)),
        8 => format!("{}sgn(x{}){}", format_sig3(a), signed(-c), signed(d)),
        9 => format!("{}{}({}){}", format_sig3(a), name, bxc(b, c), signed(d)),
        10..=14 => format!("{}{}({}){}", format_sig3(a), name, bxc(b, c), signed(d)),
        15 => format!("{}{}({}x*{}){}", format_sig3(a), name, format_sig3(b), format_sig3(c), signed(d)),
        16 => format!(
            "({}/2)ln(({}+1)/({}-1)){}",
            format_sig3(a),
            bxc(b, c),
            bxc(b, c),
            signed(d)
        ),
        17 => format!(
            "{}ln((1+sqrt(1-({})^2))/({})){}",
            format_sig3(a),
            bxc(b, c),
            bxc(b, c),
            signed(d)
        ),
        18 => format!(
            "{}ln((1+sqrt(1+({})^2))/({})){}",
            format_sig3(a),
            bxc(b, c),
            bxc(b, c),
            signed(d)
        ),
        _ => unreachable!("fid out of range: {fid}"),
    }
}

/// Print one gene's operand as a bracketed atom.
pub fn print_operand(fid: usize, coeffs: &[f64; 5]) -> String {
    format!("[{}]", operand_body(fid, coeffs))
}

/// Print a full chromosome as a human-readable infix string: bracketed
/// atoms joined by operator glyphs, the last gene's (dead) operator
/// omitted.
pub fn print_infix(genes: &[Gene]) -> String {
    let mut out = String::new();
    for (i, gene) in genes.iter().enumerate() {
        out.push_str(&print_operand(gene.fid, &gene.coeffs));
        if i + 1 < genes.len() {
            out.push(gene.opid.glyph());
        }
    }
    out
}
