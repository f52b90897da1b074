//! Two-column sample-data loader (spec §6 "Data file format", §10).
//!
//! The original system treats this as an external collaborator (the GUI's
//! file-open dialog feeds it a path); the core still needs *some* way to
//! get `(x, y)` pairs without a GUI, so this module reimplements the format
//! directly rather than leaving it unreachable.

use std::fs;
use std::path::Path;

use crate::error::DataError;

/// Load a two-column sample file: `.txt` is tab-separated, `.csv` is
/// comma-separated. Every line, blank or not, produces one `(x, y)` row
/// (spec §6: "empty line count is not validated"); a blank line yields
/// `(0.0, 0.0)`. Fields are parsed with C-locale `atof` semantics: `atof`
/// never fails, so unparseable numeric text also falls back to `0.0`
/// rather than rejecting the row.
pub fn load_samples(path: impl AsRef<Path>) -> Result<(Vec<f64>, Vec<f64>), DataError> {
    let path = path.as_ref();
    let separator = match path.extension().and_then(|ext| ext.to_str()) {
        Some("txt") => '\t',
        Some("csv") => ',',
        other => {
            return Err(DataError::new(format!(
                "unsupported file suffix: {:?} (expected .txt or .csv)",
                other
            )))
        }
    };

    let contents = fs::read_to_string(path)
        .map_err(|e| DataError::new(format!("could not read {}: {e}", path.display())))?;

    parse_samples(&contents, separator)
}

/// Parse already-read file contents; split out for testing without touching
/// the filesystem.
fn parse_samples(contents: &str, separator: char) -> Result<(Vec<f64>, Vec<f64>), DataError> {
    let mut xs = Vec::new();
    let mut ys = Vec::new();

    for (line_no, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            // atof on an empty field yields 0.0; a blank line is a (0.0, 0.0)
            // row, not a skipped one.
            xs.push(0.0);
            ys.push(0.0);
            continue;
        }
        let fields: Vec<&str> = line.split(separator).collect();
        if fields.len() != 2 {
            return Err(DataError::new(format!(
                "line {}: expected 2 columns, found {}",
                line_no + 1,
                fields.len()
            )));
        }
        let x: f64 = fields[0].trim().parse().unwrap_or(0.0);
        let y: f64 = fields[1].trim().parse().unwrap_or(0.0);
        xs.push(x);
        ys.push(y);
    }

    if xs.is_empty() {
        return Err(DataError::new("no data rows read"));
    }

    Ok((xs, ys))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_separated_rows_parse() {
        let (xs, ys) = parse_samples("0\t3\n1\t5\n2\t7\n", '\t').unwrap();
        assert_eq!(xs, vec![0.0, 1.0, 2.0]);
        assert_eq!(ys, vec![3.0, 5.0, 7.0]);
    }

    #[test]
    fn comma_separated_rows_parse() {
        let (xs, ys) = parse_samples("0,3\n1,5\n", ',').unwrap();
        assert_eq!(xs, vec![0.0, 1.0]);
        assert_eq!(ys, vec![3.0, 5.0]);
    }

    #[test]
    fn blank_lines_become_zero_rows() {
        let (xs, ys) = parse_samples("0,1\n\n1,2\n", ',').unwrap();
        assert_eq!(xs, vec![0.0, 0.0, 1.0]);
        assert_eq!(ys, vec![1.0, 0.0, 2.0]);
    }

    #[test]
    fn unparseable_numbers_fall_back_to_zero() {
        let (xs, ys) = parse_samples("abc,3\n1,xyz\n", ',').unwrap();
        assert_eq!(xs, vec![0.0, 1.0]);
        assert_eq!(ys, vec![3.0, 0.0]);
    }

    #[test]
    fn mismatched_columns_are_rejected() {
        assert!(parse_samples("0,1,2\n", ',').is_err());
    }

    #[test]
    fn zero_rows_is_rejected() {
        assert!(parse_samples("", ',').is_err());
    }

    #[test]
    fn unsupported_suffix_is_rejected() {
        let err = load_samples("/tmp/does-not-matter.dat");
        assert!(err.is_err());
    }
}
