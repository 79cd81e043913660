//! Reading income sequences from plain-text files.

use crate::error::{GiniError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load incomes from a file.
///
/// Expected format:
/// - One individual per line; with tab-separated fields the last field is the income
/// - Blank lines and `#` comments are ignored
/// - A first data line whose income field holds no digits is treated as a header
///
/// Negative values are returned as-is; the dataset rejects them.
pub fn read_incomes<P: AsRef<Path>>(path: P) -> Result<Vec<i64>> {
    let file = File::open(path)?;
    parse_incomes(BufReader::new(file))
}

/// Parse incomes from any buffered reader. See [`read_incomes`].
pub fn parse_incomes<R: BufRead>(reader: R) -> Result<Vec<i64>> {
    let mut incomes = Vec::new();
    let mut seen_data_line = false;

    for (line_idx, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let field = trimmed.rsplit('\t').next().unwrap_or(trimmed).trim();
        match field.parse::<i64>() {
            Ok(value) => incomes.push(value),
            Err(_) if !seen_data_line && is_header_field(field) => {}
            Err(_) => {
                return Err(GiniError::InvalidValue {
                    line: line_idx + 1,
                    value: field.to_string(),
                });
            }
        }
        seen_data_line = true;
    }

    Ok(incomes)
}

/// A header names the column; anything carrying a digit is a malformed income.
fn is_header_field(field: &str) -> bool {
    !field.chars().any(|c| c.is_ascii_digit())
}
