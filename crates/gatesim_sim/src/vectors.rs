//! Input vector files.
//!
//! One vector per line. Values are `0`, `1`, `x` or `X`, separated by `;`,
//! `,` or whitespace; a run of values may also be written without separators
//! (`01X`). Text after `#` is a comment and blank lines are skipped. A line
//! holding only `-` is an empty vector, for netlists without primary inputs.

use std::path::Path;

use gatesim_common::Logic;

use crate::error::SimError;

/// Parses vector text into one `Vec<Logic>` per vector line.
pub fn parse_vectors(text: &str) -> Result<Vec<Vec<Logic>>, SimError> {
    let mut vectors = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        if line == "-" {
            vectors.push(Vec::new());
            continue;
        }

        let mut vector = Vec::new();
        for token in line
            .split(|c: char| c == ';' || c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            for c in token.chars() {
                let value = Logic::from_char(c).ok_or_else(|| SimError::VectorParse {
                    line: index + 1,
                    token: token.to_string(),
                })?;
                vector.push(value);
            }
        }
        vectors.push(vector);
    }

    Ok(vectors)
}

/// Reads and parses a vector file.
pub fn load_vectors(path: &Path) -> Result<Vec<Vec<Logic>>, SimError> {
    let text = std::fs::read_to_string(path)?;
    parse_vectors(&text)
}
