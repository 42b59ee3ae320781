//! Output line formatting.
//!
//! Each simulated vector yields one line holding the primary-output values in
//! net order, joined by `;`. A netlist with no primary outputs yields empty
//! lines.

use std::io::{self, Write};

use gatesim_common::Logic;

/// Separator between values on an output line.
pub const OUTPUT_SEPARATOR: char = ';';

/// Formats one output line, without the trailing newline.
pub fn format_outputs(values: &[Logic]) -> String {
    let mut line = String::with_capacity(values.len() * 2);
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            line.push(OUTPUT_SEPARATOR);
        }
        line.push(value.symbol());
    }
    line
}

/// Writes one newline-terminated line per vector.
pub fn write_outputs<W: Write>(writer: &mut W, lines: &[Vec<Logic>]) -> io::Result<()> {
    for values in lines {
        writeln!(writer, "{}", format_outputs(values))?;
    }
    writer.flush()
}
