//! JSON output for one-shot commands
//!
//! One JSON object per line on stdout, UTF-8.

use std::io::{self, Write};

use serde_json::Value;

use super::errors::CliResult;

/// Write a JSON object to stdout
pub fn write_json(data: Value) -> CliResult<()> {
    write_json_to(&mut io::stdout(), data)
}

/// Write a JSON object as a single line to any writer
pub fn write_json_to<W: Write>(writer: &mut W, data: Value) -> CliResult<()> {
    serde_json::to_writer(&mut *writer, &data)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}
