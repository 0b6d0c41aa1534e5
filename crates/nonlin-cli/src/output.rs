//! Output formatting utilities.

use std::io::Write;

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::error::CliResult;

/// Width of the separator lines.
const RULE_WIDTH: usize = 70;

/// Prints data as a formatted table.
pub fn print_table<T: Tabled>(out: &mut dyn Write, data: &[T]) -> CliResult<()> {
    if data.is_empty() {
        writeln!(out, "No results.")?;
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    writeln!(out, "{}", table)?;
    Ok(())
}

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(out: &mut dyn Write, data: &T) -> CliResult<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(data)?)?;
    Ok(())
}

/// Prints rows as CSV with a header line.
pub fn print_csv<T: Serialize>(out: &mut dyn Write, rows: &[T]) -> CliResult<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints a success message.
pub fn print_success(out: &mut dyn Write, message: &str) -> CliResult<()> {
    writeln!(out, "{} {}", "✓".green(), message)?;
    Ok(())
}

/// Prints an error message.
pub fn print_error(out: &mut dyn Write, message: &str) -> CliResult<()> {
    writeln!(out, "{} {}", "✗".red(), message)?;
    Ok(())
}

/// Prints a warning message.
pub fn print_warning(out: &mut dyn Write, message: &str) -> CliResult<()> {
    writeln!(out, "{} {}", "⚠".yellow(), message)?;
    Ok(())
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a key-value pair with a fixed number of decimals.
    pub fn from_fixed(key: impl Into<String>, value: f64, precision: usize) -> Self {
        Self {
            key: key.into(),
            value: format!("{:.prec$}", value, prec = precision),
        }
    }

    /// Creates a key-value pair in scientific notation.
    pub fn from_sci(key: impl Into<String>, value: f64) -> Self {
        Self {
            key: key.into(),
            value: format!("{:.2e}", value),
        }
    }
}

/// Prints a separator line.
pub fn print_separator(out: &mut dyn Write) -> CliResult<()> {
    writeln!(out, "\n{}", "=".repeat(RULE_WIDTH))?;
    Ok(())
}

/// Prints a header for a section.
pub fn print_header(out: &mut dyn Write, title: &str) -> CliResult<()> {
    print_separator(out)?;
    writeln!(out, "  {}", title.bold())?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    Ok(())
}
