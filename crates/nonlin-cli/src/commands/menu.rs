//! Interactive menu.

use std::io::{BufRead, Write};

use colored::Colorize;
use tracing::warn;

use crate::cli::RunOptions;
use crate::commands::{bisection, compare, fixed_point, newton};
use crate::error::{CliError, CliResult};
use crate::output::{self, print_separator};

/// A menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Run the bisection scenario.
    Bisection,
    /// Run the fixed-point scenario.
    FixedPoint,
    /// Run the Newton-Raphson scenario.
    Newton,
    /// Run all three and compare.
    Compare,
    /// Leave the menu.
    Quit,
}

impl Choice {
    /// Parses one input line.
    pub fn parse(line: &str) -> CliResult<Self> {
        match line.trim() {
            "1" => Ok(Self::Bisection),
            "2" => Ok(Self::FixedPoint),
            "3" => Ok(Self::Newton),
            "4" => Ok(Self::Compare),
            "0" => Ok(Self::Quit),
            other => Err(CliError::InvalidChoice(other.to_string())),
        }
    }
}

fn print_menu(out: &mut dyn Write) -> CliResult<()> {
    print_separator(out)?;
    writeln!(out, "{}", "SOLVING NONLINEAR EQUATIONS".bold())?;
    writeln!(out, "Choose a method:")?;
    writeln!(out, "  1 - Bisection")?;
    writeln!(out, "  2 - Successive approximations")?;
    writeln!(out, "  3 - Newton-Raphson")?;
    writeln!(out, "  4 - Compare all three")?;
    writeln!(out, "  0 - Quit")?;
    writeln!(out, "{}", "=".repeat(70))?;
    write!(out, "Your choice: ")?;
    out.flush()?;
    Ok(())
}

fn dispatch(choice: Choice, options: &RunOptions, out: &mut dyn Write) -> CliResult<()> {
    match choice {
        Choice::Bisection => {
            bisection::execute(&bisection::BisectionArgs::default(), options, out)?;
        }
        Choice::FixedPoint => {
            fixed_point::execute(&fixed_point::FixedPointArgs::default(), options, out)?;
        }
        Choice::Newton => {
            newton::execute(&newton::NewtonArgs::default(), options, out)?;
        }
        Choice::Compare => {
            compare::execute(&compare::CompareArgs::default(), options, out)?;
        }
        Choice::Quit => {}
    }
    Ok(())
}

/// Runs the menu loop until `0` or end of input.
///
/// Errors from a scenario are printed and the menu is shown again; only IO
/// errors on `out` or `input` end the loop early.
pub fn run<R: BufRead>(mut input: R, out: &mut dyn Write, options: &RunOptions) -> CliResult<()> {
    let mut line = String::new();
    loop {
        print_menu(out)?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        match Choice::parse(&line) {
            Ok(Choice::Quit) => break,
            Ok(choice) => {
                if let Err(e) = dispatch(choice, options, out) {
                    warn!(?choice, error = %e, "scenario failed");
                    output::print_error(out, &e.to_string())?;
                }
            }
            Err(e) => output::print_error(out, &e.to_string())?,
        }
    }

    writeln!(out, "\nEnd of program.")?;
    Ok(())
}
