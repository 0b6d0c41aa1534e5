//! Nonlin CLI - Solve nonlinear equations with classical iterative methods.
//!
//! # Usage
//!
//! ```bash
//! # Interactive menu
//! nonlin
//!
//! # Bisection on a custom bracket
//! nonlin bisection --function cubic -a 1 -b 2 --epsilon 1e-8
//!
//! # Newton-Raphson with the iterate table
//! nonlin newton --x0 2 --trace
//!
//! # Compare all three methods and save the summary
//! nonlin compare --save --results-dir results
//! ```

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod error;
mod output;
mod results;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let options = cli.options();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Execute command
    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => commands::menu::run(io::stdin().lock(), &mut out, &options)?,
        Commands::Bisection(args) => {
            commands::bisection::execute(&args, &options, &mut out)?;
        }
        Commands::FixedPoint(args) => {
            commands::fixed_point::execute(&args, &options, &mut out)?;
        }
        Commands::Newton(args) => {
            commands::newton::execute(&args, &options, &mut out)?;
        }
        Commands::Compare(args) => {
            commands::compare::execute(&args, &options, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
