//! `barren`: interactive barren land analysis.

use anyhow::Result;
use barren::cli::{Console, Session};
use barren::config::Args;
use barren::CliError;
use clap::Parser;
use crossterm::tty::IsTty;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let color = !args.no_color && stdout.is_tty();
    let console = Console::new(stdout.lock(), color);

    let mut session = match Session::new(args.field_config(), io::stdin().lock(), console) {
        Ok(session) => session,
        Err(CliError::Field(err)) => {
            tracing::error!(%err, "invalid field configuration");
            writeln!(
                io::stdout(),
                "Configured field dimensions are invalid. Ending program."
            )?;
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => return Err(err.into()),
    };

    session.run()?;
    Ok(ExitCode::SUCCESS)
}
