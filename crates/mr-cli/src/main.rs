//! `metro-rush`: command-line entry point.
//!
//! ```text
//! metro-rush [--algo 1|2] [--csv DIR] [--max-turns N] [--quiet] FILENAME
//! ```
//!
//! The turn report goes to stdout; log lines go to stderr and are filtered
//! by `RUST_LOG` (default `warn`).

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, prelude::*};

mod args;
mod driver;

#[cfg(test)]
mod tests;

use args::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging()?;
    driver::run(&args, io::stdout().lock())?;
    Ok(())
}

fn init_logging() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init()?;

    Ok(())
}
