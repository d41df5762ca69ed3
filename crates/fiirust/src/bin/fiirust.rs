//! `fiirust` — base64 encode or decode a file, text, or stdin.
//!
//! Log verbosity follows `RUST_LOG` (e.g. `RUST_LOG=debug`); logs go to
//! stderr so they never mix with encoded output.

use clap::Parser;
use eyre::WrapErr;
use fiirust::cli::{run, Args};
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    run(&args, &mut io::stdin().lock(), &mut io::stdout().lock())
        .wrap_err("fiirust failed")?;
    Ok(())
}
