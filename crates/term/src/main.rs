//! gutterlint command-line front-end.
//!
//! Drives the lint service against a headless host: each file becomes an
//! editor, the first one focused, and the resulting markers, status line and
//! diagnostics are printed once every check has finished.

mod check;
mod cli;
mod headless;

use std::process::ExitCode;

use clap::Parser;
use cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
	let cli = Cli::parse();

	setup_tracing(cli.verbose);

	match cli.command {
		Command::Check(args) => check::run(args).await,
	}
}

/// Logs to stderr, filtered by `GUTTERLINT_LOG` when set.
fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_env("GUTTERLINT_LOG").unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("gutterlint_editor=debug,gutterlint_linter=debug,gutterlint=debug,info")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(true)
		.init();
}
