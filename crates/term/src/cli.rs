//! CLI schema for the gutterlint binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "gutterlint")]
#[command(about = "Run an external linter over files and show the resulting gutter state")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Lint files once and print markers, status line and diagnostics
	Check(CheckArgs),
}

#[derive(Args, Debug)]
pub struct CheckArgs {
	/// Files to open, one editor each; the first one is focused
	#[arg(required = true)]
	pub files: Vec<PathBuf>,

	/// Linter program reading the document on stdin and writing a JSON report
	#[arg(long, value_name = "PROGRAM")]
	pub linter: Option<String>,

	/// Settings file (TOML, same keys as the editor settings)
	#[arg(long, short = 'c', value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Cursor line (1-indexed) of the focused editor
	#[arg(long, value_name = "LINE")]
	pub cursor_line: Option<usize>,

	/// Arguments passed to the linter; `{type}` and `{locale}` are substituted
	#[arg(last = true, value_name = "ARGS")]
	pub linter_args: Vec<String>,
}

impl CheckArgs {
	/// Zero-based cursor line of the focused editor.
	pub fn cursor(&self) -> usize {
		self.cursor_line.map_or(0, |line| line.saturating_sub(1))
	}
}
