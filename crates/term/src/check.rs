//! The `check` subcommand.

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, bail};
use gutterlint_editor::{CacheEntry, LintConfig, LintService};
use gutterlint_linter::{CommandEngine, CommandSpec};
use gutterlint_primitives::Severity;
use tracing::{debug, info, warn};

use crate::cli::CheckArgs;
use crate::headless::HeadlessHost;

/// Reads a TOML settings file; a missing path yields the defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<LintConfig> {
	let Some(path) = path else {
		return Ok(LintConfig::default());
	};
	let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
	toml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

/// Linter command from the command line, falling back to the settings file.
fn command_spec(args: &CheckArgs, config: &LintConfig) -> anyhow::Result<CommandSpec> {
	match (&args.linter, &config.command) {
		(Some(program), _) => Ok(CommandSpec::new(program).args(args.linter_args.iter().cloned())),
		(None, Some(spec)) => Ok(spec.clone()),
		(None, None) => bail!("no linter given: pass --linter or set `command` in the settings file"),
	}
}

/// Lints every file once and prints the resulting state of each editor.
///
/// Exits with `1` if any error-severity issue was found and `2` if a check
/// failed.
pub async fn run(args: CheckArgs) -> anyhow::Result<ExitCode> {
	let config = load_config(args.config.as_deref())?;
	let spec = command_spec(&args, &config)?;
	info!(program = %spec.program, "lint.cli.start");

	let mut service = LintService::new(config, Arc::new(CommandEngine::new(spec)));
	let mut host = HeadlessHost::new();

	for file in &args.files {
		if !service.is_supported(file) {
			warn!(file = %file.display(), "lint.cli.unsupported");
		}
		let text = std::fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
		host.open(file, text);
	}
	let editors = host.editors();
	if let Some(&first) = editors.first() {
		host.set_cursor(first, args.cursor());
	}

	service.activate(&mut host);
	while service.cache().editors().any(|editor| service.cache().get(editor).is_some_and(CacheEntry::is_running)) {
		if !service.next_event(&mut host).await {
			break;
		}
	}
	debug!(
		started = service.metrics().runs_started(),
		failed = service.metrics().runs_failed(),
		"lint.cli.settled"
	);

	let mut code = ExitCode::SUCCESS;
	for &editor in &editors {
		host.focus(editor);
		service.on_active_editor_changed(&mut host, Some(editor));
		print!("{}", host.report(editor));

		let Some(entry) = service.cache().get(editor) else {
			continue;
		};
		if entry.issues_by_line().is_none() {
			println!("  check failed");
			code = ExitCode::from(2);
		} else if code == ExitCode::SUCCESS && entry.diagnostics().iter().any(|issue| issue.severity == Severity::Error) {
			code = ExitCode::from(1);
		}
	}

	service.dispose(&mut host);
	Ok(code)
}
