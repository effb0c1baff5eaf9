//! Linter adapter that runs an external program per invocation.
//!
//! The document text is written to the child's stdin and its stdout is
//! decoded with [`parse_report`]. Arguments may contain `{type}` and
//! `{locale}` placeholders, expanded per request.

use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, trace};

use crate::{EngineError, LintEngine, LintRecord, LintRequest, parse_report};

/// How to launch the external linter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandSpec {
	pub program: String,
	#[serde(default)]
	pub args: Vec<String>,
	#[serde(default)]
	pub env: BTreeMap<String, String>,
	#[serde(default)]
	pub cwd: Option<PathBuf>,
}

impl CommandSpec {
	pub fn new(program: impl Into<String>) -> Self {
		Self {
			program: program.into(),
			args: Vec::new(),
			env: BTreeMap::new(),
			cwd: None,
		}
	}

	pub fn arg(mut self, arg: impl Into<String>) -> Self {
		self.args.push(arg.into());
		self
	}

	pub fn args<I, S>(mut self, args: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.args.extend(args.into_iter().map(Into::into));
		self
	}

	/// Returns the argument list with placeholders expanded for `request`.
	pub fn expand_args(&self, request: &LintRequest) -> Vec<String> {
		self.args
			.iter()
			.map(|arg| arg.replace("{type}", request.doc_type.as_str()).replace("{locale}", request.locale.as_str()))
			.collect()
	}
}

/// [`LintEngine`] backed by an external process.
#[derive(Debug, Clone)]
pub struct CommandEngine {
	spec: CommandSpec,
}

impl CommandEngine {
	pub fn new(spec: CommandSpec) -> Self {
		Self { spec }
	}

	pub fn spec(&self) -> &CommandSpec {
		&self.spec
	}
}

#[async_trait]
impl LintEngine for CommandEngine {
	async fn lint(&self, request: LintRequest) -> Result<Vec<LintRecord>, EngineError> {
		let args = self.spec.expand_args(&request);
		debug!(
			program = %self.spec.program,
			?args,
			doc_type = %request.doc_type,
			bytes = request.text.len(),
			"lint.command.spawn"
		);

		let mut cmd = Command::new(&self.spec.program);
		cmd.args(&args)
			.envs(&self.spec.env)
			.stdin(Stdio::piped())
			.stdout(Stdio::piped())
			.stderr(Stdio::piped())
			.kill_on_drop(true);
		if let Some(cwd) = &self.spec.cwd {
			cmd.current_dir(cwd);
		}

		let mut child = cmd.spawn().map_err(|source| EngineError::Spawn {
			program: self.spec.program.clone(),
			source,
		})?;
		let mut stdin = child
			.stdin
			.take()
			.ok_or_else(|| io::Error::other("failed to capture linter stdin"))?;

		// Feed stdin while collecting output so a chatty linter cannot block on a
		// full stdout pipe before it has read the whole document.
		let text = request.text;
		let write = async move {
			stdin.write_all(text.as_bytes()).await?;
			stdin.shutdown().await
		};
		let (written, output) = tokio::join!(write, child.wait_with_output());

		if let Err(err) = written
			&& err.kind() != io::ErrorKind::BrokenPipe
		{
			return Err(EngineError::Io(err));
		}
		let output = output?;
		trace!(status = %output.status, stdout = output.stdout.len(), "lint.command.exit");

		// Most linters exit non-zero when they report errors, so only an empty
		// report makes a failed exit status fatal.
		if !output.status.success() && output.stdout.iter().all(u8::is_ascii_whitespace) {
			return Err(EngineError::Exit {
				status: output.status,
				stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
			});
		}

		Ok(parse_report(&output.stdout)?)
	}
}
