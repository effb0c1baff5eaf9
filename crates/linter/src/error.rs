use std::io;
use std::process::ExitStatus;

/// Failure of a lint invocation.
///
/// None of these carry partial results: a failed invocation commits nothing.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
	/// The linter process could not be started.
	#[error("failed to spawn linter `{program}`: {source}")]
	Spawn {
		program: String,
		#[source]
		source: io::Error,
	},
	/// Input/output errors talking to the linter process.
	#[error("linter i/o error: {0}")]
	Io(#[from] io::Error),
	/// The linter exited unsuccessfully without producing a report.
	#[error("linter exited with {status}: {stderr}")]
	Exit { status: ExitStatus, stderr: String },
	/// The linter produced output that is not a recognized report.
	#[error("undecodable linter report: {0}")]
	Decode(#[from] serde_json::Error),
	/// The task driving the invocation panicked or was cancelled.
	#[error("lint task failed: {0}")]
	Task(String),
}
