//! Decoding of linter JSON reports.
//!
//! Two shapes are accepted:
//!
//! ```text
//! [{"path": "...", "errors": [record, ...]}, ...]   // per-file report
//! [record, ...]                                     // bare record list
//! ```
//!
//! Only the first file of a per-file report is used; the linter is always fed
//! a single document.

use serde::{Deserialize, Serialize};

/// One finding as reported by the linter, with one-based positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintRecord {
	pub line: usize,
	#[serde(default)]
	pub column: usize,
	pub message: String,
	#[serde(default)]
	pub rule: Option<String>,
	/// Numeric linter severity; `2` means error, anything else warning.
	#[serde(default)]
	pub severity: u8,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Report {
	// Tried first: a file entry would otherwise swallow bare records as an
	// entry with no errors.
	Records(Vec<LintRecord>),
	Files(Vec<FileReport>),
}

#[derive(Deserialize)]
struct FileReport {
	#[serde(default)]
	errors: Vec<LintRecord>,
}

/// Parses raw linter stdout into records.
///
/// Blank output means the linter found nothing.
pub fn parse_report(output: &[u8]) -> Result<Vec<LintRecord>, serde_json::Error> {
	if output.iter().all(u8::is_ascii_whitespace) {
		return Ok(Vec::new());
	}

	Ok(match serde_json::from_slice::<Report>(output)? {
		Report::Records(records) => records,
		Report::Files(files) => files.into_iter().next().map(|f| f.errors).unwrap_or_default(),
	})
}
