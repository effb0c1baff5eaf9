use serde::{Deserialize, Serialize};

/// Ordinal classification of an issue.
///
/// Ordering matters: `Warning < Error` drives both the per-line marker
/// selection and the status line color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
	Warning,
	Error,
}

impl Severity {
	/// Maps the linter's numeric severity (`2` = error) to a [`Severity`].
	pub const fn from_code(code: u8) -> Self {
		if code == 2 { Self::Error } else { Self::Warning }
	}

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Warning => "warning",
			Self::Error => "error",
		}
	}
}

impl std::fmt::Display for Severity {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A single lint finding, positioned with zero-based line and column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
	pub line: usize,
	pub column: usize,
	/// Display message, already decorated with the rule name.
	pub message: String,
	pub rule: Option<String>,
	pub severity: Severity,
}

impl Issue {
	/// Builds an issue from the linter's one-based position.
	///
	/// The message is trimmed and suffixed with `(rule: ...)` when the linter
	/// names the rule.
	pub fn from_one_based(line: usize, column: usize, message: &str, rule: Option<&str>, severity: Severity) -> Self {
		let rule = rule.map(str::trim).filter(|r| !r.is_empty());
		let message = match rule {
			Some(rule) => format!("{} (rule: {rule})", message.trim()),
			None => message.trim().to_string(),
		};
		Self {
			line: line.saturating_sub(1),
			column: column.saturating_sub(1),
			message,
			rule: rule.map(str::to_string),
			severity,
		}
	}
}
