//! Integration settings.
//!
//! Hosts deserialize [`LintConfig`] from their own settings store (keys are
//! camelCase, e.g. `jsLikeExt`, `severityLevel`); reading configuration files
//! is left to the host.

use std::time::Duration;

use gutterlint_linter::CommandSpec;
use gutterlint_primitives::{DocType, Locale, Severity};
use serde::{Deserialize, Serialize};

use crate::eviction::DEFAULT_EVICTION_SLACK;
use crate::scheduler::DEFAULT_DEBOUNCE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LintConfig {
	/// Language of linter messages; `en` or the linter's native reporter.
	pub locale: Locale,
	/// Minimum numeric linter severity kept (`0` keeps everything, `2` only
	/// errors).
	#[serde(alias = "level")]
	pub severity_level: u8,
	pub js_like_ext: Vec<String>,
	pub css_like_ext: Vec<String>,
	pub html_like_ext: Vec<String>,
	pub error_color: String,
	pub warning_color: String,
	/// Quiet period after an edit before the linter runs.
	pub debounce_ms: u64,
	/// Non-visible entries tolerated before the cache is pruned.
	pub eviction_slack: usize,
	/// External linter used by front-ends that run a [`CommandSpec`].
	pub command: Option<CommandSpec>,
}

impl Default for LintConfig {
	fn default() -> Self {
		Self {
			locale: Locale::default(),
			severity_level: 0,
			js_like_ext: strings(&["js", "jsx", "es", "es6"]),
			css_like_ext: strings(&["css", "less"]),
			html_like_ext: strings(&["html", "htm"]),
			error_color: "#f00".to_string(),
			warning_color: "#ddb700".to_string(),
			debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
			eviction_slack: DEFAULT_EVICTION_SLACK,
			command: None,
		}
	}
}

impl LintConfig {
	pub fn debounce(&self) -> Duration {
		Duration::from_millis(self.debounce_ms)
	}

	/// Extensions configured for `doc_type`.
	pub fn like_ext(&self, doc_type: DocType) -> &[String] {
		match doc_type {
			DocType::Js => &self.js_like_ext,
			DocType::Css => &self.css_like_ext,
			DocType::Html => &self.html_like_ext,
		}
	}

	pub fn color_for(&self, severity: Severity) -> &str {
		match severity {
			Severity::Error => &self.error_color,
			Severity::Warning => &self.warning_color,
		}
	}
}

fn strings(items: &[&str]) -> Vec<String> {
	items.iter().map(|s| s.to_string()).collect()
}
