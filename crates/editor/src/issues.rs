//! Grouping of linter records into per-line issues.
//!
//! Lines are zero-based. Within a line, issues keep the order the linter
//! reported them in; the gutter shows the most severe one, and among equally
//! severe issues the first reported wins.

use std::collections::BTreeMap;

use gutterlint_linter::LintRecord;
use gutterlint_primitives::{Issue, Severity};

/// Map from zero-based line to the issues reported on it, in arrival order.
pub type IssueMap = BTreeMap<usize, Vec<Issue>>;

/// Results of one completed check, ready to be committed to a cache entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckResults {
	pub by_line: IssueMap,
	/// Every issue in arrival order; the list published for the focused document.
	pub diagnostics: Vec<Issue>,
}

impl CheckResults {
	/// Converts linter records, dropping those below `min_level`.
	pub fn from_records(records: Vec<LintRecord>, min_level: u8) -> Self {
		let mut results = Self::default();
		for record in records.into_iter().filter(|r| r.severity >= min_level) {
			let issue = Issue::from_one_based(
				record.line,
				record.column,
				&record.message,
				record.rule.as_deref(),
				Severity::from_code(record.severity),
			);
			results.by_line.entry(issue.line).or_default().push(issue.clone());
			results.diagnostics.push(issue);
		}
		results
	}

	pub fn is_empty(&self) -> bool {
		self.diagnostics.is_empty()
	}
}

/// The issue shown for a line: highest severity, first reported on ties.
pub fn primary_issue(issues: &[Issue]) -> Option<&Issue> {
	issues.iter().fold(None, |best, issue| match best {
		Some(best) if best.severity >= issue.severity => Some(best),
		_ => Some(issue),
	})
}

/// Lines to decorate, bucketed by the severity of their primary issue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerBatches {
	pub errors: Vec<usize>,
	pub warnings: Vec<usize>,
}

impl MarkerBatches {
	pub fn from_map(map: &IssueMap) -> Self {
		let mut batches = Self::default();
		for (&line, issues) in map {
			match primary_issue(issues).map(|issue| issue.severity) {
				Some(Severity::Error) => batches.errors.push(line),
				Some(Severity::Warning) => batches.warnings.push(line),
				None => {}
			}
		}
		batches
	}

	/// Number of marker resources a render creates for these batches.
	pub fn resource_count(&self) -> usize {
		usize::from(!self.errors.is_empty()) + usize::from(!self.warnings.is_empty())
	}
}
