//! Projection of cached results to host render calls.
//!
//! The presenter owns no lint state. Each call reads the cache and re-issues
//! the full visual state for one editor: gutter markers always, the focus
//! status line and the published diagnostics only for the active editor.

#[cfg(test)]
mod tests;

use std::sync::Arc;

use gutterlint_primitives::{EditorId, Severity};
use tracing::trace;

use crate::cache::{CacheEntry, DiagnosticsCache};
use crate::config::LintConfig;
use crate::host::{EditorHost, MarkerBatch, StatusLine};
use crate::issues::{MarkerBatches, primary_issue};
use crate::metrics::LintMetrics;

#[derive(Debug)]
pub struct Presenter {
	error_color: String,
	warning_color: String,
	metrics: Arc<LintMetrics>,
}

impl Presenter {
	pub fn new(config: &LintConfig, metrics: Arc<LintMetrics>) -> Self {
		Self {
			error_color: config.error_color.clone(),
			warning_color: config.warning_color.clone(),
			metrics,
		}
	}

	fn color_for(&self, severity: Severity) -> &str {
		match severity {
			Severity::Error => &self.error_color,
			Severity::Warning => &self.warning_color,
		}
	}

	/// Redraws markers, status and diagnostics for `editor`.
	///
	/// Markers of the previous render are released before any new marker is
	/// created. Returns `false` if the editor has no cache entry.
	pub fn render(&self, cache: &mut DiagnosticsCache, host: &mut dyn EditorHost, editor: EditorId) -> bool {
		let Some(entry) = cache.get_mut(editor) else {
			return false;
		};

		self.release_markers(entry, host);

		if let Some(map) = &entry.issues_by_line {
			let batches = MarkerBatches::from_map(map);
			for (severity, lines) in [(Severity::Error, batches.errors), (Severity::Warning, batches.warnings)] {
				if lines.is_empty() {
					continue;
				}
				let marker = host.create_markers(editor, &MarkerBatch { severity, lines });
				entry.rendered_markers.push(marker);
				self.metrics.inc_marker_created();
			}
		}
		trace!(%editor, markers = entry.rendered_markers.len(), "lint.presenter.render");

		self.show_status(cache, host, editor);
		self.show_diagnostics(cache, host, editor);
		true
	}

	/// Releases every marker resource of the entry's last render.
	pub fn release_markers(&self, entry: &mut CacheEntry, host: &mut dyn EditorHost) -> usize {
		let markers = entry.take_markers();
		for &marker in &markers {
			host.release_markers(marker);
		}
		self.metrics.add_markers_released(markers.len() as u64);
		markers.len()
	}

	/// Updates the status line from the cursor line of `editor`.
	///
	/// No-op unless `editor` is active. Clears the status when the line has
	/// no issues or the editor has not been checked.
	pub fn show_status(&self, cache: &DiagnosticsCache, host: &mut dyn EditorHost, editor: EditorId) {
		if host.active_editor() != Some(editor) {
			return;
		}

		let issues = match (cache.get(editor), host.cursor_line(editor)) {
			(Some(entry), Some(line)) => entry.issues_on_line(line).unwrap_or_default(),
			_ => &[],
		};

		match primary_issue(issues) {
			Some(primary) => {
				let tooltip = issues.iter().map(|issue| issue.message.as_str()).collect::<Vec<_>>().join("\n");
				host.set_status(&StatusLine {
					text: primary.message.clone(),
					tooltip,
					severity: primary.severity,
					color: self.color_for(primary.severity).to_string(),
				});
			}
			None => host.clear_status(),
		}
	}

	/// Publishes the editor's diagnostics while it is active, otherwise
	/// withdraws them for its document.
	pub fn show_diagnostics(&self, cache: &DiagnosticsCache, host: &mut dyn EditorHost, editor: EditorId) {
		let Some(entry) = cache.get(editor) else {
			return;
		};
		if host.active_editor() == Some(editor) {
			host.publish_diagnostics(entry.file_name(), entry.diagnostics());
		} else {
			host.clear_diagnostics(entry.file_name());
		}
	}

	pub fn clear_status(&self, host: &mut dyn EditorHost) {
		host.clear_status();
	}
}
