//! Host editor seam.
//!
//! The host owns editors, documents and every visual resource. The
//! integration only queries it and issues render calls through
//! [`EditorHost`]; it never holds host objects, only [`EditorId`]s and
//! [`MarkerId`]s.

use std::path::{Path, PathBuf};

use gutterlint_primitives::{EditorId, Issue, MarkerId, Severity};

/// Lines decorated with one gutter marker resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerBatch {
	pub severity: Severity,
	/// Zero-based lines, ascending.
	pub lines: Vec<usize>,
}

/// Focus status shown for the cursor line of the active editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
	/// Message of the line's primary issue.
	pub text: String,
	/// All messages on the line, one per row.
	pub tooltip: String,
	pub severity: Severity,
	/// Configured color for `severity`.
	pub color: String,
}

/// Editor environment the integration runs in.
///
/// Queries must reflect the host's state at call time: debounced checks read
/// the text when their timer expires, not when the edit happened.
pub trait EditorHost {
	/// Editors currently shown on screen.
	fn visible_editors(&self) -> Vec<EditorId>;

	/// Editor holding focus, if any.
	fn active_editor(&self) -> Option<EditorId>;

	/// Path of the document shown by `editor`; `None` once the editor is gone.
	fn file_name(&self, editor: EditorId) -> Option<PathBuf>;

	/// Current in-memory text of the document shown by `editor`.
	fn text(&self, editor: EditorId) -> Option<String>;

	/// Zero-based line of the start of `editor`'s primary selection.
	fn cursor_line(&self, editor: EditorId) -> Option<usize>;

	/// Creates one gutter marker resource decorating `batch.lines`.
	fn create_markers(&mut self, editor: EditorId, batch: &MarkerBatch) -> MarkerId;

	/// Destroys a marker resource returned by [`Self::create_markers`].
	fn release_markers(&mut self, marker: MarkerId);

	/// Replaces the diagnostics published for `file_name`.
	fn publish_diagnostics(&mut self, file_name: &Path, diagnostics: &[Issue]);

	fn clear_diagnostics(&mut self, file_name: &Path);

	fn clear_all_diagnostics(&mut self);

	fn set_status(&mut self, status: &StatusLine);

	/// Empties the status text and tooltip.
	fn clear_status(&mut self);
}
