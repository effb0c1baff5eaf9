//! In-memory editor host for the command-line front-end.
//!
//! Every file is an editor that stays visible; rendering only records state,
//! which [`HeadlessHost::report`] prints afterwards.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use gutterlint_editor::{EditorHost, MarkerBatch, StatusLine};
use gutterlint_primitives::{EditorId, Issue, MarkerId, Severity};

#[derive(Debug)]
struct Document {
	editor: EditorId,
	file_name: PathBuf,
	text: String,
	cursor_line: usize,
}

#[derive(Debug, Default)]
pub struct HeadlessHost {
	documents: Vec<Document>,
	active: Option<EditorId>,
	next_marker: u64,
	markers: BTreeMap<MarkerId, (EditorId, MarkerBatch)>,
	published: BTreeMap<PathBuf, Vec<Issue>>,
	status: Option<StatusLine>,
}

impl HeadlessHost {
	pub fn new() -> Self {
		Self::default()
	}

	/// Opens `file_name` in a new editor; the first editor opened is focused.
	pub fn open(&mut self, file_name: impl Into<PathBuf>, text: String) -> EditorId {
		let editor = EditorId::next();
		self.documents.push(Document {
			editor,
			file_name: file_name.into(),
			text,
			cursor_line: 0,
		});
		self.active.get_or_insert(editor);
		editor
	}

	pub fn editors(&self) -> Vec<EditorId> {
		self.documents.iter().map(|doc| doc.editor).collect()
	}

	pub fn focus(&mut self, editor: EditorId) {
		self.active = Some(editor);
	}

	pub fn set_cursor(&mut self, editor: EditorId, line: usize) {
		if let Some(doc) = self.document_mut(editor) {
			doc.cursor_line = line;
		}
	}

	pub fn status(&self) -> Option<&StatusLine> {
		self.status.as_ref()
	}

	pub fn live_markers(&self) -> usize {
		self.markers.len()
	}

	fn document(&self, editor: EditorId) -> Option<&Document> {
		self.documents.iter().find(|doc| doc.editor == editor)
	}

	fn document_mut(&mut self, editor: EditorId) -> Option<&mut Document> {
		self.documents.iter_mut().find(|doc| doc.editor == editor)
	}

	/// Human-readable state of `editor`: marker lines, the status line when
	/// it is focused, and the diagnostics published for its document.
	///
	/// Line and column numbers are printed 1-indexed.
	pub fn report(&self, editor: EditorId) -> String {
		let mut out = String::new();
		let Some(doc) = self.document(editor) else {
			return out;
		};
		let _ = writeln!(out, "{}", doc.file_name.display());

		for severity in [Severity::Error, Severity::Warning] {
			let lines: Vec<String> = self
				.markers
				.values()
				.filter(|(owner, batch)| *owner == editor && batch.severity == severity)
				.flat_map(|(_, batch)| batch.lines.iter().map(|line| (line + 1).to_string()))
				.collect();
			if !lines.is_empty() {
				let _ = writeln!(out, "  {severity} markers: {}", lines.join(", "));
			}
		}

		if self.active == Some(editor)
			&& let Some(status) = &self.status
		{
			let _ = writeln!(
				out,
				"  status (line {}, {}): {}",
				doc.cursor_line + 1,
				status.color,
				status.text
			);
		}

		match self.published.get(&doc.file_name) {
			Some(issues) if !issues.is_empty() => {
				for issue in issues {
					let _ = writeln!(
						out,
						"  {}:{} {} {}",
						issue.line + 1,
						issue.column + 1,
						issue.severity,
						issue.message
					);
				}
			}
			Some(_) => {
				let _ = writeln!(out, "  no issues");
			}
			None => {}
		}
		out
	}
}

impl EditorHost for HeadlessHost {
	fn visible_editors(&self) -> Vec<EditorId> {
		self.editors()
	}

	fn active_editor(&self) -> Option<EditorId> {
		self.active
	}

	fn file_name(&self, editor: EditorId) -> Option<PathBuf> {
		self.document(editor).map(|doc| doc.file_name.clone())
	}

	fn text(&self, editor: EditorId) -> Option<String> {
		self.document(editor).map(|doc| doc.text.clone())
	}

	fn cursor_line(&self, editor: EditorId) -> Option<usize> {
		self.document(editor).map(|doc| doc.cursor_line)
	}

	fn create_markers(&mut self, editor: EditorId, batch: &MarkerBatch) -> MarkerId {
		self.next_marker += 1;
		let marker = MarkerId(self.next_marker);
		self.markers.insert(marker, (editor, batch.clone()));
		marker
	}

	fn release_markers(&mut self, marker: MarkerId) {
		self.markers.remove(&marker);
	}

	fn publish_diagnostics(&mut self, file_name: &Path, diagnostics: &[Issue]) {
		self.published.insert(file_name.to_path_buf(), diagnostics.to_vec());
	}

	fn clear_diagnostics(&mut self, file_name: &Path) {
		self.published.remove(file_name);
	}

	fn clear_all_diagnostics(&mut self) {
		self.published.clear();
	}

	fn set_status(&mut self, status: &StatusLine) {
		self.status = Some(status.clone());
	}

	fn clear_status(&mut self) {
		self.status = None;
	}
}
