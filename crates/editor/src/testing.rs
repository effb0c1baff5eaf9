//! In-memory engine and host used by the unit tests.

use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use gutterlint_linter::{EngineError, LintEngine, LintRecord, LintRequest};
use gutterlint_primitives::{EditorId, Issue, MarkerId};
use parking_lot::Mutex;
use tokio::sync::Semaphore;

use crate::host::{EditorHost, MarkerBatch, StatusLine};
use crate::service::LintService;

pub(crate) fn record(line: usize, severity: u8, message: &str) -> LintRecord {
	LintRecord {
		line,
		column: 1,
		message: message.to_string(),
		rule: None,
		severity,
	}
}

/// Engine returning queued responses (empty reports once the queue runs dry).
///
/// With a gate, every call blocks until a permit is added, which lets tests
/// hold runs in flight.
#[derive(Default)]
pub(crate) struct MockEngine {
	calls: Mutex<Vec<LintRequest>>,
	responses: Mutex<VecDeque<Result<Vec<LintRecord>, EngineError>>>,
	gate: Option<Arc<Semaphore>>,
	finished: AtomicUsize,
}

impl MockEngine {
	pub(crate) fn new() -> Arc<Self> {
		Arc::new(Self::default())
	}

	pub(crate) fn gated() -> (Arc<Self>, Arc<Semaphore>) {
		let gate = Arc::new(Semaphore::new(0));
		let engine = Self {
			gate: Some(Arc::clone(&gate)),
			..Self::default()
		};
		(Arc::new(engine), gate)
	}

	pub(crate) fn push_ok(&self, records: Vec<LintRecord>) {
		self.responses.lock().push_back(Ok(records));
	}

	pub(crate) fn push_err(&self, err: EngineError) {
		self.responses.lock().push_back(Err(err));
	}

	pub(crate) fn calls(&self) -> Vec<LintRequest> {
		self.calls.lock().clone()
	}

	pub(crate) fn call_count(&self) -> usize {
		self.calls.lock().len()
	}

	pub(crate) fn finished(&self) -> usize {
		self.finished.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl LintEngine for MockEngine {
	async fn lint(&self, request: LintRequest) -> Result<Vec<LintRecord>, EngineError> {
		self.calls.lock().push(request);
		let response = self.responses.lock().pop_front();
		if let Some(gate) = &self.gate {
			gate.acquire().await.map_err(|e| EngineError::Task(e.to_string()))?.forget();
		}
		self.finished.fetch_add(1, Ordering::SeqCst);
		response.unwrap_or_else(|| Ok(Vec::new()))
	}
}

#[derive(Debug, Clone)]
pub(crate) struct MockEditor {
	pub(crate) file_name: PathBuf,
	pub(crate) text: String,
	pub(crate) cursor_line: usize,
}

/// Host recording every render call.
#[derive(Debug, Default)]
pub(crate) struct MockHost {
	pub(crate) editors: HashMap<EditorId, MockEditor>,
	pub(crate) visible: Vec<EditorId>,
	pub(crate) active: Option<EditorId>,
	/// Live marker resources.
	pub(crate) markers: HashMap<MarkerId, (EditorId, MarkerBatch)>,
	next_marker: u64,
	pub(crate) created: usize,
	pub(crate) released: usize,
	pub(crate) published: HashMap<PathBuf, Vec<Issue>>,
	pub(crate) publish_calls: usize,
	pub(crate) status: Option<StatusLine>,
}

impl MockHost {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	/// Opens a visible editor; the first one opened becomes active.
	pub(crate) fn open(&mut self, file_name: &str, text: &str) -> EditorId {
		let editor = EditorId::next();
		self.editors.insert(
			editor,
			MockEditor {
				file_name: PathBuf::from(file_name),
				text: text.to_string(),
				cursor_line: 0,
			},
		);
		self.visible.push(editor);
		if self.active.is_none() {
			self.active = Some(editor);
		}
		editor
	}

	pub(crate) fn set_text(&mut self, editor: EditorId, text: &str) {
		if let Some(doc) = self.editors.get_mut(&editor) {
			doc.text = text.to_string();
		}
	}

	pub(crate) fn set_cursor(&mut self, editor: EditorId, line: usize) {
		if let Some(doc) = self.editors.get_mut(&editor) {
			doc.cursor_line = line;
		}
	}

	pub(crate) fn focus(&mut self, editor: EditorId) {
		self.active = Some(editor);
	}

	pub(crate) fn hide(&mut self, editor: EditorId) {
		self.visible.retain(|&e| e != editor);
		if self.active == Some(editor) {
			self.active = None;
		}
	}

	pub(crate) fn close(&mut self, editor: EditorId) {
		self.hide(editor);
		self.editors.remove(&editor);
	}

	/// Live marker batches of `editor`, error batch first.
	pub(crate) fn live_markers(&self, editor: EditorId) -> Vec<MarkerBatch> {
		let mut batches: Vec<_> = self
			.markers
			.values()
			.filter(|(owner, _)| *owner == editor)
			.map(|(_, batch)| batch.clone())
			.collect();
		batches.sort_by(|a, b| b.severity.cmp(&a.severity));
		batches
	}

	pub(crate) fn published_for(&self, file_name: &str) -> Option<&Vec<Issue>> {
		self.published.get(Path::new(file_name))
	}
}

impl EditorHost for MockHost {
	fn visible_editors(&self) -> Vec<EditorId> {
		self.visible.clone()
	}

	fn active_editor(&self) -> Option<EditorId> {
		self.active
	}

	fn file_name(&self, editor: EditorId) -> Option<PathBuf> {
		self.editors.get(&editor).map(|doc| doc.file_name.clone())
	}

	fn text(&self, editor: EditorId) -> Option<String> {
		self.editors.get(&editor).map(|doc| doc.text.clone())
	}

	fn cursor_line(&self, editor: EditorId) -> Option<usize> {
		self.editors.get(&editor).map(|doc| doc.cursor_line)
	}

	fn create_markers(&mut self, editor: EditorId, batch: &MarkerBatch) -> MarkerId {
		self.next_marker += 1;
		let id = MarkerId(self.next_marker);
		self.markers.insert(id, (editor, batch.clone()));
		self.created += 1;
		id
	}

	fn release_markers(&mut self, marker: MarkerId) {
		assert!(self.markers.remove(&marker).is_some(), "marker {marker:?} released twice or never created");
		self.released += 1;
	}

	fn publish_diagnostics(&mut self, file_name: &Path, diagnostics: &[Issue]) {
		self.published.insert(file_name.to_path_buf(), diagnostics.to_vec());
		self.publish_calls += 1;
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

/// Lets timers expire and runs finish, processing every event they post.
///
/// Relies on a paused Tokio clock: each sleep auto-advances time.
pub(crate) async fn settle(service: &mut LintService, host: &mut MockHost) {
	for _ in 0..40 {
		tokio::time::sleep(Duration::from_millis(100)).await;
		service.drain_events(&mut *host);
	}
}
