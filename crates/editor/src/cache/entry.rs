use std::path::{Path, PathBuf};

use gutterlint_primitives::{Issue, MarkerId};
use tokio::task::JoinHandle;

use crate::issues::{CheckResults, IssueMap};

/// Tag of a lint run, used to discard completions that no longer match the
/// entry they were started for.
///
/// Values come from a single monotonic clock owned by the scheduler, so a
/// recreated entry can never match a run started for its predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(pub(crate) u64);

impl Generation {
	pub const fn get(self) -> u64 {
		self.0
	}

	pub(crate) fn next(self) -> Self {
		Self(self.0.wrapping_add(1))
	}
}

/// Identifies one scheduled debounce timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(pub(crate) u64);

/// Outstanding debounce timer of a cache entry.
///
/// Dropping the timer aborts its task, so replacing, clearing or evicting the
/// entry cancels it on every path.
#[derive(Debug)]
pub struct DebounceTimer {
	token: TimerToken,
	handle: JoinHandle<()>,
}

impl DebounceTimer {
	pub(crate) fn new(token: TimerToken, handle: JoinHandle<()>) -> Self {
		Self { token, handle }
	}

	pub fn token(&self) -> TimerToken {
		self.token
	}
}

impl Drop for DebounceTimer {
	fn drop(&mut self) {
		self.handle.abort();
	}
}

/// Cached lint state of one editor.
#[derive(Debug)]
pub struct CacheEntry {
	pub(crate) file_name: PathBuf,
	pub(crate) pending_timer: Option<DebounceTimer>,
	pub(crate) is_running: bool,
	pub(crate) needs_check: bool,
	pub(crate) issues_by_line: Option<IssueMap>,
	pub(crate) diagnostics: Vec<Issue>,
	pub(crate) rendered_markers: Vec<MarkerId>,
	pub(crate) generation: Generation,
}

impl CacheEntry {
	/// Creates an entry that has never been checked.
	pub fn new(file_name: impl Into<PathBuf>) -> Self {
		Self {
			file_name: file_name.into(),
			pending_timer: None,
			is_running: false,
			needs_check: true,
			issues_by_line: None,
			diagnostics: Vec::new(),
			rendered_markers: Vec::new(),
			generation: Generation::default(),
		}
	}

	/// Path of the document when the entry was created.
	pub fn file_name(&self) -> &Path {
		&self.file_name
	}

	pub fn is_running(&self) -> bool {
		self.is_running
	}

	pub fn needs_check(&self) -> bool {
		self.needs_check
	}

	pub fn has_pending_timer(&self) -> bool {
		self.pending_timer.is_some()
	}

	/// Per-line issues of the last completed check; `None` before the first.
	pub fn issues_by_line(&self) -> Option<&IssueMap> {
		self.issues_by_line.as_ref()
	}

	pub fn issues_on_line(&self, line: usize) -> Option<&[Issue]> {
		self.issues_by_line.as_ref()?.get(&line).map(Vec::as_slice)
	}

	pub fn diagnostics(&self) -> &[Issue] {
		&self.diagnostics
	}

	pub fn rendered_markers(&self) -> &[MarkerId] {
		&self.rendered_markers
	}

	pub fn generation(&self) -> Generation {
		self.generation
	}

	/// Marks cached results stale relative to the document text.
	pub fn mark_dirty(&mut self) {
		self.needs_check = true;
	}

	/// Cancels the pending debounce timer, returning whether one was live.
	pub(crate) fn cancel_timer(&mut self) -> bool {
		self.pending_timer.take().is_some()
	}

	/// Takes the marker handles of the last render for release.
	pub(crate) fn take_markers(&mut self) -> Vec<MarkerId> {
		std::mem::take(&mut self.rendered_markers)
	}

	pub(crate) fn commit(&mut self, results: CheckResults) {
		self.issues_by_line = Some(results.by_line);
		self.diagnostics = results.diagnostics;
	}
}
