//! Check scheduling and completion handling.
//!
//! [`Scheduler`] decides for each request whether to run the linter now,
//! after a quiet period, or not at all:
//! - single-flight per editor (`is_running` blocks new runs)
//! - debounce (bursts of edits coalesce into one trailing run)
//! - cached re-render when the text has not changed since the last run
//! - generation tags on every run so stale completions are discarded
//!
//! Timers and engine calls run as Tokio tasks that only post
//! [`SchedulerEvent`]s; all cache mutation happens when the owner feeds those
//! events back through [`Scheduler::timer_fired`] and [`Scheduler::complete`].


use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use gutterlint_linter::{EngineError, LintEngine, LintRecord, LintRequest};
use gutterlint_primitives::{DocType, EditorId, Locale};
use tokio::sync::mpsc;
use tracing::{debug, trace};

use crate::cache::{CacheEntry, DebounceTimer, DiagnosticsCache, Generation, TimerToken};
use crate::config::LintConfig;
use crate::issues::CheckResults;
use crate::metrics::LintMetrics;

/// Default quiet period before a debounced check runs.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(1000);

/// What a request decided to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
	/// The document type is not handled; nothing was touched.
	Unsupported,
	/// A run is already in flight for the editor.
	Busy,
	/// A debounce timer was (re)started.
	Debounced,
	/// Results are current; the cached results should be re-rendered.
	Cached,
	/// A lint run was started with this generation.
	Started(Generation),
}

/// Message posted by scheduler tasks back to the owner.
#[derive(Debug)]
pub enum SchedulerEvent {
	/// A debounce timer expired.
	TimerFired { editor: EditorId, token: TimerToken },
	/// A lint run finished.
	LintDone(LintDone),
}

/// Outcome of one engine invocation.
#[derive(Debug)]
pub struct LintDone {
	pub editor: EditorId,
	pub generation: Generation,
	pub result: Result<Vec<LintRecord>, EngineError>,
	pub elapsed: Duration,
}

/// Why a completion was not committed.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
	/// The entry was dropped while the run was in flight.
	#[error("{editor} was evicted before its check completed")]
	Evicted { editor: EditorId },
	/// A newer run or a recreated entry superseded this one.
	#[error("stale completion for {editor}: generation {got} superseded by {current}")]
	Stale { editor: EditorId, got: u64, current: u64 },
	/// The engine failed; the entry stays dirty so the next edit retries.
	#[error("lint engine failed for {editor}: {source}")]
	Engine {
		editor: EditorId,
		#[source]
		source: EngineError,
	},
}

/// Editor to check, with its document already resolved to a supported type.
#[derive(Debug, Clone, Copy)]
pub struct CheckTarget<'a> {
	pub editor: EditorId,
	pub file_name: &'a Path,
	pub doc_type: DocType,
}

pub struct Scheduler {
	engine: Arc<dyn LintEngine>,
	locale: Locale,
	severity_level: u8,
	debounce: Duration,
	clock: Generation,
	next_timer: u64,
	events_tx: mpsc::UnboundedSender<SchedulerEvent>,
	events_rx: mpsc::UnboundedReceiver<SchedulerEvent>,
	metrics: Arc<LintMetrics>,
}

impl std::fmt::Debug for Scheduler {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Scheduler")
			.field("debounce", &self.debounce)
			.field("clock", &self.clock)
			.finish_non_exhaustive()
	}
}

impl Scheduler {
	pub fn new(engine: Arc<dyn LintEngine>, config: &LintConfig, metrics: Arc<LintMetrics>) -> Self {
		let (events_tx, events_rx) = mpsc::unbounded_channel();
		Self {
			engine,
			locale: config.locale.clone(),
			severity_level: config.severity_level,
			debounce: config.debounce(),
			clock: Generation::default(),
			next_timer: 0,
			events_tx,
			events_rx,
			metrics,
		}
	}

	pub fn debounce(&self) -> Duration {
		self.debounce
	}

	/// Decides whether to lint `target` now, later, or not at all.
	///
	/// `text` is only called when a run actually starts, so debounced and
	/// cached requests never copy the document.
	///
	/// Must be called within a Tokio runtime.
	pub fn request<F>(&mut self, cache: &mut DiagnosticsCache, target: CheckTarget<'_>, text: F, debounce: bool) -> RequestOutcome
	where
		F: FnOnce() -> String,
	{
		let editor = target.editor;
		let entry = cache.get_or_create(editor, target.file_name);

		if entry.is_running {
			trace!(%editor, "lint.scheduler.busy");
			return RequestOutcome::Busy;
		}

		if debounce {
			self.schedule_timer(editor, entry);
			return RequestOutcome::Debounced;
		}

		if !entry.needs_check {
			trace!(%editor, "lint.scheduler.cached");
			return RequestOutcome::Cached;
		}

		let generation = self.start_run(editor, entry, target.doc_type, text());
		RequestOutcome::Started(generation)
	}

	fn schedule_timer(&mut self, editor: EditorId, entry: &mut CacheEntry) {
		let token = TimerToken(self.next_timer);
		self.next_timer = self.next_timer.wrapping_add(1);

		let delay = self.debounce;
		let tx = self.events_tx.clone();
		let handle = tokio::spawn(async move {
			tokio::time::sleep(delay).await;
			let _ = tx.send(SchedulerEvent::TimerFired { editor, token });
		});

		// Replacing the previous timer drops, and thereby aborts, it.
		let replaced = entry.pending_timer.replace(DebounceTimer::new(token, handle)).is_some();
		self.metrics.inc_timer();
		trace!(%editor, token = token.0, replaced, "lint.scheduler.debounce");
	}

	fn start_run(&mut self, editor: EditorId, entry: &mut CacheEntry, doc_type: DocType, text: String) -> Generation {
		self.clock = self.clock.next();
		let generation = self.clock;

		entry.cancel_timer();
		entry.is_running = true;
		entry.needs_check = false;
		entry.generation = generation;
		self.metrics.inc_run_started();

		debug!(
			%editor,
			generation = generation.get(),
			%doc_type,
			bytes = text.len(),
			"lint.scheduler.run_start"
		);

		let request = LintRequest {
			text,
			doc_type,
			locale: self.locale.clone(),
		};
		let engine = Arc::clone(&self.engine);
		let tx = self.events_tx.clone();

		tokio::spawn(async move {
			let started = Instant::now();
			// The engine runs in its own task so a panic still produces a
			// completion and the entry is never left running.
			let result = match tokio::spawn(async move { engine.lint(request).await }).await {
				Ok(result) => result,
				Err(err) => Err(EngineError::Task(err.to_string())),
			};
			let _ = tx.send(SchedulerEvent::LintDone(LintDone {
				editor,
				generation,
				result,
				elapsed: started.elapsed(),
			}));
		});

		generation
	}

	/// Acknowledges an expired timer.
	///
	/// Returns `true` only if the entry still exists and `token` is its live
	/// timer; superseded timers and timers of evicted entries are ignored.
	pub fn timer_fired(&mut self, cache: &mut DiagnosticsCache, editor: EditorId, token: TimerToken) -> bool {
		let Some(entry) = cache.get_mut(editor) else {
			trace!(%editor, "lint.scheduler.timer_orphaned");
			return false;
		};
		if entry.pending_timer.as_ref().map(DebounceTimer::token) != Some(token) {
			trace!(%editor, token = token.0, "lint.scheduler.timer_superseded");
			return false;
		}
		entry.pending_timer = None;
		true
	}

	/// Commits a finished run into the cache.
	///
	/// Returns the editor to re-render on success. Failed, stale and orphaned
	/// completions commit nothing.
	pub fn complete(&mut self, cache: &mut DiagnosticsCache, done: LintDone) -> Result<EditorId, CompletionError> {
		let LintDone {
			editor,
			generation,
			result,
			elapsed,
		} = done;

		let Some(entry) = cache.get_mut(editor) else {
			self.metrics.inc_stale();
			return Err(CompletionError::Evicted { editor });
		};

		if !entry.is_running || entry.generation != generation {
			self.metrics.inc_stale();
			return Err(CompletionError::Stale {
				editor,
				got: generation.get(),
				current: entry.generation.get(),
			});
		}

		entry.is_running = false;
		let latency_ms = elapsed.as_millis() as u64;

		match result {
			Ok(records) => {
				let results = CheckResults::from_records(records, self.severity_level);
				debug!(
					%editor,
					generation = generation.get(),
					issues = results.diagnostics.len(),
					latency_ms,
					"lint.scheduler.run_done"
				);
				entry.commit(results);
				self.metrics.inc_run_completed();
				Ok(editor)
			}
			Err(source) => {
				entry.needs_check = true;
				self.metrics.inc_run_failed();
				Err(CompletionError::Engine { editor, source })
			}
		}
	}

	/// Returns the next queued event without waiting.
	pub fn try_next_event(&mut self) -> Option<SchedulerEvent> {
		self.events_rx.try_recv().ok()
	}

	/// Waits for the next timer or completion event.
	///
	/// The scheduler holds its own sender, so this only returns `None` if the
	/// channel is closed during shutdown.
	pub async fn next_event(&mut self) -> Option<SchedulerEvent> {
		self.events_rx.recv().await
	}
}
