//! Runtime metrics for observability.
//!
//! [`LintMetrics`] is shared between the scheduler, presenter and eviction
//! policy. Counters use relaxed ordering; they are only read for diagnostics
//! and tests.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct LintMetrics {
	/// Engine invocations started.
	pub runs_started: AtomicU64,
	/// Invocations whose results were committed.
	pub runs_completed: AtomicU64,
	/// Invocations that failed in the engine.
	pub runs_failed: AtomicU64,
	/// Completions discarded as stale or evicted.
	pub stale_completions: AtomicU64,
	/// Debounce timers started.
	pub timers_scheduled: AtomicU64,
	/// Gutter marker resources created.
	pub markers_created: AtomicU64,
	/// Gutter marker resources released.
	pub markers_released: AtomicU64,
	/// Cache entries dropped by eviction.
	pub entries_evicted: AtomicU64,
}

impl LintMetrics {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn inc_run_started(&self) {
		self.runs_started.fetch_add(1, Ordering::Relaxed);
	}

	pub fn inc_run_completed(&self) {
		self.runs_completed.fetch_add(1, Ordering::Relaxed);
	}

	pub fn inc_run_failed(&self) {
		self.runs_failed.fetch_add(1, Ordering::Relaxed);
	}

	pub fn inc_stale(&self) {
		self.stale_completions.fetch_add(1, Ordering::Relaxed);
	}

	pub fn inc_timer(&self) {
		self.timers_scheduled.fetch_add(1, Ordering::Relaxed);
	}

	pub fn inc_marker_created(&self) {
		self.markers_created.fetch_add(1, Ordering::Relaxed);
	}

	pub fn add_markers_released(&self, count: u64) {
		self.markers_released.fetch_add(count, Ordering::Relaxed);
	}

	pub fn add_evicted(&self, count: u64) {
		self.entries_evicted.fetch_add(count, Ordering::Relaxed);
	}

	pub fn runs_started(&self) -> u64 {
		self.runs_started.load(Ordering::Relaxed)
	}

	pub fn runs_completed(&self) -> u64 {
		self.runs_completed.load(Ordering::Relaxed)
	}

	pub fn runs_failed(&self) -> u64 {
		self.runs_failed.load(Ordering::Relaxed)
	}

	pub fn stale_completions(&self) -> u64 {
		self.stale_completions.load(Ordering::Relaxed)
	}

	pub fn timers_scheduled(&self) -> u64 {
		self.timers_scheduled.load(Ordering::Relaxed)
	}

	pub fn markers_created(&self) -> u64 {
		self.markers_created.load(Ordering::Relaxed)
	}

	pub fn markers_released(&self) -> u64 {
		self.markers_released.load(Ordering::Relaxed)
	}

	pub fn entries_evicted(&self) -> u64 {
		self.entries_evicted.load(Ordering::Relaxed)
	}

	/// Marker resources created and not yet released.
	pub fn markers_live(&self) -> u64 {
		self.markers_created().saturating_sub(self.markers_released())
	}
}
