//! Bounding of the cache to the editors on screen.

use std::sync::Arc;

use gutterlint_primitives::EditorId;
use tracing::debug;

use crate::cache::DiagnosticsCache;
use crate::host::EditorHost;
use crate::metrics::LintMetrics;
use crate::presenter::Presenter;

/// Number of cached editors beyond the visible ones that triggers eviction.
pub const DEFAULT_EVICTION_SLACK: usize = 20;

#[derive(Debug)]
pub struct EvictionPolicy {
	slack: usize,
	metrics: Arc<LintMetrics>,
}

impl EvictionPolicy {
	pub fn new(slack: usize, metrics: Arc<LintMetrics>) -> Self {
		Self { slack, metrics }
	}

	pub fn slack(&self) -> usize {
		self.slack
	}

	pub fn should_evict(&self, cache_len: usize, visible_len: usize) -> bool {
		cache_len.saturating_sub(visible_len) >= self.slack
	}

	/// Drops every entry not in `visible` once the cache outgrows the slack.
	///
	/// Evicted entries release their markers; their pending timers are
	/// cancelled as the entries drop. Returns the number of entries evicted.
	pub fn maybe_evict(
		&self,
		cache: &mut DiagnosticsCache,
		visible: &[EditorId],
		presenter: &Presenter,
		host: &mut dyn EditorHost,
	) -> usize {
		if !self.should_evict(cache.len(), visible.len()) {
			return 0;
		}

		let mut evicted = cache.evict_all_except(visible);
		for (_, entry) in &mut evicted {
			presenter.release_markers(entry, host);
		}
		self.metrics.add_evicted(evicted.len() as u64);
		debug!(evicted = evicted.len(), kept = cache.len(), "lint.eviction.evicted");
		evicted.len()
	}
}
