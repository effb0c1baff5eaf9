//! Service object wiring host events to the lint components.
//!
//! [`LintService`] is the only owner of the cache. Hosts call the `on_*`
//! handlers from their event loop and feed scheduler events back through
//! [`LintService::drain_events`] or [`LintService::next_event`].


use std::path::Path;
use std::sync::Arc;

use gutterlint_linter::LintEngine;
use gutterlint_primitives::EditorId;
use tracing::{debug, trace, warn};

use crate::cache::{CacheEntry, DiagnosticsCache};
use crate::config::LintConfig;
use crate::eviction::EvictionPolicy;
use crate::host::EditorHost;
use crate::metrics::LintMetrics;
use crate::presenter::Presenter;
use crate::registry::TypeRegistry;
use crate::scheduler::{CheckTarget, CompletionError, RequestOutcome, Scheduler, SchedulerEvent};

#[derive(Debug)]
pub struct LintService {
	config: LintConfig,
	registry: TypeRegistry,
	cache: DiagnosticsCache,
	scheduler: Scheduler,
	presenter: Presenter,
	eviction: EvictionPolicy,
	metrics: Arc<LintMetrics>,
}

impl LintService {
	pub fn new(config: LintConfig, engine: Arc<dyn LintEngine>) -> Self {
		let metrics = Arc::new(LintMetrics::new());
		Self {
			registry: TypeRegistry::from_config(&config),
			cache: DiagnosticsCache::new(),
			scheduler: Scheduler::new(engine, &config, Arc::clone(&metrics)),
			presenter: Presenter::new(&config, Arc::clone(&metrics)),
			eviction: EvictionPolicy::new(config.eviction_slack, Arc::clone(&metrics)),
			metrics,
			config,
		}
	}

	pub fn config(&self) -> &LintConfig {
		&self.config
	}

	pub fn registry(&self) -> &TypeRegistry {
		&self.registry
	}

	pub fn cache(&self) -> &DiagnosticsCache {
		&self.cache
	}

	pub fn metrics(&self) -> &Arc<LintMetrics> {
		&self.metrics
	}

	pub fn is_supported(&self, file_name: &Path) -> bool {
		self.registry.is_supported(file_name)
	}

	/// Checks every visible editor without debouncing.
	pub fn activate(&mut self, host: &mut dyn EditorHost) {
		let visible = host.visible_editors();
		debug!(editors = visible.len(), "lint.service.activate");
		for editor in visible {
			self.request(host, editor, false);
		}
	}

	/// Requests a check of `editor`.
	///
	/// Cached results are re-rendered immediately. Editors the host no longer
	/// knows and unsupported documents yield [`RequestOutcome::Unsupported`].
	pub fn request(&mut self, host: &mut dyn EditorHost, editor: EditorId, debounce: bool) -> RequestOutcome {
		let Some(file_name) = host.file_name(editor) else {
			return RequestOutcome::Unsupported;
		};
		let Some(doc_type) = self.registry.doc_type_for(&file_name) else {
			trace!(%editor, file = %file_name.display(), "lint.service.unsupported");
			return RequestOutcome::Unsupported;
		};

		let target = CheckTarget {
			editor,
			file_name: &file_name,
			doc_type,
		};
		let outcome = self
			.scheduler
			.request(&mut self.cache, target, || host.text(editor).unwrap_or_default(), debounce);

		if outcome == RequestOutcome::Cached {
			self.presenter.render(&mut self.cache, host, editor);
		}
		outcome
	}

	/// Redraws `editor` from its cached results.
	pub fn render(&mut self, host: &mut dyn EditorHost, editor: EditorId) -> bool {
		self.presenter.render(&mut self.cache, host, editor)
	}

	/// Prunes the cache to the visible editors once it outgrows the slack.
	pub fn maybe_evict(&mut self, host: &mut dyn EditorHost) -> usize {
		let visible = host.visible_editors();
		self.eviction.maybe_evict(&mut self.cache, &visible, &self.presenter, host)
	}

	/// Marks every visible editor showing `file_name` dirty and debounces a
	/// check for it.
	pub fn on_text_changed(&mut self, host: &mut dyn EditorHost, file_name: &Path) {
		if !self.registry.is_supported(file_name) {
			return;
		}

		for editor in host.visible_editors() {
			if host.file_name(editor).as_deref() != Some(file_name) {
				continue;
			}
			if let Some(entry) = self.cache.get_mut(editor) {
				entry.mark_dirty();
			}
			self.request(host, editor, true);
		}

		if let Some(active) = host.active_editor() {
			self.presenter.show_status(&self.cache, host, active);
		}
	}

	/// Moves status and published diagnostics to the newly focused editor.
	pub fn on_active_editor_changed(&mut self, host: &mut dyn EditorHost, editor: Option<EditorId>) {
		let Some(editor) = editor else {
			return;
		};
		debug!(%editor, "lint.service.focus");

		host.clear_all_diagnostics();
		self.presenter.show_status(&self.cache, host, editor);
		self.presenter.show_diagnostics(&self.cache, host, editor);

		for visible in host.visible_editors() {
			self.request(host, visible, true);
		}
	}

	pub fn on_selection_changed(&mut self, host: &mut dyn EditorHost, editor: EditorId) {
		if host.active_editor() != Some(editor) {
			return;
		}
		if host.file_name(editor).is_some_and(|file_name| self.registry.is_supported(&file_name)) {
			self.presenter.show_status(&self.cache, host, editor);
		}
	}

	pub fn on_document_closed(&mut self, host: &mut dyn EditorHost, file_name: &Path) {
		if !self.registry.is_supported(file_name) {
			return;
		}
		self.maybe_evict(host);
		if host.active_editor().is_none() {
			self.presenter.clear_status(host);
		}
	}

	/// Drops the entry of a closed editor, releasing its markers and
	/// cancelling its timer. An in-flight run completes as evicted.
	pub fn on_editor_closed(&mut self, host: &mut dyn EditorHost, editor: EditorId) {
		if let Some(mut entry) = self.cache.remove(editor) {
			let released = self.presenter.release_markers(&mut entry, host);
			debug!(%editor, released, "lint.service.editor_closed");
		}
	}

	/// Processes every queued scheduler event without waiting.
	pub fn drain_events(&mut self, host: &mut dyn EditorHost) -> usize {
		let mut handled = 0;
		while let Some(event) = self.scheduler.try_next_event() {
			self.handle_event(host, event);
			handled += 1;
		}
		handled
	}

	/// Waits for one scheduler event and processes it.
	///
	/// Returns `false` once the event channel is closed.
	pub async fn next_event(&mut self, host: &mut dyn EditorHost) -> bool {
		match self.scheduler.next_event().await {
			Some(event) => {
				self.handle_event(host, event);
				true
			}
			None => false,
		}
	}

	fn handle_event(&mut self, host: &mut dyn EditorHost, event: SchedulerEvent) {
		match event {
			SchedulerEvent::TimerFired { editor, token } => {
				if self.scheduler.timer_fired(&mut self.cache, editor, token) && host.visible_editors().contains(&editor) {
					self.request(host, editor, false);
				}
			}
			SchedulerEvent::LintDone(done) => match self.scheduler.complete(&mut self.cache, done) {
				Ok(editor) => {
					self.presenter.render(&mut self.cache, host, editor);
					if self.cache.get(editor).is_some_and(CacheEntry::needs_check) {
						debug!(%editor, "lint.service.trailing_check");
						self.request(host, editor, true);
					}
				}
				Err(err @ CompletionError::Engine { .. }) => warn!(error = %err, "lint.service.run_failed"),
				Err(err) => debug!(error = %err, "lint.scheduler.completion_stale"),
			},
		}
	}

	/// Releases every host resource and cancels all pending timers.
	pub fn dispose(mut self, host: &mut dyn EditorHost) {
		let mut released = 0;
		for (_, mut entry) in self.cache.drain() {
			released += self.presenter.release_markers(&mut entry, host);
		}
		host.clear_status();
		host.clear_all_diagnostics();
		debug!(released, "lint.service.dispose");
	}
}
