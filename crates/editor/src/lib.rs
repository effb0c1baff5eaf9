#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Incremental lint diagnostics for editor hosts.
//!
//! This crate keeps gutter markers, the focus status line and the published
//! diagnostics list in sync with an external linter while the user edits,
//! switches editors, or closes documents. The linter itself is an opaque
//! [`LintEngine`]; the editor is an opaque [`EditorHost`].
//!
//! # Main Types
//!
//! - [`LintService`] - Single owner of all state, driven by host events
//! - [`DiagnosticsCache`] - Per-editor results, flags, timers and marker handles
//! - [`Scheduler`] - Debounce, single-flight runs and completion commits
//! - [`Presenter`] - Projection of cached results to host render calls
//! - [`EvictionPolicy`] - Bounds the cache to visible editors plus slack
//!
//! # Architecture
//!
//! ```text
//! host event ─► LintService ─► Scheduler ─┬─► DiagnosticsCache
//!                   ▲                      └─► tokio task ─► LintEngine
//!                   │                                          │
//!                   └──── SchedulerEvent (timer / completion) ◄┘
//!                   │
//!                   └─► Presenter ─► EditorHost (markers, status, diagnostics)
//! ```
//!
//! Every state transition happens on the caller's thread inside `&mut self`
//! methods. Background tasks only post [`SchedulerEvent`]s, which the host
//! feeds back through [`LintService::drain_events`] or
//! [`LintService::next_event`].
//!
//! [`LintEngine`]: gutterlint_linter::LintEngine

/// Per-editor result cache.
pub mod cache;
/// Integration settings.
pub mod config;
/// Bounded cache eviction.
pub mod eviction;
/// Host editor seam.
pub mod host;
/// Issue grouping and marker selection.
pub mod issues;
/// Runtime counters.
pub mod metrics;
/// Projection of cache state to render calls.
pub mod presenter;
/// Extension to document type lookup.
pub mod registry;
/// Check scheduling and completion handling.
pub mod scheduler;
/// Service object wiring host events to the components.
pub mod service;
#[cfg(test)]
mod testing;

pub use cache::{CacheEntry, DebounceTimer, DiagnosticsCache, Generation, TimerToken};
pub use config::LintConfig;
pub use eviction::{DEFAULT_EVICTION_SLACK, EvictionPolicy};
pub use host::{EditorHost, MarkerBatch, StatusLine};
pub use issues::{CheckResults, IssueMap, MarkerBatches};
pub use metrics::LintMetrics;
pub use presenter::Presenter;
pub use registry::TypeRegistry;
pub use scheduler::{CheckTarget, CompletionError, DEFAULT_DEBOUNCE, LintDone, RequestOutcome, Scheduler, SchedulerEvent};
pub use service::LintService;
