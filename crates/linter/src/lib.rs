#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Lint engine seam.
//!
//! The editor integration never analyses text itself: it hands the document
//! text and its [`DocType`] to a [`LintEngine`] and gets back flat
//! [`LintRecord`]s. [`CommandEngine`] is the production adapter that runs an
//! external linter process; tests substitute in-memory engines.

/// External process adapter.
pub mod command;
/// Engine error types.
pub mod error;
/// Linter report decoding.
pub mod report;

use async_trait::async_trait;
pub use command::{CommandEngine, CommandSpec};
pub use error::EngineError;
pub use gutterlint_primitives::{DocType, Locale};
pub use report::{LintRecord, parse_report};

/// Input for a single lint invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintRequest {
	/// Full in-memory text of the document.
	pub text: String,
	pub doc_type: DocType,
	pub locale: Locale,
}

/// Opaque lint engine: text and document type in, flat issue records out.
#[async_trait]
pub trait LintEngine: Send + Sync {
	async fn lint(&self, request: LintRequest) -> Result<Vec<LintRecord>, EngineError>;
}
