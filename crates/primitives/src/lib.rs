#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Core types shared between the lint engine adapters and the editor integration.

/// Logical document types and their extension lookups.
pub mod doc_type;
/// Identifier types for host-owned entities.
pub mod ids;
/// Lint issues and severities.
pub mod issue;
/// Reporter locale selection.
pub mod locale;

pub use doc_type::{DocType, UnknownDocType};
pub use ids::{EditorId, MarkerId};
pub use issue::{Issue, Severity};
pub use locale::Locale;
