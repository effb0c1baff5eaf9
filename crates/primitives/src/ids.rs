use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for generating unique editor IDs.
static NEXT_EDITOR_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one open editor instance.
///
/// Stable for the lifetime of the editor, not of the file it shows: two
/// editors on the same document have distinct IDs, and reopening a file
/// yields a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EditorId(pub u64);

impl EditorId {
	/// Generates a new unique editor ID.
	pub fn next() -> Self {
		Self(NEXT_EDITOR_ID.fetch_add(1, Ordering::Relaxed))
	}
}

impl fmt::Display for EditorId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "editor#{}", self.0)
	}
}

/// Handle of a gutter marker resource created by the host.
///
/// Opaque to the integration: it is only stored and handed back to the host
/// for release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkerId(pub u64);
