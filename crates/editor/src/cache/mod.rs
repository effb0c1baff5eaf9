//! Per-editor store of lint results and scheduling state.
//!
//! [`DiagnosticsCache`] is a plain keyed store: it performs no background
//! work and needs no locking, because every access goes through the single
//! owning [`crate::LintService`].

mod entry;
#[cfg(test)]
mod tests;

use std::path::Path;

pub use entry::{CacheEntry, DebounceTimer, Generation, TimerToken};
use gutterlint_primitives::EditorId;
use rustc_hash::FxHashMap;

#[derive(Debug, Default)]
pub struct DiagnosticsCache {
	entries: FxHashMap<EditorId, CacheEntry>,
}

impl DiagnosticsCache {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the entry for `editor`, creating it for `file_name` if absent.
	///
	/// An existing entry keeps its original file name.
	pub fn get_or_create(&mut self, editor: EditorId, file_name: &Path) -> &mut CacheEntry {
		self.entries.entry(editor).or_insert_with(|| CacheEntry::new(file_name))
	}

	pub fn get(&self, editor: EditorId) -> Option<&CacheEntry> {
		self.entries.get(&editor)
	}

	pub fn get_mut(&mut self, editor: EditorId) -> Option<&mut CacheEntry> {
		self.entries.get_mut(&editor)
	}

	pub fn contains(&self, editor: EditorId) -> bool {
		self.entries.contains_key(&editor)
	}

	pub fn remove(&mut self, editor: EditorId) -> Option<CacheEntry> {
		self.entries.remove(&editor)
	}

	/// Replaces the cache with only the entries of `keep`.
	///
	/// Returns the dropped entries so their marker resources can be released;
	/// their timers are cancelled when the entries are dropped.
	pub fn evict_all_except(&mut self, keep: &[EditorId]) -> Vec<(EditorId, CacheEntry)> {
		let mut kept = FxHashMap::default();
		for &editor in keep {
			if let Some(entry) = self.entries.remove(&editor) {
				kept.insert(editor, entry);
			}
		}
		std::mem::replace(&mut self.entries, kept).into_iter().collect()
	}

	/// Removes every entry.
	pub fn drain(&mut self) -> Vec<(EditorId, CacheEntry)> {
		self.entries.drain().collect()
	}

	pub fn editors(&self) -> impl Iterator<Item = EditorId> + '_ {
		self.entries.keys().copied()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
