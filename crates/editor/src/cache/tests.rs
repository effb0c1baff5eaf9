use std::path::{Path, PathBuf};
use std::time::Duration;

use gutterlint_primitives::{EditorId, MarkerId};

use super::*;

#[test]
fn test_get_or_create_is_idempotent() {
	let mut cache = DiagnosticsCache::new();
	let editor = EditorId(1);

	cache.get_or_create(editor, Path::new("a.js")).rendered_markers.push(MarkerId(9));
	let entry = cache.get_or_create(editor, Path::new("renamed.js"));

	assert_eq!(entry.file_name(), Path::new("a.js"));
	assert_eq!(entry.rendered_markers(), [MarkerId(9)]);
	assert_eq!(cache.len(), 1);
}

#[test]
fn test_new_entry_needs_check() {
	let entry = CacheEntry::new("a.js");
	assert!(entry.needs_check());
	assert!(!entry.is_running());
	assert!(!entry.has_pending_timer());
	assert!(entry.issues_by_line().is_none());
	assert!(entry.issues_on_line(0).is_none());
	assert_eq!(entry.generation(), Generation::default());
}

#[test]
fn test_evict_all_except_keeps_only_listed() {
	let mut cache = DiagnosticsCache::new();
	for id in 1..=5 {
		cache.get_or_create(EditorId(id), &PathBuf::from(format!("{id}.js")));
	}

	let mut dropped: Vec<_> = cache
		.evict_all_except(&[EditorId(2), EditorId(4), EditorId(99)])
		.into_iter()
		.map(|(id, _)| id)
		.collect();
	dropped.sort();

	assert_eq!(dropped, [EditorId(1), EditorId(3), EditorId(5)]);
	assert_eq!(cache.len(), 2);
	assert!(cache.contains(EditorId(2)));
	assert!(cache.contains(EditorId(4)));
	assert!(!cache.contains(EditorId(99)));
}

#[test]
fn test_take_markers_empties_list() {
	let mut entry = CacheEntry::new("a.css");
	entry.rendered_markers.extend([MarkerId(1), MarkerId(2)]);
	assert_eq!(entry.take_markers(), [MarkerId(1), MarkerId(2)]);
	assert!(entry.rendered_markers().is_empty());
}

#[test]
fn test_generation_advances() {
	let g = Generation::default();
	assert!(g.next() > g);
	assert_eq!(g.next().get(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_entry_cancels_timer() {
	let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<()>();
	let handle = tokio::spawn(async move {
		tokio::time::sleep(Duration::from_secs(1)).await;
		let _ = tx.send(());
	});

	let mut cache = DiagnosticsCache::new();
	let editor = EditorId(1);
	cache.get_or_create(editor, Path::new("a.js")).pending_timer = Some(DebounceTimer::new(TimerToken(1), handle));
	assert!(cache.get(editor).unwrap().has_pending_timer());

	drop(cache.remove(editor));
	tokio::time::sleep(Duration::from_secs(2)).await;

	// The sender was dropped with the aborted task without sending.
	assert_eq!(rx.recv().await, None);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_timer_reports_liveness() {
	let mut entry = CacheEntry::new("a.js");
	assert!(!entry.cancel_timer());

	entry.pending_timer = Some(DebounceTimer::new(TimerToken(3), tokio::spawn(async {})));
	assert_eq!(entry.pending_timer.as_ref().map(DebounceTimer::token), Some(TimerToken(3)));
	assert!(entry.cancel_timer());
	assert!(!entry.has_pending_timer());
}
