use std::path::Path;
use std::sync::Arc;

use gutterlint_linter::LintRecord;
use gutterlint_primitives::Severity;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::issues::CheckResults;
use crate::testing::{MockHost, record};

fn presenter() -> (Presenter, Arc<LintMetrics>) {
	let metrics = Arc::new(LintMetrics::new());
	(Presenter::new(&LintConfig::default(), Arc::clone(&metrics)), metrics)
}

fn checked(cache: &mut DiagnosticsCache, editor: EditorId, file_name: &str, records: Vec<LintRecord>) {
	let entry = cache.get_or_create(editor, Path::new(file_name));
	entry.commit(CheckResults::from_records(records, 0));
	entry.needs_check = false;
}

#[test]
fn test_render_mixed_line_shows_error_marker_and_status() {
	let (presenter, _) = presenter();
	let mut host = MockHost::new();
	let mut cache = DiagnosticsCache::new();
	let editor = host.open("a.js", "");
	host.set_cursor(editor, 3);
	checked(&mut cache, editor, "a.js", vec![record(4, 1, "Missing semicolon."), record(4, 2, "Undefined x.")]);

	assert!(presenter.render(&mut cache, &mut host, editor));

	assert_eq!(
		host.live_markers(editor),
		vec![MarkerBatch {
			severity: Severity::Error,
			lines: vec![3],
		}]
	);
	assert_eq!(
		host.status,
		Some(StatusLine {
			text: "Undefined x.".to_string(),
			tooltip: "Missing semicolon.\nUndefined x.".to_string(),
			severity: Severity::Error,
			color: "#f00".to_string(),
		})
	);
	assert_eq!(host.published_for("a.js").map(Vec::len), Some(2));
}

#[test]
fn test_render_creates_error_batch_before_warning_batch() {
	let (presenter, metrics) = presenter();
	let mut host = MockHost::new();
	let mut cache = DiagnosticsCache::new();
	let editor = host.open("a.js", "");
	checked(&mut cache, editor, "a.js", vec![record(2, 1, "w"), record(5, 2, "e")]);

	presenter.render(&mut cache, &mut host, editor);

	let markers = cache.get(editor).unwrap().rendered_markers().to_vec();
	assert_eq!(markers.len(), 2);
	assert_eq!(host.markers[&markers[0]].1.severity, Severity::Error);
	assert_eq!(host.markers[&markers[1]].1.severity, Severity::Warning);
	assert_eq!(metrics.markers_created(), 2);
	assert_eq!(host.status, None);
}

#[test]
fn test_rerender_releases_previous_markers() {
	let (presenter, metrics) = presenter();
	let mut host = MockHost::new();
	let mut cache = DiagnosticsCache::new();
	let editor = host.open("a.js", "");
	checked(&mut cache, editor, "a.js", vec![record(1, 1, "w"), record(2, 2, "e")]);

	for _ in 0..3 {
		presenter.render(&mut cache, &mut host, editor);
	}

	assert_eq!(host.created, 6);
	assert_eq!(host.released, 4);
	assert_eq!(host.markers.len(), 2);
	assert_eq!(metrics.markers_live(), 2);
}

#[test]
fn test_render_without_results_clears_everything() {
	let (presenter, _) = presenter();
	let mut host = MockHost::new();
	let mut cache = DiagnosticsCache::new();
	let editor = host.open("a.js", "");
	checked(&mut cache, editor, "a.js", vec![record(1, 2, "e")]);
	presenter.render(&mut cache, &mut host, editor);

	checked(&mut cache, editor, "a.js", Vec::new());
	presenter.render(&mut cache, &mut host, editor);

	assert!(host.markers.is_empty());
	assert_eq!(host.status, None);
	assert_eq!(host.published_for("a.js"), Some(&Vec::new()));
}

#[test]
fn test_inactive_editor_gets_markers_but_no_diagnostics() {
	let (presenter, _) = presenter();
	let mut host = MockHost::new();
	let mut cache = DiagnosticsCache::new();
	let active = host.open("a.js", "");
	let other = host.open("b.js", "");
	host.published.insert("b.js".into(), Vec::new());
	host.set_cursor(other, 0);
	checked(&mut cache, other, "b.js", vec![record(1, 2, "e")]);

	presenter.render(&mut cache, &mut host, other);

	assert_eq!(host.active, Some(active));
	assert_eq!(host.live_markers(other).len(), 1);
	assert_eq!(host.published_for("b.js"), None);
	assert_eq!(host.status, None);
}

#[test]
fn test_render_unknown_editor_is_noop() {
	let (presenter, _) = presenter();
	let mut host = MockHost::new();
	let mut cache = DiagnosticsCache::new();
	let editor = host.open("a.js", "");

	assert!(!presenter.render(&mut cache, &mut host, editor));
	assert_eq!(host.created, 0);
}

#[test]
fn test_status_clears_on_clean_line_and_unchecked_editor() {
	let (presenter, _) = presenter();
	let mut host = MockHost::new();
	let mut cache = DiagnosticsCache::new();
	let editor = host.open("a.js", "");
	checked(&mut cache, editor, "a.js", vec![record(1, 1, "w")]);

	presenter.show_status(&cache, &mut host, editor);
	assert_eq!(host.status.as_ref().map(|s| s.color.as_str()), Some("#ddb700"));

	host.set_cursor(editor, 5);
	presenter.show_status(&cache, &mut host, editor);
	assert_eq!(host.status, None);

	presenter.show_status(&DiagnosticsCache::new(), &mut host, editor);
	assert_eq!(host.status, None);
}

fn arb_record() -> impl Strategy<Value = LintRecord> {
	(1usize..12, 1u8..=2).prop_map(|(line, severity)| record(line, severity, "m"))
}

proptest! {
	#[test]
	fn test_markers_cover_each_issue_line_once(
		runs in prop::collection::vec(prop::collection::vec(arb_record(), 0..20), 1..5),
	) {
		let (presenter, metrics) = presenter();
		let mut host = MockHost::new();
		let mut cache = DiagnosticsCache::new();
		let editor = host.open("a.js", "");

		for records in runs {
			let mut lines: Vec<usize> = records.iter().map(|r| r.line - 1).collect();
			lines.sort_unstable();
			lines.dedup();

			checked(&mut cache, editor, "a.js", records);
			presenter.render(&mut cache, &mut host, editor);

			let mut decorated: Vec<usize> = host.live_markers(editor).into_iter().flat_map(|b| b.lines).collect();
			decorated.sort_unstable();
			prop_assert_eq!(decorated, lines);
			prop_assert_eq!(host.created, host.released + host.markers.len());
			prop_assert_eq!(metrics.markers_live() as usize, host.markers.len());
		}
	}
}
