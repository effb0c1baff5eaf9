use std::path::Path;

use gutterlint_primitives::DocType;
use rustc_hash::FxHashMap;

use crate::config::LintConfig;

/// Maps file extensions to the document type the linter should use.
///
/// Built once from configuration and read-only afterwards. When an extension
/// is listed for several types, the last registration wins (types are
/// registered in [`DocType::ALL`] order).
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
	by_ext: FxHashMap<String, DocType>,
}

impl TypeRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_config(config: &LintConfig) -> Self {
		let mut registry = Self::new();
		for doc_type in DocType::ALL {
			for ext in config.like_ext(doc_type) {
				registry.register(ext, doc_type);
			}
		}
		registry
	}

	/// Registers `ext` (with or without a leading dot) for `doc_type`.
	pub fn register(&mut self, ext: &str, doc_type: DocType) {
		let ext = ext.trim_start_matches('.');
		if !ext.is_empty() {
			self.by_ext.insert(ext.to_string(), doc_type);
		}
	}

	pub fn lookup_extension(&self, ext: &str) -> Option<DocType> {
		self.by_ext.get(ext).copied()
	}

	/// Resolves the document type of `path` from its last extension.
	pub fn doc_type_for(&self, path: &Path) -> Option<DocType> {
		extension_of(path).and_then(|ext| self.lookup_extension(ext))
	}

	pub fn is_supported(&self, path: &Path) -> bool {
		self.doc_type_for(path).is_some()
	}

	pub fn len(&self) -> usize {
		self.by_ext.len()
	}

	pub fn is_empty(&self) -> bool {
		self.by_ext.is_empty()
	}
}

/// Text after the last `.` of the file name.
///
/// Unlike [`Path::extension`], dot-files such as `.eslintrc` resolve to
/// `eslintrc`, so they can be registered too.
fn extension_of(path: &Path) -> Option<&str> {
	let name = path.file_name()?.to_str()?;
	name.rsplit_once('.').map(|(_, ext)| ext).filter(|ext| !ext.is_empty())
}
