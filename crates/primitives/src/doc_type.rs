use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Logical document type understood by the linter.
///
/// Each type owns a configurable list of "like" extensions (`jsLikeExt`,
/// `cssLikeExt`, `htmlLikeExt`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocType {
	Js,
	Css,
	Html,
}

impl DocType {
	/// Every supported type, in registration order.
	pub const ALL: [DocType; 3] = [DocType::Js, DocType::Css, DocType::Html];

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Js => "js",
			Self::Css => "css",
			Self::Html => "html",
		}
	}
}

impl fmt::Display for DocType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error returned when parsing an unrecognized document type name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown document type: {0}")]
pub struct UnknownDocType(pub String);

impl FromStr for DocType {
	type Err = UnknownDocType;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"js" => Ok(Self::Js),
			"css" => Ok(Self::Css),
			"html" => Ok(Self::Html),
			other => Err(UnknownDocType(other.to_string())),
		}
	}
}
