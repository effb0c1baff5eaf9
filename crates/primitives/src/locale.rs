use std::fmt;

use serde::{Deserialize, Serialize};

/// Language of the messages produced by the linter.
///
/// Only English is distinguished; any other code selects the linter's native
/// reporter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Locale {
	En,
	Other(String),
}

impl Locale {
	pub fn as_str(&self) -> &str {
		match self {
			Self::En => "en",
			Self::Other(code) => code,
		}
	}

	pub fn is_en(&self) -> bool {
		matches!(self, Self::En)
	}
}

impl Default for Locale {
	fn default() -> Self {
		Self::Other("zh".to_string())
	}
}

impl From<String> for Locale {
	fn from(code: String) -> Self {
		if code.eq_ignore_ascii_case("en") { Self::En } else { Self::Other(code) }
	}
}

impl From<&str> for Locale {
	fn from(code: &str) -> Self {
		Self::from(code.to_string())
	}
}

impl From<Locale> for String {
	fn from(locale: Locale) -> Self {
		locale.as_str().to_string()
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
