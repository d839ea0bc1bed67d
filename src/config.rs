//! Config for the syncrepl parser.
use serde::{Deserialize, Serialize};

/// Parser configuration.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ParserConfig {
	/// What to do with option names the parser doesn't know
	#[serde(default)]
	pub unknown_options: UnknownOptions,
	/// Stop at the first error instead of reporting all errors of a directive
	#[serde(default)]
	pub fail_fast: bool,
}

/// Handling of unrecognized option names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownOptions {
	/// Skip them, so directives written for newer OpenLDAP versions still
	/// parse
	#[default]
	Ignore,
	/// Report them as [`Error::UnknownOption`](crate::Error::UnknownOption)
	Reject,
}
