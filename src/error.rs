//! Error codes
use std::fmt;

/// Errors that can occur when parsing a syncrepl directive or one of its
/// values
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
	/// A value did not conform to the syntax expected for it.
	#[error("Malformed {kind} '{value}', expected {expected}")]
	InvalidFormat {
		/// What kind of value was being parsed, e.g. `interval`
		kind: &'static str,
		/// The offending input
		value: String,
		/// Human readable description of the expected syntax
		expected: &'static str,
	},
	/// An option that requires a value was given without one.
	#[error("Couldn't find the value for option '{option}' at offset {position}")]
	MissingValue {
		/// The option name as written in the directive
		option: String,
		/// Byte offset of the option in the directive
		position: usize,
	},
	/// A quoted value was never closed.
	#[error("Unterminated quoted value for option '{option}' at offset {position}")]
	UnterminatedQuote {
		/// The option name as written in the directive
		option: String,
		/// Byte offset of the opening quote
		position: usize,
	},
	/// An option name was not recognized. Only reported when the parser is
	/// configured to reject unknown options.
	#[error("Unknown option '{0}'")]
	UnknownOption(String),
	/// Several errors were found in a single directive.
	#[error("Invalid syncrepl directive: {0}")]
	Directive(ErrorList),
}

impl Error {
	/// Shorthand for building an [`Error::InvalidFormat`].
	pub(crate) fn invalid(kind: &'static str, value: &str, expected: &'static str) -> Self {
		Self::InvalidFormat { kind, value: value.to_owned(), expected }
	}
}

/// The errors collected while parsing one directive, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorList(pub(crate) Vec<Error>);

impl ErrorList {
	/// The individual errors.
	#[must_use]
	pub fn errors(&self) -> &[Error] {
		&self.0
	}
}

impl fmt::Display for ErrorList {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, err) in self.0.iter().enumerate() {
			if i > 0 {
				f.write_str("; ")?;
			}
			write!(f, "{err}")?;
		}
		Ok(())
	}
}
