//! Splits a directive into `key=value` clauses.
//!
//! Whitespace (newlines included) separates clauses and may surround the `=`.
//! A value is either bare, running until the next whitespace, or quoted with
//! `"` or `'`, in which case whitespace and `=` lose their meaning until the
//! matching quote. Inside quotes a backslash escapes the active quote
//! character or another backslash; any other backslash is kept as is.
//!
//! No-break spaces are part of a value, not separators.
use std::{iter::Peekable, str::CharIndices};

use crate::error::Error;

/// Whether `c` separates clauses: Unicode whitespace except the no-break
/// spaces and NEL, plus the ASCII information separators.
pub(crate) fn is_separator(c: char) -> bool {
	match c {
		'\u{a0}' | '\u{85}' | '\u{2007}' | '\u{202f}' => false,
		'\u{1c}'..='\u{1f}' => true,
		c => c.is_whitespace(),
	}
}

/// One clause of a directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Clause<'a> {
	/// The option name as written
	pub(crate) key: &'a str,
	/// The unquoted value, `None` for a bare flag such as `attrsonly`
	pub(crate) value: Option<String>,
	/// Byte offset of the key in the directive
	pub(crate) position: usize,
}

/// Iterator over the clauses of a directive.
#[derive(Debug)]
pub(crate) struct Lexer<'a> {
	/// The directive being scanned
	source: &'a str,
	/// Scan cursor
	chars: Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
	/// Create a lexer over the given directive.
	pub(crate) fn new(source: &'a str) -> Self {
		Self { source, chars: source.char_indices().peekable() }
	}

	/// Byte offset of the next character.
	fn offset(&mut self) -> usize {
		self.chars.peek().map_or(self.source.len(), |&(i, _)| i)
	}

	/// Skip over any whitespace.
	fn skip_whitespace(&mut self) {
		while self.chars.next_if(|&(_, c)| is_separator(c)).is_some() {}
	}

	/// Append characters up to the next whitespace to `value`.
	fn read_bare(&mut self, value: &mut String) {
		while let Some((_, c)) = self.chars.next_if(|&(_, c)| !is_separator(c)) {
			value.push(c);
		}
	}

	/// Read a value starting at the cursor.
	fn read_value(&mut self, key: &str) -> Result<String, Error> {
		let mut value = String::new();
		let Some((position, quote)) =
			self.chars.next_if(|&(_, c)| c == '"' || c == '\'')
		else {
			self.read_bare(&mut value);
			return Ok(value);
		};

		loop {
			match self.chars.next() {
				None => {
					return Err(Error::UnterminatedQuote { option: key.to_owned(), position });
				}
				Some((_, c)) if c == quote => break,
				Some((_, '\\')) => {
					match self.chars.next_if(|&(_, c)| c == quote || c == '\\') {
						Some((_, escaped)) => value.push(escaped),
						None => value.push('\\'),
					}
				}
				Some((_, c)) => value.push(c),
			}
		}
		// Anything glued to the closing quote belongs to the same value
		self.read_bare(&mut value);
		Ok(value)
	}
}

impl<'a> Iterator for Lexer<'a> {
	type Item = Result<Clause<'a>, Error>;

	fn next(&mut self) -> Option<Self::Item> {
		self.skip_whitespace();
		let position = self.offset();
		if position == self.source.len() {
			return None;
		}

		while self.chars.next_if(|&(_, c)| c != '=' && !is_separator(c)).is_some() {}
		let end = self.offset();
		let source = self.source;
		let key = &source[position..end];

		self.skip_whitespace();
		if self.chars.next_if(|&(_, c)| c == '=').is_none() {
			return Some(Ok(Clause { key, value: None, position }));
		}
		self.skip_whitespace();

		Some(self.read_value(key).map(|value| Clause { key, value: Some(value), position }))
	}
}

#[cfg(test)]
mod tests {
	#![allow(clippy::unwrap_used)]

	use super::{Clause, Lexer};
	use crate::error::Error;

	/// Collect `(key, value)` pairs, panicking on errors
	fn pairs(s: &str) -> Vec<(&str, Option<String>)> {
		Lexer::new(s).map(|clause| clause.unwrap()).map(|c| (c.key, c.value)).collect()
	}

	fn some(s: &str) -> Option<String> {
		Some(s.to_owned())
	}

	#[test]
	fn empty() {
		assert!(pairs("").is_empty());
		assert!(pairs(" \n\t ").is_empty());
	}

	#[test]
	fn no_break_space_is_not_a_separator() {
		assert_eq!(pairs("rid=\u{a0}1"), [("rid", some("\u{a0}1"))]);
		assert_eq!(pairs("rid=1\u{202f}2\tscope=sub"), [("rid", some("1\u{202f}2")), ("scope", some("sub"))]);
		assert_eq!(pairs("rid=1\u{1f}scope=sub"), [("rid", some("1")), ("scope", some("sub"))]);
	}

	#[test]
	fn whitespace_around_equals() {
		assert_eq!(pairs("  rid = 123  "), [("rid", some("123"))]);
		assert_eq!(pairs("rid\n=\n123"), [("rid", some("123"))]);
	}

	#[test]
	fn positions() {
		let clauses: Vec<Clause<'_>> = Lexer::new("rid=1  scope=sub").map(Result::unwrap).collect();
		assert_eq!(clauses[0].position, 0);
		assert_eq!(clauses[1].position, 7);
	}

	#[test]
	fn bare_values_may_contain_equals_and_commas() {
		assert_eq!(
			pairs("binddn=cn=syncuser,dc=example,dc=com filter=(objectClass=*)"),
			[("binddn", some("cn=syncuser,dc=example,dc=com")), ("filter", some("(objectClass=*)"))]
		);
	}

	#[test]
	fn quoted_values() {
		assert_eq!(
			pairs("retry=\"60 +\"\nlogbase='cn=access log'"),
			[("retry", some("60 +")), ("logbase", some("cn=access log"))]
		);
	}

	#[test]
	fn escapes() {
		assert_eq!(pairs(r#"credentials="pass\"word""#), [("credentials", some("pass\"word"))]);
		assert_eq!(pairs(r"credentials='it\'s'"), [("credentials", some("it's"))]);
		assert_eq!(pairs(r#"credentials="a\\b""#), [("credentials", some("a\\b"))]);
		assert_eq!(pairs(r#"credentials="a\nb""#), [("credentials", some("a\\nb"))]);
		assert_eq!(pairs(r#"credentials="it's""#), [("credentials", some("it's"))]);
	}

	#[test]
	fn text_after_closing_quote_is_kept() {
		assert_eq!(pairs("credentials=\"abc\"def rid=1"), [
			("credentials", some("abcdef")),
			("rid", some("1"))
		]);
	}

	#[test]
	fn flags_and_empty_values() {
		assert_eq!(pairs("attrsonly rid=1"), [("attrsonly", None), ("rid", some("1"))]);
		assert_eq!(pairs("rid="), [("rid", some(""))]);
		assert_eq!(pairs("rid=\"\""), [("rid", some(""))]);
	}

	#[test]
	fn unterminated_quote() {
		let mut lexer = Lexer::new("rid=1 searchbase=\"dc=example");
		assert!(lexer.next().unwrap().is_ok());
		assert_eq!(
			lexer.next().unwrap(),
			Err(Error::UnterminatedQuote { option: "searchbase".to_owned(), position: 17 })
		);
		assert!(lexer.next().is_none());
	}
}
