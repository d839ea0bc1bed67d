//! The `retry` option: how a consumer reconnects after losing the provider.
//!
//! The value is a list of `<interval> <retries>` pairs. Each pair is applied in
//! turn: the consumer waits `interval` seconds between attempts and gives up on
//! the tier after `retries` attempts, moving on to the next pair. A retry count
//! of `+` means the tier is retried indefinitely.
use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::{error::Error, number::parse_decimal};

/// Number of attempts in one retry tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Retries {
	/// A fixed number of attempts
	Count(u32),
	/// Retry indefinitely, written as `+`
	Forever,
}

impl fmt::Display for Retries {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Retries::Count(count) => write!(f, "{count}"),
			Retries::Forever => f.write_str("+"),
		}
	}
}

/// A single `<interval> <retries>` tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct RetryPair {
	/// Seconds to wait between attempts
	interval: u32,
	/// Attempts before moving to the next tier
	retries: Retries,
}

impl RetryPair {
	/// The `+` retry count.
	pub const PLUS: Retries = Retries::Forever;

	/// Parse a pair written as exactly two tokens separated by one space.
	pub fn parse(s: &str) -> Result<Self, Error> {
		let invalid = || Error::invalid("retry pair", s, "'<interval> <retries|+>'");

		let (interval, retries) = s.split_once(' ').ok_or_else(invalid)?;
		let interval = parse_decimal(interval).ok_or_else(invalid)?;
		let retries = match retries {
			"+" => Retries::Forever,
			count => Retries::Count(parse_decimal(count).ok_or_else(invalid)?),
		};
		Ok(Self { interval, retries })
	}

	/// Seconds between attempts.
	#[must_use]
	pub fn interval(&self) -> u32 {
		self.interval
	}

	/// The time between attempts as a [`time::Duration`].
	#[must_use]
	pub fn interval_duration(&self) -> time::Duration {
		time::Duration::seconds(i64::from(self.interval))
	}

	/// Attempts in this tier.
	#[must_use]
	pub fn retries(&self) -> Retries {
		self.retries
	}
}

impl FromStr for RetryPair {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl fmt::Display for RetryPair {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.interval, self.retries)
	}
}

impl From<RetryPair> for String {
	fn from(pair: RetryPair) -> Self {
		pair.to_string()
	}
}

/// The ordered, non-empty list of retry tiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Retry {
	/// Tiers in the order they are applied
	pairs: Vec<RetryPair>,
}

impl Retry {
	/// Parse a whitespace separated list with an even number of tokens.
	pub fn parse(s: &str) -> Result<Self, Error> {
		let invalid = || Error::invalid("retry", s, "'<interval> <retries|+>' pairs");

		let tokens: Vec<&str> = s.split_whitespace().collect();
		if tokens.is_empty() || tokens.len() % 2 != 0 {
			return Err(invalid());
		}
		let pairs = tokens
			.chunks(2)
			.map(|pair| RetryPair::parse(&pair.join(" ")))
			.collect::<Result<Vec<_>, _>>()
			.map_err(|_| invalid())?;
		Ok(Self { pairs })
	}

	/// The tiers, first applied first.
	#[must_use]
	pub fn pairs(&self) -> &[RetryPair] {
		&self.pairs
	}

	/// Number of tiers.
	#[must_use]
	pub fn len(&self) -> usize {
		self.pairs.len()
	}

	/// Always `false`, a parsed [`Retry`] has at least one tier.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.pairs.is_empty()
	}

	/// Iterate over the tiers in order.
	pub fn iter(&self) -> std::slice::Iter<'_, RetryPair> {
		self.pairs.iter()
	}
}

impl<'a> IntoIterator for &'a Retry {
	type Item = &'a RetryPair;
	type IntoIter = std::slice::Iter<'a, RetryPair>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl FromStr for Retry {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl fmt::Display for Retry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, pair) in self.pairs.iter().enumerate() {
			if i > 0 {
				f.write_str(" ")?;
			}
			write!(f, "{pair}")?;
		}
		Ok(())
	}
}

impl From<Retry> for String {
	fn from(retry: Retry) -> Self {
		retry.to_string()
	}
}
