//! The `interval` option of `refreshOnly` consumers.
use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::{error::Error, number::parse_fields};

/// Time between synchronization runs, written `dd:hh:mm:ss`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Interval {
	/// Days
	days: u32,
	/// Hours
	hours: u32,
	/// Minutes
	minutes: u32,
	/// Seconds
	seconds: u32,
}

impl Interval {
	/// Parse exactly four colon separated fields.
	pub fn parse(s: &str) -> Result<Self, Error> {
		let [days, hours, minutes, seconds] = parse_fields::<4>(s)
			.ok_or_else(|| Error::invalid("interval", s, "'days:hours:minutes:seconds'"))?;
		Ok(Self { days, hours, minutes, seconds })
	}

	/// Days field.
	#[must_use]
	pub fn days(&self) -> u32 {
		self.days
	}

	/// Hours field.
	#[must_use]
	pub fn hours(&self) -> u32 {
		self.hours
	}

	/// Minutes field.
	#[must_use]
	pub fn minutes(&self) -> u32 {
		self.minutes
	}

	/// Seconds field.
	#[must_use]
	pub fn seconds(&self) -> u32 {
		self.seconds
	}

	/// The total length of the interval.
	#[must_use]
	pub fn to_duration(&self) -> time::Duration {
		time::Duration::days(i64::from(self.days))
			+ time::Duration::hours(i64::from(self.hours))
			+ time::Duration::minutes(i64::from(self.minutes))
			+ time::Duration::seconds(i64::from(self.seconds))
	}
}

impl FromStr for Interval {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl fmt::Display for Interval {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:02}:{:02}:{:02}:{:02}", self.days, self.hours, self.minutes, self.seconds)
	}
}

impl From<Interval> for String {
	fn from(interval: Interval) -> Self {
		interval.to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::Interval;
	use crate::error::Error;

	#[test]
	fn round_trip() -> Result<(), Box<dyn std::error::Error>> {
		for s in ["01:00:00:00", "00:00:05:00", "12:34:56:78", "365:00:00:00"] {
			assert_eq!(Interval::parse(s)?.to_string(), s);
		}
		assert_eq!(Interval::parse("1:2:3:4")?.to_string(), "01:02:03:04");
		Ok(())
	}

	#[test]
	fn fields_and_duration() -> Result<(), Box<dyn std::error::Error>> {
		let interval: Interval = "01:02:03:04".parse()?;
		assert_eq!(interval.days(), 1);
		assert_eq!(interval.hours(), 2);
		assert_eq!(interval.minutes(), 3);
		assert_eq!(interval.seconds(), 4);
		assert_eq!(interval.to_duration().whole_seconds(), 86_400 + 2 * 3_600 + 3 * 60 + 4);
		Ok(())
	}

	#[test]
	fn rejects_malformed() {
		for s in ["", "12:34", "12:34:56", "12:34:56:78:90", "12:34:5a:78", "12:34::78", "-1:0:0:0"] {
			assert!(
				matches!(Interval::parse(s), Err(Error::InvalidFormat { kind: "interval", .. })),
				"{s:?} should be rejected"
			);
		}
	}
}
