//! The `keepalive` option: TCP keepalive settings for the consumer connection.
use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::{error::Error, number::parse_fields};

/// TCP keepalive parameters, written `idle:probes:interval`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct KeepAlive {
	/// Seconds a connection must be idle before probes are sent
	idle: u32,
	/// Unanswered probes before the connection is dropped
	probes: u32,
	/// Seconds between probes
	interval: u32,
}

impl KeepAlive {
	/// Parse exactly three colon separated fields.
	pub fn parse(s: &str) -> Result<Self, Error> {
		let [idle, probes, interval] = parse_fields::<3>(s)
			.ok_or_else(|| Error::invalid("keepalive", s, "'idle:probes:interval'"))?;
		Ok(Self { idle, probes, interval })
	}

	/// Idle seconds before probing starts.
	#[must_use]
	pub fn idle(&self) -> u32 {
		self.idle
	}

	/// Maximum number of unanswered probes.
	#[must_use]
	pub fn probes(&self) -> u32 {
		self.probes
	}

	/// Seconds between probes.
	#[must_use]
	pub fn interval(&self) -> u32 {
		self.interval
	}

	/// [`KeepAlive::idle`] as a [`time::Duration`].
	#[must_use]
	pub fn idle_duration(&self) -> time::Duration {
		time::Duration::seconds(i64::from(self.idle))
	}

	/// [`KeepAlive::interval`] as a [`time::Duration`].
	#[must_use]
	pub fn interval_duration(&self) -> time::Duration {
		time::Duration::seconds(i64::from(self.interval))
	}
}

impl FromStr for KeepAlive {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl fmt::Display for KeepAlive {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}:{}", self.idle, self.probes, self.interval)
	}
}

impl From<KeepAlive> for String {
	fn from(keep_alive: KeepAlive) -> Self {
		keep_alive.to_string()
	}
}
