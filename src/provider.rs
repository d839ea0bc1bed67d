//! The `provider` option: the URL of the server a consumer replicates from.
use std::{fmt, str::FromStr};

use serde::Serialize;
use url::Url;

use crate::error::Error;

/// Expected syntax, used in error messages
const EXPECTED: &str = "ldap[s]://host[:port]";

/// An LDAP URL pointing at the replication provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Provider {
	/// Whether the `ldaps` scheme is used
	ldaps: bool,
	/// Host name or address, as written
	host: String,
	/// Port, if one was given
	port: Option<u16>,
}

impl Provider {
	/// Value of [`Provider::port`] when the URL carries no port.
	pub const NO_PORT: Option<u16> = None;

	/// Parse a provider URL of the form `ldap[s]://host[:port]`. The scheme is
	/// matched case-insensitively.
	pub fn parse(s: &str) -> Result<Self, Error> {
		let invalid = || Error::invalid("provider", s, EXPECTED);

		// `Url` reads an empty port as no port at all
		let authority = s
			.split_once("://")
			.map_or("", |(_, rest)| rest.split_once('/').map_or(rest, |(authority, _)| authority));
		if authority.ends_with(':') {
			return Err(invalid());
		}

		let url = Url::parse(s).map_err(|_| invalid())?;
		let ldaps = match url.scheme() {
			"ldap" => false,
			"ldaps" => true,
			_ => return Err(invalid()),
		};
		let host = match url.host_str() {
			Some(host) if !host.is_empty() => host.to_owned(),
			_ => return Err(invalid()),
		};
		if !url.username().is_empty()
			|| url.password().is_some()
			|| !matches!(url.path(), "" | "/")
			|| url.query().is_some()
			|| url.fragment().is_some()
		{
			return Err(invalid());
		}

		Ok(Self { ldaps, host, port: url.port() })
	}

	/// Whether the provider is contacted over LDAPS.
	#[must_use]
	pub fn is_ldaps(&self) -> bool {
		self.ldaps
	}

	/// The provider host.
	#[must_use]
	pub fn host(&self) -> &str {
		&self.host
	}

	/// The provider port, or [`Provider::NO_PORT`].
	#[must_use]
	pub fn port(&self) -> Option<u16> {
		self.port
	}

	/// Convert to a [`Url`], e.g. for handing to an LDAP client.
	pub fn to_url(&self) -> Result<Url, Error> {
		let s = self.to_string();
		Url::parse(&s).map_err(|_| Error::invalid("provider", &s, EXPECTED))
	}
}

impl FromStr for Provider {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl fmt::Display for Provider {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let scheme = if self.ldaps { "ldaps" } else { "ldap" };
		write!(f, "{scheme}://{}", self.host)?;
		if let Some(port) = self.port {
			write!(f, ":{port}")?;
		}
		Ok(())
	}
}

impl From<Provider> for String {
	fn from(provider: Provider) -> Self {
		provider.to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::Provider;
	use crate::error::Error;

	#[test]
	fn canonical_forms_round_trip() -> Result<(), Box<dyn std::error::Error>> {
		for s in ["ldap://localhost", "ldap://localhost:389", "ldaps://localhost:636"] {
			assert_eq!(Provider::parse(s)?.to_string(), s);
		}
		Ok(())
	}

	#[test]
	fn scheme_is_case_insensitive() -> Result<(), Box<dyn std::error::Error>> {
		assert_eq!(Provider::parse("LDAP://host")?.to_string(), "ldap://host");
		let provider = Provider::parse("LDAPS://host:1")?;
		assert!(provider.is_ldaps());
		assert_eq!(provider.to_string(), "ldaps://host:1");
		Ok(())
	}

	#[test]
	fn fields() -> Result<(), Box<dyn std::error::Error>> {
		let provider: Provider = "ldap://ldapmaster.symas.com:389".parse()?;
		assert!(!provider.is_ldaps());
		assert_eq!(provider.host(), "ldapmaster.symas.com");
		assert_eq!(provider.port(), Some(389));

		let provider = Provider::parse("ldaps://example.com")?;
		assert_eq!(provider.port(), Provider::NO_PORT);
		Ok(())
	}

	#[test]
	fn trailing_slash_is_dropped() -> Result<(), Box<dyn std::error::Error>> {
		assert_eq!(Provider::parse("ldap://host:389/")?.to_string(), "ldap://host:389");
		Ok(())
	}

	#[test]
	fn rejects_malformed() {
		for s in [
			"",
			"ldap:",
			"ldap://",
			"localhost:389",
			"http://localhost",
			"ldapi://%2Fvar%2Frun%2Fslapd.sock",
			"ldap://localhost:99999",
			"ldap://localhost:",
			"ldaps://localhost:/",
			"ldap://localhost/dc=example,dc=com",
			"ldap://user@localhost",
		] {
			assert!(
				matches!(Provider::parse(s), Err(Error::InvalidFormat { kind: "provider", .. })),
				"{s:?} should be rejected"
			);
		}
	}

	#[test]
	fn to_url() -> Result<(), Box<dyn std::error::Error>> {
		let url = Provider::parse("ldaps://example.com:636")?.to_url()?;
		assert_eq!(url.scheme(), "ldaps");
		assert_eq!(url.host_str(), Some("example.com"));
		assert_eq!(url.port(), Some(636));
		Ok(())
	}
}
