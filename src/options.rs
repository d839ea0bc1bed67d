//! Options whose value is one of a fixed set of keywords.
use std::{fmt, str::FromStr};

use crate::error::Error;

/// Declares a keyword enum together with its case-insensitive parser and its
/// canonical rendering. Extra tokens after `|` are accepted aliases.
macro_rules! keyword_enum {
	(
		$(#[$meta:meta])*
		pub enum $name:ident as $kind:literal {
			$($(#[$vmeta:meta])* $variant:ident => $token:literal $(| $alias:literal)*,)+
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		pub enum $name {
			$($(#[$vmeta])* $variant,)+
		}

		impl $name {
			/// Every variant, in declaration order.
			pub const ALL: &'static [Self] = &[$(Self::$variant),+];

			/// Parse the option value, ignoring case.
			pub fn parse(s: &str) -> Result<Self, Error> {
				$(
					if s.eq_ignore_ascii_case($token) $(|| s.eq_ignore_ascii_case($alias))* {
						return Ok(Self::$variant);
					}
				)+
				Err(Error::invalid($kind, s, concat!("one of" $(, " '", $token, "'")+)))
			}

			/// The token written in the directive.
			#[must_use]
			pub fn as_str(&self) -> &'static str {
				match self {
					$(Self::$variant => $token,)+
				}
			}
		}

		impl FromStr for $name {
			type Err = Error;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Self::parse(s)
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str(self.as_str())
			}
		}

		impl serde::Serialize for $name {
			fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
				serializer.serialize_str(self.as_str())
			}
		}
	};
}

keyword_enum! {
	/// How the consumer authenticates to the provider.
	pub enum BindMethod as "bind method" {
		/// Simple bind with a DN and password
		Simple => "simple",
		/// SASL bind
		Sasl => "sasl",
	}
}

keyword_enum! {
	/// Whether replicated entries are checked against the consumer's schema.
	pub enum SchemaChecking as "schema checking" {
		/// Check entries
		On => "on",
		/// Store entries without checking
		Off => "off",
	}
}

keyword_enum! {
	/// The synchronization mode.
	pub enum Type as "type" {
		/// Poll the provider every [`Interval`](crate::Interval)
		RefreshOnly => "refreshOnly",
		/// Keep a persistent search open after the initial refresh
		RefreshAndPersist => "refreshAndPersist",
	}
}

keyword_enum! {
	/// Scope of the replication search.
	pub enum Scope as "scope" {
		/// The search base entry only
		Base => "base",
		/// Immediate children of the search base
		One => "one",
		/// The whole subtree including the base
		Sub => "sub",
		/// The whole subtree excluding the base
		Subord => "subord" | "subordinate",
	}
}

keyword_enum! {
	/// Where the synchronization state comes from.
	pub enum SyncData as "sync data" {
		/// Plain LDAP Content Synchronization
		Default => "default",
		/// Delta-syncrepl using an accesslog database
		Accesslog => "accesslog",
		/// Changelog format
		Changelog => "changelog",
	}
}

keyword_enum! {
	/// Use of the StartTLS extended operation.
	pub enum StartTls as "starttls" {
		/// Try StartTLS, continue unencrypted if it fails
		Yes => "yes",
		/// Fail if StartTLS fails
		Critical => "critical",
	}
}

keyword_enum! {
	/// Checks performed on the provider's certificate.
	pub enum TlsReqCert as "tls_reqcert" {
		/// Don't request or check a certificate
		Never => "never",
		/// Request a certificate, proceed if it is missing or bad
		Allow => "allow",
		/// Request a certificate, proceed if it is missing but not if bad
		Try => "try",
		/// Require a valid certificate
		Demand => "demand",
	}
}

keyword_enum! {
	/// Certificate revocation list checking.
	pub enum TlsCrlCheck as "tls_crlcheck" {
		/// No CRL checks
		None => "none",
		/// Check the provider certificate
		Peer => "peer",
		/// Check the whole chain
		All => "all",
	}
}
