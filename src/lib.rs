//! Parse the OpenLDAP `syncrepl` replication directive.
//!
//! A replication consumer is configured with a single value made of
//! whitespace separated `key=value` options, stored in the `olcSyncrepl`
//! attribute of `cn=config` or written as a `syncrepl` line in `slapd.conf`.
//! This crate decodes such a value into a [`SyncRepl`], with the structured
//! options ([`Provider`], [`Retry`], [`Interval`], [`KeepAlive`] and the
//! keyword enums) parsed into their own types. Every value type renders back
//! to its canonical directive text through [`Display`](std::fmt::Display).
//!
//! The option syntax is described in the [slapd.conf(5)] and
//! [slapd-config(5)] man pages.
//!
//! [slapd.conf(5)]: https://www.openldap.org/software/man.cgi?query=slapd.conf
//! [slapd-config(5)]: https://www.openldap.org/software/man.cgi?query=slapd-config
//!
//! # Getting started
//! ```
//! # fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use syncrepl_config::{BindMethod, Retries, SyncReplParser};
//!
//! let parser = SyncReplParser::default();
//! let syncrepl = parser
//!     .parse(
//!         r#"rid=001 provider=ldaps://master.example.com:636
//!            bindmethod=simple binddn="cn=replicator,dc=example,dc=com"
//!            credentials=secret searchbase="dc=example,dc=com"
//!            type=refreshAndPersist retry="5 5 300 +""#,
//!     )?
//!     .ok_or("no syncrepl options found")?;
//!
//! assert_eq!(syncrepl.rid(), Some("001"));
//! assert_eq!(syncrepl.bind_method(), Some(BindMethod::Simple));
//! let provider = syncrepl.provider().ok_or("no provider")?;
//! assert!(provider.is_ldaps());
//! assert_eq!(provider.port(), Some(636));
//! let retry = syncrepl.retry().ok_or("no retry")?;
//! assert_eq!(retry.pairs()[1].retries(), Retries::Forever);
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```
//!
//! # Limitations
//! * A directive without any recognized option parses to `None`, the same as
//!   an empty one.
//! * Unknown options are skipped by default, so typos in option names go
//!   unnoticed unless [`UnknownOptions::Reject`] is configured.
//! * Option values are checked for syntax only. Whether a DN or filter is
//!   valid is not verified.

pub mod config;
pub mod error;
pub mod interval;
pub mod keepalive;
mod keyword;
mod lexer;
mod number;
pub mod options;
pub mod parser;
pub mod provider;
pub mod retry;
pub mod syncrepl;

pub use crate::{
	config::{ParserConfig, UnknownOptions},
	error::{Error, ErrorList},
	interval::Interval,
	keepalive::KeepAlive,
	options::{BindMethod, SchemaChecking, Scope, StartTls, SyncData, TlsCrlCheck, TlsReqCert, Type},
	parser::{parse, SyncReplParser},
	provider::Provider,
	retry::{Retries, Retry, RetryPair},
	syncrepl::SyncRepl,
};
