//! Parser turning a directive string into a [`SyncRepl`].
use tracing::{debug, trace};

use crate::{
	config::{ParserConfig, UnknownOptions},
	error::{Error, ErrorList},
	interval::Interval,
	keepalive::KeepAlive,
	keyword::Keyword,
	lexer::{Clause, Lexer},
	number::parse_decimal,
	options::{BindMethod, SchemaChecking, Scope, StartTls, SyncData, TlsCrlCheck, TlsReqCert, Type},
	provider::Provider,
	retry::Retry,
	syncrepl::SyncRepl,
};

/// Parser for syncrepl directives.
///
/// The parser holds no state between calls, so a single instance can be
/// shared between threads.
#[derive(Debug, Clone, Default)]
pub struct SyncReplParser {
	/// How to treat unknown options and errors
	config: ParserConfig,
}

impl SyncReplParser {
	/// Create a parser with the given configuration.
	#[must_use]
	pub fn new(config: ParserConfig) -> Self {
		Self { config }
	}

	/// The configuration in use.
	#[must_use]
	pub fn config(&self) -> &ParserConfig {
		&self.config
	}

	/// Parse a directive.
	///
	/// Returns `Ok(None)` if the directive is blank or contains no option the
	/// parser recognizes. Errors in option values are collected over the whole
	/// directive: a single error is returned as is, several as
	/// [`Error::Directive`]. With [`ParserConfig::fail_fast`] set, the first
	/// error is returned right away.
	pub fn parse(&self, directive: &str) -> Result<Option<SyncRepl>, Error> {
		let mut syncrepl = SyncRepl::empty();
		let mut recognized = false;
		let mut errors = Vec::new();

		for clause in Lexer::new(directive) {
			let result = match clause {
				Ok(clause) => match Keyword::from_name(clause.key) {
					Some(keyword) => {
						recognized = true;
						apply(&mut syncrepl, keyword, clause)
					}
					None => self.unknown(&clause),
				},
				Err(err) => Err(err),
			};

			if let Err(err) = result {
				if self.config.fail_fast {
					return Err(err);
				}
				errors.push(err);
			}
		}

		if errors.len() > 1 {
			return Err(Error::Directive(ErrorList(errors)));
		}
		if let Some(err) = errors.pop() {
			return Err(err);
		}
		if !recognized {
			debug!("No syncrepl option found in directive");
		}
		Ok(recognized.then_some(syncrepl))
	}

	/// Handle an option name that isn't a [`Keyword`].
	fn unknown(&self, clause: &Clause<'_>) -> Result<(), Error> {
		match self.config.unknown_options {
			UnknownOptions::Ignore => {
				debug!("Ignoring unknown option '{}'", clause.key);
				Ok(())
			}
			UnknownOptions::Reject => Err(Error::UnknownOption(clause.key.to_owned())),
		}
	}
}

/// Parse a directive with the default [`ParserConfig`].
pub fn parse(directive: &str) -> Result<Option<SyncRepl>, Error> {
	SyncReplParser::default().parse(directive)
}

/// Store one option in `syncrepl`.
fn apply(syncrepl: &mut SyncRepl, keyword: Keyword, clause: Clause<'_>) -> Result<(), Error> {
	trace!(option = keyword.as_str(), position = clause.position, "Parsing option");

	if keyword.is_flag() {
		return match clause.value {
			None => {
				syncrepl.attrs_only = true;
				Ok(())
			}
			Some(value) => Err(Error::invalid(keyword.as_str(), &value, "no value")),
		};
	}

	let value = match clause.value {
		Some(value) if !value.is_empty() => value,
		_ => {
			return Err(Error::MissingValue {
				option: clause.key.to_owned(),
				position: clause.position,
			})
		}
	};

	match keyword {
		Keyword::Rid => set(&mut syncrepl.rid, keyword, value),
		Keyword::Provider => set(&mut syncrepl.provider, keyword, Provider::parse(&value)?),
		Keyword::SearchBase => set(&mut syncrepl.search_base, keyword, value),
		Keyword::Type => set(&mut syncrepl.ty, keyword, Type::parse(&value)?),
		Keyword::Interval => set(&mut syncrepl.interval, keyword, Interval::parse(&value)?),
		Keyword::Retry => set(&mut syncrepl.retry, keyword, Retry::parse(&value)?),
		Keyword::Filter => set(&mut syncrepl.filter, keyword, value),
		Keyword::Scope => set(&mut syncrepl.scope, keyword, Scope::parse(&value)?),
		Keyword::Attrs => {
			let attributes: Vec<String> =
				value.split(',').map(str::trim).filter(|attr| !attr.is_empty()).map(str::to_owned).collect();
			if attributes.is_empty() {
				return Err(Error::MissingValue {
					option: clause.key.to_owned(),
					position: clause.position,
				});
			}
			syncrepl.attributes.extend(attributes);
		}
		// Handled above
		Keyword::AttrsOnly => {}
		Keyword::SizeLimit => set(&mut syncrepl.size_limit, keyword, number("size limit", &value)?),
		Keyword::TimeLimit => set(&mut syncrepl.time_limit, keyword, number("time limit", &value)?),
		Keyword::SchemaChecking => {
			set(&mut syncrepl.schema_checking, keyword, SchemaChecking::parse(&value)?);
		}
		Keyword::NetworkTimeout => {
			set(&mut syncrepl.network_timeout, keyword, number("network timeout", &value)?);
		}
		Keyword::Timeout => set(&mut syncrepl.timeout, keyword, number("timeout", &value)?),
		Keyword::BindMethod => {
			set(&mut syncrepl.bind_method, keyword, BindMethod::parse(&value)?);
		}
		Keyword::BindDn => set(&mut syncrepl.bind_dn, keyword, value),
		Keyword::SaslMech => set(&mut syncrepl.sasl_mech, keyword, value),
		Keyword::AuthcId => set(&mut syncrepl.authcid, keyword, value),
		Keyword::AuthzId => set(&mut syncrepl.authzid, keyword, value),
		Keyword::Credentials => set(&mut syncrepl.credentials, keyword, value),
		Keyword::Realm => set(&mut syncrepl.realm, keyword, value),
		Keyword::SecProps => set(&mut syncrepl.sec_props, keyword, value),
		Keyword::KeepAlive => set(&mut syncrepl.keep_alive, keyword, KeepAlive::parse(&value)?),
		Keyword::StartTls => set(&mut syncrepl.start_tls, keyword, StartTls::parse(&value)?),
		Keyword::TlsCert => set(&mut syncrepl.tls_cert, keyword, value),
		Keyword::TlsKey => set(&mut syncrepl.tls_key, keyword, value),
		Keyword::TlsCacert => set(&mut syncrepl.tls_cacert, keyword, value),
		Keyword::TlsCacertDir => set(&mut syncrepl.tls_cacert_dir, keyword, value),
		Keyword::TlsReqCert => {
			set(&mut syncrepl.tls_reqcert, keyword, TlsReqCert::parse(&value)?);
		}
		Keyword::TlsCipherSuite => set(&mut syncrepl.tls_cipher_suite, keyword, value),
		Keyword::TlsCrlCheck => {
			set(&mut syncrepl.tls_crlcheck, keyword, TlsCrlCheck::parse(&value)?);
		}
		Keyword::LogBase => set(&mut syncrepl.log_base, keyword, value),
		Keyword::LogFilter => set(&mut syncrepl.log_filter, keyword, value),
		Keyword::SyncData => set(&mut syncrepl.sync_data, keyword, SyncData::parse(&value)?),
	}
	Ok(())
}

/// Store a value, the last occurrence of an option wins.
fn set<T>(field: &mut Option<T>, keyword: Keyword, value: T) {
	if field.replace(value).is_some() {
		debug!("Option '{}' given more than once, using the last value", keyword.as_str());
	}
}

/// Parse a numeric option.
fn number(kind: &'static str, value: &str) -> Result<u32, Error> {
	parse_decimal(value).ok_or_else(|| Error::invalid(kind, value, "a non-negative integer"))
}
