//! The parsed form of a syncrepl directive.
use std::fmt;

use serde::Serialize;

use crate::{
	interval::Interval,
	keepalive::KeepAlive,
	keyword::Keyword,
	lexer::is_separator,
	options::{BindMethod, SchemaChecking, Scope, StartTls, SyncData, TlsCrlCheck, TlsReqCert, Type},
	provider::Provider,
	retry::Retry,
};

/// A replication consumer configuration, as read from an `olcSyncrepl` value
/// or a `syncrepl` line of `slapd.conf`.
///
/// Instances are created by [`SyncReplParser`](crate::SyncReplParser). Every
/// option is optional and only set if the directive contained it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncRepl {
	/// Replica ID
	pub(crate) rid: Option<String>,
	/// Server to replicate from
	pub(crate) provider: Option<Provider>,
	/// Base of the replicated subtree
	pub(crate) search_base: Option<String>,
	/// Synchronization mode
	#[serde(rename = "type")]
	pub(crate) ty: Option<Type>,
	/// Polling interval of `refreshOnly` mode
	pub(crate) interval: Option<Interval>,
	/// Reconnection tiers
	pub(crate) retry: Option<Retry>,
	/// Search filter
	pub(crate) filter: Option<String>,
	/// Search scope
	pub(crate) scope: Option<Scope>,
	/// Attributes to replicate
	pub(crate) attributes: Vec<String>,
	/// Replicate attribute names only
	pub(crate) attrs_only: bool,
	/// Search size limit
	pub(crate) size_limit: Option<u32>,
	/// Search time limit in seconds
	pub(crate) time_limit: Option<u32>,
	/// Whether to check entries against the local schema
	pub(crate) schema_checking: Option<SchemaChecking>,
	/// Connection timeout in seconds
	pub(crate) network_timeout: Option<u32>,
	/// Operation timeout in seconds
	pub(crate) timeout: Option<u32>,
	/// Bind method
	pub(crate) bind_method: Option<BindMethod>,
	/// DN for simple binds
	pub(crate) bind_dn: Option<String>,
	/// SASL mechanism
	pub(crate) sasl_mech: Option<String>,
	/// SASL authentication identity
	pub(crate) authcid: Option<String>,
	/// SASL authorization identity
	pub(crate) authzid: Option<String>,
	/// Bind password
	#[serde(skip)]
	pub(crate) credentials: Option<String>,
	/// SASL realm
	pub(crate) realm: Option<String>,
	/// SASL security properties
	pub(crate) sec_props: Option<String>,
	/// TCP keepalive settings
	pub(crate) keep_alive: Option<KeepAlive>,
	/// StartTLS usage
	pub(crate) start_tls: Option<StartTls>,
	/// Client certificate file
	pub(crate) tls_cert: Option<String>,
	/// Client key file
	pub(crate) tls_key: Option<String>,
	/// CA certificate file
	pub(crate) tls_cacert: Option<String>,
	/// CA certificate directory
	pub(crate) tls_cacert_dir: Option<String>,
	/// Provider certificate checks
	pub(crate) tls_reqcert: Option<TlsReqCert>,
	/// Allowed cipher suites
	pub(crate) tls_cipher_suite: Option<String>,
	/// CRL checks
	pub(crate) tls_crlcheck: Option<TlsCrlCheck>,
	/// Base of the accesslog database
	pub(crate) log_base: Option<String>,
	/// Filter applied to accesslog entries
	pub(crate) log_filter: Option<String>,
	/// Source of the synchronization state
	pub(crate) sync_data: Option<SyncData>,
}

impl SyncRepl {
	/// A configuration without any options set.
	pub(crate) fn empty() -> Self {
		Self {
			rid: None,
			provider: None,
			search_base: None,
			ty: None,
			interval: None,
			retry: None,
			filter: None,
			scope: None,
			attributes: Vec::new(),
			attrs_only: false,
			size_limit: None,
			time_limit: None,
			schema_checking: None,
			network_timeout: None,
			timeout: None,
			bind_method: None,
			bind_dn: None,
			sasl_mech: None,
			authcid: None,
			authzid: None,
			credentials: None,
			realm: None,
			sec_props: None,
			keep_alive: None,
			start_tls: None,
			tls_cert: None,
			tls_key: None,
			tls_cacert: None,
			tls_cacert_dir: None,
			tls_reqcert: None,
			tls_cipher_suite: None,
			tls_crlcheck: None,
			log_base: None,
			log_filter: None,
			sync_data: None,
		}
	}

	/// Replica ID, `rid`.
	#[must_use]
	pub fn rid(&self) -> Option<&str> {
		self.rid.as_deref()
	}

	/// `provider`
	#[must_use]
	pub fn provider(&self) -> Option<&Provider> {
		self.provider.as_ref()
	}

	/// `searchbase`
	#[must_use]
	pub fn search_base(&self) -> Option<&str> {
		self.search_base.as_deref()
	}

	/// Synchronization mode, `type`.
	#[must_use]
	pub fn ty(&self) -> Option<Type> {
		self.ty
	}

	/// `interval`
	#[must_use]
	pub fn interval(&self) -> Option<&Interval> {
		self.interval.as_ref()
	}

	/// `retry`
	#[must_use]
	pub fn retry(&self) -> Option<&Retry> {
		self.retry.as_ref()
	}

	/// `filter`
	#[must_use]
	pub fn filter(&self) -> Option<&str> {
		self.filter.as_deref()
	}

	/// `scope`
	#[must_use]
	pub fn scope(&self) -> Option<Scope> {
		self.scope
	}

	/// Attributes from all `attrs` options, in order. Empty if none were
	/// given.
	#[must_use]
	pub fn attributes(&self) -> &[String] {
		&self.attributes
	}

	/// Whether the `attrsonly` flag was set.
	#[must_use]
	pub fn is_attrs_only(&self) -> bool {
		self.attrs_only
	}

	/// `sizelimit`
	#[must_use]
	pub fn size_limit(&self) -> Option<u32> {
		self.size_limit
	}

	/// `timelimit`, in seconds.
	#[must_use]
	pub fn time_limit(&self) -> Option<u32> {
		self.time_limit
	}

	/// `schemachecking`
	#[must_use]
	pub fn schema_checking(&self) -> Option<SchemaChecking> {
		self.schema_checking
	}

	/// `network-timeout`, in seconds.
	#[must_use]
	pub fn network_timeout(&self) -> Option<u32> {
		self.network_timeout
	}

	/// `timeout`, in seconds.
	#[must_use]
	pub fn timeout(&self) -> Option<u32> {
		self.timeout
	}

	/// `bindmethod`
	#[must_use]
	pub fn bind_method(&self) -> Option<BindMethod> {
		self.bind_method
	}

	/// `binddn`
	#[must_use]
	pub fn bind_dn(&self) -> Option<&str> {
		self.bind_dn.as_deref()
	}

	/// `saslmech`
	#[must_use]
	pub fn sasl_mech(&self) -> Option<&str> {
		self.sasl_mech.as_deref()
	}

	/// `authcid`
	#[must_use]
	pub fn authcid(&self) -> Option<&str> {
		self.authcid.as_deref()
	}

	/// `authzid`
	#[must_use]
	pub fn authzid(&self) -> Option<&str> {
		self.authzid.as_deref()
	}

	/// `credentials`. Not included when serializing.
	#[must_use]
	pub fn credentials(&self) -> Option<&str> {
		self.credentials.as_deref()
	}

	/// `realm`
	#[must_use]
	pub fn realm(&self) -> Option<&str> {
		self.realm.as_deref()
	}

	/// `secprops`
	#[must_use]
	pub fn sec_props(&self) -> Option<&str> {
		self.sec_props.as_deref()
	}

	/// `keepalive`
	#[must_use]
	pub fn keep_alive(&self) -> Option<&KeepAlive> {
		self.keep_alive.as_ref()
	}

	/// `starttls`
	#[must_use]
	pub fn start_tls(&self) -> Option<StartTls> {
		self.start_tls
	}

	/// `tls_cert`
	#[must_use]
	pub fn tls_cert(&self) -> Option<&str> {
		self.tls_cert.as_deref()
	}

	/// `tls_key`
	#[must_use]
	pub fn tls_key(&self) -> Option<&str> {
		self.tls_key.as_deref()
	}

	/// `tls_cacert`
	#[must_use]
	pub fn tls_cacert(&self) -> Option<&str> {
		self.tls_cacert.as_deref()
	}

	/// `tls_cacertdir`
	#[must_use]
	pub fn tls_cacert_dir(&self) -> Option<&str> {
		self.tls_cacert_dir.as_deref()
	}

	/// `tls_reqcert`
	#[must_use]
	pub fn tls_reqcert(&self) -> Option<TlsReqCert> {
		self.tls_reqcert
	}

	/// `tls_ciphersuite`
	#[must_use]
	pub fn tls_cipher_suite(&self) -> Option<&str> {
		self.tls_cipher_suite.as_deref()
	}

	/// `tls_crlcheck`
	#[must_use]
	pub fn tls_crlcheck(&self) -> Option<TlsCrlCheck> {
		self.tls_crlcheck
	}

	/// `logbase`
	#[must_use]
	pub fn log_base(&self) -> Option<&str> {
		self.log_base.as_deref()
	}

	/// `logfilter`
	#[must_use]
	pub fn log_filter(&self) -> Option<&str> {
		self.log_filter.as_deref()
	}

	/// `syncdata`
	#[must_use]
	pub fn sync_data(&self) -> Option<SyncData> {
		self.sync_data
	}
}

/// Writes `key=value` options separated by single spaces.
struct DirectiveWriter<'a, 'b> {
	/// Output
	f: &'a mut fmt::Formatter<'b>,
	/// Whether nothing has been written yet
	first: bool,
}

impl DirectiveWriter<'_, '_> {
	/// Write the separator and `key=`.
	fn key(&mut self, keyword: Keyword) -> fmt::Result {
		if !self.first {
			self.f.write_str(" ")?;
		}
		self.first = false;
		self.f.write_str(keyword.as_str())
	}

	/// Write a bare flag.
	fn flag(&mut self, keyword: Keyword) -> fmt::Result {
		self.key(keyword)
	}

	/// Write a value that never needs quoting.
	fn plain(&mut self, keyword: Keyword, value: Option<impl fmt::Display>) -> fmt::Result {
		let Some(value) = value else { return Ok(()) };
		self.key(keyword)?;
		write!(self.f, "={value}")
	}

	/// Write a free-form string, quoting it only if the lexer would otherwise
	/// split or unquote it.
	fn text(&mut self, keyword: Keyword, value: Option<&str>) -> fmt::Result {
		let Some(value) = value else { return Ok(()) };
		if value.is_empty()
			|| value.contains(|c: char| c.is_whitespace() || is_separator(c) || c == '"' || c == '\'')
		{
			self.quoted(keyword, Some(value))
		} else {
			self.plain(keyword, Some(value))
		}
	}

	/// Write a value in double quotes.
	fn quoted(&mut self, keyword: Keyword, value: Option<impl fmt::Display>) -> fmt::Result {
		let Some(value) = value else { return Ok(()) };
		self.key(keyword)?;
		let value = value.to_string();
		write!(self.f, "=\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
	}
}

impl fmt::Display for SyncRepl {
	/// Renders the directive with options in a fixed order. Parsing the output
	/// yields an equal [`SyncRepl`].
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut w = DirectiveWriter { f, first: true };

		w.text(Keyword::Rid, self.rid())?;
		w.plain(Keyword::Provider, self.provider())?;
		w.quoted(Keyword::SearchBase, self.search_base())?;
		w.plain(Keyword::Type, self.ty)?;
		w.plain(Keyword::Interval, self.interval())?;
		w.quoted(Keyword::Retry, self.retry())?;
		w.quoted(Keyword::Filter, self.filter())?;
		w.plain(Keyword::Scope, self.scope)?;
		if !self.attributes.is_empty() {
			w.quoted(Keyword::Attrs, Some(self.attributes.join(",")))?;
		}
		if self.attrs_only {
			w.flag(Keyword::AttrsOnly)?;
		}
		w.plain(Keyword::SizeLimit, self.size_limit)?;
		w.plain(Keyword::TimeLimit, self.time_limit)?;
		w.plain(Keyword::SchemaChecking, self.schema_checking)?;
		w.plain(Keyword::NetworkTimeout, self.network_timeout)?;
		w.plain(Keyword::Timeout, self.timeout)?;
		w.plain(Keyword::BindMethod, self.bind_method)?;
		w.quoted(Keyword::BindDn, self.bind_dn())?;
		w.text(Keyword::SaslMech, self.sasl_mech())?;
		w.quoted(Keyword::AuthcId, self.authcid())?;
		w.quoted(Keyword::AuthzId, self.authzid())?;
		w.text(Keyword::Credentials, self.credentials())?;
		w.text(Keyword::Realm, self.realm())?;
		w.text(Keyword::SecProps, self.sec_props())?;
		w.plain(Keyword::KeepAlive, self.keep_alive())?;
		w.plain(Keyword::StartTls, self.start_tls)?;
		w.text(Keyword::TlsCert, self.tls_cert())?;
		w.text(Keyword::TlsKey, self.tls_key())?;
		w.text(Keyword::TlsCacert, self.tls_cacert())?;
		w.text(Keyword::TlsCacertDir, self.tls_cacert_dir())?;
		w.plain(Keyword::TlsReqCert, self.tls_reqcert)?;
		w.text(Keyword::TlsCipherSuite, self.tls_cipher_suite())?;
		w.plain(Keyword::TlsCrlCheck, self.tls_crlcheck)?;
		w.quoted(Keyword::LogBase, self.log_base())?;
		w.quoted(Keyword::LogFilter, self.log_filter())?;
		w.plain(Keyword::SyncData, self.sync_data)
	}
}

#[cfg(test)]
mod tests {
	use super::SyncRepl;
	use crate::{options::Scope, provider::Provider};

	#[test]
	fn empty_renders_nothing() {
		assert_eq!(SyncRepl::empty().to_string(), "");
	}

	#[test]
	fn rendering() -> Result<(), Box<dyn std::error::Error>> {
		let mut syncrepl = SyncRepl::empty();
		syncrepl.rid = Some("001".to_owned());
		syncrepl.provider = Some(Provider::parse("LDAP://master.example.com:389")?);
		syncrepl.search_base = Some("dc=example,dc=com".to_owned());
		syncrepl.scope = Some(Scope::Sub);
		syncrepl.attributes = vec!["cn".to_owned(), "sn".to_owned()];
		syncrepl.attrs_only = true;
		syncrepl.credentials = Some("pass word\"".to_owned());

		assert_eq!(
			syncrepl.to_string(),
			"rid=001 provider=ldap://master.example.com:389 searchbase=\"dc=example,dc=com\" \
			 scope=sub attrs=\"cn,sn\" attrsonly credentials=\"pass word\\\"\""
		);
		Ok(())
	}

	#[test]
	fn credentials_are_not_serialized() -> Result<(), Box<dyn std::error::Error>> {
		let mut syncrepl = SyncRepl::empty();
		syncrepl.rid = Some("1".to_owned());
		syncrepl.credentials = Some("secret".to_owned());

		let json = serde_json::to_value(&syncrepl)?;
		assert_eq!(json["rid"], "1");
		assert!(json.get("credentials").is_none());
		Ok(())
	}
}
