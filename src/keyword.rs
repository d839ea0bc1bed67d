//! Option names understood by the parser.

/// A recognized syncrepl option name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Keyword {
	/// `rid`
	Rid,
	/// `provider`
	Provider,
	/// `searchbase`
	SearchBase,
	/// `type`
	Type,
	/// `interval`
	Interval,
	/// `retry`
	Retry,
	/// `filter`
	Filter,
	/// `scope`
	Scope,
	/// `attrs`
	Attrs,
	/// `attrsonly`
	AttrsOnly,
	/// `sizelimit`
	SizeLimit,
	/// `timelimit`
	TimeLimit,
	/// `schemachecking`
	SchemaChecking,
	/// `network-timeout`
	NetworkTimeout,
	/// `timeout`
	Timeout,
	/// `bindmethod`
	BindMethod,
	/// `binddn`
	BindDn,
	/// `saslmech`
	SaslMech,
	/// `authcid`
	AuthcId,
	/// `authzid`
	AuthzId,
	/// `credentials`
	Credentials,
	/// `realm`
	Realm,
	/// `secprops`
	SecProps,
	/// `keepalive`
	KeepAlive,
	/// `starttls`
	StartTls,
	/// `tls_cert`
	TlsCert,
	/// `tls_key`
	TlsKey,
	/// `tls_cacert`
	TlsCacert,
	/// `tls_cacertdir`
	TlsCacertDir,
	/// `tls_reqcert`
	TlsReqCert,
	/// `tls_ciphersuite`
	TlsCipherSuite,
	/// `tls_crlcheck`
	TlsCrlCheck,
	/// `logbase`
	LogBase,
	/// `logfilter`
	LogFilter,
	/// `syncdata`
	SyncData,
}

impl Keyword {
	/// Every keyword, in the order options are rendered.
	pub(crate) const ALL: [Self; 35] = [
		Self::Rid,
		Self::Provider,
		Self::SearchBase,
		Self::Type,
		Self::Interval,
		Self::Retry,
		Self::Filter,
		Self::Scope,
		Self::Attrs,
		Self::AttrsOnly,
		Self::SizeLimit,
		Self::TimeLimit,
		Self::SchemaChecking,
		Self::NetworkTimeout,
		Self::Timeout,
		Self::BindMethod,
		Self::BindDn,
		Self::SaslMech,
		Self::AuthcId,
		Self::AuthzId,
		Self::Credentials,
		Self::Realm,
		Self::SecProps,
		Self::KeepAlive,
		Self::StartTls,
		Self::TlsCert,
		Self::TlsKey,
		Self::TlsCacert,
		Self::TlsCacertDir,
		Self::TlsReqCert,
		Self::TlsCipherSuite,
		Self::TlsCrlCheck,
		Self::LogBase,
		Self::LogFilter,
		Self::SyncData,
	];

	/// Look up an option name, ignoring case.
	pub(crate) fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|keyword| keyword.as_str().eq_ignore_ascii_case(name))
	}

	/// The option name as written in a directive.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			Self::Rid => "rid",
			Self::Provider => "provider",
			Self::SearchBase => "searchbase",
			Self::Type => "type",
			Self::Interval => "interval",
			Self::Retry => "retry",
			Self::Filter => "filter",
			Self::Scope => "scope",
			Self::Attrs => "attrs",
			Self::AttrsOnly => "attrsonly",
			Self::SizeLimit => "sizelimit",
			Self::TimeLimit => "timelimit",
			Self::SchemaChecking => "schemachecking",
			Self::NetworkTimeout => "network-timeout",
			Self::Timeout => "timeout",
			Self::BindMethod => "bindmethod",
			Self::BindDn => "binddn",
			Self::SaslMech => "saslmech",
			Self::AuthcId => "authcid",
			Self::AuthzId => "authzid",
			Self::Credentials => "credentials",
			Self::Realm => "realm",
			Self::SecProps => "secprops",
			Self::KeepAlive => "keepalive",
			Self::StartTls => "starttls",
			Self::TlsCert => "tls_cert",
			Self::TlsKey => "tls_key",
			Self::TlsCacert => "tls_cacert",
			Self::TlsCacertDir => "tls_cacertdir",
			Self::TlsReqCert => "tls_reqcert",
			Self::TlsCipherSuite => "tls_ciphersuite",
			Self::TlsCrlCheck => "tls_crlcheck",
			Self::LogBase => "logbase",
			Self::LogFilter => "logfilter",
			Self::SyncData => "syncdata",
		}
	}

	/// Whether the option is a bare flag that takes no value.
	pub(crate) fn is_flag(self) -> bool {
		self == Self::AttrsOnly
	}
}
