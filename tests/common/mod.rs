use tracing_subscriber::{filter::LevelFilter, EnvFilter};

/// Options of the first replication example of the Symas documentation
pub const SYMAS_DOC1: &[&str] = &[
	"rid=0",
	"provider=ldap://ldapmaster.symas.com:389",
	"bindmethod=simple",
	"binddn=\"cn=replicator,dc=symas,dc=com\"",
	"credentials=secret",
	"searchbase=\"dc=symas,dc=com\"",
	"logbase=\"cn=accesslog\"",
	"logfilter=\"(&(objectClass=auditWriteObject)(reqResult=0))\"",
	"schemachecking=on",
	"type=refreshAndPersist",
	"retry=\"60 +\"",
	"syncdata=accesslog",
];

/// Options of the second example, replicating `cn=config`
pub const SYMAS_DOC2: &[&str] = &[
	"rid=001",
	"provider=ldaps://ldapmaster.symas.com:389",
	"binddn=\"cn=config\"",
	"bindmethod=simple",
	"credentials=secret",
	"searchbase=\"cn=config\"",
	"type=refreshAndPersist",
	"retry=\"5 5 300 5\"",
	"timeout=1",
];

/// Options of the third example, a `refreshOnly` consumer
pub const SYMAS_DOC3: &[&str] = &[
	"rid=123",
	"provider=ldap://provider.example.com:389",
	"type=refreshOnly",
	"interval=01:00:00:00",
	"searchbase=\"dc=example,dc=com\"",
	"filter=\"(objectClass=organizationalPerson)\"",
	"scope=sub",
	"attrs=\"cn,sn,ou,telephoneNumber,title,l\"",
	"schemachecking=off",
	"bindmethod=simple",
	"binddn=\"cn=syncuser,dc=example,dc=com\"",
	"credentials=secret",
];

/// The ways the examples are laid out: one line, one option per line with
/// and without trailing spaces, and indented continuation lines.
pub const SEPARATORS: &[&str] = &[" ", " \n", "\n", "\n "];

/// Join the options of an example with `separator`
#[must_use]
pub fn directive(options: &[&str], separator: &str) -> String {
	options.join(separator)
}

/// Install a log subscriber, ignoring failures when another test already did
pub fn init_tracing() {
	let tracing_filter = EnvFilter::default().add_directive(LevelFilter::DEBUG.into());
	let _ = tracing_subscriber::fmt().with_env_filter(tracing_filter).with_test_writer().try_init();
}
