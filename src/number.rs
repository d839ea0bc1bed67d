//! Helpers for the plain decimal fields used throughout the directive.

/// Parse a non-empty run of ASCII digits. Unlike [`str::parse`] this rejects
/// signs and surrounding whitespace.
pub(crate) fn parse_decimal(s: &str) -> Option<u32> {
	if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}
	s.parse().ok()
}

/// Parse exactly `N` colon separated decimal fields.
pub(crate) fn parse_fields<const N: usize>(s: &str) -> Option<[u32; N]> {
	let mut fields = [0; N];
	let mut parts = s.split(':');
	for field in &mut fields {
		*field = parse_decimal(parts.next()?)?;
	}
	if parts.next().is_some() {
		return None;
	}
	Some(fields)
}
