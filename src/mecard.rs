//! MECARD contact-card formatting.
//!
//! MECARD is the compact contact format most phone cameras recognize inside a
//! QR code. One field order, fixed separators, trailing semicolon — a
//! compatible reader parses the three values straight back out.

/// Format a MECARD contact-card string.
///
/// Produces exactly `MECARD:N:{name};TEL:{tel};EMAIL:{email};`.
///
/// Fields are passed through verbatim — no escaping, no validation. A name
/// containing `;` or `:` silently corrupts the card for readers; callers that
/// care must sanitize upstream.
///
/// ```
/// use nameplate::mecard::mecard;
///
/// assert_eq!(
///     mecard("Peter Parker", "088-123-4455", "peter@marvel.com"),
///     "MECARD:N:Peter Parker;TEL:088-123-4455;EMAIL:peter@marvel.com;"
/// );
/// ```
pub fn mecard(name: &str, tel: &str, email: &str) -> String {
    format!("MECARD:N:{name};TEL:{tel};EMAIL:{email};")
}
