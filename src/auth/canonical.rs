//! Form encoding for signed payloads and the authorization URL.
//!
//! Both sides of the signature scheme serialize parameters the same way:
//! keys in ascending byte order, `key=value` pairs joined with `&`, and each
//! key and value form-encoded. Form encoding leaves ASCII alphanumerics and
//! `-`, `_`, `.` untouched, turns a space into `+`, and percent-encodes every
//! other byte of the UTF-8 representation with uppercase hex digits.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes left as-is by form encoding. Space is also excluded here, then
/// rewritten to `+` by [`form_encode`].
const FORM_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b' ');

/// Form-encodes a single key or value.
///
/// # Example
///
/// ```rust
/// use orderchamp_api::auth::canonical::form_encode;
///
/// assert_eq!(form_encode("https://app.example/cb"), "https%3A%2F%2Fapp.example%2Fcb");
/// assert_eq!(form_encode("read,write"), "read%2Cwrite");
/// assert_eq!(form_encode("a b~c*"), "a+b%7Ec%2A");
/// ```
#[must_use]
pub fn form_encode(input: &str) -> String {
    utf8_percent_encode(input, FORM_SET)
        .to_string()
        .replace(' ', "+")
}

/// Reverses [`form_encode`]. Invalid UTF-8 is replaced lossily.
#[must_use]
pub fn form_decode(input: &str) -> String {
    let plus_decoded = input.replace('+', " ");
    percent_encoding::percent_decode_str(&plus_decoded)
        .decode_utf8_lossy()
        .into_owned()
}

/// Serializes pairs as a query string in the given order.
#[must_use]
pub fn build_query<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| format!("{}={}", form_encode(k), form_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
