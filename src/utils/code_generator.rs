//! Deterministic short code generation.
//!
//! Codes are derived from the long URL itself, so the same URL always maps to
//! the same candidate code:
//!
//! 1. MD5 digest of the URL bytes
//! 2. First 8 bytes read as a big-endian `u64`
//! 3. Base-62 encoding with the [`ALPHABET`] (`0-9a-zA-Z`)
//! 4. Left-padded with `'0'` or truncated to [`CODE_LENGTH`] characters
//!
//! Truncation is lossy on purpose. Uniqueness inside the running process is
//! enforced by [`LinkService`](crate::application::services::LinkService),
//! not by the hash.

use md5::{Digest, Md5};

/// Base-62 alphabet: digits, then lowercase, then uppercase.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of a candidate code before any collision suffix.
pub const CODE_LENGTH: usize = 7;

/// Produces candidate short codes for long URLs.
///
/// Implementations are pure: they never look at stored links and must
/// return the same candidate for the same input.
pub trait CodeGenerator: Send + Sync + 'static {
    fn candidate(&self, long_url: &str) -> String;
}

/// Default generator: MD5 prefix encoded in base 62.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashCodeGenerator;

impl CodeGenerator for HashCodeGenerator {
    fn candidate(&self, long_url: &str) -> String {
        generate_code(long_url)
    }
}

/// Computes the 7-character candidate code for `long_url`.
///
/// # Examples
///
/// ```
/// use memlink::utils::code_generator::generate_code;
///
/// assert_eq!(generate_code("https://www.google.com"), "cmsScRR");
/// ```
pub fn generate_code(long_url: &str) -> String {
    let digest = Md5::digest(long_url.as_bytes());

    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);

    fit_to_length(encode_base62(u64::from_be_bytes(prefix)), CODE_LENGTH)
}

/// Encodes `value` in base 62 with no leading zero digits.
///
/// Zero encodes to an empty string; callers pad as needed.
pub fn encode_base62(mut value: u64) -> String {
    let mut digits = Vec::with_capacity(11);

    while value > 0 {
        digits.push(ALPHABET[(value % 62) as usize]);
        value /= 62;
    }
    digits.reverse();

    // Every byte comes from ALPHABET, which is ASCII.
    digits.into_iter().map(char::from).collect()
}

/// Suffix appended to a colliding candidate on the given attempt.
///
/// Attempts `1..=61` yield the single character `ALPHABET[attempt]`; later
/// attempts produce longer suffixes, so no two attempts share a suffix.
///
/// Wrapping back to `ALPHABET[attempt % 62]` would retry the same 62 codes
/// forever once they are all taken; growing the suffix keeps the loop finite.
pub fn collision_suffix(attempt: u64) -> String {
    encode_base62(attempt)
}

/// Returns `true` if every character of `code` belongs to [`ALPHABET`].
pub fn is_valid_code(code: &str) -> bool {
    !code.is_empty() && code.bytes().all(|b| b.is_ascii_alphanumeric())
}

fn fit_to_length(encoded: String, length: usize) -> String {
    if encoded.len() >= length {
        return encoded[..length].to_string();
    }

    let mut padded = "0".repeat(length - encoded.len());
    padded.push_str(&encoded);
    padded
}
