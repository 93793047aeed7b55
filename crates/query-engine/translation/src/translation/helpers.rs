//! Helpers for processing requests and building SQL.

use super::error::Error;

/// PostgreSQL truncates identifiers longer than this.
const MAX_IDENTIFIER_LENGTH: usize = 63;

/// Check that a client supplied name is a plain SQL identifier:
/// `[A-Za-z_][A-Za-z0-9_$]*`, at most 63 bytes.
pub fn validate_identifier(kind: &'static str, name: &str) -> Result<(), Error> {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');

    if valid_start && valid_rest && name.len() <= MAX_IDENTIFIER_LENGTH {
        Ok(())
    } else {
        Err(Error::InvalidIdentifier {
            kind,
            name: name.to_string(),
        })
    }
}
