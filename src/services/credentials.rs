//! Bearer credential extraction.

use crate::config::BEARER_SCHEME;

/// Pull the token out of an `Authorization` header value.
///
/// The value must be exactly two space-separated segments, the first being
/// the literal `Bearer`. Anything else yields `None`: there are no partial
/// matches, no case folding and no trimming.
pub fn extract_bearer(header_value: Option<&str>) -> Option<&str> {
    let mut segments = header_value?.split(' ');

    match (segments.next(), segments.next(), segments.next()) {
        (Some(BEARER_SCHEME), Some(token), None) if !token.is_empty() => Some(token),
        _ => None,
    }
}
