//! URL validation and normalization
//!
//! Only absolute `http` and `https` URLs with a host are accepted. The
//! normalized form is what gets stored, compared for idempotency and hashed
//! into a short code, so two spellings of the same address must map to the
//! same string:
//! - scheme and host are lower-cased
//! - default ports are dropped, explicit non-default ports kept
//! - dot-segments in the path are resolved
//! - a bare root path (`https://example.com/`) collapses to `https://example.com`

use crate::contract::{UrlShortenerError, MAX_ORIGINAL_URL_LENGTH};
use url::Url;

const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

/// ASCII characters that are never valid unescaped in a URI reference
const ILLEGAL_CHARS: &[char] = &['"', '<', '>', '\\', '^', '`', '{', '|', '}'];

/// Validate `raw` and return its canonical form
pub fn normalize_url(raw: &str) -> Result<String, UrlShortenerError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(UrlShortenerError::invalid_url("URL must not be empty"));
    }

    if let Some((index, c)) = trimmed
        .char_indices()
        .find(|&(_, c)| c.is_whitespace() || c.is_control() || ILLEGAL_CHARS.contains(&c))
    {
        return Err(UrlShortenerError::invalid_url(format!(
            "Invalid URL syntax: illegal character {c:?} at index {index}"
        )));
    }

    let parsed = Url::parse(trimmed)
        .map_err(|e| UrlShortenerError::invalid_url(format!("Invalid URL syntax: {e}")))?;

    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return Err(UrlShortenerError::invalid_url(
            "Only http and https schemes are allowed",
        ));
    }

    if !has_authority(trimmed) || parsed.host_str().map_or(true, str::is_empty) {
        return Err(UrlShortenerError::invalid_url(
            "URL must include scheme and host",
        ));
    }

    let bare_root =
        parsed.path() == "/" && parsed.query().is_none() && parsed.fragment().is_none();

    let mut normalized: String = parsed.into();
    if bare_root {
        normalized.pop();
    }

    if normalized.len() > MAX_ORIGINAL_URL_LENGTH {
        return Err(UrlShortenerError::invalid_url(format!(
            "URL must not exceed {MAX_ORIGINAL_URL_LENGTH} characters"
        )));
    }

    Ok(normalized)
}

/// The parser fills in a host for `http:example.com` or `http:///foo`, so the
/// input itself must spell out `scheme://host`.
fn has_authority(input: &str) -> bool {
    let Some((_, rest)) = input.split_once(':') else {
        return false;
    };
    let Some(rest) = rest.strip_prefix("//") else {
        return false;
    };
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host_port = authority.rsplit('@').next().unwrap_or_default();
    let host = match host_port.rfind(':') {
        Some(i) if !host_port.ends_with(']') => &host_port[..i],
        _ => host_port,
    };
    !host.is_empty()
}

/// Whether `raw` would be accepted by [`normalize_url`]
pub fn is_valid_http_url(raw: &str) -> bool {
    normalize_url(raw).is_ok()
}
