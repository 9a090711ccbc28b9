//! URL normalization for platform detection.
//!
//! Editors paste links in many shapes: with or without a scheme, with
//! uppercase hosts, with a trailing root dot. Detection needs the lowercased
//! text for substring patterns, and the scheme and canonical host when they
//! can be parsed.

use url::{ParseError, Url};

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Unsupported protocol: {0}")]
    UnsupportedProtocol(String),

    #[error("URL has no host")]
    MissingHost,
}

/// A URL in the form matchers compare against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUrl {
    /// Trimmed, lowercased input.
    pub text: String,
    /// `http`, `https` or `mailto`. `None` when the input does not parse
    /// as one of those.
    pub scheme: Option<String>,
    /// Lowercase host without a trailing dot. `None` for `mailto:` links
    /// and unparsable input.
    pub host: Option<String>,
}

/// Normalizes a freeform URL for platform matching.
///
/// # Normalization Rules
///
/// 1. **Whitespace**: Surrounding whitespace is trimmed
/// 2. **Text**: Lowercased as a whole for substring patterns
/// 3. **Scheme**: Missing schemes default to `https` (`instagram.com/band`)
/// 4. **Protocol**: Only HTTP, HTTPS and `mailto` yield a scheme and host
/// 5. **Hostname**: Trailing root dot removed
///
/// Input that fails to parse is still returned, without scheme and host.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::Empty`] for blank input.
///
/// # Examples
///
/// ```
/// use social_links::utils::url_normalizer::normalize_for_detection;
///
/// let url = normalize_for_detection("HTTPS://WWW.FACEBOOK.com/x").unwrap();
/// assert_eq!(url.text, "https://www.facebook.com/x");
/// assert_eq!(url.host.as_deref(), Some("www.facebook.com"));
///
/// let url = normalize_for_detection("soundcloud.com/label").unwrap();
/// assert_eq!(url.scheme.as_deref(), Some("https"));
///
/// let url = normalize_for_detection("localhost:3000/facebook.com").unwrap();
/// assert!(url.host.is_none());
/// assert!(url.text.contains("facebook.com"));
/// ```
pub fn normalize_for_detection(input: &str) -> Result<NormalizedUrl, UrlNormalizationError> {
    let text = input.trim().to_lowercase();
    if text.is_empty() {
        return Err(UrlNormalizationError::Empty);
    }

    let (scheme, host) = match scheme_and_host(&text) {
        Ok((scheme, host)) => (Some(scheme), host),
        Err(e) => {
            tracing::trace!(url = %text, error = %e, "URL has no usable scheme or host");
            (None, None)
        }
    };

    Ok(NormalizedUrl { text, scheme, host })
}

/// Extracts the scheme and lowercase host of an HTTP(S) or `mailto:` URL.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::Empty`] for blank input.
/// Returns [`UrlNormalizationError::InvalidFormat`] for malformed URLs.
/// Returns [`UrlNormalizationError::UnsupportedProtocol`] for other schemes
/// such as `javascript:` or `ftp:`.
/// Returns [`UrlNormalizationError::MissingHost`] for HTTP(S) URLs without a host.
pub fn scheme_and_host(input: &str) -> Result<(String, Option<String>), UrlNormalizationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(UrlNormalizationError::Empty);
    }

    let url = parse_lenient(input)?;

    match url.scheme() {
        "http" | "https" => {}
        "mailto" => return Ok(("mailto".to_string(), None)),
        other => return Err(UrlNormalizationError::UnsupportedProtocol(other.to_string())),
    }

    let host = url
        .host_str()
        .map(|h| h.trim_end_matches('.').to_ascii_lowercase())
        .filter(|h| !h.is_empty())
        .ok_or(UrlNormalizationError::MissingHost)?;

    Ok((url.scheme().to_string(), Some(host)))
}

/// Parses a URL, retrying with an `https://` prefix when the scheme is missing.
///
/// `instagram.com:443/x` parses as scheme `instagram.com`; a dotted scheme
/// is treated as missing too.
fn parse_lenient(input: &str) -> Result<Url, UrlNormalizationError> {
    match Url::parse(input) {
        Ok(url) if !url.scheme().contains('.') => Ok(url),
        Ok(_) | Err(ParseError::RelativeUrlWithoutBase) => {
            let rest = input.trim_start_matches('/');
            Url::parse(&format!("https://{rest}"))
                .map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))
        }
        Err(e) => Err(UrlNormalizationError::InvalidFormat(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host_of(input: &str) -> Option<String> {
        normalize_for_detection(input).unwrap().host
    }

    #[test]
    fn test_normalize_simple_https() {
        let result = normalize_for_detection("https://instagram.com/band").unwrap();
        assert_eq!(result.scheme.as_deref(), Some("https"));
        assert_eq!(result.host.as_deref(), Some("instagram.com"));
        assert_eq!(result.text, "https://instagram.com/band");
    }

    #[test]
    fn test_normalize_lowercases_whole_text() {
        let result = normalize_for_detection("  HTTPS://Linktr.ee/Band?From=Instagram.COM ").unwrap();
        assert_eq!(result.text, "https://linktr.ee/band?from=instagram.com");
    }

    #[test]
    fn test_normalize_uppercase_host() {
        assert_eq!(
            host_of("HTTPS://WWW.FACEBOOK.com/x").as_deref(),
            Some("www.facebook.com")
        );
    }

    #[test]
    fn test_normalize_missing_scheme() {
        let result = normalize_for_detection("soundcloud.com/label").unwrap();
        assert_eq!(result.scheme.as_deref(), Some("https"));
        assert_eq!(result.host.as_deref(), Some("soundcloud.com"));
    }

    #[test]
    fn test_normalize_protocol_relative() {
        assert_eq!(host_of("//open.spotify.com/artist").as_deref(), Some("open.spotify.com"));
    }

    #[test]
    fn test_normalize_host_with_port_and_no_scheme() {
        assert_eq!(host_of("instagram.com:443/band").as_deref(), Some("instagram.com"));
    }

    #[test]
    fn test_normalize_trailing_dot() {
        assert_eq!(host_of("https://facebook.com./page").as_deref(), Some("facebook.com"));
    }

    #[test]
    fn test_normalize_surrounding_whitespace() {
        assert_eq!(host_of("  https://tiktok.com/@band \n").as_deref(), Some("tiktok.com"));
    }

    #[test]
    fn test_normalize_mailto() {
        let result = normalize_for_detection("mailto:booking@label.com").unwrap();
        assert_eq!(result.scheme.as_deref(), Some("mailto"));
        assert!(result.host.is_none());
    }

    #[test]
    fn test_normalize_empty_string() {
        assert!(matches!(
            normalize_for_detection("   "),
            Err(UrlNormalizationError::Empty)
        ));
    }

    #[test]
    fn test_normalize_unparsable_keeps_text() {
        let result = normalize_for_detection("not a valid url").unwrap();
        assert_eq!(result.text, "not a valid url");
        assert!(result.scheme.is_none());
        assert!(result.host.is_none());
    }

    #[test]
    fn test_normalize_unknown_scheme_keeps_text() {
        let result = normalize_for_detection("localhost:3000/facebook.com").unwrap();
        assert_eq!(result.text, "localhost:3000/facebook.com");
        assert!(result.host.is_none());
    }

    #[test]
    fn test_scheme_and_host_invalid_url() {
        assert!(matches!(
            scheme_and_host("not a valid url"),
            Err(UrlNormalizationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_scheme_and_host_javascript_protocol() {
        assert!(matches!(
            scheme_and_host("javascript:alert('xss')"),
            Err(UrlNormalizationError::UnsupportedProtocol(_))
        ));
    }

    #[test]
    fn test_scheme_and_host_ftp_protocol() {
        assert!(matches!(
            scheme_and_host("ftp://example.com/file.txt"),
            Err(UrlNormalizationError::UnsupportedProtocol(_))
        ));
    }

    #[test]
    fn test_scheme_and_host_missing_host() {
        assert!(matches!(
            scheme_and_host("https://"),
            Err(UrlNormalizationError::InvalidFormat(_) | UrlNormalizationError::MissingHost)
        ));
    }

    #[test]
    fn test_normalize_ip_address() {
        assert_eq!(host_of("http://192.168.1.1:8080/api").as_deref(), Some("192.168.1.1"));
    }
}
