//! Permissive five-part URL splitting and re-assembly.
//!
//! `scheme://netloc/path?query#fragment` is split purely syntactically:
//! every input string is splittable and nothing is validated or rejected.
//! A `;params` suffix inside a path segment is ordinary path text here.

/// The five syntactic parts of a URL. Empty strings stand for absent parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParts {
    /// URL scheme, lowercased (e.g. `https`)
    pub scheme: String,
    /// Authority: host[:port] and optional userinfo
    pub netloc: String,
    /// Path component, including any `;params` text
    pub path: String,
    /// Query string without the `?`
    pub query: String,
    /// Fragment without the `#`
    pub fragment: String,
}

/// Split a URL string into its five parts.
///
/// Follows the standard splitting rules: surrounding control characters and
/// spaces are stripped and embedded tab/CR/LF removed, a `scheme:` prefix is
/// recognized when it starts with an ASCII letter and contains only scheme
/// characters (and is lowercased), `//` introduces the netloc up to the next
/// `/`, `?` or `#`, the fragment starts at the first `#`, and the query at
/// the first `?` before it. Whatever remains is the path.
///
/// # Examples
///
/// ```
/// use urlbuilder::split_url;
///
/// let parts = split_url("https://example.com/docs?page=2#intro");
/// assert_eq!(parts.scheme, "https");
/// assert_eq!(parts.netloc, "example.com");
/// assert_eq!(parts.path, "/docs");
/// assert_eq!(parts.query, "page=2");
/// assert_eq!(parts.fragment, "intro");
/// ```
pub fn split_url(input: &str) -> UrlParts {
    let mut url = sanitize(input);
    let mut parts = UrlParts::default();

    if let Some(colon) = url.find(':') {
        if colon > 0 && is_scheme(&url[..colon]) {
            parts.scheme = url[..colon].to_ascii_lowercase();
            url.drain(..=colon);
        }
    }

    if url.starts_with("//") {
        let end = url[2..]
            .find(['/', '?', '#'])
            .map(|pos| pos + 2)
            .unwrap_or(url.len());
        parts.netloc = url[2..end].to_owned();
        url.drain(..end);
    }

    if let Some(hash) = url.find('#') {
        let tail = url.split_off(hash);
        parts.fragment = tail[1..].to_owned();
    }

    if let Some(question) = url.find('?') {
        let tail = url.split_off(question);
        parts.query = tail[1..].to_owned();
    }

    parts.path = url;
    parts
}

/// Rebuild a URL string from its five parts.
///
/// The inverse of [`split_url`] for well-formed input: the path gains a `/`
/// prefix under a netloc, an empty netloc is still written as `//` when the
/// path itself starts with `//` (so a reparse cannot mistake the path for an
/// authority), a bare relative path whose first segment is scheme-shaped
/// gains a `./` prefix (so a reparse cannot mistake it for a scheme), and
/// `?query`/`#fragment` appear only when non-empty.
pub fn unsplit_url(parts: &UrlParts) -> String {
    let mut url = parts.path.clone();

    if !parts.netloc.is_empty() || url.starts_with("//") {
        if !url.is_empty() && !url.starts_with('/') {
            url.insert(0, '/');
        }
        url = format!("//{}{}", parts.netloc, url);
    }

    if parts.scheme.is_empty() && parts.netloc.is_empty() {
        if let Some(colon) = url.find(':') {
            // a scheme token ahead of this colon would read back as a scheme
            if colon > 0 && is_scheme(&url[..colon]) {
                url.insert_str(0, "./");
            }
        }
    }

    if !parts.scheme.is_empty() {
        url = format!("{}:{}", parts.scheme, url);
    }

    if !parts.query.is_empty() {
        url.push('?');
        url.push_str(&parts.query);
    }

    if !parts.fragment.is_empty() {
        url.push('#');
        url.push_str(&parts.fragment);
    }

    url
}

/// Strip surrounding C0 controls and spaces, and drop tab/CR/LF anywhere.
fn sanitize(input: &str) -> String {
    input
        .trim_matches(|ch: char| ch <= '\u{20}')
        .chars()
        .filter(|ch| !matches!(ch, '\t' | '\n' | '\r'))
        .collect()
}

/// True for a valid scheme token: an ASCII letter followed by ASCII
/// letters, digits, `+`, `-` or `.`.
fn is_scheme(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '+' | '-' | '.'))
}
