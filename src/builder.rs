//! The URL builder value object.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign};

use serde_json::Value;

use crate::error::UrlBuildError;
use crate::query;
use crate::split::{split_url, unsplit_url, UrlParts};
use crate::types::{PathArg, QueryArg, QueryValue};

/// Incrementally assembles a URL from path segments and query parameters.
///
/// A builder is constructed from a base URL string (any string splits; no
/// validation happens), mutated in place by the `add_*`/`set_*` operations,
/// and rendered back into a single URL string with [`render`](Self::render).
///
/// # Examples
///
/// ```
/// use urlbuilder::UrlBuilder;
///
/// let mut url = UrlBuilder::new("https://example.com");
/// url.add_path("repos").add_path(["rust-lang", "rust"]);
/// url.add_query([("page", "1")]);
/// assert_eq!(url.render(), "https://example.com/repos/rust-lang/rust?page=1");
/// ```
///
/// Cloning produces a fully independent copy, which the borrowed operator
/// forms and the `with_*` combinators use for branching:
///
/// ```
/// use urlbuilder::UrlBuilder;
///
/// let base = UrlBuilder::new("https://example.com");
/// let issues = &base / "issues";
/// assert_eq!(base.render(), "https://example.com");
/// assert_eq!(issues.render(), "https://example.com/issues");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    scheme: String,
    netloc: String,
    segments: Vec<String>,
    trailing_slash: bool,
    force_trailing_slash: bool,
    query: Vec<(String, QueryValue)>,
    fragment: String,
}

impl UrlBuilder {
    /// Start building from a base URL.
    ///
    /// The base splits into scheme, netloc, path, query, and fragment; the
    /// path and query parts seed the segment list and parameter map.
    /// Rendering right after construction reproduces a well-formed base.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlbuilder::UrlBuilder;
    ///
    /// let url = UrlBuilder::new("https://example.com/test?now=true");
    /// assert_eq!(url.render(), "https://example.com/test?now=true");
    /// ```
    pub fn new(base: impl AsRef<str>) -> Self {
        Self::from_base(base.as_ref(), false)
    }

    /// Start building from a base URL with the trailing-slash override on,
    /// so the rendered path always ends with `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlbuilder::UrlBuilder;
    ///
    /// let mut url = UrlBuilder::with_force_trailing_slash("https://example.com");
    /// url.add_path("test");
    /// assert_eq!(url.render(), "https://example.com/test/");
    /// ```
    pub fn with_force_trailing_slash(base: impl AsRef<str>) -> Self {
        Self::from_base(base.as_ref(), true)
    }

    fn from_base(base: &str, force_trailing_slash: bool) -> Self {
        let parts = split_url(base);
        let mut builder = UrlBuilder {
            scheme: parts.scheme,
            netloc: parts.netloc,
            segments: Vec::new(),
            trailing_slash: false,
            force_trailing_slash,
            query: Vec::new(),
            fragment: parts.fragment,
        };
        if !parts.path.is_empty() {
            builder.set_path(Some(PathArg::Text(parts.path)));
        }
        if !parts.query.is_empty() {
            builder.set_query(Some(QueryArg::Raw(parts.query)));
        }
        builder
    }

    /// URL scheme, possibly empty.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Authority (host[:port] and optional userinfo), possibly empty.
    pub fn netloc(&self) -> &str {
        &self.netloc
    }

    /// Fragment, possibly empty.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Path segments in append order. Never contains an empty segment.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Query parameters in first-insertion order.
    pub fn query_pairs(&self) -> &[(String, QueryValue)] {
        &self.query
    }

    /// Whether the rendered path currently ends with `/`.
    pub fn trailing_slash(&self) -> bool {
        self.trailing_slash
    }

    /// Whether the sticky trailing-slash override is on.
    pub fn force_trailing_slash(&self) -> bool {
        self.force_trailing_slash
    }

    /// Turn the sticky trailing-slash override on or off. Returns `self`
    /// for chaining.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlbuilder::UrlBuilder;
    ///
    /// let mut url = UrlBuilder::new("https://example.com");
    /// url.set_force_trailing_slash(true).add_path("test");
    /// assert_eq!(url.render(), "https://example.com/test/");
    /// url.set_force_trailing_slash(false);
    /// assert_eq!(url.render(), "https://example.com/test");
    /// ```
    pub fn set_force_trailing_slash(&mut self, enabled: bool) -> &mut Self {
        self.force_trailing_slash = enabled;
        self
    }

    /// Append to the path.
    ///
    /// A string argument may contain several `/`-separated sub-segments and
    /// leading/trailing slashes; a list argument contributes its elements
    /// as-is. Empty sub-segments are dropped (consecutive slashes collapse),
    /// but a trailing empty sub-segment first records that the path now ends
    /// with `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlbuilder::UrlBuilder;
    ///
    /// let mut url = UrlBuilder::new("https://example.com");
    /// url.add_path("test");
    /// url.add_path(["more", "paths"]).add_path("/again/and/again/");
    /// assert_eq!(
    ///     url.render(),
    ///     "https://example.com/test/more/paths/again/and/again/"
    /// );
    /// ```
    pub fn add_path<P: Into<PathArg>>(&mut self, path: P) -> &mut Self {
        self.add_paths([path.into()])
    }

    /// Append several path arguments as one call.
    ///
    /// The trailing-slash state is decided by the raw last sub-segment
    /// across the whole call: it is set iff that sub-segment is empty, and
    /// left untouched when the call contributes nothing at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlbuilder::{PathArg, UrlBuilder};
    ///
    /// let mut url = UrlBuilder::new("https://example.com");
    /// url.add_paths([
    ///     PathArg::from("never"),
    ///     PathArg::from("stopping"),
    ///     PathArg::from("to/play"),
    ///     PathArg::from(["with", "paths"]),
    /// ]);
    /// assert_eq!(url.render(), "https://example.com/never/stopping/to/play/with/paths");
    /// ```
    pub fn add_paths<I>(&mut self, paths: I) -> &mut Self
    where
        I: IntoIterator<Item = PathArg>,
    {
        let mut pieces: Vec<String> = Vec::new();
        for path in paths {
            pieces.extend(path.into_pieces());
        }

        if let Some(last) = pieces.last() {
            self.trailing_slash = last.is_empty();
        }
        self.segments.extend(pieces.into_iter().filter(|piece| !piece.is_empty()));

        self
    }

    /// Append a dynamically-shaped path argument: a JSON string or a JSON
    /// array of strings. Anything else fails with
    /// [`UrlBuildError::InvalidArgument`] before any state changes.
    pub fn add_path_value(&mut self, value: &Value) -> Result<&mut Self, UrlBuildError> {
        let path = PathArg::try_from(value)?;
        Ok(self.add_path(path))
    }

    /// Append several dynamically-shaped path arguments in order.
    ///
    /// Arguments are applied one by one; a bad argument stops the call and
    /// leaves the effects of the earlier arguments in place.
    pub fn add_path_values(&mut self, values: &[Value]) -> Result<&mut Self, UrlBuildError> {
        for value in values {
            self.add_path_value(value)?;
        }
        Ok(self)
    }

    /// Replace the whole path.
    ///
    /// Clears the segment list and the trailing-slash state, then feeds a
    /// `Some` value through the append logic. `None` just clears.
    pub fn set_path(&mut self, path: Option<PathArg>) -> &mut Self {
        self.segments.clear();
        self.trailing_slash = false;
        if let Some(path) = path {
            self.add_path(path);
        }
        self
    }

    /// The rendered path string: segments joined with `/`, plus a trailing
    /// `/` when the trailing-slash state or the sticky override says so.
    pub fn path(&self) -> String {
        let mut path = self.segments.join("/");
        if self.trailing_slash || self.force_trailing_slash {
            path.push('/');
        }
        path
    }

    /// Merge query parameters in.
    ///
    /// A string argument decodes as a query string (permissively; repeated
    /// keys become multi-values); a pairs argument contributes its entries
    /// directly. A key that already exists anywhere in the builder is
    /// overwritten in place; new keys append in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlbuilder::UrlBuilder;
    ///
    /// let mut url = UrlBuilder::new("https://example.com");
    /// url.add_query([("key", "value")]);
    /// url.add_query("another=query&more=stuff");
    /// assert_eq!(
    ///     url.render(),
    ///     "https://example.com?key=value&another=query&more=stuff"
    /// );
    /// ```
    pub fn add_query<Q: Into<QueryArg>>(&mut self, query: Q) -> &mut Self {
        self.add_queries([query.into()])
    }

    /// Merge several query sources as one call.
    ///
    /// Sources merge left to right into a staging map (a key in a later
    /// source overwrites an earlier one), and the staged result then merges
    /// into the builder with the same overwrite-on-collision rule.
    pub fn add_queries<I>(&mut self, queries: I) -> &mut Self
    where
        I: IntoIterator<Item = QueryArg>,
    {
        let mut staged: Vec<(String, QueryValue)> = Vec::new();
        for source in queries {
            let pairs = match source {
                QueryArg::Raw(text) => query::decode(&text),
                QueryArg::Pairs(pairs) => pairs,
            };
            for (key, value) in pairs {
                query::upsert(&mut staged, key, value);
            }
        }

        for (key, value) in staged {
            query::upsert(&mut self.query, key, value);
        }

        self
    }

    /// Merge a dynamically-shaped query argument: a JSON string (a raw query
    /// string) or a JSON object. Anything else fails with
    /// [`UrlBuildError::InvalidArgument`] before any state changes.
    pub fn add_query_value(&mut self, value: &Value) -> Result<&mut Self, UrlBuildError> {
        let query = QueryArg::try_from(value)?;
        Ok(self.add_query(query))
    }

    /// Merge several dynamically-shaped query arguments in order.
    ///
    /// Arguments are applied one by one; a bad argument stops the call and
    /// leaves the effects of the earlier arguments in place.
    pub fn add_query_values(&mut self, values: &[Value]) -> Result<&mut Self, UrlBuildError> {
        for value in values {
            self.add_query_value(value)?;
        }
        Ok(self)
    }

    /// Replace the whole query.
    ///
    /// Clears the parameter map, then feeds a `Some` value through the
    /// merge logic. `None` just clears.
    pub fn set_query(&mut self, query: Option<QueryArg>) -> &mut Self {
        self.query.clear();
        if let Some(query) = query {
            self.add_query(query);
        }
        self
    }

    /// The rendered query string, without the leading `?`. Empty when there
    /// are no parameters.
    pub fn query(&self) -> String {
        query::encode(&self.query)
    }

    /// The five parts the rendered URL is assembled from.
    pub fn parts(&self) -> UrlParts {
        UrlParts {
            scheme: self.scheme.clone(),
            netloc: self.netloc.clone(),
            path: self.path(),
            query: self.query(),
            fragment: self.fragment.clone(),
        }
    }

    /// Render the URL. Pure: the same state always renders the same string.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlbuilder::UrlBuilder;
    ///
    /// let url = UrlBuilder::new("scheme://netloc/path;params?query=value#fragment");
    /// assert_eq!(url.render(), "scheme://netloc/path;params?query=value#fragment");
    /// ```
    pub fn render(&self) -> String {
        unsplit_url(&self.parts())
    }

    /// Byte length of the rendered URL.
    pub fn len(&self) -> usize {
        self.render().len()
    }

    /// True when the rendered URL is the empty string.
    pub fn is_empty(&self) -> bool {
        self.scheme.is_empty()
            && self.netloc.is_empty()
            && self.path().is_empty()
            && self.query.is_empty()
            && self.fragment.is_empty()
    }

    /// In-place path append, returning `self` for chaining. Alias of
    /// [`add_path`](Self::add_path) under the fluent naming.
    pub fn append_path<P: Into<PathArg>>(&mut self, path: P) -> &mut Self {
        self.add_path(path)
    }

    /// Copy-then-append: clone the builder, append the path to the clone,
    /// and return the clone. The original is unmodified.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlbuilder::UrlBuilder;
    ///
    /// let url = UrlBuilder::new("https://example.com");
    /// let new_url = url.with_path("testing");
    /// assert_eq!(url.render(), "https://example.com");
    /// assert_eq!(new_url.render(), "https://example.com/testing");
    /// ```
    pub fn with_path<P: Into<PathArg>>(&self, path: P) -> Self {
        let mut out = self.clone();
        out.add_path(path);
        out
    }

    /// In-place query merge, returning `self` for chaining. Alias of
    /// [`add_query`](Self::add_query) under the fluent naming.
    pub fn append_query<Q: Into<QueryArg>>(&mut self, query: Q) -> &mut Self {
        self.add_query(query)
    }

    /// Copy-then-merge: clone the builder, merge the query into the clone,
    /// and return the clone. The original is unmodified.
    pub fn with_query<Q: Into<QueryArg>>(&self, query: Q) -> Self {
        let mut out = self.clone();
        out.add_query(query);
        out
    }
}

impl Default for UrlBuilder {
    fn default() -> Self {
        Self::new("")
    }
}

impl fmt::Display for UrlBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for UrlBuilder {
    /// Constructor-equivalent state: the rendered base plus the sticky
    /// trailing-slash flag is enough to rebuild an equivalent builder.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlBuilder")
            .field("base", &self.render())
            .field("force_trailing_slash", &self.force_trailing_slash)
            .finish()
    }
}

impl<P: Into<PathArg>> DivAssign<P> for UrlBuilder {
    /// `url /= path` appends to the path in place.
    fn div_assign(&mut self, path: P) {
        self.add_path(path);
    }
}

impl<P: Into<PathArg>> Div<P> for &UrlBuilder {
    type Output = UrlBuilder;

    /// `&url / path` clones the builder and appends to the clone's path.
    fn div(self, path: P) -> UrlBuilder {
        self.with_path(path)
    }
}

impl<P: Into<PathArg>> Div<P> for UrlBuilder {
    type Output = UrlBuilder;

    /// `url / path` consumes the builder and returns it with the path
    /// appended.
    fn div(mut self, path: P) -> UrlBuilder {
        self.add_path(path);
        self
    }
}

impl<Q: Into<QueryArg>> AddAssign<Q> for UrlBuilder {
    /// `url += query` merges query parameters in place.
    fn add_assign(&mut self, query: Q) {
        self.add_query(query);
    }
}

impl<Q: Into<QueryArg>> Add<Q> for &UrlBuilder {
    type Output = UrlBuilder;

    /// `&url + query` clones the builder and merges into the clone.
    fn add(self, query: Q) -> UrlBuilder {
        self.with_query(query)
    }
}

impl<Q: Into<QueryArg>> Add<Q> for UrlBuilder {
    type Output = UrlBuilder;

    /// `url + query` consumes the builder and returns it with the query
    /// merged.
    fn add(mut self, query: Q) -> UrlBuilder {
        self.add_query(query);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_builder_renders_empty() {
        let url = UrlBuilder::default();
        assert_eq!(url.render(), "");
        assert!(url.is_empty());
        assert_eq!(url.len(), 0);
    }

    #[test]
    fn test_trailing_slash_tracked_from_last_raw_piece() {
        let mut url = UrlBuilder::new("https://example.com");
        url.add_path("a/b/");
        assert!(url.trailing_slash());
        url.add_path("c");
        assert!(!url.trailing_slash());
    }

    #[test]
    fn test_empty_call_leaves_trailing_slash_alone() {
        let mut url = UrlBuilder::new("https://example.com/test/");
        assert!(url.trailing_slash());
        url.add_path(Vec::<String>::new());
        assert!(url.trailing_slash());
        assert_eq!(url.render(), "https://example.com/test/");
    }

    #[test]
    fn test_set_path_clears_trailing_slash() {
        let mut url = UrlBuilder::new("https://example.com/test/");
        url.set_path(None);
        assert_eq!(url.render(), "https://example.com");
        url.set_path(Some(PathArg::from("fresh/")));
        assert_eq!(url.render(), "https://example.com/fresh/");
    }

    #[test]
    fn test_force_trailing_slash_renders_bare_root() {
        let url = UrlBuilder::with_force_trailing_slash("https://example.com");
        assert_eq!(url.render(), "https://example.com/");
    }

    #[test]
    fn test_query_overwrite_keeps_position() {
        let mut url = UrlBuilder::new("https://example.com");
        url.add_query([("a", "1"), ("b", "2")]);
        url.add_query([("a", "9")]);
        assert_eq!(url.render(), "https://example.com?a=9&b=2");
    }

    #[test]
    fn test_add_queries_later_source_wins_within_call() {
        let mut url = UrlBuilder::new("https://example.com");
        url.add_queries([QueryArg::from("k=1"), QueryArg::from([("k", "2")])]);
        assert_eq!(url.render(), "https://example.com?k=2");
    }

    #[test]
    fn test_parts_view() {
        let url = UrlBuilder::new("https://example.com/a/b?x=1#top");
        let parts = url.parts();
        assert_eq!(parts.scheme, "https");
        assert_eq!(parts.netloc, "example.com");
        assert_eq!(parts.path, "a/b");
        assert_eq!(parts.query, "x=1");
        assert_eq!(parts.fragment, "top");
    }
}
