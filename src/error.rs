//! Error types for builder mutation calls.

use thiserror::Error;

/// Errors that can occur while mutating a [`UrlBuilder`](crate::UrlBuilder).
///
/// Parsing a base URL and decoding a query string are both permissive and
/// never fail; the only failures are contract violations in the
/// dynamically-typed argument forms.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlBuildError {
    /// A dynamic argument had a shape the operation does not accept: a path
    /// argument that is neither a string nor an array of strings, or a query
    /// argument that is neither a string nor an object of scalar values.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
