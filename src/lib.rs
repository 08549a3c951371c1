//! urlbuilder - Fluent construction of URLs
//!
//! This crate assembles request URLs from a base string, incrementally added
//! path segments, and incrementally merged query parameters, without manual
//! string concatenation or encoding mistakes.
//!
//! # Features
//!
//! - **Permissive parsing**: any base string splits into scheme, authority,
//!   path, query, and fragment; nothing is validated or rejected
//! - **Incremental paths**: append strings (split on `/`) or segment lists;
//!   trailing-slash state is tracked and reproduced
//! - **Query merging**: decode raw query strings or merge key/value pairs,
//!   with last-write-wins overwrite and multi-value keys
//! - **Deterministic rendering**: the same builder state always renders the
//!   same URL string
//! - **Fluent surface**: chainable methods, copy-on-write combinators, and
//!   `/`, `/=`, `+`, `+=` operator sugar
//!
//! # Quick Start
//!
//! ```
//! use urlbuilder::UrlBuilder;
//!
//! let mut url = UrlBuilder::new("https://example.com");
//! url.add_path("search").add_query([("q", "rust"), ("page", "2")]);
//! assert_eq!(url.render(), "https://example.com/search?q=rust&page=2");
//!
//! // Branch without touching the original
//! let next_page = &url + [("page", "3")];
//! assert_eq!(url.render(), "https://example.com/search?q=rust&page=2");
//! assert_eq!(next_page.render(), "https://example.com/search?q=rust&page=3");
//! ```
//!
//! # Trailing slashes
//!
//! A trailing `/` on an appended path is remembered and rendered back:
//!
//! ```
//! use urlbuilder::UrlBuilder;
//!
//! let mut url = UrlBuilder::new("https://example.com");
//! url.add_path("docs/");
//! assert_eq!(url.render(), "https://example.com/docs/");
//! url.add_path("intro");
//! assert_eq!(url.render(), "https://example.com/docs/intro");
//! ```
//!
//! The sticky override forces one regardless:
//!
//! ```
//! use urlbuilder::UrlBuilder;
//!
//! let mut url = UrlBuilder::with_force_trailing_slash("https://example.com");
//! url.add_path("test");
//! assert_eq!(url.render(), "https://example.com/test/");
//! ```
//!
//! # Error Handling
//!
//! The typed surface is infallible. The dynamically-typed entry points
//! (`add_path_value`, `add_query_value`, and their slice forms, taking
//! `serde_json::Value`) return `Result<_, UrlBuildError>` and fail only on
//! shape violations: a path that is neither a string nor an array of
//! strings, or a query that is neither a string nor an object.

// Re-export the builder and its argument types
pub use builder::UrlBuilder;
pub use types::{PathArg, QueryArg, QueryValue};

// Re-export splitting utilities and the error type
pub use error::UrlBuildError;
pub use split::{split_url, unsplit_url, UrlParts};

// Module declarations
pub mod builder;
pub mod error;
mod query;
pub mod split;
pub mod types;
