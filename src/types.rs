//! Argument types accepted by the builder's mutation operations.
//!
//! Path and query additions come in two shapes each: a raw string (split or
//! decoded when applied) and an already-structured form. The `From`
//! conversions cover the typed surface; the `TryFrom<&serde_json::Value>`
//! conversions cover dynamically-shaped input and are the only place
//! [`UrlBuildError::InvalidArgument`] is produced.

use serde_json::Value;

use crate::error::UrlBuildError;

/// A path addition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathArg {
    /// A raw path string; split on `/` when applied. May carry leading or
    /// trailing slashes and empty sub-segments.
    Text(String),
    /// Segments used exactly as given, one element per segment.
    Segments(Vec<String>),
}

impl PathArg {
    /// Raw sub-segments this argument contributes, before empty strings are
    /// dropped. The empties carry trailing-slash information and must be
    /// preserved until the caller has looked at the last element.
    pub(crate) fn into_pieces(self) -> Vec<String> {
        match self {
            PathArg::Text(text) => text.split('/').map(str::to_owned).collect(),
            PathArg::Segments(segments) => segments,
        }
    }
}

impl From<&str> for PathArg {
    fn from(text: &str) -> Self {
        PathArg::Text(text.to_owned())
    }
}

impl From<String> for PathArg {
    fn from(text: String) -> Self {
        PathArg::Text(text)
    }
}

impl<S: Into<String>> From<Vec<S>> for PathArg {
    fn from(segments: Vec<S>) -> Self {
        PathArg::Segments(segments.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for PathArg {
    fn from(segments: [S; N]) -> Self {
        PathArg::Segments(segments.into_iter().map(Into::into).collect())
    }
}

impl From<&[&str]> for PathArg {
    fn from(segments: &[&str]) -> Self {
        PathArg::Segments(segments.iter().map(|s| (*s).to_owned()).collect())
    }
}

impl TryFrom<&Value> for PathArg {
    type Error = UrlBuildError;

    /// Accepts a JSON string or an array of JSON strings.
    fn try_from(value: &Value) -> Result<Self, UrlBuildError> {
        match value {
            Value::String(text) => Ok(PathArg::Text(text.clone())),
            Value::Array(items) => {
                let mut segments = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(segment) => segments.push(segment.clone()),
                        other => {
                            return Err(UrlBuildError::InvalidArgument(format!(
                                "path list element must be a string, got {}",
                                json_type_name(other)
                            )))
                        }
                    }
                }
                Ok(PathArg::Segments(segments))
            }
            other => Err(UrlBuildError::InvalidArgument(format!(
                "path must be a string or a list of strings, got {}",
                json_type_name(other)
            ))),
        }
    }
}

/// The value side of a query parameter: a single value or a repeated one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// A single value; rendered as one `key=value` pair.
    One(String),
    /// Multiple values; rendered as the key repeated once per element.
    Many(Vec<String>),
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::One(value.to_owned())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::One(value)
    }
}

impl<S: Into<String>> From<Vec<S>> for QueryValue {
    fn from(values: Vec<S>) -> Self {
        QueryValue::Many(values.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for QueryValue {
    fn from(values: [S; N]) -> Self {
        QueryValue::Many(values.into_iter().map(Into::into).collect())
    }
}

impl TryFrom<&Value> for QueryValue {
    type Error = UrlBuildError;

    /// Accepts a JSON scalar or an array of JSON scalars. `null` stringifies
    /// to the empty string.
    fn try_from(value: &Value) -> Result<Self, UrlBuildError> {
        match value {
            Value::Array(items) => {
                let mut values = Vec::with_capacity(items.len());
                for item in items {
                    match scalar_text(item) {
                        Some(text) => values.push(text),
                        None => {
                            return Err(UrlBuildError::InvalidArgument(format!(
                                "query value element must be a scalar, got {}",
                                json_type_name(item)
                            )))
                        }
                    }
                }
                Ok(QueryValue::Many(values))
            }
            other => match scalar_text(other) {
                Some(text) => Ok(QueryValue::One(text)),
                None => Err(UrlBuildError::InvalidArgument(format!(
                    "query value must be a scalar or an array of scalars, got {}",
                    json_type_name(other)
                ))),
            },
        }
    }
}

/// A query addition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryArg {
    /// A query-string-encoded source, like `"key1=value1&key2=value2"`;
    /// decoded when applied.
    Raw(String),
    /// Key/value entries used directly, in the given order.
    Pairs(Vec<(String, QueryValue)>),
}

impl From<&str> for QueryArg {
    fn from(query: &str) -> Self {
        QueryArg::Raw(query.to_owned())
    }
}

impl From<String> for QueryArg {
    fn from(query: String) -> Self {
        QueryArg::Raw(query)
    }
}

impl<K: Into<String>, V: Into<QueryValue>> From<Vec<(K, V)>> for QueryArg {
    fn from(pairs: Vec<(K, V)>) -> Self {
        QueryArg::Pairs(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<QueryValue>, const N: usize> From<[(K, V); N]> for QueryArg {
    fn from(pairs: [(K, V); N]) -> Self {
        QueryArg::Pairs(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl TryFrom<&Value> for QueryArg {
    type Error = UrlBuildError;

    /// Accepts a JSON string (a raw query string) or a JSON object whose
    /// values are scalars or arrays of scalars.
    fn try_from(value: &Value) -> Result<Self, UrlBuildError> {
        match value {
            Value::String(query) => Ok(QueryArg::Raw(query.clone())),
            Value::Object(entries) => {
                let mut pairs = Vec::with_capacity(entries.len());
                for (key, entry) in entries {
                    pairs.push((key.clone(), QueryValue::try_from(entry)?));
                }
                Ok(QueryArg::Pairs(pairs))
            }
            other => Err(UrlBuildError::InvalidArgument(format!(
                "query must be a string or a mapping, got {}",
                json_type_name(other)
            ))),
        }
    }
}

/// Text form of a scalar JSON value, or `None` for arrays and objects.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// JSON type name used in error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
