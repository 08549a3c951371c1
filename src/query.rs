//! Query-string decoding, encoding, and the merge primitive.
//!
//! Uses the `application/x-www-form-urlencoded` codec: `&`-separated
//! `key=value` pairs, percent-encoding of reserved characters, `+` read as
//! space on decode and written for space on encode.

use crate::types::QueryValue;

/// Decode a query string into ordered key/value groups.
///
/// Decoding is permissive and never fails. Pairs with an empty value
/// (`key=` or a bare `key`) are dropped, empty fields between `&`s are
/// skipped, and a key repeated within the string accumulates its values in
/// order at the key's first position.
pub(crate) fn decode(input: &str) -> Vec<(String, QueryValue)> {
    let mut out: Vec<(String, QueryValue)> = Vec::new();
    for (key, value) in form_urlencoded::parse(input.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        let value = value.into_owned();
        match out.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => {
                let widened = match slot {
                    QueryValue::Many(values) => {
                        values.push(value);
                        None
                    }
                    QueryValue::One(first) => {
                        Some(QueryValue::Many(vec![std::mem::take(first), value]))
                    }
                };
                if let Some(widened) = widened {
                    *slot = widened;
                }
            }
            None => out.push((key.into_owned(), QueryValue::Many(vec![value]))),
        }
    }
    out
}

/// Encode key/value groups into a query string.
///
/// A multi-value key is rendered as that key repeated once per element, in
/// element order. An empty input renders as the empty string.
pub(crate) fn encode(pairs: &[(String, QueryValue)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        match value {
            QueryValue::One(single) => {
                serializer.append_pair(key, single);
            }
            QueryValue::Many(values) => {
                for single in values {
                    serializer.append_pair(key, single);
                }
            }
        }
    }
    serializer.finish()
}

/// Merge one entry into `pairs`: an existing key keeps its position and has
/// its value replaced; a new key is appended.
pub(crate) fn upsert(pairs: &mut Vec<(String, QueryValue)>, key: String, value: QueryValue) {
    match pairs.iter_mut().find(|(existing, _)| *existing == key) {
        Some((_, slot)) => *slot = value,
        None => pairs.push((key, value)),
    }
}
