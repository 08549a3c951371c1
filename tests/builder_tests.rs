//! Behavioral tests for the builder: construction, path and query mutation,
//! cloning, rendering, and the fluent/operator surface.

use serde_json::json;
use urlbuilder::{PathArg, QueryArg, QueryValue, UrlBuilder};

#[test]
fn test_base() {
    let url = UrlBuilder::new("https://example.com");
    assert_eq!(url.render(), "https://example.com");
    assert_eq!(url.to_string(), "https://example.com");
    assert_eq!(url.len(), 19);
    assert!(!url.is_empty());
}

#[test]
fn test_base_round_trips() {
    let cases = vec![
        "https://example.com",
        "https://example.com/",
        "https://example.com/test",
        "https://example.com/test/more?a=1&b=2",
        "https://example.com?test=well",
        "scheme://netloc/path;params?query=value#fragment",
        "//host/no/scheme",
        "relative/path/only",
        "",
    ];
    for case in cases {
        assert_eq!(
            UrlBuilder::new(case).render(),
            case,
            "construction round trip failed for: {}",
            case
        );
    }
}

#[test]
fn test_path() {
    let mut url = UrlBuilder::new("https://example.com");
    url /= "test";
    assert_eq!(url.render(), "https://example.com/test");
    url /= "more";
    assert_eq!(url.render(), "https://example.com/test/more");
    assert_eq!((&url / "again").render(), "https://example.com/test/more/again");
    assert_eq!(url.render(), "https://example.com/test/more");
}

#[test]
fn test_path_argument_forms() {
    let mut url = UrlBuilder::new("https://example.com");
    url.add_path("test");
    url.add_path(["more", "paths"]).add_path("/again/and/again/");
    assert_eq!(
        url.render(),
        "https://example.com/test/more/paths/again/and/again/"
    );

    let mut url = UrlBuilder::new("https://example.com");
    url.add_paths([
        PathArg::from("never"),
        PathArg::from("stopping"),
        PathArg::from("to/play"),
        PathArg::from(["with", "paths"]),
    ]);
    assert_eq!(url.render(), "https://example.com/never/stopping/to/play/with/paths");
}

#[test]
fn test_consecutive_slashes_collapse() {
    let mut url = UrlBuilder::new("https://example.com");
    url.add_path("a//b///c");
    assert_eq!(url.segments(), ["a", "b", "c"]);
    assert_eq!(url.render(), "https://example.com/a/b/c");
}

#[test]
fn test_append_is_associative_in_effect() {
    let mut split_calls = UrlBuilder::new("https://example.com");
    split_calls.add_path(vec!["a", "b"]);
    split_calls.add_path(vec!["c"]);

    let mut one_call = UrlBuilder::new("https://example.com");
    one_call.add_path(vec!["a", "b", "c"]);

    assert_eq!(split_calls.path(), one_call.path());
    assert_eq!(split_calls.render(), one_call.render());
}

#[test]
fn test_trailing_slash_follows_last_raw_token() {
    let mut url = UrlBuilder::new("https://example.com");
    url.add_path("a/b/");
    assert!(url.trailing_slash());
    assert_eq!(url.render(), "https://example.com/a/b/");
    url.add_path("c");
    assert!(!url.trailing_slash());
    assert_eq!(url.render(), "https://example.com/a/b/c");
}

#[test]
fn test_bare_trailing_slash_base() {
    let url = UrlBuilder::new("https://example.com/");
    assert_eq!(url.render(), "https://example.com/");
    assert!(url.segments().is_empty());
    assert!(url.trailing_slash());
}

#[test]
fn test_force_trailing_slash() {
    let mut url = UrlBuilder::with_force_trailing_slash("https://example.com");
    url.append_path("test");
    assert_eq!(url.render(), "https://example.com/test/");
    assert!(url.force_trailing_slash());

    url.set_force_trailing_slash(false);
    assert_eq!(url.render(), "https://example.com/test");
}

#[test]
fn test_set_path_replaces_and_clears() {
    let mut url = UrlBuilder::new("https://example.com/old/path/");
    url.set_path(Some(PathArg::from("new/path")));
    assert_eq!(url.render(), "https://example.com/new/path");
    url.set_path(None);
    assert_eq!(url.render(), "https://example.com");
}

#[test]
fn test_query() {
    let mut url = UrlBuilder::new("https://example.com");
    url += QueryArg::from([("test", "well")]);
    assert_eq!(url.render(), "https://example.com?test=well");
    url += QueryArg::from([("and", "again")]);
    assert_eq!(url.render(), "https://example.com?test=well&and=again");
    assert_eq!(
        (&url + [("once", "more")]).render(),
        "https://example.com?test=well&and=again&once=more"
    );
    assert_eq!(url.render(), "https://example.com?test=well&and=again");
}

#[test]
fn test_query_argument_forms() {
    let mut url = UrlBuilder::new("https://example.com");
    url.add_query([("key", "value")]);
    url.add_query("another=query&more=stuff");
    url.add_query([("a", "b")]).add_queries([QueryArg::from("c=d"), QueryArg::from("e=f")]);
    assert_eq!(
        url.render(),
        "https://example.com?key=value&another=query&more=stuff&a=b&c=d&e=f"
    );
}

#[test]
fn test_query_overwrite_last_write_wins() {
    let mut url = UrlBuilder::new("https://example.com");
    url.add_query([("k", "1")]);
    url.add_query([("k", "2")]);
    assert_eq!(url.render(), "https://example.com?k=2");
    assert_eq!(url.query_pairs(), [("k".to_owned(), QueryValue::One("2".to_owned()))]);
}

#[test]
fn test_query_overwrite_within_one_call() {
    let mut url = UrlBuilder::new("https://example.com");
    url.add_queries([
        QueryArg::from([("k", "1"), ("other", "x")]),
        QueryArg::from([("k", "2")]),
    ]);
    assert_eq!(url.render(), "https://example.com?k=2&other=x");
}

#[test]
fn test_multi_value_query() {
    let mut url = UrlBuilder::new("https://example.com");
    url.add_query([("tag", QueryValue::from(["a", "b", "c"]))]);
    assert_eq!(url.render(), "https://example.com?tag=a&tag=b&tag=c");

    // repeated key in a raw query string becomes a multi-value
    let url = UrlBuilder::new("https://example.com?tag=a&tag=b");
    assert_eq!(url.render(), "https://example.com?tag=a&tag=b");
}

#[test]
fn test_query_encoding() {
    let mut url = UrlBuilder::new("https://example.com");
    url.add_query([("q", "spaces & symbols=fun")]);
    assert_eq!(
        url.render(),
        "https://example.com?q=spaces+%26+symbols%3Dfun"
    );
}

#[test]
fn test_set_query_replaces_and_clears() {
    let mut url = UrlBuilder::new("https://example.com?a=1&b=2");
    url.set_query(Some(QueryArg::from([("only", "this")])));
    assert_eq!(url.render(), "https://example.com?only=this");
    url.set_query(None);
    assert_eq!(url.render(), "https://example.com");
}

#[test]
fn test_copy_independence() {
    let mut url = UrlBuilder::new("https://example.com");
    let mut url_copy = url.clone();
    url /= "original";
    url_copy /= "copy";
    assert_eq!(url.render(), "https://example.com/original");
    assert_eq!(url_copy.render(), "https://example.com/copy");

    url.add_query([("side", "original")]);
    assert_eq!(url_copy.render(), "https://example.com/copy");
}

#[test]
fn test_with_combinators_leave_original_alone() {
    let url = UrlBuilder::new("https://example.com");
    let with_path = url.with_path("testing");
    let with_query = url.with_query([("test", "it")]);
    assert_eq!(url.render(), "https://example.com");
    assert_eq!(with_path.render(), "https://example.com/testing");
    assert_eq!(with_query.render(), "https://example.com?test=it");
}

#[test]
fn test_noop_mutations_keep_render() {
    let url = UrlBuilder::new("https://example.com/test?now=true");
    assert_eq!(url.with_path(Vec::<String>::new()).render(), url.render());
    assert_eq!(
        url.with_query(QueryArg::Pairs(Vec::new())).render(),
        url.render()
    );
}

#[test]
fn test_parsed_fields() {
    let url = UrlBuilder::new("scheme://netloc/path;params?query=value#fragment");
    assert_eq!(url.scheme(), "scheme");
    assert_eq!(url.netloc(), "netloc");
    assert_eq!(url.path(), "path;params");
    assert_eq!(url.query(), "query=value");
    assert_eq!(url.fragment(), "fragment");
}

#[test]
fn test_debug_repr() {
    let mut url = UrlBuilder::new("https://example.com/test?now=true");
    assert_eq!(
        format!("{:?}", url),
        "UrlBuilder { base: \"https://example.com/test?now=true\", force_trailing_slash: false }"
    );
    url.set_force_trailing_slash(true);
    assert_eq!(
        format!("{:?}", url),
        "UrlBuilder { base: \"https://example.com/test/?now=true\", force_trailing_slash: true }"
    );
}

#[test]
fn test_json_path_arguments() {
    let mut url = UrlBuilder::new("https://example.com");
    url.add_path_value(&json!("a/b")).unwrap();
    url.add_path_value(&json!(["c", "d"])).unwrap();
    assert_eq!(url.render(), "https://example.com/a/b/c/d");
}

#[test]
fn test_json_path_rejects_bad_shapes() {
    let mut url = UrlBuilder::new("https://example.com");
    assert!(url.add_path_value(&json!(42)).is_err());
    assert!(url.add_path_value(&json!({"not": "a path"})).is_err());
    assert!(url.add_path_value(&json!(["ok", 42])).is_err());
    // failed calls left no trace
    assert_eq!(url.render(), "https://example.com");
}

#[test]
fn test_json_variadic_partial_application() {
    let mut url = UrlBuilder::new("https://example.com");
    let result = url.add_path_values(&[json!("first"), json!(42), json!("never")]);
    assert!(result.is_err());
    // the argument before the bad one already took effect
    assert_eq!(url.render(), "https://example.com/first");
}

#[test]
fn test_json_query_arguments() {
    let mut url = UrlBuilder::new("https://example.com");
    url.add_query_value(&json!("a=1&b=2")).unwrap();
    url.add_query_value(&json!({"page": 3, "safe": true})).unwrap();
    assert_eq!(url.render(), "https://example.com?a=1&b=2&page=3&safe=true");
}

#[test]
fn test_json_query_rejects_bad_shapes() {
    let mut url = UrlBuilder::new("https://example.com");
    assert!(url.add_query_value(&json!(42)).is_err());
    assert!(url.add_query_value(&json!(["a", "b"])).is_err());
    assert!(url.add_query_value(&json!({"k": {"nested": true}})).is_err());
    assert_eq!(url.render(), "https://example.com");
}

#[test]
fn test_render_is_idempotent_through_reparse() {
    let cases = vec![
        "https://example.com/a/b/?k=v#frag",
        "https://example.com/test/",
        "//host/p?a=1",
        "x:y",
        "/A:",
        "A:b/c",
    ];
    for case in cases {
        let rendered = UrlBuilder::new(case).render();
        let reparsed = UrlBuilder::new(&rendered).render();
        assert_eq!(rendered, reparsed, "idempotence failed for: {}", case);
    }
}

#[test]
fn test_colon_first_segment_renders_unambiguously() {
    // the leading slash of a bare "/A:" path is not reproducible without a
    // netloc; the rendered form must still not read back as a scheme
    let url = UrlBuilder::new("/A:");
    assert_eq!(url.segments(), ["A:"]);
    assert_eq!(url.render(), "./A:");

    let reparsed = UrlBuilder::new(url.render());
    assert_eq!(reparsed.scheme(), "");
    assert_eq!(reparsed.render(), "./A:");
}
