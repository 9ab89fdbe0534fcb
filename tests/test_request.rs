use gemserve::gemini::request::Request;
use gemserve::gemini::status::StatusCode;

#[test]
fn test_parse_valid_request() {
    let req = Request::parse("gemini://example.org/docs/readme.gmi").unwrap();

    assert_eq!(req.url, "gemini://example.org/docs/readme.gmi");
    assert_eq!(req.scheme, "gemini");
    assert_eq!(req.host, "example.org");
    assert_eq!(req.path, "/docs/readme.gmi");
}

#[test]
fn test_parse_request_with_port() {
    let req = Request::parse("gemini://localhost:1965/").unwrap();

    assert_eq!(req.host, "localhost");
    assert_eq!(req.path, "/");
}

#[test]
fn test_parse_request_without_path() {
    let req = Request::parse("gemini://example.org").unwrap();

    assert_eq!(req.host, "example.org");
    assert_eq!(req.path, "");
}

#[test]
fn test_query_is_not_part_of_path() {
    let req = Request::parse("gemini://example.org/search?rust").unwrap();
    assert_eq!(req.path, "/search");
}

#[test]
fn test_other_schemes_are_bad_requests() {
    for raw in [
        "https://example.org/",
        "gopher://example.org/",
        "GEMINI://example.org/",
        "//example.org/",
        "example.org/",
        "",
    ] {
        let err = Request::parse(raw).unwrap_err();
        assert_eq!(err.status, StatusCode::BadRequest, "input: {raw:?}");
    }
}

#[test]
fn test_bad_scheme_meta_names_the_scheme() {
    let err = Request::parse("https://example.org/").unwrap_err();
    assert_eq!(err.meta.as_deref(), Some("unsupported URL scheme `https`"));
}

#[test]
fn test_unparseable_url_is_bad_request() {
    let err = Request::parse("gemini://exa mple.org/").unwrap_err();
    assert_eq!(err.status, StatusCode::BadRequest);
}
