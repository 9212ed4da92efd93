use tinyweb::http::request::{Method, Request};

#[test]
fn test_method_token() {
    assert_eq!(Method::GET.as_str(), "GET");
}

#[test]
fn test_strip_method_followed_by_whitespace() {
    let (method, rest) = Method::strip_from(b"GET\t/x").unwrap();

    assert_eq!(method, Method::GET);
    assert_eq!(rest, b"\t/x");
}

#[test]
fn test_strip_method_alone_on_line() {
    let (method, rest) = Method::strip_from(b"GET").unwrap();

    assert_eq!(method, Method::GET);
    assert!(rest.is_empty());
}

#[test]
fn test_strip_rejects_other_tokens() {
    assert!(Method::strip_from(b"HEAD / HTTP/1.1").is_none());
    assert!(Method::strip_from(b"GE").is_none());
    assert!(Method::strip_from(b"get /").is_none());
}

#[test]
fn test_strip_method_without_separator() {
    let (method, rest) = Method::strip_from(b"GET/x?y=1 HTTP/1.1").unwrap();

    assert_eq!(method, Method::GET);
    assert_eq!(rest, b"/x?y=1 HTTP/1.1");

    let (_, rest) = Method::strip_from(b"GETS /").unwrap();
    assert_eq!(rest, b"S /");
}

#[test]
fn test_request_from_target_without_query() {
    let req = Request::from_target(Method::GET, "/book/view/1");

    assert_eq!(req.path, "/book/view/1");
    assert_eq!(req.query, "");
}

#[test]
fn test_request_from_target_with_query() {
    let req = Request::from_target(Method::GET, "/book?id=0&value=123");

    assert_eq!(req.path, "/book");
    assert_eq!(req.query, "id=0&value=123");
}

#[test]
fn test_request_from_target_with_empty_query() {
    let req = Request::from_target(Method::GET, "/book?");

    assert_eq!(req.path, "/book");
    assert_eq!(req.query, "");
}
