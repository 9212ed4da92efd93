use tinyweb::http::parser::{find_header_boundary, parse_request_line, ParseError};
use tinyweb::http::request::Method;

#[test]
fn test_find_boundary_in_complete_head() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";

    assert_eq!(find_header_boundary(req), Some(req.len() - 4));
}

#[test]
fn test_find_boundary_missing_blank_line() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n";

    assert_eq!(find_header_boundary(req), None);
}

#[test]
fn test_find_boundary_reports_first_occurrence() {
    let req = b"GET / HTTP/1.1\r\n\r\nbody\r\n\r\n";

    assert_eq!(find_header_boundary(req), Some(14));
}

#[test]
fn test_find_boundary_too_short() {
    assert_eq!(find_header_boundary(b""), None);
    assert_eq!(find_header_boundary(b"\r\n\r"), None);
    assert_eq!(find_header_boundary(b"\r\n\r\n"), Some(0));
}

#[test]
fn test_parse_simple_get_request() {
    let parsed = parse_request_line(b"GET / HTTP/1.1\r\nHost: example.com").unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.path, "/");
    assert_eq!(parsed.query, "");
}

#[test]
fn test_parse_request_with_path_and_query_string() {
    let parsed = parse_request_line(b"GET /search?q=rust&x=1 HTTP/1.1").unwrap();

    assert_eq!(parsed.path, "/search");
    assert_eq!(parsed.query, "q=rust&x=1");
}

#[test]
fn test_parse_query_split_at_first_question_mark() {
    let parsed = parse_request_line(b"GET /a?b?c HTTP/1.1").unwrap();

    assert_eq!(parsed.path, "/a");
    assert_eq!(parsed.query, "b?c");
}

#[test]
fn test_parse_skips_extra_whitespace_after_method() {
    let parsed = parse_request_line(b"GET \t  /spaced HTTP/1.1").unwrap();

    assert_eq!(parsed.path, "/spaced");
}

#[test]
fn test_parse_request_line_without_version() {
    let parsed = parse_request_line(b"GET /bare").unwrap();

    assert_eq!(parsed.path, "/bare");
}

#[test]
fn test_parse_unsupported_methods() {
    for line in [
        &b"POST / HTTP/1.1"[..],
        b"PUT /x HTTP/1.1",
        b"get / HTTP/1.1",
        b" GET / HTTP/1.1",
        b"",
    ] {
        assert_eq!(parse_request_line(line), Err(ParseError::UnsupportedMethod));
    }
}

#[test]
fn test_parse_path_directly_after_method() {
    let parsed = parse_request_line(b"GET/x?y=1 HTTP/1.1").unwrap();

    assert_eq!(parsed.path, "/x");
    assert_eq!(parsed.query, "y=1");
}

#[test]
fn test_parse_accepts_any_line_starting_with_method() {
    let parsed = parse_request_line(b"GETX /x HTTP/1.1").unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.path, "X");
}

#[test]
fn test_parse_ignores_other_headers() {
    let parsed =
        parse_request_line(b"GET /p HTTP/1.1\r\nBrokenHeader\r\nX: POST / HTTP/1.1").unwrap();

    assert_eq!(parsed.path, "/p");
}

#[test]
fn test_parse_non_utf8_path_is_lossy() {
    let parsed = parse_request_line(b"GET /caf\xE9 HTTP/1.1").unwrap();

    assert_eq!(parsed.path, "/caf\u{FFFD}");
}
