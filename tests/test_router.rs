use std::sync::Arc;

use tinyweb::http::response::StatusCode;
use tinyweb::router::{MemoryFileSystem, Router, PAGE_NOT_FOUND_BODY, WELCOME_BODY};

fn memory_router() -> Router {
    let mut files = MemoryFileSystem::new();
    files.insert("/srv/www/style.css", b"body { color: red }".to_vec());
    files.insert("/srv/www/img/logo.png", vec![0x89, b'P', b'N', b'G', 0, 1]);
    files.insert("/srv/www/data.bin", vec![1, 2, 3]);
    files.insert("/srv/www/index.html", "<p>hi</p>");

    Router::with_file_system(Some("/srv/www".to_string()), Arc::new(files))
}

#[tokio::test]
async fn test_root_is_welcome_page() {
    let response = memory_router().route("/", "").await;

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.content_type, "text/html");
    assert_eq!(response.body, WELCOME_BODY.as_bytes());
}

#[tokio::test]
async fn test_canned_404_route() {
    let response = memory_router().route("/404", "").await;

    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(response.body, PAGE_NOT_FOUND_BODY.as_bytes());
}

#[tokio::test]
async fn test_static_file_with_content_type() {
    let response = memory_router().route("/style.css", "").await;

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.content_type, "text/css");
    assert_eq!(response.body, b"body { color: red }");
    assert_eq!(response.content_length, response.body.len());
}

#[tokio::test]
async fn test_static_file_in_subdirectory() {
    let response = memory_router().route("/img/logo.png", "v=2").await;

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.content_type, "image/png");
    assert_eq!(response.body, vec![0x89, b'P', b'N', b'G', 0, 1]);
}

#[tokio::test]
async fn test_unknown_extension_is_octet_stream() {
    let response = memory_router().route("/data.bin", "").await;

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.content_type, "application/octet-stream");
}

#[tokio::test]
async fn test_missing_file_reflects_path() {
    let response = memory_router().route("/missing.png", "").await;

    assert_eq!(response.status, StatusCode::NotFound);
    let body = String::from_utf8(response.body).unwrap();
    assert!(body.contains("/missing.png"));
}

#[tokio::test]
async fn test_extensioned_path_without_doc_root_is_404() {
    let router = Router::with_file_system(None, Arc::new(MemoryFileSystem::new()));

    for path in ["/style.css", "/index.html", "/x.unknown"] {
        let response = router.route(path, "").await;
        assert_eq!(response.status, StatusCode::NotFound);
        assert!(String::from_utf8(response.body).unwrap().contains(path));
    }
}

#[tokio::test]
async fn test_dot_in_directory_is_not_a_file() {
    let response = memory_router().route("/v1.2/items", "").await;

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.content_type, "text/html");
    assert!(String::from_utf8(response.body).unwrap().contains("/v1.2/items"));
}

#[tokio::test]
async fn test_echo_route_reflects_path_and_query_verbatim() {
    let response = memory_router().route("/x", "y=1").await;

    assert_eq!(response.status, StatusCode::Ok);
    let body = String::from_utf8(response.body).unwrap();
    assert_eq!(
        body,
        "<h1>tinyweb</h1><p>pathinfo: /x</p><p>query string: y=1</p>"
    );
}

#[tokio::test]
async fn test_echo_route_does_not_escape() {
    let response = memory_router().route("/<b>", "q=<script>").await;

    let body = String::from_utf8(response.body).unwrap();
    assert!(body.contains("/<b>"));
    assert!(body.contains("q=<script>"));
}

#[tokio::test]
async fn test_local_file_system_serves_doc_root() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("page.htm"), b"<h1>page</h1>").unwrap();

    let router = Router::new(Some(dir.path().to_str().unwrap().to_string()));

    let found = router.route("/page.htm", "").await;
    assert_eq!(found.status, StatusCode::Ok);
    assert_eq!(found.content_type, "text/html");
    assert_eq!(found.body, b"<h1>page</h1>");

    let missing = router.route("/nope.txt", "").await;
    assert_eq!(missing.status, StatusCode::NotFound);
}

#[tokio::test]
async fn test_filesystem_root_as_doc_root() {
    let mut files = MemoryFileSystem::new();
    files.insert("/etc/motd.txt", "hello");
    let router = Router::with_file_system(Some("/".to_string()), Arc::new(files));

    let response = router.route("/etc/motd.txt", "").await;

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.body, b"hello");
}
