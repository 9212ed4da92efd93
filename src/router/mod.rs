//! Request routing.
//!
//! Maps a request path and query to a [`Response`]:
//!
//! - a path whose last segment has an extension is a static file under the
//!   document root (404 when there is no root or the read fails)
//! - `/` is a canned welcome page
//! - `/404` is a canned not-found page
//! - anything else echoes the path and query back inside a small HTML page
//!
//! Path and query are embedded into HTML exactly as received.

pub mod files;

use std::path::PathBuf;
use std::sync::Arc;

use crate::http::mime::content_type_for;
use crate::http::response::{Response, ResponseBuilder, StatusCode};

pub use files::{FileSystem, LocalFileSystem, MemoryFileSystem};

pub const WELCOME_BODY: &str = "Welcome to tinyweb";
pub const PAGE_NOT_FOUND_BODY: &str = "<h3>404 Page Not Found<h3>";

/// Routes requests; shared read-only by every connection.
#[derive(Clone)]
pub struct Router {
    doc_root: Option<String>,
    files: Arc<dyn FileSystem>,
}

impl Router {
    /// Router backed by the local filesystem.
    ///
    /// Request paths are appended to `doc_root` after its trailing `/`s are dropped.
    pub fn new(doc_root: Option<String>) -> Self {
        Self::with_file_system(doc_root, Arc::new(LocalFileSystem))
    }

    pub fn with_file_system(doc_root: Option<String>, files: Arc<dyn FileSystem>) -> Self {
        Self { doc_root, files }
    }

    pub async fn route(&self, path: &str, query: &str) -> Response {
        if let Some(extension) = file_extension(path) {
            return self.serve_file(path, extension).await;
        }

        match path {
            "/" => Response::ok(WELCOME_BODY),
            "/404" => ResponseBuilder::new(StatusCode::NotFound)
                .body(PAGE_NOT_FOUND_BODY)
                .build(),
            _ => Response::ok(format!(
                "<h1>tinyweb</h1><p>pathinfo: {path}</p><p>query string: {query}</p>"
            )),
        }
    }

    async fn serve_file(&self, path: &str, extension: &str) -> Response {
        let Some(root) = &self.doc_root else {
            return Response::not_found(path);
        };

        let root = root.trim_end_matches('/');
        let file = PathBuf::from(format!("{root}{path}"));
        match self.files.read_all(&file).await {
            Ok(contents) => ResponseBuilder::new(StatusCode::Ok)
                .content_type(content_type_for(extension))
                .body(contents)
                .build(),
            Err(e) => {
                tracing::debug!(file = %file.display(), error = %e, "Static file unavailable");
                Response::not_found(path)
            }
        }
    }
}

/// Suffix after the last `.` of the final path segment.
fn file_extension(path: &str) -> Option<&str> {
    let segment = path.rsplit('/').next().unwrap_or(path);
    segment.rsplit_once('.').map(|(_, ext)| ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_only_from_last_segment() {
        assert_eq!(file_extension("/style.css"), Some("css"));
        assert_eq!(file_extension("/a.b/c"), None);
        assert_eq!(file_extension("/archive.tar.gz"), Some("gz"));
        assert_eq!(file_extension("/trailing."), Some(""));
        assert_eq!(file_extension("/"), None);
    }
}
