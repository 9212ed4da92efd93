/// HTTP request methods.
///
/// The server answers a single verb; anything else on the request line is
/// treated as unsupported and the connection is closed without a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
}

impl Method {
    /// Wire token of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
        }
    }

    /// Recognizes a method at the start of a request line.
    ///
    /// Only the leading token bytes are compared; whatever follows them, with
    /// or without separating whitespace, is returned as the remainder.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinyweb::http::request::Method;
    /// let (method, rest) = Method::strip_from(b"GET /index.html HTTP/1.1").unwrap();
    /// assert_eq!(method, Method::GET);
    /// assert_eq!(rest, b" /index.html HTTP/1.1");
    /// assert_eq!(Method::strip_from(b"GET/x").unwrap().1, b"/x");
    /// assert!(Method::strip_from(b"POST / HTTP/1.1").is_none());
    /// ```
    pub fn strip_from(line: &[u8]) -> Option<(Self, &[u8])> {
        let method = Method::GET;
        let rest = line.strip_prefix(method.as_str().as_bytes())?;
        Some((method, rest))
    }
}

/// The meaningful part of a request: method plus the target split at `?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method
    pub method: Method,
    /// Path before the first `?` (e.g. "/book/view/1")
    pub path: String,
    /// Everything after the first `?`, empty when absent
    pub query: String,
}

impl Request {
    /// Builds a request by splitting `target` at its first `?`.
    pub fn from_target(method: Method, target: &str) -> Self {
        let (path, query) = target.split_once('?').unwrap_or((target, ""));

        Self {
            method,
            path: path.to_string(),
            query: query.to_string(),
        }
    }
}
