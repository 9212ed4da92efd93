/// HTTP status codes produced by the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinyweb::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// A response ready to be put on the wire.
///
/// Produced by the router and consumed right away by the writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Media type, without the charset annotation
    pub content_type: &'static str,
    /// Raw body bytes
    pub body: Vec<u8>,
    /// Exact byte length of `body`
    pub content_length: usize,
}

/// Builder for constructing responses in a fluent style.
///
/// # Example
///
/// ```
/// # use tinyweb::http::response::{ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .content_type("text/plain")
///     .body(b"hello".to_vec())
///     .build();
/// assert_eq!(response.content_length, 5);
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    content_type: &'static str,
    body: Vec<u8>,
}

impl ResponseBuilder {
    /// Creates a new builder; content type defaults to `text/html`.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content_type: "text/html",
            body: Vec::new(),
        }
    }

    pub fn content_type(mut self, content_type: &'static str) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Builds the response, computing the content length from the body.
    pub fn build(self) -> Response {
        Response {
            status: self.status,
            content_type: self.content_type,
            content_length: self.body.len(),
            body: self.body,
        }
    }
}

impl Response {
    /// 200 OK with an HTML body.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        ResponseBuilder::new(StatusCode::Ok).body(body).build()
    }

    /// 404 Not Found naming the requested path. The path is not escaped.
    pub fn not_found(path: &str) -> Self {
        ResponseBuilder::new(StatusCode::NotFound)
            .body(format!("<h1>404 Not Found</h1><p>{path}</p>"))
            .build()
    }
}
