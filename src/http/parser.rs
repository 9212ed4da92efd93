use crate::http::request::{Method, Request};

/// Marker between the header block and the body.
pub const HEADER_BOUNDARY: &[u8; 4] = b"\r\n\r\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Request line does not start with a recognized method.
    UnsupportedMethod,
}

/// Offset of the first header boundary in `buf`, if any.
pub fn find_header_boundary(buf: &[u8]) -> Option<usize> {
    buf.windows(HEADER_BOUNDARY.len())
        .position(|w| w == HEADER_BOUNDARY)
}

/// Extracts method, path and query from a header block.
///
/// `head` is everything before the boundary. Only the request line (up to
/// the first `\r`) is inspected; the remaining headers are ignored.
pub fn parse_request_line(head: &[u8]) -> Result<Request, ParseError> {
    let line_end = head
        .iter()
        .position(|&b| b == b'\r')
        .unwrap_or(head.len());
    let line = &head[..line_end];

    let (method, rest) = Method::strip_from(line).ok_or(ParseError::UnsupportedMethod)?;

    let start = rest
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(rest.len());
    let rest = &rest[start..];

    let end = rest.iter().position(|&b| b == b' ').unwrap_or(rest.len());
    let target = String::from_utf8_lossy(&rest[..end]);

    Ok(Request::from_target(method, &target))
}
