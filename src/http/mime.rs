/// Fallback for extensions outside the table.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Content type for a file extension (without the dot).
///
/// Matching is case-sensitive; only a handful of familiar extensions are known.
pub fn content_type_for(extension: &str) -> &'static str {
    match extension {
        "html" | "htm" => "text/html",
        "js" => "text/javascript",
        "css" => "text/css",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "txt" => "text/plain",
        _ => DEFAULT_CONTENT_TYPE,
    }
}
