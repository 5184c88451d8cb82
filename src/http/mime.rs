//! MIME type detection based on file extensions.

/// Fallback when no dot appears anywhere in the path.
const NO_SUFFIX_TYPE: &str = "text/html";

/// Fallback for a suffix outside the table.
const UNKNOWN_SUFFIX_TYPE: &str = "text/plain";

/// Maps a request path to a Content-Type by its last-dot suffix.
///
/// The match is case-sensitive and the table is fixed; there is no
/// content sniffing.
pub fn content_type_for(path: &str) -> &'static str {
    let Some(dot) = path.rfind('.') else {
        return NO_SUFFIX_TYPE;
    };

    match &path[dot..] {
        ".html" => "text/html",
        ".gif" => "image/gif",
        ".jpeg" | ".jpg" => "image/jpeg",
        ".png" => "image/png",
        ".mp3" => "audio/mpeg",
        ".pdf" => "application/pdf",
        ".ico" => "image/x-icon",
        _ => UNKNOWN_SUFFIX_TYPE,
    }
}
