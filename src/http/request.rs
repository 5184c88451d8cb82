/// A parsed request line.
///
/// The grammar admits only `GET <path> HTTP/1.<digit>`, so a `Request` that
/// exists at all is a GET; only the path and version survive parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The request path (e.g., "/index.html")
    pub path: String,
    /// The version token as sent (e.g., "HTTP/1.1")
    pub version: String,
}
