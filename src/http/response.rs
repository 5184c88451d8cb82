/// HTTP status codes the server can answer with.
///
/// - `Ok` (200): file found and served
/// - `BadRequest` (400): request line does not match the grammar
/// - `NotFound` (404): resolved path could not be opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
        }
    }

    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// The head of a response: status line plus, for 200, the two body headers.
///
/// Serialization uses bare `\n` line endings rather than `\r\n`; that is the
/// wire format this server speaks and clients are expected to tolerate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHead {
    pub status: StatusCode,
    pub content_length: Option<u64>,
    pub content_type: Option<&'static str>,
}

impl ResponseHead {
    /// Head for a found file: `200 OK` with length and type.
    pub fn ok(content_length: u64, content_type: &'static str) -> Self {
        Self {
            status: StatusCode::Ok,
            content_length: Some(content_length),
            content_type: Some(content_type),
        }
    }

    /// Bare `400 Bad Request` head, no body follows.
    pub fn bad_request() -> Self {
        Self {
            status: StatusCode::BadRequest,
            content_length: None,
            content_type: None,
        }
    }

    /// Bare `404 Not Found` head, no body follows.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NotFound,
            content_length: None,
            content_type: None,
        }
    }

    pub fn serialize(&self) -> Vec<u8> {
        let mut head = format!(
            "HTTP/1.1 {} {}\n",
            self.status.as_u16(),
            self.status.reason_phrase()
        );

        if let Some(len) = self.content_length {
            head.push_str(&format!("Content-Length: {}\n", len));
        }
        if let Some(ct) = self.content_type {
            head.push_str(&format!("Content-Type: {}\n", ct));
        }

        head.push('\n');
        head.into_bytes()
    }
}
