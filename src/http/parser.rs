use crate::http::request::Request;

/// Longest request line accepted before the connection is rejected outright.
/// Matches the read buffer of the protocol this reimplements; anything longer
/// is answered with 400 rather than truncated.
pub const MAX_REQUEST_LINE: usize = 1024;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// No full line yet and the client may still be sending
    Incomplete,
    /// Line reached MAX_REQUEST_LINE without a terminator
    TooLong,
    /// Request line is not valid UTF-8
    InvalidEncoding,
    /// Fewer than three whitespace-delimited fields
    InvalidRequest,
    /// Method field is not the literal "GET"
    InvalidMethod,
    /// Version field is not "HTTP/1." followed by one digit
    InvalidVersion,
}

/// Parses the request line out of the bytes received so far.
///
/// The line ends at the first `\n` (a preceding `\r` is tolerated). With no
/// terminator in sight, the result depends on how much has arrived: under the
/// limit and still mid-stream is `Incomplete`, at the limit is `TooLong`, and
/// at end of input (`eof`) the whole buffer is taken as the line, since the
/// wire format does not require the terminator.
pub fn parse_request(buf: &[u8], eof: bool) -> Result<Request, ParseError> {
    let line = match buf.iter().position(|&b| b == b'\n') {
        Some(end) => &buf[..end],
        None if eof => buf,
        None if buf.len() > MAX_REQUEST_LINE => return Err(ParseError::TooLong),
        None => return Err(ParseError::Incomplete),
    };

    if line.len() > MAX_REQUEST_LINE {
        return Err(ParseError::TooLong);
    }

    let line = std::str::from_utf8(line).map_err(|_| ParseError::InvalidEncoding)?;
    parse_request_line(line.trim_end_matches('\r'))
}

/// Parses a single request line against the literal grammar
/// `GET <path> HTTP/1.<digit>`.
pub fn parse_request_line(line: &str) -> Result<Request, ParseError> {
    let mut parts = line.split_whitespace();

    let method = parts.next().ok_or(ParseError::InvalidRequest)?;
    if method != "GET" {
        return Err(ParseError::InvalidMethod);
    }

    let path = parts.next().ok_or(ParseError::InvalidRequest)?;
    let version = parts.next().ok_or(ParseError::InvalidRequest)?;

    let minor = version
        .strip_prefix("HTTP/1.")
        .ok_or(ParseError::InvalidVersion)?;
    if minor.len() != 1 || !minor.as_bytes()[0].is_ascii_digit() {
        return Err(ParseError::InvalidVersion);
    }

    Ok(Request {
        path: path.to_string(),
        version: version.to_string(),
    })
}
