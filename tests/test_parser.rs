use tinyserve::http::parser::{parse_request, parse_request_line, ParseError, MAX_REQUEST_LINE};

#[test]
fn test_parse_simple_get_request() {
    let req = parse_request(b"GET / HTTP/1.1\r\n", false).unwrap();

    assert_eq!(req.path, "/");
    assert_eq!(req.version, "HTTP/1.1");
}

#[test]
fn test_headers_after_request_line_are_ignored() {
    let buf = b"GET /page.html HTTP/1.1\r\nHost: example.com\r\nAccept: */*\r\n\r\n";
    let req = parse_request(buf, false).unwrap();

    assert_eq!(req.path, "/page.html");
}

#[test]
fn test_bare_newline_terminator() {
    let req = parse_request(b"GET /a HTTP/1.0\n", false).unwrap();

    assert_eq!(req.path, "/a");
    assert_eq!(req.version, "HTTP/1.0");
}

#[test]
fn test_any_minor_version_digit_accepted() {
    for minor in 0..=9 {
        let line = format!("GET / HTTP/1.{}", minor);
        assert!(parse_request_line(&line).is_ok(), "{}", line);
    }
}

#[test]
fn test_post_is_rejected() {
    let result = parse_request(b"POST / HTTP/1.1\r\n", false);

    assert_eq!(result, Err(ParseError::InvalidMethod));
}

#[test]
fn test_lowercase_method_is_rejected() {
    assert_eq!(
        parse_request_line("get / HTTP/1.1"),
        Err(ParseError::InvalidMethod)
    );
}

#[test]
fn test_missing_version_token_is_rejected() {
    assert_eq!(
        parse_request(b"GET /index.html\r\n", false),
        Err(ParseError::InvalidRequest)
    );
}

#[test]
fn test_malformed_version_tokens_are_rejected() {
    for version in ["HTTP/2.0", "HTTP/1.", "HTTP/1.11", "HTTP/1.x", "FTP/1.0"] {
        let line = format!("GET / {}", version);
        assert_eq!(
            parse_request_line(&line),
            Err(ParseError::InvalidVersion),
            "{}",
            line
        );
    }
}

#[test]
fn test_incomplete_until_terminator_or_eof() {
    let buf = b"GET /partial HTTP/1.1";

    assert_eq!(parse_request(buf, false), Err(ParseError::Incomplete));

    let req = parse_request(buf, true).unwrap();
    assert_eq!(req.path, "/partial");
}

#[test]
fn test_overlong_line_is_rejected_not_truncated() {
    let mut buf = b"GET /".to_vec();
    buf.extend(std::iter::repeat(b'a').take(MAX_REQUEST_LINE));

    // No terminator, more than the limit buffered
    assert_eq!(parse_request(&buf, false), Err(ParseError::TooLong));

    // Terminated, but the line itself exceeds the limit
    buf.push(b'\n');
    assert_eq!(parse_request(&buf, false), Err(ParseError::TooLong));
}

#[test]
fn test_non_utf8_line_is_rejected() {
    assert_eq!(
        parse_request(b"GET /\xff\xfe HTTP/1.1\n", false),
        Err(ParseError::InvalidEncoding)
    );
}

#[test]
fn test_empty_line_is_invalid() {
    assert_eq!(parse_request_line(""), Err(ParseError::InvalidRequest));
}
