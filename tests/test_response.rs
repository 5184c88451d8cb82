use tinyserve::http::response::{ResponseHead, StatusCode};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
}

#[test]
fn test_ok_head_exact_bytes() {
    let head = ResponseHead::ok(1234, "text/html");

    assert_eq!(
        head.serialize(),
        b"HTTP/1.1 200 OK\nContent-Length: 1234\nContent-Type: text/html\n\n"
    );
}

#[test]
fn test_not_found_head_exact_bytes() {
    assert_eq!(
        ResponseHead::not_found().serialize(),
        b"HTTP/1.1 404 Not Found\n\n"
    );
}

#[test]
fn test_bad_request_head_exact_bytes() {
    assert_eq!(
        ResponseHead::bad_request().serialize(),
        b"HTTP/1.1 400 Bad Request\n\n"
    );
}

#[test]
fn test_head_uses_bare_newlines() {
    let head = ResponseHead::ok(0, "text/plain").serialize();

    assert!(!head.contains(&b'\r'));
}
