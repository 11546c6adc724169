/// Status lines used by the server.
///
/// `NotFound` serializes without a reason phrase; clients of this server
/// have always been shown a bare `404` and that stays as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// 200 OK
    Ok,
    /// 404 (no reason phrase)
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
}

impl Status {
    /// Returns the exact status line text placed after `HTTP/1.1 `.
    pub fn status_line(&self) -> &'static str {
        match self {
            Status::Ok => "200 OK",
            Status::NotFound => "404",
            Status::MethodNotAllowed => "405 Method Not Allowed",
        }
    }
}

/// Serializes a complete response.
///
/// The wire grammar is fixed: status line, a single Content-Type header,
/// a blank line, then the body verbatim, all CRLF-joined. No Content-Length
/// and no Connection header are emitted; clients detect the end of the
/// message by the connection closing or by their own short-read heuristic.
///
/// This is a pure transform and never fails.
pub fn build_response(status: Status, body: &[u8], content_type: &str) -> Vec<u8> {
    let mut buf = Vec::with_capacity(body.len() + 64);

    buf.extend_from_slice(b"HTTP/1.1 ");
    buf.extend_from_slice(status.status_line().as_bytes());
    buf.extend_from_slice(b"\r\nContent-Type: ");
    buf.extend_from_slice(content_type.as_bytes());
    buf.extend_from_slice(b"\r\n\r\n");
    buf.extend_from_slice(body);

    buf
}

/// A 200 carrying a resolved resource.
pub fn ok(body: &[u8], content_type: &str) -> Vec<u8> {
    build_response(Status::Ok, body, content_type)
}

/// A 404 embedding the resolver's failure message.
pub fn not_found(message: &str) -> Vec<u8> {
    build_response(
        Status::NotFound,
        format!("<html><h1>{}</h1></html>", message).as_bytes(),
        "text/html",
    )
}

/// The canned 405 sent for any request that is not a well-formed GET.
pub fn method_not_allowed() -> Vec<u8> {
    build_response(
        Status::MethodNotAllowed,
        b"<html><h1>Method Not Allowed</h1></html>",
        "text/html",
    )
}
