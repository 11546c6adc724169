/// Represents a parsed HTTP request line.
///
/// Built once per connection from the first CRLF-delimited line of the
/// accumulated input and dropped when the connection closes. Request
/// headers and bodies are ignored by this server, so nothing past the
/// first line is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method. Always "GET"; anything else is rejected during parsing.
    pub method: String,
    /// The normalized request URI: no trailing slash unless it is exactly "/".
    pub uri: String,
    /// HTTP version (typically "HTTP/1.1")
    pub version: String,
}
