use std::fmt;

use crate::http::request::Request;

/// Errors the request-line parser can produce.
///
/// Both variants are terminal for the connection. The handler answers 405
/// for either one, matching how this server has always treated input it
/// cannot serve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The first line did not split into exactly `method uri version`.
    Malformed,
    /// The method was something other than GET.
    MethodNotAllowed,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Malformed => write!(f, "malformed request line"),
            ParseError::MethodNotAllowed => write!(f, "method not allowed"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses and normalizes the request line out of raw request text.
///
/// Only the substring before the first CRLF is examined. It must split on
/// single spaces into exactly three tokens; a consecutive double space
/// therefore also counts as malformed. Normalization strips exactly one
/// trailing `/` from the URI unless the URI is just `/`.
///
/// Query strings and fragments are not special-cased: they stay part of
/// the URI as opaque text and will generally fail resolution later.
pub fn parse_request_line(raw: &str) -> Result<Request, ParseError> {
    let line = raw.split("\r\n").next().unwrap_or("");
    let mut tokens = line.split(' ');

    let (Some(method), Some(uri), Some(version), None) =
        (tokens.next(), tokens.next(), tokens.next(), tokens.next())
    else {
        return Err(ParseError::Malformed);
    };

    if method != "GET" {
        return Err(ParseError::MethodNotAllowed);
    }

    let uri = if uri.len() > 1 && uri.ends_with('/') {
        &uri[..uri.len() - 1]
    } else {
        uri
    };

    Ok(Request {
        method: method.to_string(),
        uri: uri.to_string(),
        version: version.to_string(),
    })
}
