use crate::http::request::Request;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The request line must be exactly three whitespace-separated tokens.
    Malformed,
    /// No full request line received yet; the caller should read more.
    Incomplete,
}

/// Parses the request line out of raw received bytes.
///
/// Succeeds once a complete first line (terminated by CRLF) is present in
/// `buf`. Anything after the request line is ignored.
pub fn parse_request_line(buf: &[u8]) -> Result<Request, ParseError> {
    let line_end = buf
        .windows(2)
        .position(|w| w == b"\r\n")
        .ok_or(ParseError::Incomplete)?;

    let line = std::str::from_utf8(&buf[..line_end]).map_err(|_| ParseError::Malformed)?;

    let mut tokens = line.split_whitespace();
    let (method, path, version) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(m), Some(p), Some(v)) => (m, p, v),
        _ => return Err(ParseError::Malformed),
    };
    if tokens.next().is_some() {
        return Err(ParseError::Malformed);
    }

    Ok(Request {
        method: method.to_string(),
        path: path.to_string(),
        version: version.to_string(),
    })
}
