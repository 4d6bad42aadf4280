/// Represents a parsed HTTP request line from a client.
///
/// Only the request line is consumed; headers beyond it carry no meaning
/// for a single-response server. The tokens are kept as sent so the
/// handler decides what to do with an unknown method instead of the
/// parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method token (e.g. "GET", "POST")
    pub method: String,
    /// The raw request path, possibly with query and percent-encoding
    pub path: String,
    /// HTTP version token (typically "HTTP/1.1")
    pub version: String,
}

impl Request {
    /// Whether this is the one method the server serves.
    pub fn is_get(&self) -> bool {
        self.method == "GET"
    }
}
