use bastion::http::parser::{ParseError, parse_request_line};

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let parsed = parse_request_line(req).unwrap();

    assert_eq!(parsed.method, "GET");
    assert_eq!(parsed.path, "/");
    assert_eq!(parsed.version, "HTTP/1.1");
    assert!(parsed.is_get());
}

#[test]
fn test_parse_preserves_raw_path_with_query() {
    let req = b"GET /search?q=rust HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let parsed = parse_request_line(req).unwrap();

    assert_eq!(parsed.path, "/search?q=rust");
}

#[test]
fn test_parse_preserves_percent_encoding() {
    let req = b"GET /a%20b.txt HTTP/1.1\r\n\r\n";
    let parsed = parse_request_line(req).unwrap();

    assert_eq!(parsed.path, "/a%20b.txt");
}

#[test]
fn test_parse_non_get_method_still_parses() {
    // Method policy belongs to the handler, not the parser.
    let req = b"POST /submit HTTP/1.1\r\n\r\n";
    let parsed = parse_request_line(req).unwrap();

    assert_eq!(parsed.method, "POST");
    assert!(!parsed.is_get());
}

#[test]
fn test_parse_one_token_is_malformed() {
    let result = parse_request_line(b"GARBAGE\r\n\r\n");
    assert_eq!(result, Err(ParseError::Malformed));
}

#[test]
fn test_parse_two_tokens_is_malformed() {
    let result = parse_request_line(b"GET /\r\n\r\n");
    assert_eq!(result, Err(ParseError::Malformed));
}

#[test]
fn test_parse_four_tokens_is_malformed() {
    let result = parse_request_line(b"GET / HTTP/1.1 extra\r\n\r\n");
    assert_eq!(result, Err(ParseError::Malformed));
}

#[test]
fn test_parse_empty_line_is_malformed() {
    let result = parse_request_line(b"\r\n\r\n");
    assert_eq!(result, Err(ParseError::Malformed));
}

#[test]
fn test_parse_without_line_terminator_is_incomplete() {
    let result = parse_request_line(b"GET / HTTP/1.1");
    assert_eq!(result, Err(ParseError::Incomplete));
}

#[test]
fn test_parse_empty_buffer_is_incomplete() {
    let result = parse_request_line(b"");
    assert_eq!(result, Err(ParseError::Incomplete));
}

#[test]
fn test_parse_non_utf8_line_is_malformed() {
    let result = parse_request_line(b"GET /\xff\xfe HTTP/1.1\r\n");
    assert_eq!(result, Err(ParseError::Malformed));
}

#[test]
fn test_parse_tolerates_extra_spaces_between_tokens() {
    let parsed = parse_request_line(b"GET   /index.html   HTTP/1.0\r\n").unwrap();

    assert_eq!(parsed.path, "/index.html");
    assert_eq!(parsed.version, "HTTP/1.0");
}
