//! Content type lookup by file extension.

use std::path::Path;

/// Returns the Content-Type value for a file, keyed on its extension.
///
/// Unknown extensions fall back to a generic binary type. Text types get a
/// UTF-8 charset annotation so browsers render them correctly.
pub fn content_type(path: &Path) -> String {
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    let essence = mime.essence_str();

    if essence.starts_with("text/") {
        format!("{}; charset=utf-8", essence)
    } else {
        essence.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_gets_charset() {
        assert_eq!(
            content_type(Path::new("page.html")),
            "text/html; charset=utf-8"
        );
    }

    #[test]
    fn png_is_binary() {
        assert_eq!(content_type(Path::new("logo.png")), "image/png");
    }

    #[test]
    fn unknown_extension_falls_back() {
        assert_eq!(
            content_type(Path::new("blob.xyzzy")),
            "application/octet-stream"
        );
    }
}
