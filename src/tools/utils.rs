/// Normalize an incomplete URL by adding a missing protocol
///
/// Bare hosts get `https://`, local addresses get `http://`, and a single
/// word is treated as a `.com` domain.
pub fn normalize_url(url: &str) -> String {
    let trimmed = url.trim();

    const KNOWN_SCHEMES: [&str; 6] = ["http://", "https://", "file://", "data:", "about:", "chrome://"];
    if KNOWN_SCHEMES.iter().any(|scheme| trimmed.starts_with(scheme)) {
        return trimmed.to_string();
    }

    if trimmed.starts_with("localhost") || trimmed.starts_with("127.0.0.1") {
        return format!("http://{}", trimmed);
    }

    if trimmed.contains('.') {
        return format!("https://{}", trimmed);
    }

    format!("https://www.{}.com", trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url_complete() {
        assert_eq!(
            normalize_url("https://www.realtor.ca/real-estate/123/x"),
            "https://www.realtor.ca/real-estate/123/x"
        );
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
    }

    #[test]
    fn test_normalize_url_missing_protocol() {
        assert_eq!(normalize_url("www.realtor.ca/real-estate/1"), "https://www.realtor.ca/real-estate/1");
        assert_eq!(normalize_url("  realtor.ca  "), "https://realtor.ca");
    }

    #[test]
    fn test_normalize_url_single_word() {
        assert_eq!(normalize_url("realtor"), "https://www.realtor.com");
    }

    #[test]
    fn test_normalize_url_localhost() {
        assert_eq!(normalize_url("localhost:3000/real-estate/1"), "http://localhost:3000/real-estate/1");
        assert_eq!(normalize_url("127.0.0.1:8080"), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_normalize_url_special_protocols() {
        assert_eq!(normalize_url("about:blank"), "about:blank");
        assert_eq!(normalize_url("data:text/html,<h1>Hi</h1>"), "data:text/html,<h1>Hi</h1>");
        assert_eq!(normalize_url("file:///tmp/listing.html"), "file:///tmp/listing.html");
    }
}
