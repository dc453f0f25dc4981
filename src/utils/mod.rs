//! Utility functions and helpers.

pub mod console;
pub mod format;

use url::Url;

/// Extract the domain from a URL string.
pub fn get_domain(url_str: &str) -> Option<String> {
    Url::parse(url_str)
        .ok()
        .and_then(|u| u.host_str().map(|s| s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_domain() {
        assert_eq!(
            get_domain("https://example.com/careers"),
            Some("example.com".to_string())
        );
        assert_eq!(
            get_domain("https://jobs.example.com:8080/path"),
            Some("jobs.example.com".to_string())
        );
        assert_eq!(get_domain("not a url"), None);
    }
}
