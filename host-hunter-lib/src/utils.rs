//! Utility functions for domain input handling.
//!
//! Reading the host list, turning a bare host into a URL for the probe, and
//! turning the URL back into a display name for the success list.

use crate::error::HostHunterError;
use std::fs;
use std::path::Path;

const HTTPS_SCHEME: &str = "https://";

/// Turn a domain into the URL that gets probed.
///
/// Anything already starting with `http` (which covers `http://` and
/// `https://`) passes through untouched; everything else gets `https://`.
pub fn normalize_domain(domain: &str) -> String {
    if domain.starts_with("http") {
        domain.to_string()
    } else {
        format!("{}{}", HTTPS_SCHEME, domain)
    }
}

/// Remove a leading `https://`, leaving any other scheme in place.
pub fn strip_https(url: &str) -> String {
    url.strip_prefix(HTTPS_SCHEME).unwrap_or(url).to_string()
}

/// Split file content into domains.
///
/// Each line is trimmed; blank lines are dropped. Order and duplicates are
/// preserved.
pub fn parse_domain_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read domains from a newline-delimited file.
///
/// # Errors
///
/// Returns `HostHunterError` if:
/// - The file cannot be opened or read
/// - No usable domains remain after trimming
pub fn read_domains_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, HostHunterError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| HostHunterError::file_error(path.to_string_lossy(), e.to_string()))?;

    let domains = parse_domain_list(&content);
    if domains.is_empty() {
        return Err(HostHunterError::EmptyDomainList);
    }

    Ok(domains)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_normalize_domain() {
        assert_eq!(normalize_domain("example.com"), "https://example.com");
        assert_eq!(normalize_domain("https://example.com"), "https://example.com");
        assert_eq!(normalize_domain("http://example.com"), "http://example.com");
        // Any http-prefixed string is treated as carrying a scheme
        assert_eq!(normalize_domain("httpbin.org"), "httpbin.org");
    }

    #[test]
    fn test_strip_https() {
        assert_eq!(strip_https("https://example.com"), "example.com");
        assert_eq!(strip_https("http://example.com"), "http://example.com");
        assert_eq!(strip_https("example.com"), "example.com");
    }

    #[test]
    fn test_parse_domain_list() {
        let content = "  a.example \n\n\t\nb.example\r\na.example\n   ";
        assert_eq!(
            parse_domain_list(content),
            vec!["a.example", "b.example", "a.example"]
        );
        assert!(parse_domain_list("\n  \n").is_empty());
    }

    #[test]
    fn test_read_domains_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "good.example\n\n  bad.example  ").unwrap();

        let domains = read_domains_from_file(file.path()).unwrap();
        assert_eq!(domains, vec!["good.example", "bad.example"]);
    }

    #[test]
    fn test_read_domains_from_empty_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "   \n\n").unwrap();

        let err = read_domains_from_file(file.path()).unwrap_err();
        assert!(matches!(err, HostHunterError::EmptyDomainList));
    }

    #[test]
    fn test_read_domains_from_missing_file() {
        let err = read_domains_from_file("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, HostHunterError::FileError { .. }));
    }
}
