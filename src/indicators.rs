//! Syntax-level heuristic checks over a URL string.
//!
//! Every check here is a pure predicate over the normalized URL (or its
//! host) and contributes one risk indicator to the aggregate score. The
//! checks are independent of one another and of any external state.

use crate::lists::{INVALID_URL_CHARS, SUSPICIOUS_CHARS, SUSPICIOUS_TOKENS};
use regex::Regex;

/// Label count above which a host is considered to have too many
/// subdomains ("a.b.example.com" has 4 labels and trips the check).
const MAX_HOST_LABELS: usize = 3;

#[derive(Debug, Clone)]
pub struct SyntaxChecks {
    ip_pattern: Regex,
    tokens: Vec<String>,
}

impl Default for SyntaxChecks {
    fn default() -> Self {
        Self::new(&[])
    }
}

impl SyntaxChecks {
    /// Build the checker, appending any configured extra tokens to the
    /// built-in suspicious-token list.
    pub fn new(extra_tokens: &[String]) -> Self {
        let mut tokens: Vec<String> = SUSPICIOUS_TOKENS.iter().map(|t| t.to_string()).collect();
        tokens.extend(extra_tokens.iter().cloned());

        Self {
            // Dotted quad, no per-octet range validation.
            ip_pattern: Regex::new(r"^\d{1,3}(\.\d{1,3}){3}$").expect("valid dotted-quad pattern"),
            tokens,
        }
    }

    /// True when the URL contains a character that is never legal in a
    /// URL, or any token from the suspicious-token list.
    pub fn has_invalid_characters(&self, url: &str) -> bool {
        url.chars().any(|c| INVALID_URL_CHARS.contains(&c)) || self.first_token_match(url).is_some()
    }

    /// True when the URL contains a character that is rarely seen outside
    /// of obfuscated links.
    pub fn has_suspicious_characters(&self, url: &str) -> bool {
        url.chars().any(|c| SUSPICIOUS_CHARS.contains(&c))
    }

    /// First suspicious token found anywhere in `haystack`, if any.
    pub fn first_token_match<'a>(&'a self, haystack: &str) -> Option<&'a str> {
        self.tokens
            .iter()
            .find(|token| haystack.contains(token.as_str()))
            .map(|token| token.as_str())
    }

    /// Number of subdomain labels beyond the registrable domain
    /// ("mail.a.example.com" -> 2).
    pub fn subdomain_count(host: &str) -> u32 {
        let labels = host.split('.').count();
        labels.saturating_sub(2) as u32
    }

    /// True when the host carries more labels than a typical
    /// subdomain.domain.tld shape.
    pub fn has_too_many_subdomains(host: &str) -> bool {
        host.split('.').count() > MAX_HOST_LABELS
    }

    /// True when the host is a raw dotted-quad address rather than a
    /// domain name.
    pub fn is_ip_literal(&self, host: &str) -> bool {
        self.ip_pattern.is_match(host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_characters() {
        let checks = SyntaxChecks::default();

        assert!(checks.has_invalid_characters("https://example.org/a b"));
        assert!(checks.has_invalid_characters("https://example.org/{x}"));
        assert!(checks.has_invalid_characters("https://site.vercel.app/login"));
        assert!(!checks.has_invalid_characters("https://example.org/path"));
    }

    #[test]
    fn test_suspicious_characters() {
        let checks = SyntaxChecks::default();

        assert!(checks.has_suspicious_characters("https://example.org/a_b"));
        assert!(checks.has_suspicious_characters("https://example.org/$x"));
        assert!(!checks.has_suspicious_characters("https://example.org/ok"));
    }

    #[test]
    fn test_underscore_is_suspicious_but_not_invalid() {
        let checks = SyntaxChecks::default();
        let url = "https://example.org/a_b";

        assert!(checks.has_suspicious_characters(url));
        assert!(!checks.has_invalid_characters(url));
    }

    #[test]
    fn test_token_matching() {
        let checks = SyntaxChecks::default();

        assert_eq!(
            checks.first_token_match("https://phishy.firebaseapp.example"),
            Some("firebaseapp")
        );
        assert_eq!(checks.first_token_match("https://example.org"), None);
    }

    #[test]
    fn test_extra_tokens_are_honored() {
        let checks = SyntaxChecks::new(&["totally-dodgy".to_string()]);

        assert_eq!(
            checks.first_token_match("https://totally-dodgy.example.org"),
            Some("totally-dodgy")
        );
    }

    #[test]
    fn test_subdomain_count() {
        assert_eq!(SyntaxChecks::subdomain_count("example.org"), 0);
        assert_eq!(SyntaxChecks::subdomain_count("mail.example.org"), 1);
        assert_eq!(SyntaxChecks::subdomain_count("a.b.c.d.example.org"), 4);
        assert_eq!(SyntaxChecks::subdomain_count("localhost"), 0);
    }

    #[test]
    fn test_too_many_subdomains() {
        assert!(!SyntaxChecks::has_too_many_subdomains("example.org"));
        assert!(!SyntaxChecks::has_too_many_subdomains("mail.example.org"));
        assert!(SyntaxChecks::has_too_many_subdomains("a.b.example.org"));
        assert!(SyntaxChecks::has_too_many_subdomains("a.b.c.d.example.org"));
    }

    #[test]
    fn test_ip_literal_host() {
        let checks = SyntaxChecks::default();

        assert!(checks.is_ip_literal("192.168.1.1"));
        assert!(checks.is_ip_literal("999.999.999.999")); // no octet range check
        assert!(!checks.is_ip_literal("192.168.1.1.example.org"));
        assert!(!checks.is_ip_literal("example.org"));
    }
}
