use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Regex metacharacters escaped before the wildcard is restored.
const META_CHARS: &[char] = &[
    '\\', '.', '+', '*', '?', '(', ')', '[', ']', '{', '}', '^', '$', '|',
];

/// An anchored matching pattern for one trusted hostname entry.
///
/// Built from a hostname item where `*` matches any run of characters
/// and everything else matches literally. The pattern is anchored at
/// both ends, so `*.example.com` becomes `^.*\.example\.com$`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostPattern(String);

impl HostPattern {
    /// Build the anchored pattern for a single trimmed hostname entry.
    ///
    /// Two-step: escape every metacharacter as a literal, then restore
    /// the escaped wildcard (`\*`) as an unbounded match (`.*`).
    pub fn from_entry(entry: &str) -> Self {
        let escaped = escape_literal(entry);
        HostPattern(format!("^{}$", escaped.replace("\\*", ".*")))
    }

    /// The pattern text, including the `^`/`$` anchors.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check a hostname against this pattern, the same check the host
    /// framework performs on the request `Host` header.
    pub fn is_match(&self, host: &str) -> bool {
        match regex::Regex::new(&self.0) {
            Ok(re) => re.is_match(host),
            Err(e) => {
                // Unreachable for patterns built by `from_entry`; a
                // non-compiling pattern matches nothing.
                debug!(pattern = %self.0, %e, "host pattern failed to compile");
                false
            }
        }
    }
}

impl fmt::Display for HostPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escape every regex metacharacter in `item` so it matches literally.
fn escape_literal(item: &str) -> String {
    let mut escaped = String::with_capacity(item.len() * 2);
    for ch in item.chars() {
        if META_CHARS.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Split a comma-separated hostname list into anchored host patterns.
///
/// Whitespace around commas is tolerated and items that trim to blank
/// are dropped. Surviving items keep their input order, and repeated
/// hostnames emit one pattern per occurrence.
pub fn resolve_trusted_host_patterns(raw: Option<&str>) -> Vec<HostPattern> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(HostPattern::from_entry)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_wildcard_entries() {
        let patterns = resolve_trusted_host_patterns(Some("example.com,*.example.com"));
        let texts: Vec<&str> = patterns.iter().map(HostPattern::as_str).collect();
        assert_eq!(texts, vec![r"^example\.com$", r"^.*\.example\.com$"]);
    }

    #[test]
    fn test_absent_and_blank_input_yield_nothing() {
        assert!(resolve_trusted_host_patterns(None).is_empty());
        assert!(resolve_trusted_host_patterns(Some("")).is_empty());
        assert!(resolve_trusted_host_patterns(Some("   ")).is_empty());
        assert!(resolve_trusted_host_patterns(Some(" , ,, ")).is_empty());
    }

    #[test]
    fn test_whitespace_around_commas_and_blank_items() {
        let patterns =
            resolve_trusted_host_patterns(Some("  a.example.com ,   , b.example.com  "));
        let texts: Vec<&str> = patterns.iter().map(HostPattern::as_str).collect();
        assert_eq!(texts, vec![r"^a\.example\.com$", r"^b\.example\.com$"]);
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let patterns = resolve_trusted_host_patterns(Some("a.com,a.com"));
        assert_eq!(patterns.len(), 2);
        assert_eq!(patterns[0], patterns[1]);
    }

    #[test]
    fn test_lone_wildcard_matches_anything() {
        let patterns = resolve_trusted_host_patterns(Some("*"));
        assert_eq!(patterns[0].as_str(), "^.*$");
        assert!(patterns[0].is_match("anything.at.all"));
        assert!(patterns[0].is_match(""));
    }

    #[test]
    fn test_metacharacters_are_escaped() {
        assert_eq!(HostPattern::from_entry("host+name").as_str(), r"^host\+name$");
        assert_eq!(HostPattern::from_entry("a?b").as_str(), r"^a\?b$");
        assert_eq!(HostPattern::from_entry("a.b").as_str(), r"^a\.b$");
        // A literal backslash stays a literal backslash
        assert_eq!(HostPattern::from_entry(r"a\b").as_str(), r"^a\\b$");
    }

    #[test]
    fn test_escaped_dot_does_not_match_arbitrary_char() {
        let pattern = HostPattern::from_entry("example.com");
        assert!(pattern.is_match("example.com"));
        assert!(!pattern.is_match("exampleXcom"));
    }

    #[test]
    fn test_wildcard_subdomain_matching() {
        let pattern = HostPattern::from_entry("*.example.com");
        assert!(pattern.is_match("api.example.com"));
        assert!(pattern.is_match("a.b.example.com"));
        assert!(!pattern.is_match("example.com"));
        assert!(!pattern.is_match("evilexample.com"));
        assert!(!pattern.is_match("api.example.com.evil.net"));
    }
}
