//! Contact and skill field extractors — independent best-effort pattern
//! matches over the raw text. Each is total: no match means an empty result.

use std::sync::LazyLock;

use regex::Regex;

/// The closed skill vocabulary, searched case-insensitively as substrings.
/// Output preserves this order.
pub const SKILL_KEYWORDS: &[&str] = &[
    "javascript",
    "python",
    "java",
    "react",
    "node.js",
    "mongodb",
    "sql",
    "aws",
    "docker",
    "git",
    "html",
    "css",
];

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("email regex")
});

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?\d[\d\s-]{5,}\d").expect("phone regex"));

/// First non-empty line, accepted only when its length is plausible for a
/// person's name (strictly between 3 and 50 characters).
pub fn extract_full_name(text: &str) -> String {
    let first_line = text
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("");
    let len = first_line.chars().count();
    if len > 3 && len < 50 {
        first_line.to_string()
    } else {
        String::new()
    }
}

/// First `local@domain.tld`-shaped match in the text.
pub fn extract_email(text: &str) -> String {
    EMAIL_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// First phone-shaped match: optional leading `+`, then a digit run with
/// spaces/hyphens allowed, ending in a digit.
pub fn extract_phone(text: &str) -> String {
    PHONE_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Case-insensitive substring search against the skill vocabulary. Results
/// come back in vocabulary order, inherently deduplicated.
pub fn extract_skills(text: &str) -> Vec<String> {
    let haystack = text.to_lowercase();
    SKILL_KEYWORDS
        .iter()
        .filter(|keyword| haystack.contains(*keyword))
        .map(|keyword| keyword.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_from_first_line() {
        assert_eq!(extract_full_name("John A Doe\nrest of resume"), "John A Doe");
    }

    #[test]
    fn test_full_name_skips_leading_blank_lines() {
        assert_eq!(extract_full_name("\n  \nJane Smith\nmore"), "Jane Smith");
    }

    #[test]
    fn test_full_name_rejects_too_short() {
        // The bound is exclusive: a 3-character line is not accepted.
        assert_eq!(extract_full_name("Bob\nmore"), "");
        assert_eq!(extract_full_name("Jack\nmore"), "Jack");
    }

    #[test]
    fn test_full_name_rejects_too_long() {
        let long = "X".repeat(50);
        assert_eq!(extract_full_name(&long), "");
    }

    #[test]
    fn test_full_name_empty_input() {
        assert_eq!(extract_full_name(""), "");
    }

    #[test]
    fn test_email_first_match_wins() {
        let text = "contact: a.b@example.com or backup@test.org";
        assert_eq!(extract_email(text), "a.b@example.com");
    }

    #[test]
    fn test_email_none() {
        assert_eq!(extract_email("no address here"), "");
    }

    #[test]
    fn test_phone_with_country_code() {
        assert_eq!(
            extract_phone("call me at +1 555-123-4567 anytime"),
            "+1 555-123-4567"
        );
    }

    #[test]
    fn test_phone_plain_digit_run() {
        assert_eq!(extract_phone("reach 1234567 now"), "1234567");
    }

    #[test]
    fn test_phone_too_short_run_ignored() {
        assert_eq!(extract_phone("room 12345"), "");
    }

    #[test]
    fn test_phone_none() {
        assert_eq!(extract_phone("no digits"), "");
    }

    #[test]
    fn test_skills_case_insensitive_vocabulary_order() {
        let text = "Expert in AWS and Python; some Docker too.";
        assert_eq!(extract_skills(text), vec!["python", "aws", "docker"]);
    }

    #[test]
    fn test_skills_substring_semantics() {
        // "javascript" also matches the "java" keyword; both are reported.
        let text = "I write JavaScript and React, plus Node.js services.";
        assert_eq!(
            extract_skills(text),
            vec!["javascript", "java", "react", "node.js"]
        );
    }

    #[test]
    fn test_skills_empty_text() {
        assert!(extract_skills("").is_empty());
    }
}
