//! Title formatting for display types.
//!
//! Approximates the title formatter used by the CMS admin app, so that an
//! area `type` of `article` or `getting_started` formats the way it is shown
//! to editors.
//!
//! The word lists below approximate the admin app's and are not a copy. They only affect
//! multi-word or acronym types; `article` and `documentation`, the only types
//! that reach an allowed style, format identically either way.

/// Words rendered fully uppercase.
const ACRONYMS: &[&str] = &[
    "api", "cli", "css", "html", "id", "json", "sdk", "sql", "ui", "url", "uuid", "yaml",
];

/// Words kept lowercase unless they start the title.
const SMALL_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "by", "for", "in", "of", "on", "or", "the", "to", "with",
];

/// Format a machine name as a title.
///
/// Splits on `_`, `-`, whitespace and lower-to-upper camel boundaries, then
/// capitalizes each word and joins with single spaces.
///
/// ```ignore
/// assert_eq!(format_title("article"), "Article");
/// assert_eq!(format_title("api_reference"), "API Reference");
/// ```
pub fn format_title(value: &str) -> String {
    split_words(value)
        .iter()
        .enumerate()
        .map(|(index, word)| format_word(word, index == 0))
        .collect::<Vec<_>>()
        .join(" ")
}

fn split_words(value: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for ch in value.chars() {
        if ch == '_' || ch == '-' || ch.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if ch.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn format_word(word: &str, first: bool) -> String {
    let lower = word.to_lowercase();
    if ACRONYMS.contains(&lower.as_str()) {
        return lower.to_uppercase();
    }
    if !first && SMALL_WORDS.contains(&lower.as_str()) {
        return lower;
    }
    let mut chars = lower.chars();
    match chars.next() {
        Some(head) => head.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word() {
        assert_eq!(format_title("article"), "Article");
        assert_eq!(format_title("documentation"), "Documentation");
    }

    #[test]
    fn test_already_capitalized() {
        assert_eq!(format_title("Article"), "Article");
        assert_eq!(format_title("ARTICLE"), "Article");
    }

    #[test]
    fn test_separators() {
        assert_eq!(format_title("getting_started"), "Getting Started");
        assert_eq!(format_title("getting-started"), "Getting Started");
        assert_eq!(format_title("  getting   started "), "Getting Started");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(format_title("userGuide"), "User Guide");
    }

    #[test]
    fn test_acronyms() {
        assert_eq!(format_title("api_reference"), "API Reference");
        assert_eq!(format_title("sdk"), "SDK");
    }

    #[test]
    fn test_small_words() {
        assert_eq!(format_title("the_state_of_things"), "The State of Things");
    }

    #[test]
    fn test_empty() {
        assert_eq!(format_title(""), "");
        assert_eq!(format_title("__"), "");
    }
}
