//! Pattern-based extraction of translatable string literals.
//!
//! This is deliberately not a parser: literals inside comments or inside other
//! strings are picked up too, as long as they follow a translation call.

use std::sync::LazyLock;

use regex::Regex;

use super::ScanMode;

// Matches `->trans(` followed by the opening quote of the first argument.
// Capture group 1: the quote character.
static PHP_TRANS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)->\s*trans\s*\(\s*(['"])"#).unwrap());

// Matches `{intl ... l=` followed by the opening quote of the label.
// The interior is non-greedy so other attributes (`d=`, `js=`) may come first.
static TEMPLATE_INTL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)\{intl.*?l=\s*(['"])"#).unwrap());

fn trigger_regex(mode: ScanMode) -> &'static Regex {
    match mode {
        ScanMode::Php => &PHP_TRANS_REGEX,
        ScanMode::Template => &TEMPLATE_INTL_REGEX,
    }
}

/// Extract every translatable literal from `content`, in source order.
///
/// Escaped occurrences of the delimiting quote are unescaped, so `'it\'s'`
/// yields `it's`. Empty literals are returned as empty strings; callers decide
/// whether to keep them.
pub fn extract_strings(content: &str, mode: ScanMode) -> Vec<String> {
    let regex = trigger_regex(mode);
    let mut strings = Vec::new();
    let mut pos = 0;

    while pos < content.len() {
        let Some(captures) = regex.captures_at(content, pos) else {
            break;
        };
        let Some(quote_match) = captures.get(1) else {
            break;
        };
        let quote = quote_match.as_str().as_bytes()[0];
        let body_start = quote_match.end();

        match find_closing_quote(content.as_bytes(), body_start, quote) {
            Some(end) => {
                strings.push(unescape_quote(&content[body_start..end], quote as char));
                pos = end + 1;
            }
            // Unterminated literal: keep looking for triggers after this one.
            None => pos = body_start,
        }
    }

    strings
}

/// Find the first `quote` at or after `start` that is not preceded by a backslash.
fn find_closing_quote(bytes: &[u8], start: usize, quote: u8) -> Option<usize> {
    (start..bytes.len()).find(|&i| bytes[i] == quote && bytes[i - 1] != b'\\')
}

/// Replace `\<quote>` with `<quote>`. Other escapes are left untouched.
pub fn unescape_quote(literal: &str, quote: char) -> String {
    literal.replace(&format!("\\{}", quote), &quote.to_string())
}
