//! Lenient numeric and paragraph tokens used by the secondary and fallback
//! extraction steps. First match wins; values are never clamped.

use once_cell::sync::Lazy;
use regex::Regex;

static PERCENT_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d+(?:\.\d+)?)[ \t]*(?:%|percent\b)").expect("percent regex is valid")
});

static INTEGER_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+").expect("integer regex is valid"));

static OUT_OF_TEN_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d+)[ \t]*(?:/|out[ \t]+of)[ \t]*10\b").expect("out-of-ten regex is valid")
});

static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r?\n[ \t]*\r?\n").expect("paragraph regex is valid"));

/// First `N%` or `N percent` token, normalized to `N%` with the digits as written.
pub fn find_percentage(text: &str) -> Option<String> {
    PERCENT_TOKEN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|number| format!("{}%", number.as_str()))
}

/// First run of ASCII digits, parsed. `None` if absent or out of `u32` range.
pub fn first_integer(text: &str) -> Option<u32> {
    INTEGER_TOKEN
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
}

/// First `N/10` or `N out of 10` rating anywhere in the text.
pub fn find_out_of_ten(text: &str) -> Option<u32> {
    OUT_OF_TEN_TOKEN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|number| number.as_str().parse().ok())
}

/// Text up to the first blank line, trimmed. `None` for blank input.
pub fn first_paragraph(text: &str) -> Option<&str> {
    PARAGRAPH_BREAK
        .split(text.trim())
        .next()
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
}
