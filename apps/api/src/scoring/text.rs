//! Text normalization and structural pattern detection.
//!
//! `normalize` produces the canonical lowercase form the tokenizer operates
//! on. The detector patterns below are fixed contracts — scores derived from
//! them must be reproducible bit-for-bit across deployments.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());

/// Optional country code, optionally parenthesized area code, then 3+4
/// digits with `-`, `.`, or whitespace separators.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap()
});

static BULLET_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\-•*]").unwrap());

static HEADING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(experience|education|skills?|projects?|summary|objective|certifications?|achievements?)\b",
    )
    .unwrap()
});

/// Normalizes raw text to its canonical form: lowercase, trimmed, restricted
/// to `[a-z0-9]`, whitespace, and `. + # @`. Everything else becomes a
/// single space, and runs of spaces (not newlines) collapse to one.
///
/// Total function — any input maps to a string, empty included.
pub fn normalize(input: &str) -> String {
    let lowered = input.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut prev_space = false;

    for c in lowered.trim().chars() {
        let mapped = if is_kept(c) { c } else { ' ' };
        if mapped == ' ' {
            if prev_space {
                continue;
            }
            prev_space = true;
        } else {
            prev_space = false;
        }
        out.push(mapped);
    }

    out.trim().to_string()
}

fn is_kept(c: char) -> bool {
    c.is_ascii_lowercase()
        || c.is_ascii_digit()
        || c.is_whitespace()
        || matches!(c, '.' | '+' | '#' | '@')
}

pub fn contains_email(text: &str) -> bool {
    EMAIL_PATTERN.is_match(text)
}

pub fn contains_phone(text: &str) -> bool {
    PHONE_PATTERN.is_match(text)
}

pub fn contains_bullets(text: &str) -> bool {
    BULLET_PATTERN.is_match(text)
}

pub fn contains_headings(text: &str) -> bool {
    HEADING_PATTERN.is_match(text)
}
