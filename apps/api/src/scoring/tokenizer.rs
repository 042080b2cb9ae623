#![allow(dead_code)]

//! Tokenization of normalized text into lexical units for overlap matching.

use std::collections::{HashMap, HashSet};

/// High-frequency, low-information words excluded from matching.
const STOPWORDS: &[&str] = &["the", "is", "in", "at", "to", "and", "of", "for", "a", "an"];

/// Splits text into lowercase tokens, dropping empties and stopwords.
///
/// Token characters are `[a-z0-9+#.]`, so compound technology names like
/// `c++`, `c#`, and `node.js` survive as single tokens. Source order is
/// preserved, which keeps results deterministic; matching downstream treats
/// the sequence as a set.
pub fn tokenize(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    text.to_lowercase()
        .split(|c: char| !is_token_char(c))
        .filter(|token| !token.is_empty())
        .filter(|token| !STOPWORDS.contains(token))
        .map(str::to_string)
        .collect()
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '+' | '#' | '.')
}

/// Collapses a token sequence into its unique set.
pub fn unique_tokens(tokens: &[String]) -> HashSet<String> {
    tokens.iter().cloned().collect()
}

/// Counts occurrences of each token.
pub fn frequency_map(tokens: &[String]) -> HashMap<String, usize> {
    let mut map = HashMap::new();
    for token in tokens {
        *map.entry(token.clone()).or_insert(0) += 1;
    }
    map
}
