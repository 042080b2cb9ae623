//! Formatting-quality heuristics over the résumé text.
//!
//! Four independent categories accumulate points — contact info (≤20),
//! structure (≤30), length band (≤20), readability (≤30) — and the sum is
//! capped at 100. Runs on the raw résumé text: the detector patterns match
//! casing, parentheses, and bullet markers that normalization strips.

use std::collections::HashSet;

use crate::scoring::text;

/// Scores structural quality of a résumé, 0–100. Blank input scores 0.
pub fn formatting_score(resume_text: &str) -> f64 {
    if resume_text.trim().is_empty() {
        return 0.0;
    }

    let score = contact_score(resume_text)
        + structure_score(resume_text)
        + length_score(resume_text)
        + readability_score(resume_text);

    score.min(100.0)
}

/// Email and phone presence: both 20, exactly one 10, neither 0.
fn contact_score(text: &str) -> f64 {
    match (text::contains_email(text), text::contains_phone(text)) {
        (true, true) => 20.0,
        (true, false) | (false, true) => 10.0,
        (false, false) => 0.0,
    }
}

/// Section headings and bullet markers, 15 points each.
fn structure_score(text: &str) -> f64 {
    let mut score = 0.0;
    if text::contains_headings(text) {
        score += 15.0;
    }
    if text::contains_bullets(text) {
        score += 15.0;
    }
    score
}

/// Word-count band. Résumés between 300 and 800 words score best; very long
/// documents degrade the same as sparse ones.
fn length_score(text: &str) -> f64 {
    let words = text.split_whitespace().count();
    match words {
        300..=800 => 20.0,
        200..=299 | 801..=1200 => 15.0,
        100..=199 => 10.0,
        w if w > 1200 => 10.0,
        _ => 5.0,
    }
}

/// Line count plus vocabulary diversity (distinct words longer than three
/// characters over total words).
fn readability_score(text: &str) -> f64 {
    let lines = text.lines().count();
    let line_score = if lines > 5 {
        15.0
    } else if lines > 2 {
        10.0
    } else {
        5.0
    };

    let words: Vec<String> = text
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect();
    let distinct_long: HashSet<&str> = words
        .iter()
        .map(String::as_str)
        .filter(|w| w.len() > 3)
        .collect();
    let diversity = if words.is_empty() {
        0.0
    } else {
        distinct_long.len() as f64 / words.len() as f64
    };
    let diversity_score = if diversity > 0.4 {
        15.0
    } else if diversity > 0.25 {
        10.0
    } else {
        5.0
    };

    line_score + diversity_score
}
