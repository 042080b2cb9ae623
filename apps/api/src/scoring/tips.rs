//! Threshold-driven improvement tips derived from the sub-scores.

/// Sub-scores below this trigger the matching recommendation.
const TIP_THRESHOLD: f64 = 60.0;

/// Builds actionable recommendations from the sub-scores.
///
/// Always returns at least one entry: when every sub-score clears the
/// threshold, the single affirmation tip is emitted instead.
pub fn generate_improvement_tips(
    keyword_match: f64,
    skill_relevance: f64,
    formatting: f64,
) -> Vec<String> {
    let mut tips = Vec::new();

    if keyword_match < TIP_THRESHOLD {
        tips.push("Add more job-related keywords".to_string());
    }

    if formatting < TIP_THRESHOLD {
        tips.push(
            "Improve formatting: add headings, bullet points, and consistent structure"
                .to_string(),
        );
    }

    if skill_relevance < TIP_THRESHOLD {
        tips.push("Highlight more relevant technical skills".to_string());
    }

    if tips.is_empty() {
        tips.push("Great job! Your resume is well-optimized for ATS systems".to_string());
    }

    tips
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_scores_high_yields_single_affirmation() {
        let tips = generate_improvement_tips(80.0, 75.0, 90.0);
        assert_eq!(
            tips,
            vec!["Great job! Your resume is well-optimized for ATS systems"]
        );
    }

    #[test]
    fn test_all_scores_low_yields_three_tips_in_order() {
        let tips = generate_improvement_tips(0.0, 0.0, 0.0);
        assert_eq!(
            tips,
            vec![
                "Add more job-related keywords",
                "Improve formatting: add headings, bullet points, and consistent structure",
                "Highlight more relevant technical skills",
            ]
        );
    }

    #[test]
    fn test_low_keyword_only() {
        let tips = generate_improvement_tips(59.9, 60.0, 60.0);
        assert_eq!(tips, vec!["Add more job-related keywords"]);
    }

    #[test]
    fn test_low_formatting_only() {
        let tips = generate_improvement_tips(100.0, 100.0, 40.0);
        assert_eq!(
            tips,
            vec!["Improve formatting: add headings, bullet points, and consistent structure"]
        );
    }

    #[test]
    fn test_low_skill_only() {
        let tips = generate_improvement_tips(100.0, 20.0, 100.0);
        assert_eq!(tips, vec!["Highlight more relevant technical skills"]);
    }

    #[test]
    fn test_threshold_is_exclusive_at_60() {
        let tips = generate_improvement_tips(60.0, 60.0, 60.0);
        assert_eq!(tips.len(), 1);
        assert!(tips[0].starts_with("Great job"));
    }
}
