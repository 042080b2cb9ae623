//! Lexical overlap matching between résumé and job-description token sets.
//!
//! The keyword score is a plain overlap ratio. Skill relevance goes through
//! the `SkillMatcher` trait so the backend can be swapped at startup without
//! touching the engine or handlers.

use std::collections::HashSet;

/// Fraction of target tokens covered by the source, as a percentage.
///
/// An empty target yields 0 — there is nothing to match against.
pub fn overlap_ratio(source: &HashSet<String>, target: &HashSet<String>) -> f64 {
    if target.is_empty() {
        return 0.0;
    }

    let intersection = source.intersection(target).count();
    let score = intersection as f64 / target.len() as f64 * 100.0;
    score.min(100.0)
}

/// Pluggable skill-relevance backend, carried in `AppState` as
/// `Arc<dyn SkillMatcher>` and selected via `SKILL_MATCHER` at startup.
pub trait SkillMatcher: Send + Sync {
    /// Backend name surfaced in logs.
    fn name(&self) -> &'static str;

    /// Skill relevance of the résumé against the job description, 0–100.
    fn relevance(&self, resume_tokens: &HashSet<String>, jd_tokens: &HashSet<String>) -> f64;
}

/// Default backend: plain token overlap, identical to the keyword match.
pub struct TokenOverlapMatcher;

impl SkillMatcher for TokenOverlapMatcher {
    fn name(&self) -> &'static str {
        "overlap"
    }

    // TODO: semantic matching would distinguish skills from generic keywords;
    // until then this duplicates the keyword score.
    fn relevance(&self, resume_tokens: &HashSet<String>, jd_tokens: &HashSet<String>) -> f64 {
        overlap_ratio(resume_tokens, jd_tokens)
    }
}

/// Lexicon backend: scores overlap against only the JD tokens that appear in
/// a curated skill vocabulary, so filler words in the JD cannot dilute or
/// inflate the skill score.
pub struct LexiconSkillMatcher {
    lexicon: HashSet<String>,
}

impl LexiconSkillMatcher {
    pub fn new(terms: impl IntoIterator<Item = String>) -> Self {
        Self {
            lexicon: terms.into_iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    /// Baseline vocabulary of technology skill terms. Single tokens only, so
    /// every term is reachable by the tokenizer.
    pub fn default_lexicon() -> Vec<String> {
        [
            // languages
            "rust", "python", "javascript", "typescript", "java", "c++", "c#", "go", "ruby",
            "php", "swift", "kotlin", "scala", "sql", "html", "css",
            // frameworks and runtimes
            "react", "angular", "vue", "svelte", "node.js", "express", "django", "flask",
            "spring", "rails",
            // infrastructure
            "docker", "kubernetes", "terraform", "ansible", "jenkins", "aws", "azure", "gcp",
            "linux", "git", "graphql", "grpc", "rest", "microservices",
            // data stores and pipelines
            "redis", "postgresql", "mysql", "mongodb", "sqlite", "cassandra", "elasticsearch",
            "kafka", "spark", "hadoop", "airflow",
            // ML and testing
            "tensorflow", "pytorch", "pandas", "numpy", "selenium", "cypress", "jest",
            "pytest", "junit",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }
}

impl SkillMatcher for LexiconSkillMatcher {
    fn name(&self) -> &'static str {
        "lexicon"
    }

    fn relevance(&self, resume_tokens: &HashSet<String>, jd_tokens: &HashSet<String>) -> f64 {
        let skill_targets: HashSet<String> =
            jd_tokens.intersection(&self.lexicon).cloned().collect();
        overlap_ratio(resume_tokens, &skill_targets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(tokens: &[&str]) -> HashSet<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_overlap_empty_target_is_zero() {
        assert_eq!(overlap_ratio(&set(&["rust"]), &set(&[])), 0.0);
    }

    #[test]
    fn test_overlap_empty_source_is_zero() {
        assert_eq!(overlap_ratio(&set(&[]), &set(&["rust"])), 0.0);
    }

    #[test]
    fn test_overlap_full_coverage_is_100() {
        let source = set(&["rust", "go", "kafka"]);
        let target = set(&["rust", "go"]);
        assert_eq!(overlap_ratio(&source, &target), 100.0);
    }

    #[test]
    fn test_overlap_partial_coverage() {
        let source = set(&["rust"]);
        let target = set(&["rust", "go", "kafka", "redis"]);
        assert_eq!(overlap_ratio(&source, &target), 25.0);
    }

    #[test]
    fn test_overlap_monotone_in_source() {
        let target = set(&["rust", "go", "kafka"]);
        let before = overlap_ratio(&set(&["rust"]), &target);
        let after = overlap_ratio(&set(&["rust", "go"]), &target);
        assert!(after >= before);
    }

    #[test]
    fn test_token_overlap_matcher_equals_keyword_overlap() {
        let resume = set(&["rust", "kafka", "docker"]);
        let jd = set(&["rust", "kafka", "teamwork"]);
        let matcher = TokenOverlapMatcher;
        assert_eq!(
            matcher.relevance(&resume, &jd),
            overlap_ratio(&resume, &jd)
        );
    }

    #[test]
    fn test_lexicon_matcher_ignores_non_skill_jd_tokens() {
        let matcher = LexiconSkillMatcher::new(LexiconSkillMatcher::default_lexicon());
        let resume = set(&["rust", "kafka"]);
        // Only rust and kafka are lexicon terms; both covered.
        let jd = set(&["rust", "kafka", "collaborative", "fast paced", "teamwork"]);
        assert_eq!(matcher.relevance(&resume, &jd), 100.0);
    }

    #[test]
    fn test_lexicon_matcher_counts_missing_skills() {
        let matcher = LexiconSkillMatcher::new(LexiconSkillMatcher::default_lexicon());
        let resume = set(&["rust"]);
        let jd = set(&["rust", "kubernetes", "terraform", "postgresql"]);
        assert_eq!(matcher.relevance(&resume, &jd), 25.0);
    }

    #[test]
    fn test_lexicon_matcher_no_skill_terms_in_jd_is_zero() {
        let matcher = LexiconSkillMatcher::new(LexiconSkillMatcher::default_lexicon());
        let resume = set(&["rust", "go"]);
        let jd = set(&["collaborative", "enterprise", "team"]);
        assert_eq!(matcher.relevance(&resume, &jd), 0.0);
    }

    #[test]
    fn test_lexicon_custom_terms_are_lowercased() {
        let matcher = LexiconSkillMatcher::new(vec!["FORTRAN".to_string()]);
        let resume = set(&["fortran"]);
        let jd = set(&["fortran", "legacy"]);
        assert_eq!(matcher.relevance(&resume, &jd), 100.0);
    }
}
