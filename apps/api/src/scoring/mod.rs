//! ATS scoring engine — stateless analysis of résumé text against a job
//! description.
//!
//! Pipeline: normalize → tokenize → {overlap matching, formatting
//! heuristics} → weighted aggregation → improvement tips. Every invocation
//! is a deterministic function of its inputs and the configured weights:
//! no shared state, no I/O, nothing to lock. Calls may run concurrently
//! without coordination.

pub mod formatting;
pub mod handlers;
pub mod matching;
pub mod text;
pub mod tips;
pub mod tokenizer;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::scoring::matching::{overlap_ratio, SkillMatcher};
use crate::scoring::tokenizer::{tokenize, unique_tokens};

/// Relative weights applied to the three sub-scores. Expected (not
/// enforced) to sum to 1.0 when a job description is present; the engine
/// trusts the configuration verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub keyword: f64,
    pub skill: f64,
    pub formatting: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            keyword: 0.4,
            skill: 0.3,
            formatting: 0.3,
        }
    }
}

/// Full scoring result. Serialized camelCase for the dashboard frontend:
/// `keywordMatch`, `skillRelevance`, `formatting`, `overall`,
/// `improvementTips`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub keyword_match: f64,
    pub skill_relevance: f64,
    pub formatting: f64,
    pub overall: f64,
    pub improvement_tips: Vec<String>,
}

/// Computes the full ATS score for a résumé against a job description.
///
/// A blank job description (or one that tokenizes to nothing, e.g. all
/// stopwords) is a legitimate mode, not an error: keyword and skill
/// sub-scores are forced to 0, excluded from the weighted sum, and the
/// overall score equals the formatting score.
pub fn compute_score(
    resume_text: &str,
    job_description: &str,
    weights: &ScoringWeights,
    skill_matcher: &dyn SkillMatcher,
) -> ScoreBreakdown {
    let normalized_resume = text::normalize(resume_text);
    let normalized_jd = text::normalize(job_description);

    let resume_tokens = unique_tokens(&tokenize(&normalized_resume));
    let jd_tokens = unique_tokens(&tokenize(&normalized_jd));

    let formatting = formatting::formatting_score(resume_text);

    let (keyword_match, skill_relevance, overall) = if jd_tokens.is_empty() {
        (0.0, 0.0, formatting)
    } else {
        let keyword_match = overlap_ratio(&resume_tokens, &jd_tokens);
        let skill_relevance = skill_matcher.relevance(&resume_tokens, &jd_tokens);
        let overall = keyword_match * weights.keyword
            + skill_relevance * weights.skill
            + formatting * weights.formatting;
        (keyword_match, skill_relevance, overall)
    };

    let improvement_tips =
        tips::generate_improvement_tips(keyword_match, skill_relevance, formatting);

    debug!(
        "computed score - overall: {overall:.1}, keyword: {keyword_match:.1}, skill: {skill_relevance:.1}, formatting: {formatting:.1}"
    );

    ScoreBreakdown {
        keyword_match,
        skill_relevance,
        formatting,
        overall,
        improvement_tips,
    }
}
