use std::sync::Arc;

use crate::config::Config;
use crate::scoring::matching::SkillMatcher;

/// Shared application state injected into all route handlers via Axum
/// extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable skill-relevance backend. Default: TokenOverlapMatcher.
    /// Swap via SKILL_MATCHER env.
    pub skill_matcher: Arc<dyn SkillMatcher>,
}
