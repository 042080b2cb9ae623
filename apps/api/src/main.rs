mod config;
mod errors;
mod routes;
mod scoring;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::scoring::matching::{LexiconSkillMatcher, SkillMatcher, TokenOverlapMatcher};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS Score Engine v{}", env!("CARGO_PKG_VERSION"));

    // Initialize skill matcher (TokenOverlapMatcher by default — swap via SKILL_MATCHER)
    let skill_matcher: Arc<dyn SkillMatcher> = match config.skill_matcher.as_str() {
        "lexicon" => {
            let terms = config
                .skill_lexicon
                .clone()
                .unwrap_or_else(LexiconSkillMatcher::default_lexicon);
            Arc::new(LexiconSkillMatcher::new(terms))
        }
        _ => Arc::new(TokenOverlapMatcher),
    };
    info!("Skill matcher initialized (backend: {})", skill_matcher.name());
    info!(
        "Scoring weights: keyword={} skill={} formatting={}",
        config.weights.keyword, config.weights.skill, config.weights.formatting
    );

    let state = AppState {
        config: config.clone(),
        skill_matcher,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
