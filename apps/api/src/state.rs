use std::sync::Arc;

use sqlx::PgPool;

use crate::llm_client::LlmClient;
use crate::matching::matcher::RequirementMatcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: LlmClient,
    /// Pluggable batch requirement matcher. Default: `LlmRequirementMatcher`.
    pub matcher: Arc<dyn RequirementMatcher>,
}
