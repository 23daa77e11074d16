use std::sync::Arc;

use crate::config::Config;
use crate::profile::store::ProfileStore;
use crate::skills::store::SkillStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Runtime configuration; not yet read by any handler.
    #[allow(dead_code)]
    pub config: Config,
    /// Read-only access to the externally owned profile tables.
    pub profiles: Arc<dyn ProfileStore>,
    /// Read-only access to the skill-intelligence tables (tokens, gaps, recommendations).
    pub skills: Arc<dyn SkillStore>,
}
