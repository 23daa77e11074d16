pub mod health;

use axum::{routing::get, Router};

use crate::profile::handlers as profile_handlers;
use crate::skills::handlers as skills_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile strength
        .route(
            "/api/v1/profile",
            get(profile_handlers::handle_get_profile),
        )
        .route(
            "/api/v1/profile-strength",
            get(profile_handlers::handle_profile_strength),
        )
        // Skill intelligence
        .route(
            "/api/v1/skill-gaps/ranked",
            get(skills_handlers::handle_ranked_gaps),
        )
        .route(
            "/api/v1/recommendations/ranked",
            get(skills_handlers::handle_ranked_recommendations),
        )
        .route(
            "/api/v1/skill-tokens/coverage",
            get(skills_handlers::handle_token_coverage),
        )
        .with_state(state)
}
