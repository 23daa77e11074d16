use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::skills::{SkillCategory, SkillGap, UpgradeRecommendation};
use crate::skills::ranking::{
    aggregate_by_category, rank_by_importance, rank_by_priority, top_n, CategoryCoverage,
};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RankedQuery {
    pub user_id: Uuid,
    /// Optional cap on the ranked list; omitted means the full list.
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

/// GET /api/v1/skill-gaps/ranked
pub async fn handle_ranked_gaps(
    State(state): State<AppState>,
    Query(params): Query<RankedQuery>,
) -> Result<Json<Vec<SkillGap>>, AppError> {
    let gaps = state.skills.skill_gaps(params.user_id).await?;
    let ranked = rank_by_importance(gaps);
    Ok(Json(match params.limit {
        Some(n) => top_n(ranked, n),
        None => ranked,
    }))
}

/// GET /api/v1/recommendations/ranked
pub async fn handle_ranked_recommendations(
    State(state): State<AppState>,
    Query(params): Query<RankedQuery>,
) -> Result<Json<Vec<UpgradeRecommendation>>, AppError> {
    let recs = state.skills.recommendations(params.user_id).await?;
    let ranked = rank_by_priority(recs);
    Ok(Json(match params.limit {
        Some(n) => top_n(ranked, n),
        None => ranked,
    }))
}

/// GET /api/v1/skill-tokens/coverage
/// Dense category → verified-count mapping for the radar visualization.
pub async fn handle_token_coverage(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<CategoryCoverage>>, AppError> {
    let tokens = state.skills.skill_tokens(params.user_id).await?;
    Ok(Json(aggregate_by_category(
        &tokens,
        &SkillCategory::COVERAGE_AXIS,
    )))
}
