use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::ProfileSnapshot;
use crate::profile::strength::{compute_strength, ProfileStrengthReport};
use crate::state::AppState;

/// Identity is always an explicit query parameter; the engine never reads
/// ambient state to locate the current user.
#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Serialize)]
pub struct ProfileResponse {
    pub snapshot: ProfileSnapshot,
    pub strength: ProfileStrengthReport,
}

/// GET /api/v1/profile-strength
pub async fn handle_profile_strength(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ProfileStrengthReport>, AppError> {
    let snapshot = state.profiles.load_snapshot(params.user_id).await?;
    Ok(Json(compute_strength(&snapshot)))
}

/// GET /api/v1/profile
/// Snapshot plus strength report in one response, for the dashboard card.
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ProfileResponse>, AppError> {
    let snapshot = state.profiles.load_snapshot(params.user_id).await?;
    let strength = compute_strength(&snapshot);
    Ok(Json(ProfileResponse { snapshot, strength }))
}
