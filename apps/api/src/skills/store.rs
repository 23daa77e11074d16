use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::skills::{Skill, SkillGap, SkillToken, UpgradeRecommendation};

/// Read access to the skill-intelligence tables. Empty result sets are
/// normal (a user with no analysis yet), never an error.
#[async_trait]
pub trait SkillStore: Send + Sync {
    async fn skill_gaps(&self, user_id: Uuid) -> Result<Vec<SkillGap>, AppError>;
    async fn skill_tokens(&self, user_id: Uuid) -> Result<Vec<SkillToken>, AppError>;
    async fn recommendations(&self, user_id: Uuid)
        -> Result<Vec<UpgradeRecommendation>, AppError>;
}

pub struct PgSkillStore {
    db: PgPool,
}

impl PgSkillStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

// Flat row shapes for sqlx; mapped into the nested wire types below.

#[derive(Debug, FromRow)]
struct SkillGapRow {
    id: Uuid,
    user_id: Uuid,
    skill_name: String,
    skill_category: Option<String>,
    target_role: String,
    importance_score: f64,
    recommendation_text: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct SkillTokenRow {
    id: Uuid,
    user_id: Uuid,
    skill_name: String,
    skill_category: Option<String>,
    token_id: String,
    verification_status: String,
    verification_method: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct RecommendationRow {
    id: Uuid,
    user_id: Uuid,
    skill_name: String,
    skill_category: Option<String>,
    course_title: String,
    provider: String,
    duration: String,
    difficulty_level: String,
    course_url: Option<String>,
    priority_score: f64,
    created_at: DateTime<Utc>,
}

#[async_trait]
impl SkillStore for PgSkillStore {
    async fn skill_gaps(&self, user_id: Uuid) -> Result<Vec<SkillGap>, AppError> {
        // Newest first so the stable ranking sort keeps recency on ties.
        let rows: Vec<SkillGapRow> = sqlx::query_as(
            r#"
            SELECT g.id, g.user_id, s.name AS skill_name, s.category AS skill_category,
                   g.target_role, g.importance_score, g.recommendation_text, g.created_at
            FROM skill_gaps g
            JOIN skills s ON s.id = g.skill_id
            WHERE g.user_id = $1
            ORDER BY g.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| SkillGap {
                id: r.id,
                user_id: r.user_id,
                skill: Skill {
                    name: r.skill_name,
                    category: r.skill_category,
                },
                target_role: r.target_role,
                importance_score: r.importance_score,
                recommendation_text: r.recommendation_text,
                created_at: r.created_at,
            })
            .collect())
    }

    async fn skill_tokens(&self, user_id: Uuid) -> Result<Vec<SkillToken>, AppError> {
        let rows: Vec<SkillTokenRow> = sqlx::query_as(
            r#"
            SELECT t.id, t.user_id, s.name AS skill_name, s.category AS skill_category,
                   t.token_id, t.verification_status, t.verification_method, t.created_at
            FROM skill_tokens t
            JOIN skills s ON s.id = t.skill_id
            WHERE t.user_id = $1
            ORDER BY t.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| SkillToken {
                id: r.id,
                user_id: r.user_id,
                skill: Skill {
                    name: r.skill_name,
                    category: r.skill_category,
                },
                token_id: r.token_id,
                verification_status: r.verification_status,
                verification_method: r.verification_method,
                created_at: r.created_at,
            })
            .collect())
    }

    async fn recommendations(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<UpgradeRecommendation>, AppError> {
        let rows: Vec<RecommendationRow> = sqlx::query_as(
            r#"
            SELECT u.id, u.user_id, s.name AS skill_name, s.category AS skill_category,
                   u.course_title, u.provider, u.duration, u.difficulty_level,
                   u.course_url, u.priority_score, u.created_at
            FROM upgrade_recommendations u
            JOIN skills s ON s.id = u.skill_id
            WHERE u.user_id = $1
            ORDER BY u.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| UpgradeRecommendation {
                id: r.id,
                user_id: r.user_id,
                skill: Skill {
                    name: r.skill_name,
                    category: r.skill_category,
                },
                course_title: r.course_title,
                provider: r.provider,
                duration: r.duration,
                difficulty_level: r.difficulty_level,
                course_url: r.course_url,
                priority_score: r.priority_score,
                created_at: r.created_at,
            })
            .collect())
    }
}
