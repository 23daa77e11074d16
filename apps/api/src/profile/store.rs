use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{
    non_blank, AcademicInfo, PersonalInfo, ProfileRow, ProfileSnapshot, SocialLinks,
};

/// Read access to the externally owned profile tables. The scoring rules
/// only ever see the assembled `ProfileSnapshot`.
///
/// Carried in `AppState` as `Arc<dyn ProfileStore>` so tests and future
/// backends can swap implementations without touching handlers.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Assembles a fresh snapshot for the user, or `NotFound` if no
    /// profile row exists. In that case the scoring core is never invoked.
    async fn load_snapshot(&self, user_id: Uuid) -> Result<ProfileSnapshot, AppError>;
}

pub struct PgProfileStore {
    db: PgPool,
}

impl PgProfileStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn load_snapshot(&self, user_id: Uuid) -> Result<ProfileSnapshot, AppError> {
        let row: Option<ProfileRow> = sqlx::query_as("SELECT * FROM profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.db)
            .await?;

        let row =
            row.ok_or_else(|| AppError::NotFound(format!("No profile found for user {user_id}")))?;

        // Insertion order is preserved; the skills tiering only counts, but
        // display order carries meaning downstream.
        let skills: Vec<String> = sqlx::query_scalar(
            "SELECT skill_name FROM profile_skills WHERE user_id = $1 ORDER BY position",
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        let has_resume: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM resumes WHERE user_id = $1)")
                .bind(user_id)
                .fetch_one(&self.db)
                .await?;

        Ok(ProfileSnapshot {
            personal: PersonalInfo {
                first_name: non_blank(row.first_name),
                last_name: non_blank(row.last_name),
                email: non_blank(row.email),
                phone: non_blank(row.phone),
                location: non_blank(row.location),
            },
            academic: AcademicInfo {
                university: non_blank(row.university),
                program: non_blank(row.program),
                graduation_year: row.graduation_year,
                gpa: row.gpa,
            },
            skills: skills.into_iter().filter(|s| !s.trim().is_empty()).collect(),
            has_resume,
            social: SocialLinks {
                linkedin: non_blank(row.linkedin_url),
                github: non_blank(row.github_url),
                portfolio: non_blank(row.portfolio_url),
            },
        })
    }
}
