use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Point-in-time view of a user's profile, assembled by the store layer.
/// The scoring rules treat this as a read-only value; a fresh snapshot is
/// loaded for every request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub personal: PersonalInfo,
    pub academic: AcademicInfo,
    /// Skill names in insertion order.
    pub skills: Vec<String>,
    /// Set by the external resume upload/parsing subsystem.
    pub has_resume: bool,
    pub social: SocialLinks,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AcademicInfo {
    pub university: Option<String>,
    pub program: Option<String>,
    pub graduation_year: Option<i32>,
    pub gpa: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialLinks {
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub portfolio: Option<String>,
}

/// Raw profile row as stored. Nullable columns map to `Option`; blank
/// strings are normalized away when the snapshot is assembled.
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)] // id/audit columns come back with SELECT * but are not read
pub struct ProfileRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub university: Option<String>,
    pub program: Option<String>,
    pub graduation_year: Option<i32>,
    pub gpa: Option<f64>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Collapses blank / whitespace-only values to `None`.
/// Malformed optional fields count as absent, never as an error.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
