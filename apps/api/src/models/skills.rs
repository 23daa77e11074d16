use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A skill as referenced by the skill-intelligence tables. The category is
/// a free-form string on the wire; only the coverage aggregation interprets
/// it, and values outside the known axis are simply not counted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: Option<String>,
}

/// A verified (or pending) attestation that the user holds a skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillToken {
    pub id: Uuid,
    pub user_id: Uuid,
    pub skill: Skill,
    pub token_id: String,
    pub verification_status: String,
    pub verification_method: String,
    pub created_at: DateTime<Utc>,
}

/// A skill identified as missing or weak relative to a target role.
/// `importance_score` is in [0, 100] by convention; out-of-range values are
/// carried through opaquely and only used for display ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGap {
    pub id: Uuid,
    pub user_id: Uuid,
    pub skill: Skill,
    pub target_role: String,
    pub importance_score: f64,
    pub recommendation_text: String,
    pub created_at: DateTime<Utc>,
}

/// A course suggestion addressing one of the user's skill gaps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeRecommendation {
    pub id: Uuid,
    pub user_id: Uuid,
    pub skill: Skill,
    pub course_title: String,
    pub provider: String,
    pub duration: String,
    pub difficulty_level: String,
    pub course_url: Option<String>,
    pub priority_score: f64,
    pub created_at: DateTime<Utc>,
}

/// Token status that counts toward coverage.
pub const VERIFIED: &str = "VERIFIED";

/// Fixed category axis for the coverage radar. Extending it is a compatible
/// change as long as callers treat the mapping as open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkillCategory {
    Programming,
    Framework,
    Database,
    Cloud,
    Devops,
}

impl SkillCategory {
    /// Axis order matters: the radar chart renders categories in this order.
    pub const COVERAGE_AXIS: [SkillCategory; 5] = [
        SkillCategory::Programming,
        SkillCategory::Framework,
        SkillCategory::Database,
        SkillCategory::Cloud,
        SkillCategory::Devops,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Programming => "PROGRAMMING",
            SkillCategory::Framework => "FRAMEWORK",
            SkillCategory::Database => "DATABASE",
            SkillCategory::Cloud => "CLOUD",
            SkillCategory::Devops => "DEVOPS",
        }
    }
}
