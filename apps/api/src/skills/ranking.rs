//! Gap ranking — display-order projections over externally sourced skill
//! gaps, upgrade recommendations, and skill tokens. No scoring happens
//! here; the importance/priority numbers come from the skill-intelligence
//! store and are treated as opaque.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::skills::{SkillCategory, SkillGap, SkillToken, UpgradeRecommendation, VERIFIED};

/// Verified-token count for one category of the coverage radar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCoverage {
    pub category: SkillCategory,
    pub verified: usize,
}

/// Sorts gaps descending by `importance_score`. The sort is stable: ties
/// keep their input order, which carries recency from the store.
pub fn rank_by_importance(mut gaps: Vec<SkillGap>) -> Vec<SkillGap> {
    gaps.sort_by(|a, b| cmp_desc(a.importance_score, b.importance_score));
    gaps
}

/// Sorts recommendations descending by `priority_score`; same stability
/// contract as `rank_by_importance`.
pub fn rank_by_priority(mut recs: Vec<UpgradeRecommendation>) -> Vec<UpgradeRecommendation> {
    recs.sort_by(|a, b| cmp_desc(a.priority_score, b.priority_score));
    recs
}

/// Descending comparison. `total_cmp` keeps NaN deterministic instead of
/// making the sort order unspecified.
fn cmp_desc(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

/// Counts VERIFIED tokens per category over a fixed axis. Every requested
/// category appears in the output, zero-count included, so the radar chart
/// always gets a dense structure. Tokens with an unknown or missing
/// category are skipped, never an error.
pub fn aggregate_by_category(
    tokens: &[SkillToken],
    categories: &[SkillCategory],
) -> Vec<CategoryCoverage> {
    categories
        .iter()
        .map(|category| CategoryCoverage {
            category: *category,
            verified: tokens
                .iter()
                .filter(|t| {
                    t.verification_status == VERIFIED
                        && t.skill.category.as_deref() == Some(category.as_str())
                })
                .count(),
        })
        .collect()
}

/// First `n` elements of an already-ranked sequence; short input is
/// returned whole.
pub fn top_n<T>(mut items: Vec<T>, n: usize) -> Vec<T> {
    items.truncate(n);
    items
}
