//! Profile strength scoring — pure, deterministic rules mapping a
//! `ProfileSnapshot` to a weighted completeness score, a qualitative tier,
//! and ranked improvement suggestions.
//!
//! Total addressable weight is exactly 100. Each section contributes its
//! fixed weight independently; the final score is never re-normalized.

use serde::{Deserialize, Serialize};

use crate::models::profile::ProfileSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl Tier {
    /// Lower-inclusive cut points: 85 → Excellent, 70 → Good, 50 → Fair.
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 85 => Tier::Excellent,
            s if s >= 70 => Tier::Good,
            s if s >= 50 => Tier::Fair,
            _ => Tier::Poor,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileStrengthReport {
    pub score: u32,
    pub tier: Tier,
    pub completed_sections: Vec<String>,
    pub missing_sections: Vec<String>,
    /// First three suggestions in generation order. Callers must not assume
    /// impact ordering: a high-weight section missed late can be cut in
    /// favor of a low-weight one generated earlier (kept as-is from the
    /// product definition; see DESIGN.md).
    pub suggestions: Vec<String>,
}

/// Section weights that sum with the skills, resume, and social sections to
/// exactly 100. Each row: label, weight, suggestion when missing.
const PRESENCE_SECTIONS: usize = 8;

const SKILLS_FULL: u32 = 25;
const SKILLS_PARTIAL: u32 = 15;
const SKILLS_BASIC: u32 = 8;
const RESUME_WEIGHT: u32 = 20;
const SOCIAL_LINKEDIN: u32 = 5;
const SOCIAL_GITHUB: u32 = 3;
const SOCIAL_PORTFOLIO: u32 = 2;

const MAX_SUGGESTIONS: usize = 3;

/// Computes a `ProfileStrengthReport` from a snapshot. Total over any
/// well-typed input: missing or blank fields count as absent, never error.
pub fn compute_strength(snapshot: &ProfileSnapshot) -> ProfileStrengthReport {
    let mut score = 0u32;
    let mut completed_sections = Vec::new();
    let mut missing_sections = Vec::new();
    let mut suggestions = Vec::new();

    let personal = &snapshot.personal;
    let academic = &snapshot.academic;

    // Presence-only sections: basic information (20 pts) + education (25 pts).
    let presence: [(&str, u32, &str, bool); PRESENCE_SECTIONS] = [
        (
            "Full Name",
            5,
            "Add your complete name",
            filled(&personal.first_name) && filled(&personal.last_name),
        ),
        ("Email", 5, "Add your email address", filled(&personal.email)),
        ("Phone", 5, "Add your phone number", filled(&personal.phone)),
        (
            "Location",
            5,
            "Add your current location",
            filled(&personal.location),
        ),
        (
            "University",
            8,
            "Add your university/college",
            filled(&academic.university),
        ),
        (
            "Degree/Program",
            8,
            "Add your degree or program",
            filled(&academic.program),
        ),
        (
            "Graduation Year",
            5,
            "Add your graduation year",
            academic.graduation_year.is_some(),
        ),
        (
            "GPA/Marks",
            4,
            "Add your GPA or percentage",
            academic.gpa.is_some(),
        ),
    ];

    for (label, weight, suggestion, present) in presence {
        if present {
            score += weight;
            completed_sections.push(label.to_string());
        } else {
            missing_sections.push(label.to_string());
            suggestions.push(suggestion.to_string());
        }
    }

    // Skills (25 pts, tiered at 3 and 5). Partial tiers still count the
    // section as completed but add a "strengthen" suggestion.
    let skill_count = snapshot
        .skills
        .iter()
        .filter(|s| !s.trim().is_empty())
        .count();
    if skill_count > 0 {
        if skill_count >= 5 {
            score += SKILLS_FULL;
            completed_sections.push("Skills (5+)".to_string());
        } else if skill_count >= 3 {
            score += SKILLS_PARTIAL;
            completed_sections.push("Skills (3+)".to_string());
            suggestions.push("Add more skills to strengthen your profile".to_string());
        } else {
            score += SKILLS_BASIC;
            completed_sections.push("Skills (Basic)".to_string());
            suggestions.push("Add at least 5 relevant skills".to_string());
        }
    } else {
        missing_sections.push("Skills".to_string());
        suggestions.push("Add your technical and soft skills".to_string());
    }

    // Resume upload (20 pts); the flag is owned by the upload subsystem.
    if snapshot.has_resume {
        score += RESUME_WEIGHT;
        completed_sections.push("Resume Upload".to_string());
    } else {
        missing_sections.push("Resume Upload".to_string());
        suggestions.push("Upload your resume in PDF format".to_string());
    }

    // Social links (up to 10 pts, additive sub-weights). Any presence marks
    // the section completed.
    let mut social_score = 0u32;
    if filled(&snapshot.social.linkedin) {
        social_score += SOCIAL_LINKEDIN;
    }
    if filled(&snapshot.social.github) {
        social_score += SOCIAL_GITHUB;
    }
    if filled(&snapshot.social.portfolio) {
        social_score += SOCIAL_PORTFOLIO;
    }
    score += social_score;
    if social_score > 0 {
        completed_sections.push("Social Links".to_string());
    } else {
        missing_sections.push("Social Links".to_string());
        suggestions.push("Add LinkedIn, GitHub, or portfolio links".to_string());
    }

    suggestions.truncate(MAX_SUGGESTIONS);

    ProfileStrengthReport {
        score,
        tier: Tier::from_score(score),
        completed_sections,
        missing_sections,
        suggestions,
    }
}

/// Presence check for optional string fields. Blank values count as absent
/// even if the store layer let one through.
fn filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{AcademicInfo, PersonalInfo, SocialLinks};

    fn snapshot() -> ProfileSnapshot {
        ProfileSnapshot::default()
    }

    fn full_personal() -> PersonalInfo {
        PersonalInfo {
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            email: Some("ada@example.com".to_string()),
            phone: Some("+44 20 0000 0000".to_string()),
            location: Some("London".to_string()),
        }
    }

    fn full_academic() -> AcademicInfo {
        AcademicInfo {
            university: Some("University of London".to_string()),
            program: Some("Mathematics".to_string()),
            graduation_year: Some(2026),
            gpa: Some(3.9),
        }
    }

    fn skills(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("skill-{i}")).collect()
    }

    fn full_snapshot() -> ProfileSnapshot {
        ProfileSnapshot {
            personal: full_personal(),
            academic: full_academic(),
            skills: skills(6),
            has_resume: true,
            social: SocialLinks {
                linkedin: Some("https://linkedin.com/in/ada".to_string()),
                github: Some("https://github.com/ada".to_string()),
                portfolio: Some("https://ada.dev".to_string()),
            },
        }
    }

    #[test]
    fn test_empty_snapshot_scores_zero_poor() {
        let report = compute_strength(&snapshot());
        assert_eq!(report.score, 0);
        assert_eq!(report.tier, Tier::Poor);
        assert!(report.completed_sections.is_empty());
        assert_eq!(report.suggestions.len(), 3);
    }

    #[test]
    fn test_full_snapshot_scores_100_excellent() {
        let report = compute_strength(&full_snapshot());
        assert_eq!(report.score, 100);
        assert_eq!(report.tier, Tier::Excellent);
        assert!(report.missing_sections.is_empty());
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_near_complete_profile_scores_98() {
        // Full personal + academic, 6 skills, resume, linkedin + github:
        // 5+5+5+5 + 8+8+5+4 + 25 + 20 + 5+3 = 98
        let mut s = full_snapshot();
        s.social.portfolio = None;
        let report = compute_strength(&s);
        assert_eq!(report.score, 98);
        assert_eq!(report.tier, Tier::Excellent);
        assert!(report.missing_sections.is_empty());
    }

    #[test]
    fn test_sections_partition_with_no_overlap() {
        for s in [snapshot(), full_snapshot(), {
            let mut s = snapshot();
            s.skills = skills(4);
            s.has_resume = true;
            s
        }] {
            let report = compute_strength(&s);
            // 8 presence sections + skills + resume + social = 11 total
            assert_eq!(
                report.completed_sections.len() + report.missing_sections.len(),
                11
            );
            for label in &report.completed_sections {
                assert!(!report.missing_sections.contains(label));
            }
        }
    }

    #[test]
    fn test_skills_tiering() {
        for (count, expected) in [(0, 0), (2, 8), (4, 15), (6, 25)] {
            let mut s = snapshot();
            s.skills = skills(count);
            let report = compute_strength(&s);
            assert_eq!(report.score, expected, "skill count {count}");
        }
    }

    #[test]
    fn test_partial_skills_completed_with_strengthen_suggestion() {
        let mut s = snapshot();
        s.skills = skills(3);
        let report = compute_strength(&s);
        assert!(report
            .completed_sections
            .contains(&"Skills (3+)".to_string()));
        assert!(report
            .suggestions
            .contains(&"Add more skills to strengthen your profile".to_string()));
    }

    #[test]
    fn test_blank_skill_names_do_not_count() {
        let mut s = snapshot();
        s.skills = vec!["rust".to_string(), "  ".to_string(), String::new()];
        let report = compute_strength(&s);
        // 1 countable skill → basic tier
        assert_eq!(report.score, 8);
    }

    #[test]
    fn test_full_name_requires_both_names() {
        let mut s = snapshot();
        s.personal.first_name = Some("Ada".to_string());
        let report = compute_strength(&s);
        assert!(report.missing_sections.contains(&"Full Name".to_string()));
        assert_eq!(report.score, 0);
    }

    #[test]
    fn test_blank_fields_count_as_absent() {
        let mut s = snapshot();
        s.personal.email = Some("   ".to_string());
        let report = compute_strength(&s);
        assert!(report.missing_sections.contains(&"Email".to_string()));
    }

    #[test]
    fn test_social_subscores_additive() {
        let mut s = snapshot();
        s.social.linkedin = Some("https://linkedin.com/in/ada".to_string());
        let report = compute_strength(&s);
        assert_eq!(report.score, 5);
        assert!(report
            .completed_sections
            .contains(&"Social Links".to_string()));

        s.social.github = Some("https://github.com/ada".to_string());
        assert_eq!(compute_strength(&s).score, 8);

        s.social.portfolio = Some("https://ada.dev".to_string());
        assert_eq!(compute_strength(&s).score, 10);
    }

    #[test]
    fn test_no_social_links_is_missing_with_suggestion() {
        let report = compute_strength(&snapshot());
        assert!(report.missing_sections.contains(&"Social Links".to_string()));
        // Truncated to 3, but the social suggestion was generated last and
        // cut — verify via a snapshot missing only social.
        let mut s = full_snapshot();
        s.social = SocialLinks::default();
        let report = compute_strength(&s);
        assert_eq!(
            report.suggestions,
            vec!["Add LinkedIn, GitHub, or portfolio links".to_string()]
        );
    }

    #[test]
    fn test_suggestions_truncated_to_three_in_generation_order() {
        let report = compute_strength(&snapshot());
        assert_eq!(
            report.suggestions,
            vec![
                "Add your complete name".to_string(),
                "Add your email address".to_string(),
                "Add your phone number".to_string(),
            ]
        );
    }

    #[test]
    fn test_score_bounded_0_to_100() {
        let mut s = full_snapshot();
        s.skills = skills(50);
        let report = compute_strength(&s);
        assert!(report.score <= 100);
    }

    // Tier boundaries: snapshots engineered to land exactly on each cut
    // point and one below it.

    fn resume_and_five_skills() -> ProfileSnapshot {
        let mut s = snapshot();
        s.has_resume = true; // 20
        s.skills = skills(6); // 25
        s
    }

    #[test]
    fn test_tier_boundary_50_fair() {
        let mut s = resume_and_five_skills();
        s.academic.graduation_year = Some(2026); // +5 → 50
        let report = compute_strength(&s);
        assert_eq!(report.score, 50);
        assert_eq!(report.tier, Tier::Fair);
    }

    #[test]
    fn test_tier_boundary_49_poor() {
        let mut s = resume_and_five_skills();
        s.academic.gpa = Some(3.5); // +4 → 49
        let report = compute_strength(&s);
        assert_eq!(report.score, 49);
        assert_eq!(report.tier, Tier::Poor);
    }

    #[test]
    fn test_tier_boundary_70_good() {
        let mut s = resume_and_five_skills();
        s.academic = full_academic(); // +25 → 70
        let report = compute_strength(&s);
        assert_eq!(report.score, 70);
        assert_eq!(report.tier, Tier::Good);
    }

    #[test]
    fn test_tier_boundary_69_fair() {
        let mut s = resume_and_five_skills();
        s.academic.university = Some("MIT".to_string()); // +8
        s.academic.program = Some("CS".to_string()); // +8
        s.academic.graduation_year = Some(2026); // +5
        s.social.github = Some("https://github.com/ada".to_string()); // +3 → 69
        let report = compute_strength(&s);
        assert_eq!(report.score, 69);
        assert_eq!(report.tier, Tier::Fair);
    }

    #[test]
    fn test_tier_boundary_85_excellent() {
        let s = ProfileSnapshot {
            personal: full_personal(), // 20
            academic: full_academic(), // 25
            skills: skills(3),         // 15
            has_resume: true,          // 20
            social: SocialLinks {
                linkedin: Some("https://linkedin.com/in/ada".to_string()), // 5
                github: None,
                portfolio: None,
            },
        };
        let report = compute_strength(&s);
        assert_eq!(report.score, 85);
        assert_eq!(report.tier, Tier::Excellent);
    }

    #[test]
    fn test_tier_boundary_84_good() {
        let mut s = resume_and_five_skills(); // 45
        s.academic.university = Some("MIT".to_string()); // +8
        s.academic.program = Some("CS".to_string()); // +8
        s.academic.graduation_year = Some(2026); // +5
        s.personal.first_name = Some("Ada".to_string());
        s.personal.last_name = Some("Lovelace".to_string()); // +5
        s.personal.email = Some("ada@example.com".to_string()); // +5
        s.personal.phone = Some("123".to_string()); // +5
        s.social.github = Some("https://github.com/ada".to_string()); // +3 → 84
        let report = compute_strength(&s);
        assert_eq!(report.score, 84);
        assert_eq!(report.tier, Tier::Good);
    }

    #[test]
    fn test_tier_from_score_edges() {
        assert_eq!(Tier::from_score(0), Tier::Poor);
        assert_eq!(Tier::from_score(50), Tier::Fair);
        assert_eq!(Tier::from_score(70), Tier::Good);
        assert_eq!(Tier::from_score(85), Tier::Excellent);
        assert_eq!(Tier::from_score(100), Tier::Excellent);
    }
}
