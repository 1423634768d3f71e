//! Keyword density against a fixed vocabulary of generic resume terms.
//!
//! Matching is plain substring containment over the lowercased free text, so
//! "management" is also found inside "mismanagement".

use serde::{Deserialize, Serialize};

use crate::ats::normalize::CanonicalResume;

pub const VOCABULARY: [&str; 24] = [
    "management",
    "leadership",
    "team",
    "project",
    "development",
    "analysis",
    "strategy",
    "optimization",
    "collaboration",
    "communication",
    "problem-solving",
    "innovation",
    "results",
    "achievement",
    "growth",
    "improvement",
    "software",
    "technology",
    "digital",
    "data",
    "process",
    "customer",
    "business",
    "solution",
];

const MISSING_KEYWORD_LIMIT: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KeywordReport {
    /// Share of the vocabulary present in the text, 0–100.
    pub keyword_density: u32,
    pub found_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
}

/// Joins every free-text field the analyzer inspects into one lowercase string.
pub fn collect_text(resume: &CanonicalResume) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(
        1 + resume.experience.len() + resume.skills.len() + resume.projects.len(),
    );
    parts.push(resume.summary.clone());
    for exp in &resume.experience {
        parts.push(format!("{} {}", exp.description, exp.achievements.join(" ")));
    }
    parts.extend(resume.skills.iter().map(|s| s.name.clone()));
    parts.extend(resume.projects.iter().map(|p| p.description.clone()));
    parts.join(" ").to_lowercase()
}

pub fn analyze_keywords(resume: &CanonicalResume) -> KeywordReport {
    let text = collect_text(resume);
    let (found, missing): (Vec<&str>, Vec<&str>) =
        VOCABULARY.iter().partition(|kw| text.contains(**kw));

    let keyword_density = ((found.len() as f64 / VOCABULARY.len() as f64) * 100.0)
        .round()
        .clamp(0.0, 100.0) as u32;

    KeywordReport {
        keyword_density,
        found_keywords: found.into_iter().map(str::to_string).collect(),
        missing_keywords: missing
            .into_iter()
            .take(MISSING_KEYWORD_LIMIT)
            .map(str::to_string)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::normalize::{CanonicalExperience, CanonicalProject, CanonicalSkill};

    fn with_summary(summary: &str) -> CanonicalResume {
        CanonicalResume {
            summary: summary.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_resume_has_zero_density() {
        let report = analyze_keywords(&CanonicalResume::default());
        assert_eq!(report.keyword_density, 0);
        assert!(report.found_keywords.is_empty());
        assert_eq!(report.missing_keywords.len(), 5);
        assert_eq!(report.missing_keywords[0], "management");
    }

    #[test]
    fn test_single_term_density() {
        let expected = (100.0_f64 / VOCABULARY.len() as f64).round() as u32;
        for term in VOCABULARY {
            let report = analyze_keywords(&with_summary(term));
            assert_eq!(report.keyword_density, expected, "term {term}");
            assert_eq!(report.found_keywords, vec![term.to_string()]);
        }
    }

    #[test]
    fn test_all_terms_give_full_density() {
        let report = analyze_keywords(&with_summary(&VOCABULARY.join(" ")));
        assert_eq!(report.keyword_density, 100);
        assert!(report.missing_keywords.is_empty());
    }

    #[test]
    fn test_substring_and_case_insensitive_match() {
        let report = analyze_keywords(&with_summary("Recovered from MISMANAGEMENT quickly"));
        assert_eq!(report.found_keywords, vec!["management".to_string()]);
    }

    #[test]
    fn test_reads_experience_skills_and_projects() {
        let resume = CanonicalResume {
            experience: vec![CanonicalExperience {
                description: "Owned the data platform".to_string(),
                achievements: vec!["Drove revenue growth".to_string()],
                ..Default::default()
            }],
            skills: vec![CanonicalSkill {
                name: "Leadership".to_string(),
                level: None,
                category: None,
            }],
            projects: vec![CanonicalProject {
                description: "Open source software".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let report = analyze_keywords(&resume);
        assert_eq!(
            report.found_keywords,
            vec!["leadership", "growth", "software", "data"]
        );
    }

    #[test]
    fn test_ignores_fields_outside_free_text() {
        let resume = CanonicalResume {
            full_name: "Team Leadership".to_string(),
            projects: vec![CanonicalProject {
                name: "data pipeline".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert_eq!(analyze_keywords(&resume).keyword_density, 0);
    }
}
