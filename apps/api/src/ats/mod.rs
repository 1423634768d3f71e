//! Heuristic ATS scoring engine.
//!
//! Pipeline: normalize → score each section → analyze keywords → aggregate.
//! Every step is pure and synchronous; the same input always yields the same
//! [`AtsAnalysis`].

pub mod aggregate;
pub mod handlers;
pub mod keywords;
pub mod normalize;
pub mod scorer;
pub mod sections;

use tracing::debug;

pub use aggregate::{AtsAnalysis, ScoringOptions};
pub use normalize::{CanonicalResume, ResumeInput};

/// Scores one resume snapshot.
pub fn analyze(resume: &CanonicalResume, options: &ScoringOptions) -> AtsAnalysis {
    let sections = sections::score_sections(resume);
    for s in &sections {
        debug!(section = ?s.section, earned = s.earned, max = s.max(), "section scored");
    }
    let keywords = keywords::analyze_keywords(resume);
    aggregate::aggregate(resume, &sections, keywords, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::sections::{Section, PERSONAL_INFO_SUGGESTION};
    use serde_json::json;

    fn analyze_json(value: serde_json::Value) -> AtsAnalysis {
        let input = ResumeInput::from_value(value).unwrap();
        analyze(&input.normalize(), &ScoringOptions::default())
    }

    fn complete_resume() -> serde_json::Value {
        let summary = "Backend engineer with 9 years of experience building payment \
            platforms and internal tooling. Comfortable owning services end to end, from \
            design reviews through on-call, and happiest when pairing with product folks \
            to turn vague requirements into shipped, observable systems.";
        assert!(summary.len() >= 250);
        let skills: Vec<_> = [
            ("Rust", "Expert", "Technical"),
            ("PostgreSQL", "Advanced", "Technical"),
            ("Kubernetes", "Intermediate", "Technical"),
            ("gRPC", "Intermediate", "Technical"),
            ("Terraform", "Beginner", "Technical"),
            ("Mentoring", "Advanced", "Soft"),
            ("Public speaking", "Intermediate", "Soft"),
            ("Writing", "Advanced", "Soft"),
            ("German", "Intermediate", "Language"),
            ("Spanish", "Beginner", "Language"),
        ]
        .iter()
        .enumerate()
        .map(|(i, (name, level, category))| {
            json!({ "id": format!("s{i}"), "name": name, "level": level, "category": category })
        })
        .collect();

        json!({
            "personalInfo": {
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@example.com",
                "phone": "+44 20 7946 0000",
                "location": "London, UK",
                "website": "https://ada.dev",
                "linkedin": "https://linkedin.com/in/ada",
                "github": "https://github.com/ada"
            },
            "summary": summary,
            "workExperience": [
                {
                    "id": "w1",
                    "company": "Acme Payments",
                    "position": "Staff Engineer",
                    "startDate": "2019-03",
                    "endDate": "",
                    "current": true,
                    "description": "Own the ledger service that settles every card transaction for the EU region.",
                    "achievements": ["Cut settlement latency from 4h to 15m", ""]
                },
                {
                    "id": "w2",
                    "company": "Globex",
                    "position": "Software Engineer",
                    "startDate": "2015-06",
                    "endDate": "2019-02",
                    "current": false,
                    "description": "Built the internal deploy tooling used by forty product teams every day.",
                    "achievements": ["Reduced failed deploys by 60%"]
                }
            ],
            "education": [
                {
                    "id": "e1",
                    "institution": "University of London",
                    "degree": "BSc",
                    "field": "Mathematics",
                    "startDate": "2011-09",
                    "endDate": "2014-06"
                }
            ],
            "skills": skills
        })
    }

    #[test]
    fn test_empty_resume_scores_low_with_suggestions() {
        let analysis = analyze_json(json!({}));
        assert!(analysis.score <= 30, "score was {}", analysis.score);
        assert_eq!(analysis.score, 24);
        assert_eq!(analysis.keyword_density, 0);
        assert!(!analysis.suggestions.is_empty());
        assert_eq!(analysis.suggestions[0], PERSONAL_INFO_SUGGESTION);
        assert!(analysis.suggestions.len() <= 6);
    }

    #[test]
    fn test_complete_resume_scores_high() {
        let analysis = analyze_json(complete_resume());
        assert!(analysis.score >= 80, "score was {}", analysis.score);
        assert_eq!(analysis.section(Section::PersonalInfo).unwrap().score, 100);
        assert_eq!(analysis.section(Section::Skills).unwrap().score, 100);
        assert_eq!(analysis.section(Section::Summary).unwrap().score, 100);
        assert_eq!(analysis.format_compatibility, 100);
        assert!(!analysis
            .suggestions
            .iter()
            .any(|s| s == PERSONAL_INFO_SUGGESTION));
    }

    #[test]
    fn test_keyword_dense_summary_is_independent_of_completeness() {
        let summary = keywords::VOCABULARY.join(", ");
        let analysis = analyze_json(json!({ "summary": summary }));
        assert_eq!(analysis.keyword_density, 100);
        assert!(
            analysis.section_completeness < 50,
            "completeness was {}",
            analysis.section_completeness
        );
        assert!(analysis.score < 50);
        assert!(analysis.missing_keywords.is_empty());
    }

    #[test]
    fn test_summary_raises_overall_score() {
        let personal = json!({ "firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com" });
        let without = analyze_json(json!({ "personalInfo": personal.clone() }));
        let summary = format!("{} with 10 years of experience", "a".repeat(220));
        let with = analyze_json(json!({ "personalInfo": personal, "summary": summary }));
        assert_eq!(without.section(Section::Summary).unwrap().score, 0);
        assert_eq!(with.section(Section::Summary).unwrap().score, 100);
        assert_eq!(without.score, 29);
        assert_eq!(with.score, 39);
    }

    #[test]
    fn test_deterministic() {
        let first = analyze_json(complete_resume());
        let second = analyze_json(complete_resume());
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_bounds_hold_for_sparse_inputs() {
        let inputs = vec![
            json!({}),
            complete_resume(),
            json!({ "skills": (0..50).map(|i| json!({ "name": format!("s{i}") })).collect::<Vec<_>>() }),
            json!({ "experience": [{ "description": ["", " "] }] }),
            json!({ "workExperience": [{}, {}, {}], "education": [{}], "projects": [{}] }),
        ];
        for input in inputs {
            let analysis = analyze_json(input);
            assert!(analysis.score <= 100);
            assert!(analysis.section_completeness <= 100);
            assert!(analysis.keyword_density <= 100);
            assert!(analysis.format_compatibility <= 100);
            assert!(analysis.sections.iter().all(|s| s.score <= 100));
            assert!(analysis.suggestions.len() <= 6);
        }
    }

    #[test]
    fn test_layouts_score_identically() {
        let flat = json!({
            "personalInfo": { "firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com", "linkedin": "https://linkedin.com/in/ada" },
            "summary": "Engineer with years of data experience",
            "workExperience": [{ "company": "Acme", "position": "Engineer", "description": "Led the team", "achievements": ["Shipped v2"] }],
            "skills": [{ "name": "Rust" }, { "name": "Go" }]
        });
        let nested = json!({
            "personalInfo": { "fullName": "Ada Lovelace", "email": "ada@example.com", "linkedIn": "https://linkedin.com/in/ada", "summary": "Engineer with years of data experience" },
            "experience": [{ "company": "Acme", "position": "Engineer", "description": ["Led the team", "Shipped v2"] }],
            "skills": ["Rust", "Go"]
        });
        let a = analyze_json(flat);
        let b = analyze_json(nested);
        assert_eq!(a.score, b.score);
        assert_eq!(a.sections, b.sections);
        assert_eq!(a.keywords, b.keywords);
    }

    #[test]
    fn test_suggestion_cap_is_configurable() {
        let input = ResumeInput::from_value(json!({})).unwrap();
        let analysis = analyze(&input.normalize(), &ScoringOptions { max_suggestions: 5 });
        assert_eq!(analysis.suggestions.len(), 5);
    }
}
