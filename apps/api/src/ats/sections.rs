//! Per-section scorers. Each one reads only its slice of the canonical resume
//! and returns points earned out of a fixed maximum, plus an optional
//! suggestion.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::ats::normalize::{
    is_present, CanonicalAward, CanonicalCertification, CanonicalEducation, CanonicalExperience,
    CanonicalLanguage, CanonicalProject, CanonicalResume, CanonicalSkill,
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    PersonalInfo,
    Summary,
    Experience,
    Education,
    Skills,
    Certifications,
    Projects,
    Languages,
    Awards,
}

impl Section {
    /// Evaluation order; suggestions are emitted in this order too.
    pub const ALL: [Section; 9] = [
        Section::PersonalInfo,
        Section::Summary,
        Section::Experience,
        Section::Education,
        Section::Skills,
        Section::Certifications,
        Section::Projects,
        Section::Languages,
        Section::Awards,
    ];

    pub fn max_points(self) -> u32 {
        match self {
            Section::Experience => 30,
            Section::PersonalInfo | Section::Summary | Section::Education | Section::Skills => 20,
            Section::Certifications | Section::Projects | Section::Languages | Section::Awards => 10,
        }
    }
}

pub const PERSONAL_INFO_SUGGESTION: &str = "Complete all essential personal information fields";
pub const SUMMARY_SUGGESTION: &str =
    "Write a compelling professional summary with specific experience details";
pub const EXPERIENCE_SUGGESTION: &str =
    "Add more detailed work experience with specific achievements";
pub const EDUCATION_SUGGESTION: &str =
    "Include complete education information with degree, field, and institution";
pub const SKILLS_SUGGESTION: &str = "Add more relevant skills, especially technical competencies";
pub const PROJECTS_SUGGESTION: &str =
    "Consider adding relevant projects to showcase your abilities";

/// Points earned by one section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionScore {
    pub section: Section,
    pub earned: u32,
    pub suggestion: Option<&'static str>,
}

impl SectionScore {
    fn new(section: Section, earned: u32) -> Self {
        Self {
            section,
            earned: earned.min(section.max_points()),
            suggestion: None,
        }
    }

    /// Attaches `text` when fewer than `threshold` points were earned.
    fn suggest_below(mut self, threshold: u32, text: &'static str) -> Self {
        if self.earned < threshold {
            self.suggestion = Some(text);
        }
        self
    }

    pub fn max(&self) -> u32 {
        self.section.max_points()
    }

    /// Score normalized to 0–100.
    pub fn percent(&self) -> u32 {
        ((self.earned as f64 / self.max() as f64) * 100.0).round() as u32
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    Strong,
    Moderate,
    Weak,
    Missing,
}

impl SectionStatus {
    pub fn from_percent(percent: u32) -> Self {
        match percent {
            p if p >= 80 => SectionStatus::Strong,
            p if p >= 50 => SectionStatus::Moderate,
            p if p >= 20 => SectionStatus::Weak,
            _ => SectionStatus::Missing,
        }
    }
}

/// Runs every section scorer in evaluation order.
pub fn score_sections(resume: &CanonicalResume) -> Vec<SectionScore> {
    Section::ALL
        .iter()
        .map(|section| match section {
            Section::PersonalInfo => score_personal_info(resume),
            Section::Summary => score_summary(&resume.summary),
            Section::Experience => score_experience(&resume.experience),
            Section::Education => score_education(&resume.education),
            Section::Skills => score_skills(&resume.skills),
            Section::Certifications => score_certifications(&resume.certifications),
            Section::Projects => score_projects(&resume.projects),
            Section::Languages => score_languages(&resume.languages),
            Section::Awards => score_awards(&resume.awards),
        })
        .collect()
}

pub fn score_personal_info(resume: &CanonicalResume) -> SectionScore {
    let mut points = 0;
    if is_present(&resume.full_name) {
        points += 6;
    }
    if is_present(&resume.email) {
        points += 4;
    }
    if is_present(&resume.phone) {
        points += 4;
    }
    if is_present(&resume.location) {
        points += 4;
    }
    if resume.links.iter().any(|l| is_present(l)) {
        points += 2;
    }
    SectionScore::new(Section::PersonalInfo, points).suggest_below(16, PERSONAL_INFO_SUGGESTION)
}

pub fn score_summary(summary: &str) -> SectionScore {
    let mut points = 0;
    let trimmed = summary.trim();
    if !trimmed.is_empty() {
        let len = trimmed.chars().count();
        if len >= 100 {
            points += 10;
        }
        if len >= 200 {
            points += 6;
        }
        if trimmed.contains("years") || trimmed.contains("experience") {
            points += 4;
        }
    }
    SectionScore::new(Section::Summary, points).suggest_below(16, SUMMARY_SUGGESTION)
}

pub fn score_experience(entries: &[CanonicalExperience]) -> SectionScore {
    let mut points = 0;
    if !entries.is_empty() {
        points += 10;
        for exp in entries {
            if is_present(&exp.position) && is_present(&exp.company) {
                points += 2;
            }
            if exp.description.trim().chars().count() > 50 {
                points += 2;
            }
            if exp.achievements.iter().any(|a| is_present(a)) {
                points += 2;
            }
        }
    }
    SectionScore::new(Section::Experience, points).suggest_below(20, EXPERIENCE_SUGGESTION)
}

/// Education is not always required, so an empty section gets a neutral score.
pub fn score_education(entries: &[CanonicalEducation]) -> SectionScore {
    let points = if entries.is_empty() {
        12
    } else {
        let complete = entries
            .iter()
            .filter(|e| is_present(&e.degree) && is_present(&e.field) && is_present(&e.institution))
            .count() as u32;
        10 + 4 * complete
    };
    SectionScore::new(Section::Education, points).suggest_below(14, EDUCATION_SUGGESTION)
}

/// Number of non-blank skill names, compared case-insensitively.
pub fn distinct_skill_count(skills: &[CanonicalSkill]) -> usize {
    skills
        .iter()
        .filter(|s| is_present(&s.name))
        .map(|s| s.name.trim().to_lowercase())
        .collect::<HashSet<_>>()
        .len()
}

pub fn score_skills(skills: &[CanonicalSkill]) -> SectionScore {
    let distinct = distinct_skill_count(skills);

    let mut points = 0;
    if distinct > 0 {
        points += 6;
        if distinct >= 5 {
            points += 4;
        }
        if distinct >= 10 {
            points += 4;
        }
        let named = || skills.iter().filter(|s| is_present(&s.name));
        if named().any(|s| s.category.map(|c| c.is_technical()).unwrap_or(false)) {
            points += 4;
        }
        if named().any(|s| s.level.map(|l| l.is_senior()).unwrap_or(false)) {
            points += 2;
        }
    }
    SectionScore::new(Section::Skills, points).suggest_below(16, SKILLS_SUGGESTION)
}

/// Optional sections start from a neutral baseline when absent; each entry
/// adds one point plus one more when it is fully described.
fn score_optional<T>(
    section: Section,
    baseline: u32,
    entries: &[T],
    is_rich: impl Fn(&T) -> bool,
) -> SectionScore {
    let bonus: u32 = entries.iter().map(|e| 1 + u32::from(is_rich(e))).sum();
    SectionScore::new(section, baseline + bonus)
}

pub fn score_certifications(entries: &[CanonicalCertification]) -> SectionScore {
    score_optional(Section::Certifications, 8, entries, |c| {
        is_present(&c.issuer) && is_present(&c.date)
    })
}

pub fn score_projects(entries: &[CanonicalProject]) -> SectionScore {
    let score = score_optional(Section::Projects, 7, entries, |p| {
        is_present(&p.url) && p.technologies.iter().any(|t| is_present(t))
    });
    if entries.is_empty() {
        SectionScore {
            suggestion: Some(PROJECTS_SUGGESTION),
            ..score
        }
    } else {
        score
    }
}

pub fn score_languages(entries: &[CanonicalLanguage]) -> SectionScore {
    score_optional(Section::Languages, 6, entries, |l| {
        l.proficiency.map(|p| p.is_working_fluency()).unwrap_or(false)
    })
}

pub fn score_awards(entries: &[CanonicalAward]) -> SectionScore {
    score_optional(Section::Awards, 6, entries, |a| {
        is_present(&a.issuer) && is_present(&a.description)
    })
}
