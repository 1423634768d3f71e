use serde::{Deserialize, Serialize};

use crate::ats::keywords::KeywordReport;
use crate::ats::normalize::{is_present, CanonicalResume};
use crate::ats::sections::{distinct_skill_count, Section, SectionScore, SectionStatus};

pub const KEYWORD_SUGGESTION: &str = "Include more industry-relevant keywords in your descriptions";
pub const METRICS_SUGGESTION: &str = "Consider adding quantified achievements with specific metrics";

pub const DEFAULT_MAX_SUGGESTIONS: usize = 6;
pub const MIN_MAX_SUGGESTIONS: usize = 5;

/// Weights of the six sections that feed the overall score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BlendWeights {
    pub personal_info: f64,
    pub experience: f64,
    pub education: f64,
    pub skills: f64,
    pub projects: f64,
    pub certifications: f64,
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            personal_info: 0.20,
            experience: 0.30,
            education: 0.15,
            skills: 0.15,
            projects: 0.10,
            certifications: 0.10,
        }
    }
}

impl BlendWeights {
    pub fn sum(&self) -> f64 {
        self.personal_info
            + self.experience
            + self.education
            + self.skills
            + self.projects
            + self.certifications
    }

    /// Summary counts through the personal-info input (see [`header_percent`]);
    /// languages and awards are reported but carry no weight.
    pub fn weight_of(&self, section: Section) -> f64 {
        match section {
            Section::PersonalInfo => self.personal_info,
            Section::Experience => self.experience,
            Section::Education => self.education,
            Section::Skills => self.skills,
            Section::Projects => self.projects,
            Section::Certifications => self.certifications,
            Section::Summary | Section::Languages | Section::Awards => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoringOptions {
    pub max_suggestions: usize,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

/// Display rating of the headline score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Strong,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 80 => ScoreBand::Strong,
            s if s >= 60 => ScoreBand::Fair,
            _ => ScoreBand::Poor,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SectionReport {
    pub section: Section,
    pub score: u32,
    pub earned: u32,
    pub max: u32,
    pub status: SectionStatus,
}

impl From<&SectionScore> for SectionReport {
    fn from(score: &SectionScore) -> Self {
        let percent = score.percent();
        Self {
            section: score.section,
            score: percent,
            earned: score.earned,
            max: score.max(),
            status: SectionStatus::from_percent(percent),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AtsAnalysis {
    /// Overall score, 0–100.
    pub score: u32,
    pub sections: Vec<SectionReport>,
    pub section_completeness: u32,
    pub keyword_density: u32,
    pub format_compatibility: u32,
    pub band: ScoreBand,
    pub suggestions: Vec<String>,
    pub keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
}

impl AtsAnalysis {
    pub fn section(&self, section: Section) -> Option<&SectionReport> {
        self.sections.iter().find(|r| r.section == section)
    }
}

/// Personal info and summary pooled into one 0–100 input.
pub fn header_percent(sections: &[SectionScore]) -> u32 {
    let (earned, max) = sections
        .iter()
        .filter(|s| matches!(s.section, Section::PersonalInfo | Section::Summary))
        .fold((0, 0), |(earned, max), s| (earned + s.earned, max + s.max()));
    if max == 0 {
        return 0;
    }
    ((earned as f64 / max as f64) * 100.0).round() as u32
}

/// Weighted blend of the section percents, 0–100.
pub fn blend_overall(sections: &[SectionScore], weights: &BlendWeights) -> u32 {
    let total: f64 = sections
        .iter()
        .map(|s| {
            let percent = match s.section {
                Section::PersonalInfo => header_percent(sections),
                _ => s.percent(),
            };
            weights.weight_of(s.section) * percent as f64
        })
        .sum();
    total.round().clamp(0.0, 100.0) as u32
}

/// `round(100 * earned / max)` over every section.
pub fn section_completeness(sections: &[SectionScore]) -> u32 {
    let earned: u32 = sections.iter().map(|s| s.earned).sum();
    let max: u32 = sections.iter().map(|s| s.max()).sum();
    if max == 0 {
        return 0;
    }
    ((earned as f64 / max as f64) * 100.0).round().clamp(0.0, 100.0) as u32
}

/// Structural parseability heuristic: deducts for a missing summary, no
/// experience, and a thin skills list.
pub fn format_compatibility(resume: &CanonicalResume) -> u32 {
    let mut score: i32 = 100;
    if !is_present(&resume.summary) {
        score -= 10;
    }
    if resume.experience.is_empty() {
        score -= 20;
    }
    if distinct_skill_count(&resume.skills) < 5 {
        score -= 15;
    }
    score.max(0) as u32
}

/// Section suggestions in evaluation order, then the keyword and metrics
/// hints; exact duplicates dropped, truncated to `max`.
pub fn assemble_suggestions(
    sections: &[SectionScore],
    keyword_density: u32,
    overall: u32,
    max: usize,
) -> Vec<String> {
    let candidates = sections
        .iter()
        .filter_map(|s| s.suggestion)
        .chain((keyword_density < 40).then_some(KEYWORD_SUGGESTION))
        .chain((overall < 70).then_some(METRICS_SUGGESTION));

    let mut suggestions: Vec<String> = Vec::new();
    for text in candidates {
        if suggestions.len() >= max {
            break;
        }
        if !suggestions.iter().any(|s| s == text) {
            suggestions.push(text.to_string());
        }
    }
    suggestions
}

pub fn aggregate(
    resume: &CanonicalResume,
    sections: &[SectionScore],
    keywords: KeywordReport,
    options: &ScoringOptions,
) -> AtsAnalysis {
    let score = blend_overall(sections, &BlendWeights::default());
    let suggestions = assemble_suggestions(
        sections,
        keywords.keyword_density,
        score,
        options.max_suggestions,
    );

    AtsAnalysis {
        score,
        sections: sections.iter().map(SectionReport::from).collect(),
        section_completeness: section_completeness(sections),
        keyword_density: keywords.keyword_density,
        format_compatibility: format_compatibility(resume),
        band: ScoreBand::from_score(score),
        suggestions,
        keywords: keywords.found_keywords,
        missing_keywords: keywords.missing_keywords,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::sections::{
        EDUCATION_SUGGESTION, PERSONAL_INFO_SUGGESTION, SKILLS_SUGGESTION, SUMMARY_SUGGESTION,
    };

    fn section(section: Section, earned: u32, suggestion: Option<&'static str>) -> SectionScore {
        SectionScore {
            section,
            earned,
            suggestion,
        }
    }

    fn full_marks() -> Vec<SectionScore> {
        Section::ALL
            .iter()
            .map(|s| section(*s, s.max_points(), None))
            .collect()
    }

    #[test]
    fn test_weights_sum_to_one() {
        assert!((BlendWeights::default().sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_blend_full_marks_is_100() {
        assert_eq!(blend_overall(&full_marks(), &BlendWeights::default()), 100);
        assert_eq!(section_completeness(&full_marks()), 100);
    }

    #[test]
    fn test_blend_ignores_unweighted_sections() {
        let mut sections = full_marks();
        for s in sections.iter_mut() {
            if matches!(s.section, Section::Languages | Section::Awards) {
                s.earned = 0;
            }
        }
        assert_eq!(blend_overall(&sections, &BlendWeights::default()), 100);
        assert!(section_completeness(&sections) < 100);
    }

    #[test]
    fn test_summary_counts_through_personal_info() {
        let mut sections = full_marks();
        for s in sections.iter_mut() {
            if s.section == Section::Summary {
                s.earned = 0;
            }
        }
        assert_eq!(header_percent(&sections), 50);
        // 0.2*50 + 0.8*100
        assert_eq!(blend_overall(&sections, &BlendWeights::default()), 90);
    }

    #[test]
    fn test_blend_partial() {
        // 0.2*50 + 0.3*0 + 0.15*100 + 0.15*0 + 0.1*70 + 0.1*80 = 40
        let sections = vec![
            section(Section::PersonalInfo, 10, None),
            section(Section::Experience, 0, None),
            section(Section::Education, 20, None),
            section(Section::Skills, 0, None),
            section(Section::Projects, 7, None),
            section(Section::Certifications, 8, None),
        ];
        assert_eq!(blend_overall(&sections, &BlendWeights::default()), 40);
    }

    #[test]
    fn test_suggestions_dedupe_and_order() {
        let sections = vec![
            section(Section::PersonalInfo, 0, Some(PERSONAL_INFO_SUGGESTION)),
            section(Section::Summary, 0, Some(SUMMARY_SUGGESTION)),
            section(Section::Skills, 0, Some(PERSONAL_INFO_SUGGESTION)),
        ];
        let suggestions = assemble_suggestions(&sections, 10, 20, 6);
        assert_eq!(
            suggestions,
            vec![
                PERSONAL_INFO_SUGGESTION,
                SUMMARY_SUGGESTION,
                KEYWORD_SUGGESTION,
                METRICS_SUGGESTION
            ]
        );
    }

    #[test]
    fn test_suggestions_truncated_to_cap() {
        let sections = vec![
            section(Section::PersonalInfo, 0, Some(PERSONAL_INFO_SUGGESTION)),
            section(Section::Summary, 0, Some(SUMMARY_SUGGESTION)),
            section(Section::Education, 0, Some(EDUCATION_SUGGESTION)),
            section(Section::Skills, 0, Some(SKILLS_SUGGESTION)),
        ];
        let suggestions = assemble_suggestions(&sections, 0, 0, 3);
        assert_eq!(suggestions.len(), 3);
        assert_eq!(suggestions[2], EDUCATION_SUGGESTION);
    }

    #[test]
    fn test_no_generic_hints_when_strong() {
        assert!(assemble_suggestions(&full_marks(), 40, 70, 6).is_empty());
    }

    #[test]
    fn test_format_compatibility_deductions() {
        assert_eq!(format_compatibility(&CanonicalResume::default()), 55);
        let resume = CanonicalResume {
            summary: "Engineer".to_string(),
            ..Default::default()
        };
        assert_eq!(format_compatibility(&resume), 65);
    }

    #[test]
    fn test_score_band_thresholds() {
        assert_eq!(ScoreBand::from_score(80), ScoreBand::Strong);
        assert_eq!(ScoreBand::from_score(79), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(60), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(59), ScoreBand::Poor);
    }
}
