#![allow(dead_code)]

//! Editing-session state container.
//!
//! `reduce` is the only place state changes; `ResumeStore` owns the live state
//! and hands the scoring engine a snapshot, never a reference into the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ats::{analyze, AtsAnalysis, CanonicalResume, ScoringOptions};
use crate::models::resume::{
    Award, Certification, Education, Language, PersonalInfo, Project, ResumeData, Skill,
    WorkExperience,
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemplateType {
    #[default]
    Modern,
    Professional,
    Creative,
    Minimalist,
    Academic,
    Compact,
    Elegant,
    Classic,
    Chronological,
    Functional,
    Combination,
    Infographic,
    Tech,
    Executive,
    Student,
}

/// Form section currently open in the builder.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BuilderSection {
    #[default]
    Personal,
    Summary,
    Experience,
    Education,
    Skills,
    Certifications,
    Projects,
    Languages,
    Awards,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeTheme {
    pub primary_color: String,
    pub secondary_color: String,
    pub text_color: String,
    pub background_color: String,
    pub accent_color: String,
    pub font_family: String,
    pub font_size: String,
    pub spacing: String,
}

impl Default for ResumeTheme {
    fn default() -> Self {
        Self {
            primary_color: "#2563eb".to_string(),
            secondary_color: "#1e40af".to_string(),
            text_color: "#1f2937".to_string(),
            background_color: "#ffffff".to_string(),
            accent_color: "#3b82f6".to_string(),
            font_family: "Inter".to_string(),
            font_size: "14px".to_string(),
            spacing: "1rem".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfoPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

impl PersonalInfoPatch {
    fn apply(self, info: &mut PersonalInfo) {
        if let Some(v) = self.first_name {
            info.first_name = v;
        }
        if let Some(v) = self.last_name {
            info.last_name = v;
        }
        if let Some(v) = self.email {
            info.email = v;
        }
        if let Some(v) = self.phone {
            info.phone = v;
        }
        if let Some(v) = self.location {
            info.location = v;
        }
        if self.website.is_some() {
            info.website = self.website;
        }
        if self.linkedin.is_some() {
            info.linkedin = self.linkedin;
        }
        if self.github.is_some() {
            info.github = self.github;
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemePatch {
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub text_color: Option<String>,
    pub background_color: Option<String>,
    pub accent_color: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<String>,
    pub spacing: Option<String>,
}

impl ThemePatch {
    fn apply(self, theme: &mut ResumeTheme) {
        let fields = [
            (self.primary_color, &mut theme.primary_color),
            (self.secondary_color, &mut theme.secondary_color),
            (self.text_color, &mut theme.text_color),
            (self.background_color, &mut theme.background_color),
            (self.accent_color, &mut theme.accent_color),
            (self.font_family, &mut theme.font_family),
            (self.font_size, &mut theme.font_size),
            (self.spacing, &mut theme.spacing),
        ];
        for (patch, slot) in fields {
            if let Some(v) = patch {
                *slot = v;
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResumeState {
    pub data: ResumeData,
    pub theme: ResumeTheme,
    pub selected_template: TemplateType,
    pub ats_analysis: Option<AtsAnalysis>,
    pub current_section: BuilderSection,
    pub completion_percentage: u32,
    pub updated_at: DateTime<Utc>,
}

impl Default for ResumeState {
    fn default() -> Self {
        Self {
            data: ResumeData::default(),
            theme: ResumeTheme::default(),
            selected_template: TemplateType::default(),
            ats_analysis: None,
            current_section: BuilderSection::default(),
            completion_percentage: 0,
            updated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResumeAction {
    UpdatePersonalInfo(PersonalInfoPatch),
    UpdateSummary(String),
    UpdateWorkExperience(Vec<WorkExperience>),
    UpdateEducation(Vec<Education>),
    UpdateSkills(Vec<Skill>),
    UpdateCertifications(Vec<Certification>),
    UpdateProjects(Vec<Project>),
    UpdateLanguages(Vec<Language>),
    UpdateAwards(Vec<Award>),
    UpdateTheme(ThemePatch),
    SetTemplate(TemplateType),
    SetCurrentSection(BuilderSection),
    UpdateAtsAnalysis(AtsAnalysis),
    LoadData(Box<ResumeState>),
}

impl ResumeAction {
    /// True for actions that change resume content (and so stale the analysis).
    pub fn edits_content(&self) -> bool {
        matches!(
            self,
            ResumeAction::UpdatePersonalInfo(_)
                | ResumeAction::UpdateSummary(_)
                | ResumeAction::UpdateWorkExperience(_)
                | ResumeAction::UpdateEducation(_)
                | ResumeAction::UpdateSkills(_)
                | ResumeAction::UpdateCertifications(_)
                | ResumeAction::UpdateProjects(_)
                | ResumeAction::UpdateLanguages(_)
                | ResumeAction::UpdateAwards(_)
        )
    }
}

/// Pure reducer: each action replaces exactly one slice of the state.
pub fn reduce(mut state: ResumeState, action: ResumeAction) -> ResumeState {
    match action {
        ResumeAction::UpdatePersonalInfo(patch) => patch.apply(&mut state.data.personal_info),
        ResumeAction::UpdateSummary(summary) => state.data.summary = summary,
        ResumeAction::UpdateWorkExperience(entries) => state.data.work_experience = entries,
        ResumeAction::UpdateEducation(entries) => state.data.education = entries,
        ResumeAction::UpdateSkills(entries) => state.data.skills = entries,
        ResumeAction::UpdateCertifications(entries) => state.data.certifications = entries,
        ResumeAction::UpdateProjects(entries) => state.data.projects = entries,
        ResumeAction::UpdateLanguages(entries) => state.data.languages = entries,
        ResumeAction::UpdateAwards(entries) => state.data.awards = entries,
        ResumeAction::UpdateTheme(patch) => patch.apply(&mut state.theme),
        ResumeAction::SetTemplate(template) => state.selected_template = template,
        ResumeAction::SetCurrentSection(section) => state.current_section = section,
        ResumeAction::UpdateAtsAnalysis(analysis) => {
            state.completion_percentage = analysis.section_completeness;
            state.ats_analysis = Some(analysis);
        }
        ResumeAction::LoadData(loaded) => return *loaded,
    }
    state
}

fn ensure_id(id: &mut String) -> String {
    if id.trim().is_empty() {
        *id = Uuid::new_v4().to_string();
    }
    id.clone()
}

/// Owns the live session state; the single writer.
#[derive(Debug, Clone, Default)]
pub struct ResumeStore {
    state: ResumeState,
}

impl ResumeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ResumeState {
        &self.state
    }

    pub fn dispatch(&mut self, action: ResumeAction) {
        let edits_content = action.edits_content();
        let current = std::mem::take(&mut self.state);
        self.state = reduce(current, action);
        if edits_content {
            self.state.updated_at = Utc::now();
        }
    }

    /// Appends an experience entry, minting an id when the caller left it blank.
    pub fn add_work_experience(&mut self, mut entry: WorkExperience) -> String {
        let id = ensure_id(&mut entry.id);
        let mut entries = self.state.data.work_experience.clone();
        entries.push(entry);
        self.dispatch(ResumeAction::UpdateWorkExperience(entries));
        id
    }

    pub fn add_education(&mut self, mut entry: Education) -> String {
        let id = ensure_id(&mut entry.id);
        let mut entries = self.state.data.education.clone();
        entries.push(entry);
        self.dispatch(ResumeAction::UpdateEducation(entries));
        id
    }

    pub fn add_skill(&mut self, mut skill: Skill) -> String {
        let id = ensure_id(&mut skill.id);
        let mut entries = self.state.data.skills.clone();
        entries.push(skill);
        self.dispatch(ResumeAction::UpdateSkills(entries));
        id
    }

    pub fn add_project(&mut self, mut project: Project) -> String {
        let id = ensure_id(&mut project.id);
        let mut entries = self.state.data.projects.clone();
        entries.push(project);
        self.dispatch(ResumeAction::UpdateProjects(entries));
        id
    }

    /// Removes any record with `id` from the experience list.
    pub fn remove_work_experience(&mut self, id: &str) {
        let entries = self
            .state
            .data
            .work_experience
            .iter()
            .filter(|e| e.id != id)
            .cloned()
            .collect();
        self.dispatch(ResumeAction::UpdateWorkExperience(entries));
    }

    /// Scores a snapshot of the current content and records the result.
    pub fn refresh_analysis(&mut self, options: &ScoringOptions) -> AtsAnalysis {
        let snapshot = CanonicalResume::from(&self.state.data);
        let analysis = analyze(&snapshot, options);
        self.dispatch(ResumeAction::UpdateAtsAnalysis(analysis.clone()));
        analysis
    }
}
