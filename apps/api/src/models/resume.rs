//! Flat resume layout edited by the builder UI (`summary` at the top level,
//! `workExperience` with a free-text description plus achievements).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub fn is_senior(self) -> bool {
        match self {
            SkillLevel::Advanced | SkillLevel::Expert => true,
            SkillLevel::Beginner | SkillLevel::Intermediate => false,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SkillCategory {
    Technical,
    Soft,
    Language,
}

impl SkillCategory {
    pub fn is_technical(self) -> bool {
        match self {
            SkillCategory::Technical => true,
            SkillCategory::Soft | SkillCategory::Language => false,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LanguageProficiency {
    Native,
    Fluent,
    Conversational,
    Basic,
}

impl LanguageProficiency {
    /// Native and fluent speakers get the richer-entry bonus.
    pub fn is_working_fluency(self) -> bool {
        match self {
            LanguageProficiency::Native | LanguageProficiency::Fluent => true,
            LanguageProficiency::Conversational | LanguageProficiency::Basic => false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkExperience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub location: String,
    /// `YYYY-MM` or empty.
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: Option<String>,
    pub honors: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub level: Option<SkillLevel>,
    pub category: Option<SkillCategory>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub expiry_date: Option<String>,
    pub credential_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub start_date: String,
    pub end_date: String,
    pub url: Option<String>,
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Language {
    pub id: String,
    pub name: String,
    pub proficiency: Option<LanguageProficiency>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Award {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub work_experience: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub certifications: Vec<Certification>,
    pub projects: Vec<Project>,
    pub languages: Vec<Language>,
    pub awards: Vec<Award>,
}
