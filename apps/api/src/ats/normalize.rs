//! Boundary normalization: both resume layouts are mapped once into
//! [`CanonicalResume`], so the section scorers never branch on shape.

use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::models::content::ResumeContent;
use crate::models::resume::{LanguageProficiency, ResumeData, SkillCategory, SkillLevel};

/// A resume in either of the two layouts the builder produces.
#[derive(Debug, Clone, PartialEq)]
pub enum ResumeInput {
    Flat(ResumeData),
    Nested(ResumeContent),
}

impl ResumeInput {
    /// Detects the layout of a raw JSON payload and deserializes it.
    ///
    /// `null` anywhere is treated as absent. Anything that is not an object,
    /// or a field of the wrong JSON type, is an [`AppError::InvalidInput`].
    pub fn from_value(value: Value) -> Result<Self, AppError> {
        let value = strip_nulls(value);
        let obj = value.as_object().ok_or_else(|| {
            AppError::InvalidInput("resume payload must be a JSON object".to_string())
        })?;

        if is_nested_layout(obj) {
            serde_json::from_value(value)
                .map(ResumeInput::Nested)
                .map_err(|e| AppError::InvalidInput(e.to_string()))
        } else {
            serde_json::from_value(value)
                .map(ResumeInput::Flat)
                .map_err(|e| AppError::InvalidInput(e.to_string()))
        }
    }

    pub fn normalize(&self) -> CanonicalResume {
        match self {
            ResumeInput::Flat(data) => CanonicalResume::from(data),
            ResumeInput::Nested(content) => CanonicalResume::from(content),
        }
    }
}

fn is_nested_layout(obj: &Map<String, Value>) -> bool {
    if obj.contains_key("workExperience") {
        return false;
    }
    // Skill entries are the most telling field: objects in the flat layout,
    // bare strings in the nested one.
    if let Some(first) = obj
        .get("skills")
        .and_then(Value::as_array)
        .and_then(|skills| skills.first())
    {
        return first.is_string();
    }
    if obj.contains_key("experience") {
        return true;
    }
    obj.get("personalInfo")
        .and_then(Value::as_object)
        .map(|p| {
            p.contains_key("fullName")
                || p.contains_key("summary")
                || (!p.is_empty() && !p.contains_key("firstName") && !p.contains_key("lastName"))
        })
        .unwrap_or(false)
}

/// Drops `null` object members and `null` array elements recursively, so
/// `#[serde(default)]` fills them in.
fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, strip_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .filter(|v| !v.is_null())
                .map(strip_nulls)
                .collect(),
        ),
        other => other,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Canonical shape
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanonicalResume {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub links: Vec<String>,
    pub summary: String,
    pub experience: Vec<CanonicalExperience>,
    pub education: Vec<CanonicalEducation>,
    pub skills: Vec<CanonicalSkill>,
    pub certifications: Vec<CanonicalCertification>,
    pub projects: Vec<CanonicalProject>,
    pub languages: Vec<CanonicalLanguage>,
    pub awards: Vec<CanonicalAward>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanonicalExperience {
    pub position: String,
    pub company: String,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanonicalEducation {
    pub institution: String,
    pub degree: String,
    pub field: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalSkill {
    pub name: String,
    pub level: Option<SkillLevel>,
    pub category: Option<SkillCategory>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanonicalCertification {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanonicalProject {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalLanguage {
    pub name: String,
    pub proficiency: Option<LanguageProficiency>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanonicalAward {
    pub name: String,
    pub issuer: String,
    pub description: String,
}

/// True when the string has at least one non-whitespace character.
pub fn is_present(s: &str) -> bool {
    !s.trim().is_empty()
}

fn first_present<'a>(candidates: impl IntoIterator<Item = Option<&'a String>>) -> String {
    candidates
        .into_iter()
        .flatten()
        .find(|s| is_present(s))
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

fn present_links<'a>(candidates: impl IntoIterator<Item = Option<&'a String>>) -> Vec<String> {
    candidates
        .into_iter()
        .flatten()
        .filter(|s| is_present(s))
        .map(|s| s.trim().to_string())
        .collect()
}

impl From<&ResumeData> for CanonicalResume {
    fn from(data: &ResumeData) -> Self {
        let info = &data.personal_info;
        let full_name = if is_present(&info.first_name) && is_present(&info.last_name) {
            format!("{} {}", info.first_name.trim(), info.last_name.trim())
        } else {
            String::new()
        };

        CanonicalResume {
            full_name,
            email: info.email.trim().to_string(),
            phone: info.phone.trim().to_string(),
            location: info.location.trim().to_string(),
            links: present_links([
                info.website.as_ref(),
                info.linkedin.as_ref(),
                info.github.as_ref(),
            ]),
            summary: data.summary.clone(),
            experience: data
                .work_experience
                .iter()
                .map(|exp| CanonicalExperience {
                    position: exp.position.clone(),
                    company: exp.company.clone(),
                    description: exp.description.clone(),
                    achievements: exp.achievements.clone(),
                })
                .collect(),
            education: data
                .education
                .iter()
                .map(|edu| CanonicalEducation {
                    institution: edu.institution.clone(),
                    degree: edu.degree.clone(),
                    field: edu.field.clone(),
                })
                .collect(),
            skills: data
                .skills
                .iter()
                .map(|skill| CanonicalSkill {
                    name: skill.name.clone(),
                    level: skill.level,
                    category: skill.category,
                })
                .collect(),
            certifications: data
                .certifications
                .iter()
                .map(|cert| CanonicalCertification {
                    name: cert.name.clone(),
                    issuer: cert.issuer.clone(),
                    date: cert.date.clone(),
                })
                .collect(),
            projects: data
                .projects
                .iter()
                .map(|project| CanonicalProject {
                    name: project.name.clone(),
                    description: project.description.clone(),
                    technologies: project.technologies.clone(),
                    url: first_present([project.url.as_ref(), project.github.as_ref()]),
                })
                .collect(),
            languages: data
                .languages
                .iter()
                .map(|lang| CanonicalLanguage {
                    name: lang.name.clone(),
                    proficiency: lang.proficiency,
                })
                .collect(),
            awards: data
                .awards
                .iter()
                .map(|award| CanonicalAward {
                    name: award.name.clone(),
                    issuer: award.issuer.clone(),
                    description: award.description.clone(),
                })
                .collect(),
        }
    }
}

impl From<&ResumeContent> for CanonicalResume {
    fn from(content: &ResumeContent) -> Self {
        let info = &content.personal_info;

        CanonicalResume {
            full_name: info.full_name.trim().to_string(),
            email: info.email.trim().to_string(),
            phone: info.phone.trim().to_string(),
            location: info.location.trim().to_string(),
            links: present_links([info.linkedin.as_ref(), info.website.as_ref()]),
            summary: info.summary.clone(),
            experience: content
                .experience
                .iter()
                .map(|exp| CanonicalExperience {
                    position: exp.position.clone(),
                    company: exp.company.clone(),
                    description: exp
                        .description
                        .iter()
                        .map(|line| line.trim())
                        .filter(|line| !line.is_empty())
                        .collect::<Vec<_>>()
                        .join(" "),
                    achievements: exp.description.clone(),
                })
                .collect(),
            education: content
                .education
                .iter()
                .map(|edu| CanonicalEducation {
                    institution: edu.institution.clone(),
                    degree: edu.degree.clone(),
                    field: edu.field.clone(),
                })
                .collect(),
            skills: content
                .skills
                .iter()
                .map(|name| CanonicalSkill {
                    name: name.clone(),
                    level: None,
                    category: None,
                })
                .collect(),
            certifications: content
                .certifications
                .iter()
                .map(|cert| CanonicalCertification {
                    name: cert.name.clone(),
                    issuer: cert.issuer.clone(),
                    date: cert.date.clone(),
                })
                .collect(),
            projects: content
                .projects
                .iter()
                .map(|project| CanonicalProject {
                    name: project.name.clone(),
                    description: project.description.clone(),
                    technologies: project.technologies.clone(),
                    url: first_present([project.link.as_ref()]),
                })
                .collect(),
            languages: Vec::new(),
            awards: Vec::new(),
        }
    }
}
