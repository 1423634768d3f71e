//! Nested resume layout stored by the companion server: the summary lives
//! under `personalInfo`, experience descriptions are bullet lists and skills
//! are bare strings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentPersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(rename = "linkedIn")]
    pub linkedin: Option<String>,
    pub website: Option<String>,
    pub summary: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentExperience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentEducation {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentProject {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentCertification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub link: Option<String>,
    pub expiry_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeContent {
    pub personal_info: ContentPersonalInfo,
    pub experience: Vec<ContentExperience>,
    pub education: Vec<ContentEducation>,
    pub skills: Vec<String>,
    pub projects: Vec<ContentProject>,
    pub certifications: Vec<ContentCertification>,
}
