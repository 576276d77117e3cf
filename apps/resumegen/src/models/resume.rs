use serde::Deserialize;

use super::{lenient_text, text_list, Identity, Metadata};

/// A school in the education section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct School {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub graduated: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub degree: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub gpa: Option<String>,
    #[serde(default, deserialize_with = "text_list")]
    pub awards: Vec<String>,
}

/// A position in the experience section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Job {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub organization: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub start: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub end: Option<String>,
    /// Description lines, one bullet each.
    #[serde(default, deserialize_with = "text_list")]
    pub experiences: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Skill {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "text_list")]
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Publication {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: Option<String>,
}

/// One résumé section. The record keeps sections in input order.
#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    Summary(String),
    Education(Vec<School>),
    Experience(Vec<Job>),
    Skills(Vec<Skill>),
    Publications(Vec<Publication>),
}

impl Section {
    /// Input key the section is read from.
    pub fn key(&self) -> &'static str {
        match self {
            Section::Summary(_) => "summary",
            Section::Education(_) => "education",
            Section::Experience(_) => "experience",
            Section::Skills(_) => "skills",
            Section::Publications(_) => "publications",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Section::Summary(_) => "Summary",
            Section::Education(_) => "Education",
            Section::Experience(_) => "Experience",
            Section::Skills(_) => "Skills",
            Section::Publications(_) => "Publications and presentations",
        }
    }

    /// True when rendering would produce a heading with nothing under it.
    pub fn is_empty(&self) -> bool {
        match self {
            Section::Summary(text) => text.trim().is_empty(),
            Section::Education(v) => v.is_empty(),
            Section::Experience(v) => v.is_empty(),
            Section::Skills(v) => v.is_empty(),
            Section::Publications(v) => v.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResumeRecord {
    pub metadata: Metadata,
    pub identity: Identity,
    pub sections: Vec<Section>,
}
