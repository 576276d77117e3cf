pub mod references;
pub mod resume;

use serde::{Deserialize, Deserializer};

pub use references::{Reference, ReferencesRecord};
pub use resume::{Job, Publication, ResumeRecord, School, Section, Skill};

/// Document properties embedded in targets that support them (PDF info dict).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Metadata {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "text_list")]
    pub keywords: Vec<String>,
}

impl Metadata {
    /// Fills `author` from the record's name when the input did not set one.
    pub fn with_default_author(mut self, name: &str) -> Self {
        if self.author.is_none() {
            self.author = Some(name.to_string());
        }
        self
    }
}

/// The letterhead block shared by every document kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Metadata and letterhead only; used for letter templates.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterRecord {
    pub metadata: Metadata,
    pub identity: Identity,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

impl Scalar {
    fn into_text(self) -> Option<String> {
        let text = match self {
            Scalar::Text(t) => t,
            Scalar::Number(n) => n.to_string(),
        };
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Optional display string. Numbers are accepted (phone numbers and GPAs are
/// often written unquoted); blank strings count as absent.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.and_then(Scalar::into_text))
}

/// List of display strings with `null` read as empty and blank items dropped.
pub(crate) fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Option::<Vec<Scalar>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(items.into_iter().filter_map(Scalar::into_text).collect())
}
