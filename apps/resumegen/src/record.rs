//! Record loading: reads the JSON data file and validates it into a typed record.
//!
//! All shape checks happen here, once. Renderers only ever see a record whose
//! identity name is present and whose sections have the expected types.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::errors::GenError;
use crate::models::{
    lenient_text, Identity, LetterRecord, Metadata, Reference, ReferencesRecord, ResumeRecord,
    Section,
};

/// Which document to produce from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Resume,
    References,
    Letter,
}

impl Mode {
    /// Input file used when none is given on the command line.
    pub fn default_input(self) -> &'static str {
        match self {
            Mode::References => "references.json",
            Mode::Resume | Mode::Letter => "resume.json",
        }
    }
}

/// A validated input record, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Resume(ResumeRecord),
    References(ReferencesRecord),
    Letter(LetterRecord),
}

impl Record {
    pub fn identity(&self) -> &Identity {
        match self {
            Record::Resume(r) => &r.identity,
            Record::References(r) => &r.identity,
            Record::Letter(r) => &r.identity,
        }
    }
}

/// Reads and validates the record at `path`.
pub fn load_record(path: &Path, mode: Mode) -> Result<Record, GenError> {
    let raw = std::fs::read_to_string(path).map_err(|source| GenError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {}", raw.len(), path.display());

    let value: Value = serde_json::from_str(&raw).map_err(|source| GenError::InputParse {
        path: path.to_path_buf(),
        source,
    })?;

    parse_record(value, mode)
}

/// Validates an already-parsed JSON document into a record for `mode`.
pub fn parse_record(value: Value, mode: Mode) -> Result<Record, GenError> {
    let obj = match value {
        Value::Object(obj) => obj,
        other => {
            return Err(GenError::InvalidRecord(format!(
                "top level must be a JSON object, found {}",
                kind_of(&other)
            )))
        }
    };

    let identity = parse_identity(&obj)?;
    let metadata = optional_field::<Metadata>(&obj, "metadata")?
        .unwrap_or_default()
        .with_default_author(&identity.name);

    let record = match mode {
        Mode::Resume => Record::Resume(ResumeRecord {
            sections: parse_sections(&obj)?,
            metadata,
            identity,
        }),
        Mode::References => Record::References(ReferencesRecord {
            references: parse_references(&obj)?,
            metadata,
            identity,
        }),
        Mode::Letter => Record::Letter(LetterRecord { metadata, identity }),
    };
    Ok(record)
}

fn parse_identity(obj: &Map<String, Value>) -> Result<Identity, GenError> {
    let name = text_field(obj, "name")?
        .ok_or_else(|| GenError::MissingField("name".to_string()))?;

    Ok(Identity {
        name,
        address: text_field(obj, "address")?,
        phone: text_field(obj, "phone")?,
        email: text_field(obj, "email")?,
    })
}

/// Collects résumé sections in the order their keys appear in the input.
fn parse_sections(obj: &Map<String, Value>) -> Result<Vec<Section>, GenError> {
    let mut sections = Vec::new();

    for key in obj.keys() {
        let section = match key.as_str() {
            "summary" => text_field(obj, key)?.map(Section::Summary),
            "education" => Some(Section::Education(list_field(obj, key)?)),
            "experience" => Some(Section::Experience(list_field(obj, key)?)),
            "skills" => Some(Section::Skills(list_field(obj, key)?)),
            "publications" => Some(Section::Publications(list_field(obj, key)?)),
            _ => None,
        };

        match section {
            Some(section) if section.is_empty() => {
                debug!("Skipping empty section '{}'", section.key());
            }
            Some(section) => sections.push(section),
            None => {}
        }
    }

    debug!("Parsed {} resume sections", sections.len());
    Ok(sections)
}

fn parse_references(obj: &Map<String, Value>) -> Result<Vec<Reference>, GenError> {
    if !obj.contains_key("references") {
        warn!("Input has no 'references' list; the references page will be empty");
    }

    list_field(obj, "references")
}

/// Reads an optional display string.
fn text_field(obj: &Map<String, Value>, key: &str) -> Result<Option<String>, GenError> {
    match obj.get(key) {
        None => Ok(None),
        Some(value) => lenient_text(value).map_err(|_| {
            GenError::InvalidRecord(format!(
                "field '{key}' must be a string, found {}",
                kind_of(value)
            ))
        }),
    }
}

fn optional_field<T: DeserializeOwned>(
    obj: &Map<String, Value>,
    key: &str,
) -> Result<Option<T>, GenError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => T::deserialize(value)
            .map(Some)
            .map_err(|e| GenError::InvalidRecord(format!("field '{key}': {e}"))),
    }
}

/// Reads a list of entries, reporting the index of the first bad one.
fn list_field<T: DeserializeOwned>(
    obj: &Map<String, Value>,
    key: &str,
) -> Result<Vec<T>, GenError> {
    let items = match obj.get(key) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(GenError::InvalidRecord(format!(
                "field '{key}' must be a list, found {}",
                kind_of(other)
            )))
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            if !item.is_object() {
                return Err(GenError::InvalidRecord(format!(
                    "'{key}[{i}]' must be an object, found {}",
                    kind_of(item)
                )));
            }
            T::deserialize(item)
                .map_err(|e| GenError::InvalidRecord(format!("'{key}[{i}]': {e}")))
        })
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn resume(value: Value) -> ResumeRecord {
        match parse_record(value, Mode::Resume).unwrap() {
            Record::Resume(r) => r,
            other => panic!("expected resume, got {other:?}"),
        }
    }

    #[test]
    fn test_minimal_record_parses() {
        let r = resume(json!({ "name": "Jane Doe", "email": "jane@example.com" }));
        assert_eq!(r.identity.name, "Jane Doe");
        assert_eq!(r.identity.email.as_deref(), Some("jane@example.com"));
        assert!(r.identity.phone.is_none());
        assert!(r.sections.is_empty());
        assert_eq!(r.metadata.author.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_missing_name_is_missing_field() {
        let err = parse_record(json!({ "email": "x@example.com" }), Mode::Resume).unwrap_err();
        assert!(matches!(err, GenError::MissingField(ref f) if f == "name"));
    }

    #[test]
    fn test_blank_name_is_missing_field() {
        let err = parse_record(json!({ "name": "  " }), Mode::References).unwrap_err();
        assert!(matches!(err, GenError::MissingField(_)));
    }

    #[test]
    fn test_non_string_name_is_invalid() {
        let err = parse_record(json!({ "name": ["Jane"] }), Mode::Resume).unwrap_err();
        assert!(matches!(err, GenError::InvalidRecord(ref m) if m.contains("'name'")));
    }

    #[test]
    fn test_top_level_must_be_object() {
        let err = parse_record(json!([1, 2]), Mode::Resume).unwrap_err();
        assert!(err.to_string().contains("JSON object"));
    }

    #[test]
    fn test_section_order_follows_input() {
        let r = resume(json!({
            "name": "Jane Doe",
            "experience": [{ "title": "Engineer" }],
            "summary": "Builds things.",
            "unknown_section": { "ignored": true },
            "education": [{ "name": "State U" }]
        }));
        let keys: Vec<_> = r.sections.iter().map(Section::key).collect();
        assert_eq!(keys, vec!["experience", "summary", "education"]);
    }

    #[test]
    fn test_empty_sections_are_dropped() {
        let r = resume(json!({
            "name": "Jane Doe",
            "summary": "",
            "skills": [],
            "publications": null
        }));
        assert!(r.sections.is_empty());
    }

    #[test]
    fn test_wrong_section_shape_names_field() {
        let err = parse_record(
            json!({ "name": "Jane Doe", "education": "State U" }),
            Mode::Resume,
        )
        .unwrap_err();
        assert!(matches!(err, GenError::InvalidRecord(ref m) if m.contains("'education'")));
    }

    #[test]
    fn test_bad_entry_reports_index() {
        let err = parse_record(
            json!({ "name": "Jane Doe", "experience": [{ "title": "A" }, 7] }),
            Mode::Resume,
        )
        .unwrap_err();
        assert!(err.to_string().contains("experience[1]"));
    }

    #[test]
    fn test_reference_without_name_parses() {
        let record = parse_record(
            json!({
                "name": "Jane Doe",
                "references": [{ "relationship": "Mentor", "email": "m@x.io" }]
            }),
            Mode::References,
        )
        .unwrap();
        let Record::References(r) = record else {
            panic!("expected references");
        };
        assert_eq!(r.references.len(), 1);
        assert!(r.references[0].name.is_none());
        assert_eq!(r.references[0].relationship.as_deref(), Some("Mentor"));
    }

    #[test]
    fn test_references_keep_order() {
        let record = parse_record(
            json!({
                "name": "Jane Doe",
                "references": [{ "name": "B" }, { "name": "A" }, { "name": "C" }]
            }),
            Mode::References,
        )
        .unwrap();
        let Record::References(r) = record else {
            panic!("expected references");
        };
        let names: Vec<_> = r
            .references
            .iter()
            .filter_map(|r| r.name.as_deref())
            .collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_letter_ignores_sections() {
        let record = parse_record(
            json!({ "name": "Jane Doe", "education": "not validated for letters" }),
            Mode::Letter,
        )
        .unwrap();
        assert_eq!(record.identity().name, "Jane Doe");
    }

    #[test]
    fn test_load_record_reports_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ \"name\": ").unwrap();
        let err = load_record(file.path(), Mode::Resume).unwrap_err();
        assert!(matches!(err, GenError::InputParse { .. }));
    }

    #[test]
    fn test_load_record_reports_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = load_record(&dir.path().join("resume.json"), Mode::Resume).unwrap_err();
        assert!(matches!(err, GenError::InputRead { .. }));
    }

    #[test]
    fn test_default_input_per_mode() {
        assert_eq!(Mode::Resume.default_input(), "resume.json");
        assert_eq!(Mode::Letter.default_input(), "resume.json");
        assert_eq!(Mode::References.default_input(), "references.json");
    }
}
