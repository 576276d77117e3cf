use serde::Deserialize;

use super::{lenient_text, Identity, Metadata};

/// A single referee. Contact values are display strings only.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Reference {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub relationship: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReferencesRecord {
    pub metadata: Metadata,
    pub identity: Identity,
    pub references: Vec<Reference>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reference_values_are_opaque() {
        let reference: Reference = serde_json::from_value(json!({
            "name": "Sam Roe",
            "relationship": "Colleague & Manager",
            "email": "not really an email",
            "phone": 5551234567u64,
            "notes": "ignored"
        }))
        .unwrap();
        assert_eq!(reference.relationship.as_deref(), Some("Colleague & Manager"));
        assert_eq!(reference.email.as_deref(), Some("not really an email"));
        assert_eq!(reference.phone.as_deref(), Some("5551234567"));
    }
}
