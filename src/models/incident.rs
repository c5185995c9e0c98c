use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A tracked security event record with mutable triage fields.
///
/// Incidents are created once, mutated in place through update/add-note, and
/// never deleted. The wire format is camelCase with ISO-8601 UTC timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    /// Unique identifier, `INC-` plus a zero-padded counter suffix
    pub id: String,

    /// Human-readable title, immutable after creation
    pub title: String,

    /// Free-form severity label (e.g. "High"); no enum is enforced
    pub severity: String,

    /// Free-form triage status (e.g. "Investigating")
    pub status: String,

    /// Assigned owner or team
    pub owner: String,

    /// Classification tags, sanitized at creation and immutable thereafter
    pub tags: Vec<String>,

    /// Indicators of compromise, same shape and rules as tags
    pub iocs: Vec<String>,

    /// Investigation notes, newest first, append-only
    pub notes: Vec<Note>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last mutation timestamp; refreshed on update/add-note, never on reads
    pub updated_at: DateTime<Utc>,
}

/// An append-only investigation comment attached to an incident.
///
/// Note ids are numbered per incident (`NOTE-0001` is always the first note
/// on its parent); they are not unique across incidents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub body: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating an incident
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default, deny_unknown_fields)]
pub struct IncidentInput {
    #[validate(custom(function = validate_non_blank_title))]
    pub title: String,
    pub severity: String,
    pub status: String,
    pub owner: String,
    pub tags: Vec<String>,
    pub iocs: Vec<String>,
}

/// Payload for a partial incident update; blank fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IncidentUpdate {
    pub severity: String,
    pub status: String,
    pub owner: String,
}

/// Payload for appending a note to an incident
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NoteInput {
    pub body: String,
    pub author: String,
}

fn validate_non_blank_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::new("title_required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incident_wire_format_is_camel_case() {
        let now = Utc::now();
        let incident = Incident {
            id: "INC-1001".to_string(),
            title: "Test".to_string(),
            severity: "High".to_string(),
            status: "New".to_string(),
            owner: "SOC Tier 1".to_string(),
            tags: vec!["cloud".to_string()],
            iocs: vec![],
            notes: vec![Note {
                id: "NOTE-0001".to_string(),
                body: "first".to_string(),
                author: "Analyst".to_string(),
                created_at: now,
            }],
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(&incident).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("iocs").is_some());
        assert!(value["notes"][0].get("createdAt").is_some());

        // Timestamps serialize as ISO-8601 UTC
        let created = value["createdAt"].as_str().unwrap();
        assert!(created.ends_with('Z') || created.contains("+00:00"));
    }

    #[test]
    fn test_input_rejects_unknown_fields() {
        let result: Result<IncidentInput, _> =
            serde_json::from_str(r#"{"title": "x", "bogus": true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_input_fields_default_when_missing() {
        let input: IncidentInput = serde_json::from_str(r#"{"title": "x"}"#).unwrap();
        assert_eq!(input.title, "x");
        assert!(input.severity.is_empty());
        assert!(input.tags.is_empty());
    }

    #[test]
    fn test_blank_title_fails_validation() {
        let input = IncidentInput {
            title: "   ".to_string(),
            ..Default::default()
        };
        assert!(input.validate().is_err());

        let input = IncidentInput {
            title: "Suspicious login".to_string(),
            ..Default::default()
        };
        assert!(input.validate().is_ok());
    }
}
