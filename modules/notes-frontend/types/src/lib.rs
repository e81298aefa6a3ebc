//! Shared wire types for the notes backend and its clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =====================================================
// Domain Types
// =====================================================

/// A user-authored text record.
///
/// `updated_at` stays `None` until the first update and is omitted from the
/// JSON body while absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: u64,
    pub content: String,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "iso_millis::option"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

// =====================================================
// Request / Response Types
// =====================================================

/// Body of `POST /api/notes` and `PUT /api/notes/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoteContent {
    /// Missing content deserializes to the empty string
    #[serde(default)]
    pub content: String,
}

impl NoteContent {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// JSON error payload returned on non-success responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}

/// Timestamps on the wire are ISO-8601 in UTC with millisecond precision,
/// e.g. `2024-05-01T12:30:00.123Z`.
pub mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        DateTime::<Utc>::deserialize(d)
    }

    pub mod option {
        use super::*;

        pub fn serialize<S: Serializer>(
            ts: &Option<DateTime<Utc>>,
            s: S,
        ) -> Result<S::Ok, S::Error> {
            match ts {
                Some(ts) => super::serialize(ts, s),
                None => s.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            d: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            Option::<DateTime<Utc>>::deserialize(d)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn sample() -> Note {
        Note {
            id: 7,
            content: "buy milk".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
            updated_at: None,
        }
    }

    #[test]
    fn test_fresh_note_omits_updated_at() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 7,
                "content": "buy milk",
                "createdAt": "2024-05-01T12:30:00.000Z"
            })
        );
    }

    #[test]
    fn test_updated_note_uses_camel_case() {
        let mut note = sample();
        note.updated_at = Some(Utc.with_ymd_and_hms(2024, 5, 2, 8, 0, 0).unwrap());

        let value = serde_json::to_value(&note).unwrap();
        assert_eq!(value["updatedAt"], "2024-05-02T08:00:00.000Z");
        assert!(value.get("updated_at").is_none());
    }

    #[test]
    fn test_parse_note_from_other_producers() {
        let note: Note = serde_json::from_value(json!({
            "id": 1714566600000u64,
            "content": "call mom",
            "createdAt": "2024-05-01T12:30:00.123Z"
        }))
        .unwrap();

        assert_eq!(note.id, 1714566600000);
        assert_eq!(note.updated_at, None);
        assert_eq!(note.created_at.timestamp_subsec_millis(), 123);
    }

    #[test]
    fn test_missing_content_defaults_to_empty() {
        let body: NoteContent = serde_json::from_str("{}").unwrap();
        assert_eq!(body.content, "");
    }
}
