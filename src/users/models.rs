//! User Directory Domain Models
//!
//! Records and request/response bodies shared by the backend store and the
//! gateway's backend client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// User Domain Models
// =============================================================================

/// A user record as stored by the backend and returned over REST.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Decimal identifier assigned by the store, never reused
    pub id: String,

    pub name: String,

    pub email: String,

    /// Creation instant, rendered as RFC 3339 with millisecond precision
    #[serde(rename = "createdAt", with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Body sent by the gateway to `POST /users`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Body accepted by `POST /users`.
///
/// Both fields are optional on the wire so that presence can be validated
/// by the handler rather than rejected by the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserInput {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl CreateUserInput {
    /// Returns the `(name, email)` pair when both are present and non-empty.
    pub fn into_parts(self) -> Option<(String, String)> {
        match (self.name, self.email) {
            (Some(name), Some(email)) if !name.is_empty() && !email.is_empty() => {
                Some((name, email))
            }
            _ => None,
        }
    }
}

/// Error body used by the REST surface (`{"error": "..."}`)
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// `createdAt` wire format: `2024-05-01T12:30:00.123Z`.
mod timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn user_serializes_with_camel_case_timestamp() {
        let user = User {
            id: "1".into(),
            name: "Ada".into(),
            email: "ada@x.com".into(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["createdAt"], "2024-05-01T12:30:00.000Z");

        let text = serde_json::to_string(&user).unwrap();
        assert!(text.starts_with(r#"{"id":"1","name":"Ada","email":"ada@x.com""#));
    }

    #[test]
    fn create_input_requires_both_fields() {
        let missing_email: CreateUserInput = serde_json::from_value(json!({ "name": "Ada" })).unwrap();
        assert!(missing_email.into_parts().is_none());

        let empty_name: CreateUserInput =
            serde_json::from_value(json!({ "name": "", "email": "ada@x.com" })).unwrap();
        assert!(empty_name.into_parts().is_none());

        let ok: CreateUserInput =
            serde_json::from_value(json!({ "name": "Ada", "email": "ada@x.com" })).unwrap();
        assert_eq!(ok.into_parts(), Some(("Ada".into(), "ada@x.com".into())));
    }
}
