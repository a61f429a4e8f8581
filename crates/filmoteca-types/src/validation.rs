//! Payload validation for movie write operations.
//!
//! Both entry points take the raw JSON body and return either the typed
//! payload or a list of field-level issues. Errors never propagate as
//! panics; the HTTP layer decides the status code.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::{MovieDraft, MoviePatch};

/// Fields a full create payload must carry.
const REQUIRED_FIELDS: &[&str] = &["title", "genre", "year", "director", "duration", "poster"];

/// One field-level validation failure, serialized verbatim into the
/// `{"error": [...]}` response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldIssue {
    /// Field the issue refers to, or `"body"` when the payload itself
    /// could not be decoded
    pub field: String,
    /// Human-readable description
    pub message: String,
    /// What the schema expects, when it can be stated compactly
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    /// The offending value as received
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<Value>,
}

impl FieldIssue {
    fn required(field: &str) -> Self {
        Self {
            field: field.to_string(),
            message: format!("Movie {field} is required."),
            expected: None,
            received: None,
        }
    }

    fn not_an_object(input: &Value) -> Self {
        Self {
            field: "body".to_string(),
            message: "payload must be a JSON object".to_string(),
            expected: Some("a JSON object".to_string()),
            received: Some(input.clone()),
        }
    }

    fn decode(err: &serde_json::Error) -> Self {
        Self {
            field: "body".to_string(),
            message: err.to_string(),
            expected: None,
            received: None,
        }
    }

    fn rule(field: &str, err: &ValidationError) -> Self {
        let message = err
            .message
            .as_ref()
            .map(|m| m.to_string())
            .unwrap_or_else(|| format!("{field} is invalid"));

        let expected = match err.code.as_ref() {
            "range" => {
                let min = err.params.get("min");
                let max = err.params.get("max");
                match (min, max) {
                    (Some(min), Some(max)) => Some(format!("a number between {min} and {max}")),
                    (Some(min), None) => Some(format!("a number of at least {min}")),
                    (None, Some(max)) => Some(format!("a number of at most {max}")),
                    (None, None) => None,
                }
            }
            "url" => Some("a valid URL".to_string()),
            _ => None,
        };

        Self {
            field: field.to_string(),
            message,
            expected,
            received: err.params.get("value").cloned(),
        }
    }
}

fn issues_from(errors: ValidationErrors) -> Vec<FieldIssue> {
    let mut issues: Vec<FieldIssue> = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for err in field_errors {
            issues.push(FieldIssue::rule(field.as_ref(), err));
        }
    }
    // field_errors() iterates a map; keep the output deterministic
    issues.sort_by(|a, b| a.field.cmp(&b.field));
    issues
}

/// Validate a full create payload.
///
/// Missing required fields are reported before type decoding so that each
/// absent field yields its own issue; the `rate` default of 5 is applied
/// here and only here.
pub fn validate_movie(input: &Value) -> Result<MovieDraft, Vec<FieldIssue>> {
    let Some(map) = input.as_object() else {
        return Err(vec![FieldIssue::not_an_object(input)]);
    };

    let missing: Vec<FieldIssue> = REQUIRED_FIELDS
        .iter()
        .filter(|field| !map.contains_key(**field))
        .map(|field| FieldIssue::required(field))
        .collect();
    if !missing.is_empty() {
        return Err(missing);
    }

    let draft: MovieDraft =
        serde_json::from_value(input.clone()).map_err(|e| vec![FieldIssue::decode(&e)])?;

    match draft.validate() {
        Ok(()) => Ok(draft),
        Err(errors) => Err(issues_from(errors)),
    }
}

/// Validate a partial update payload.
///
/// No field is required; present fields are held to the same per-field
/// rules as the full payload.
pub fn validate_partial_movie(input: &Value) -> Result<MoviePatch, Vec<FieldIssue>> {
    if !input.is_object() {
        return Err(vec![FieldIssue::not_an_object(input)]);
    }

    let patch: MoviePatch =
        serde_json::from_value(input.clone()).map_err(|e| vec![FieldIssue::decode(&e)])?;

    match patch.validate() {
        Ok(()) => Ok(patch),
        Err(errors) => Err(issues_from(errors)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_payload() -> Value {
        json!({
            "title": "The Dark Knight",
            "genre": ["Action", "Crime", "Drama"],
            "year": 2008,
            "director": "Christopher Nolan",
            "duration": 152,
            "rate": 9.0,
            "poster": "https://example.com/dark-knight.jpg"
        })
    }

    #[test]
    fn test_valid_full_payload() {
        let draft = validate_movie(&valid_payload()).unwrap();
        assert_eq!(draft.title, "The Dark Knight");
        assert_eq!(draft.genre.len(), 3);
    }

    #[test]
    fn test_rate_defaults_only_on_full_path() {
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove("rate");

        let draft = validate_movie(&payload).unwrap();
        assert!((draft.rate - 5.0).abs() < f64::EPSILON);

        let patch = validate_partial_movie(&json!({ "title": "Renamed" })).unwrap();
        assert!(patch.rate.is_none());
    }

    #[test]
    fn test_missing_title_reported_by_field() {
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove("title");

        let issues = validate_movie(&payload).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "title");
        assert!(issues[0].message.contains("required"));
    }

    #[test]
    fn test_every_missing_field_gets_an_issue() {
        let issues = validate_movie(&json!({})).unwrap_err();
        let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, REQUIRED_FIELDS.to_vec());
    }

    #[test]
    fn test_unknown_genre_tag_rejected() {
        let mut payload = valid_payload();
        payload["genre"] = json!(["Adventura"]);

        let issues = validate_movie(&payload).unwrap_err();
        assert!(issues[0].message.contains("Adventura"));
    }

    #[test]
    fn test_year_out_of_range() {
        for year in [1899, 2025] {
            let mut payload = valid_payload();
            payload["year"] = json!(year);

            let issues = validate_movie(&payload).unwrap_err();
            assert_eq!(issues[0].field, "year");
            assert_eq!(issues[0].received, Some(json!(year)));
            assert!(issues[0].expected.as_deref().unwrap().contains("between"));
        }
    }

    #[test]
    fn test_non_positive_duration() {
        for duration in [0, -10] {
            let mut payload = valid_payload();
            payload["duration"] = json!(duration);

            let issues = validate_movie(&payload).unwrap_err();
            assert_eq!(issues[0].field, "duration");
        }
    }

    #[test]
    fn test_poster_must_be_url() {
        let mut payload = valid_payload();
        payload["poster"] = json!("not a url");

        let issues = validate_movie(&payload).unwrap_err();
        assert_eq!(issues[0].field, "poster");
        assert_eq!(issues[0].message, "poster must be a valid URL");
    }

    #[test]
    fn test_rate_bounds() {
        let mut payload = valid_payload();
        payload["rate"] = json!(10.5);
        assert_eq!(validate_movie(&payload).unwrap_err()[0].field, "rate");

        let issues = validate_partial_movie(&json!({ "rate": -1 })).unwrap_err();
        assert_eq!(issues[0].field, "rate");
    }

    #[test]
    fn test_empty_genre_array_is_schema_valid() {
        let mut payload = valid_payload();
        payload["genre"] = json!([]);
        assert!(validate_movie(&payload).is_ok());
    }

    #[test]
    fn test_partial_requires_nothing() {
        let patch = validate_partial_movie(&json!({})).unwrap();
        assert_eq!(patch, MoviePatch::default());
    }

    #[test]
    fn test_partial_validates_present_fields() {
        let issues = validate_partial_movie(&json!({ "year": 1800 })).unwrap_err();
        assert_eq!(issues[0].field, "year");
    }

    #[test]
    fn test_non_object_payload() {
        let issues = validate_movie(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(issues[0].field, "body");
        assert_eq!(issues[0].expected.as_deref(), Some("a JSON object"));
    }

    #[test]
    fn test_issue_serialization_skips_empty_detail() {
        let issue = FieldIssue::required("title");
        let json = serde_json::to_value(&issue).unwrap();
        assert!(json.get("expected").is_none());
        assert!(json.get("received").is_none());
    }
}
