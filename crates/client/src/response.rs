//! Explicit decoding of story listing responses.
//!
//! The data API has served stories in a few shapes over time. Each accepted
//! shape is matched by name here; anything else is rejected rather than
//! guessed at.
//!
//! | Shape                                  | Meaning                |
//! |----------------------------------------|------------------------|
//! | `{"messages": [...], "total": n}`      | current listing        |
//! | `{"stories": [...]}`                   | older listing          |
//! | `[...]`                                | bare listing           |
//! | `{"error": "...", "code": "..."}`      | failure                |
//!
//! Listing entries are either full story objects or plain strings; plain
//! strings become stories in the primary language with `legacy-{n}` ids.

use chrono::DateTime;
use companion_core::language::Language;
use companion_core::story::Story;
use serde_json::Value;

use crate::error::ClientError;

/// A decoded story listing response.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Stories(Vec<Story>),
    Failure {
        message: String,
        code: Option<String>,
    },
}

impl ApiResponse {
    /// Decode a response body.
    pub fn decode(body: Value) -> Result<Self, ClientError> {
        match body {
            Value::Array(entries) => decode_entries(entries).map(ApiResponse::Stories),
            Value::Object(mut map) => {
                if let Some(error) = map.remove("error") {
                    let message = match error {
                        Value::String(s) => s,
                        other => other.to_string(),
                    };
                    let code = map
                        .remove("code")
                        .and_then(|c| c.as_str().map(str::to_string));
                    return Ok(ApiResponse::Failure { message, code });
                }

                match map.remove("messages").or_else(|| map.remove("stories")) {
                    Some(Value::Array(entries)) => decode_entries(entries).map(ApiResponse::Stories),
                    Some(other) => Err(ClientError::UnexpectedShape(format!(
                        "story list is not an array: {other}"
                    ))),
                    None => {
                        let keys: Vec<_> = map.keys().cloned().collect();
                        Err(ClientError::UnexpectedShape(format!(
                            "object with keys {keys:?}"
                        )))
                    }
                }
            }
            other => Err(ClientError::UnexpectedShape(format!(
                "top-level {}",
                json_kind(&other)
            ))),
        }
    }

    /// The stories, or the failure as an error.
    pub fn into_stories(self) -> Result<Vec<Story>, ClientError> {
        match self {
            ApiResponse::Stories(stories) => Ok(stories),
            ApiResponse::Failure { message, .. } => Err(ClientError::Api(message)),
        }
    }
}

fn decode_entries(entries: Vec<Value>) -> Result<Vec<Story>, ClientError> {
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| match entry {
            Value::String(text) => Ok(Story {
                id: format!("legacy-{}", i + 1),
                text,
                language: Language::PRIMARY,
                created_at: DateTime::UNIX_EPOCH,
            }),
            obj @ Value::Object(_) => serde_json::from_value(obj)
                .map_err(|e| ClientError::UnexpectedShape(format!("story {i}: {e}"))),
            other => Err(ClientError::UnexpectedShape(format!(
                "story {i} is a {}",
                json_kind(&other)
            ))),
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn story_json(id: &str, lang: &str) -> Value {
        json!({
            "id": id,
            "text": "Ciao",
            "language": lang,
            "createdAt": "2025-01-01T00:00:00Z",
        })
    }

    #[test]
    fn current_listing_decodes() {
        let body = json!({ "messages": [story_json("it-1", "it")], "total": 1 });
        let stories = ApiResponse::decode(body).unwrap().into_stories().unwrap();
        assert_eq!(stories.len(), 1);
        assert_eq!(stories[0].id, "it-1");
        assert_eq!(stories[0].language, Language::It);
    }

    #[test]
    fn older_and_bare_listings_decode() {
        let older = json!({ "stories": [story_json("en-1", "en")] });
        let bare = json!([story_json("en-1", "en")]);
        assert_eq!(
            ApiResponse::decode(older).unwrap(),
            ApiResponse::decode(bare).unwrap()
        );
    }

    #[test]
    fn plain_strings_become_primary_language_stories() {
        let body = json!({ "messages": ["uno", "due"] });
        let stories = ApiResponse::decode(body).unwrap().into_stories().unwrap();
        assert_eq!(stories[1].id, "legacy-2");
        assert_eq!(stories[1].text, "due");
        assert_eq!(stories[1].language, Language::PRIMARY);
    }

    #[test]
    fn error_payload_is_a_failure() {
        let body = json!({ "error": "Failed to fetch stories", "code": "INTERNAL_ERROR" });
        let decoded = ApiResponse::decode(body).unwrap();
        assert_matches!(
            &decoded,
            ApiResponse::Failure { message, code: Some(code) }
                if message == "Failed to fetch stories" && code == "INTERNAL_ERROR"
        );
        assert_matches!(decoded.into_stories(), Err(ClientError::Api(_)));
    }

    #[test]
    fn unrecognized_shapes_are_rejected() {
        for body in [
            json!({ "data": [] }),
            json!({ "messages": "nope" }),
            json!("just a string"),
            json!([42]),
            json!([{ "id": "x" }]),
        ] {
            assert_matches!(
                ApiResponse::decode(body),
                Err(ClientError::UnexpectedShape(_))
            );
        }
    }
}
