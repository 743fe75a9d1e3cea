//! Common API utilities and shared types
//!
//! This module contains helpers used by both resource families.

use axum::body::Bytes;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::api::middleware::ApiError;

/// `?id=` selector shared by the resource endpoints
#[derive(Debug, Default, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

impl IdQuery {
    /// The id, treating an empty value as absent
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Confirmation body for deletions
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Parse a JSON request body, whatever its `Content-Type`.
///
/// Anything that does not deserialize into `T` is a malformed request.
pub fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "unparseable request body");
        ApiError::malformed_request()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Named {
        name: Option<String>,
    }

    #[test]
    fn test_id_query_empty_is_absent() {
        let query = IdQuery { id: Some(String::new()) };
        assert_eq!(query.id(), None);

        let query = IdQuery { id: Some("3".to_string()) };
        assert_eq!(query.id(), Some("3"));
    }

    #[test]
    fn test_parse_body() {
        let parsed: Named = parse_body(&Bytes::from_static(br#"{"name":"x"}"#)).unwrap();
        assert_eq!(parsed.name.as_deref(), Some("x"));

        assert!(parse_body::<Named>(&Bytes::from_static(b"{not json")).is_err());
        assert!(parse_body::<Named>(&Bytes::from_static(b"[1, 2]")).is_err());
        assert!(parse_body::<Named>(&Bytes::from_static(br#"{"name": 5}"#)).is_err());
    }
}
