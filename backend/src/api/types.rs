//! REST API request and response types.
//!
//! Field names follow the site frontend's JSON (camelCase).

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Name reported by the status endpoint.
pub const SYSTEM_NAME: &str = "CuraVyom Agentic Protocol v2.0";

/// Response of `GET /` and `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub system: String,
    pub version: String,
}

impl StatusResponse {
    pub fn online() -> Self {
        Self {
            status: "online".to_string(),
            system: SYSTEM_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Generic `{status, message}` acknowledgement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub status: String,
    pub message: String,
}

impl MessageResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }
}

/// Body of `POST /subscribe`.
#[derive(Debug, Clone, Deserialize)]
pub struct SubscriptionRequest {
    pub email: String,
}

impl SubscriptionRequest {
    pub fn validate(&self) -> ServerResult<()> {
        require("email", &self.email)
    }
}

/// Body of `POST /api/contact`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl ContactRequest {
    pub fn validate(&self) -> ServerResult<()> {
        require("firstName", &self.first_name)?;
        require("lastName", &self.last_name)?;
        require("email", &self.email)?;
        require("message", &self.message)
    }
}

fn require(field: &str, value: &str) -> ServerResult<()> {
    if value.trim().is_empty() {
        return Err(ServerError::validation(field, "must not be empty"));
    }
    Ok(())
}

/// What an uploaded file was recognised as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadKind {
    Document,
    Structure,
    Generic,
}

/// Response of `POST /api/upload`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadAnalysis {
    pub status: String,
    pub analysis: String,
    #[serde(rename = "type")]
    pub kind: UploadKind,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_payload() {
        let value = serde_json::to_value(StatusResponse::online()).unwrap();
        assert_eq!(value["status"], "online");
        assert_eq!(value["system"], "CuraVyom Agentic Protocol v2.0");
    }

    #[test]
    fn test_contact_request_uses_camel_case() {
        let req: ContactRequest = serde_json::from_value(json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.org",
            "message": "Interested in a pilot."
        }))
        .unwrap();
        assert_eq!(req.first_name, "Ada");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_blank_fields_are_rejected() {
        let req = SubscriptionRequest {
            email: "   ".to_string(),
        };
        assert!(matches!(
            req.validate(),
            Err(ServerError::Validation { ref field, .. }) if field == "email"
        ));

        let req = ContactRequest {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.org".into(),
            message: "".into(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_upload_kind_serializes_as_type() {
        let value = serde_json::to_value(UploadAnalysis {
            status: "success".into(),
            analysis: "ok".into(),
            kind: UploadKind::Structure,
        })
        .unwrap();
        assert_eq!(value["type"], "structure");
    }
}
