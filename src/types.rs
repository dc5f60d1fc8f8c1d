use serde::{Deserialize, Serialize};

/// JSON body sent to `POST /auth/login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response body. Parsed leniently: anything beyond `access_token`
/// is ignored, and the field itself may be absent.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: Option<String>,
}

/// Outcome of the login step. Downstream code branches on the variant,
/// never on a raw status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Status 200 or 201. `token` is `None` when the body had no
    /// `access_token` or did not parse as JSON.
    Authenticated {
        status: u16,
        token: Option<String>,
        body_preview: String,
    },
    /// Any other status. The run stops here.
    Rejected { status: u16, body_preview: String },
}

impl LoginOutcome {
    pub fn status(&self) -> u16 {
        match self {
            Self::Authenticated { status, .. } | Self::Rejected { status, .. } => *status,
        }
    }

    pub fn body_preview(&self) -> &str {
        match self {
            Self::Authenticated { body_preview, .. } | Self::Rejected { body_preview, .. } => {
                body_preview
            }
        }
    }
}

/// Result of one authenticated GET probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub path: String,
    pub status: u16,
    pub body_preview: String,
}

/// Pull the bearer token out of a raw login body. A body that is not
/// JSON, or JSON without `access_token`, yields `None` rather than an error.
pub fn extract_token(body: &str) -> Option<String> {
    serde_json::from_str::<LoginResponse>(body)
        .ok()
        .and_then(|r| r.access_token)
}
