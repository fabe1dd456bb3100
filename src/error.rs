//! Errors the worker bridge can report back to the page.
//!
//! Binders themselves never fail: missing data and missing elements are
//! no-ops. Only request decoding and routing produce these.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("invalid JSON body: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("missing {0} parameter")]
    MissingParam(&'static str),

    #[error("invalid {name} parameter: {value:?}")]
    InvalidParam { name: &'static str, value: String },

    #[error("route not found: {0}")]
    NotFound(String),

    #[error("method {method} not allowed on {path}")]
    MethodNotAllowed { method: String, path: String },
}

impl BridgeError {
    /// HTTP-style status the JS bridge can branch on.
    pub fn status(&self) -> u16 {
        match self {
            BridgeError::InvalidJson(_)
            | BridgeError::MissingParam(_)
            | BridgeError::InvalidParam { .. } => 400,
            BridgeError::NotFound(_) => 404,
            BridgeError::MethodNotAllowed { .. } => 405,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::json!({ "error": self.to_string(), "status": self.status() }).to_string()
    }
}
