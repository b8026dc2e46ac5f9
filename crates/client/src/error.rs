use domain::dispensing::Shortage;
use domain::Error as DomainError;
use serde::Deserialize;
use thiserror::Error;

/// Errors emitted while talking to the remote system of record.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request never produced a usable response.
    #[error("transport error: {0}")]
    Transport(String),

    /// Request reached the remote and was refused. The body may carry
    /// machine-readable detail; see [`interpret_failure`].
    #[error("remote API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response arrived but its payload did not parse.
    #[error("payload parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value.to_string())
    }
}

impl ClientError {
    /// Collapses a transport-level failure into the domain taxonomy.
    pub fn into_domain(self) -> DomainError {
        match self {
            ClientError::Api { status, message } => interpret_failure(status, &message),
            other => DomainError::Remote {
                message: other.to_string(),
            },
        }
    }
}

/// Body shape the remote uses for machine-readable rejections.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    items: Vec<Shortage>,
}

/// Maps a non-success response onto the domain taxonomy.
///
/// A parseable `insufficient_stock` body becomes the structured
/// per-item error; everything else is an opaque message.
pub fn interpret_failure(status: u16, body: &str) -> DomainError {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if parsed.code.as_deref() == Some("insufficient_stock") && !parsed.items.is_empty() {
            return DomainError::InsufficientStock {
                shortages: parsed.items,
            };
        }
        if let Some(message) = parsed.message {
            return DomainError::Remote { message };
        }
    }

    DomainError::Remote {
        message: format!("HTTP {status}: {body}"),
    }
}
