use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Everything that can go wrong during a call to the API
///
/// The REST operations never inspect these, they are returned exactly as the transport produced them.
#[derive(Error, Debug)]
pub enum HttpError {
    /// The request could not be built or sent, or the connection failed or timed out
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),

    /// Discord answered with a non-success status
    #[error("Discord API error {status}: {message}")]
    Api {
        status: StatusCode,
        /// Discord's [JSON error code](https://discord.com/developers/docs/topics/opcodes-and-status-codes#json), when the body had one
        code: Option<u64>,
        message: String,
    },

    /// A payload could not be serialized, or a response body did not match the expected object
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    /// An identifier that cannot be a single path segment, refused before anything is sent
    #[error("Invalid id {0:?}")]
    InvalidId(String),
}

impl HttpError {
    /// The HTTP status, if Discord answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Request(e) => e.status(),
            _ => None,
        }
    }

    /// Build the error for a non-success response from its status and raw body
    pub(crate) fn from_response(status: StatusCode, body: &[u8]) -> Self {
        #[derive(Deserialize)]
        struct ApiErrorBody {
            code: Option<u64>,
            message: Option<String>,
        }

        match serde_json::from_slice::<ApiErrorBody>(body) {
            Ok(parsed) => Self::Api {
                status,
                code: parsed.code,
                message: parsed.message.unwrap_or_else(|| status.to_string()),
            },
            Err(_) => Self::Api {
                status,
                code: None,
                message: String::from_utf8_lossy(body).into_owned(),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, HttpError>;
