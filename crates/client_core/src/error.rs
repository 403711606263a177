use std::fmt;

use shared::error::ApiErrorBody;
use thiserror::Error;

use crate::REQUEST_TIMEOUT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    Timeout,
    Connect,
    Other,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransportErrorKind::Timeout => "timeout",
            TransportErrorKind::Connect => "connect",
            TransportErrorKind::Other => "other",
        })
    }
}

#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// No response was obtained.
    #[error("{message}")]
    Transport {
        kind: TransportErrorKind,
        message: String,
    },
    /// A response arrived with a status outside 2xx. `body` is the raw text.
    #[error("Request failed with status code {status}")]
    Service { status: u16, body: String },
    #[error("invalid response payload: {0}")]
    Decode(String),
    #[error("invalid api base url: {0}")]
    InvalidBaseUrl(String),
}

impl ClientError {
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return ClientError::Transport {
                kind: TransportErrorKind::Timeout,
                message: format!("timeout of {}ms exceeded", REQUEST_TIMEOUT.as_millis()),
            };
        }
        let kind = if err.is_connect() {
            TransportErrorKind::Connect
        } else {
            TransportErrorKind::Other
        };
        ClientError::Transport {
            kind,
            message: err.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Service { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            ClientError::Transport {
                kind: TransportErrorKind::Timeout,
                ..
            }
        )
    }

    /// Message embedded in a service error body, if the backend sent one.
    pub fn server_message(&self) -> Option<String> {
        match self {
            ClientError::Service { body, .. } => ApiErrorBody::parse(body)
                .as_ref()
                .and_then(ApiErrorBody::text)
                .map(str::to_owned),
            _ => None,
        }
    }

    /// Banner text: the server's message, else this error's own message, else
    /// `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message()
            .or_else(|| {
                let own = self.to_string();
                (!own.trim().is_empty()).then_some(own)
            })
            .unwrap_or_else(|| fallback.to_string())
    }
}
