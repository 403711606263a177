//! UI/backend events and error modeling for desktop GUI controller.

use client_core::{ClientError, ControllerOutcome, TransportErrorKind};

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    Error(UiError),
    Outcome(ControllerOutcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Service,
    Validation,
    Unknown,
}

impl UiErrorCategory {
    /// Banner prefix; `None` when the category adds nothing to the message.
    pub fn label(self) -> Option<&'static str> {
        match self {
            UiErrorCategory::Transport => Some("Connection problem"),
            UiErrorCategory::Service => Some("Service error"),
            UiErrorCategory::Validation => Some("Invalid input"),
            UiErrorCategory::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    General,
}

impl UiErrorContext {
    pub fn label(self) -> &'static str {
        match self {
            UiErrorContext::BackendStartup => "Startup",
            UiErrorContext::General => "Error",
        }
    }
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("timeout")
            || message_lower.contains("connection")
            || message_lower.contains("network")
            || message_lower.contains("transport")
            || message_lower.contains("unreachable")
            || message_lower.contains("disconnected")
        {
            UiErrorCategory::Transport
        } else if message_lower.contains("status code") {
            UiErrorCategory::Service
        } else if message_lower.contains("required")
            || message_lower.contains("invalid")
            || message_lower.contains("must be")
        {
            UiErrorCategory::Validation
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn from_client_error(context: UiErrorContext, err: &ClientError) -> Self {
        let category = match err {
            ClientError::Transport {
                kind: TransportErrorKind::Timeout | TransportErrorKind::Connect,
                ..
            } => UiErrorCategory::Transport,
            ClientError::Transport { .. } => UiErrorCategory::Unknown,
            ClientError::Service { .. } | ClientError::Decode(_) => UiErrorCategory::Service,
            ClientError::InvalidBaseUrl(_) => UiErrorCategory::Validation,
        };
        Self {
            category,
            context,
            message: err.user_message(context.label()),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Banner text labelled by category, with startup failures also marked
    /// as such.
    pub fn banner_text(&self) -> String {
        match (self.context, self.category.label()) {
            (UiErrorContext::BackendStartup, Some(category)) => {
                format!("{} ({category}): {}", self.context.label(), self.message)
            }
            (UiErrorContext::BackendStartup, None) => {
                format!("{}: {}", self.context.label(), self.message)
            }
            (UiErrorContext::General, Some(category)) => format!("{category}: {}", self.message),
            (UiErrorContext::General, None) => self.message.clone(),
        }
    }
}
