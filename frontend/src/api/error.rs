use leptos::*;
use serde_json::Value;
use thiserror::Error;

/// What could be recovered from the body of a non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorBody {
    Detail(String),
    Message(String),
    Unparseable,
}

impl ErrorBody {
    pub fn decode(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => Self::from_value(&value),
            Err(_) => Self::Unparseable,
        }
    }

    pub fn from_value(value: &Value) -> Self {
        if let Some(detail) = value.get("detail").and_then(detail_text) {
            return Self::Detail(detail);
        }
        match value.get("message").and_then(Value::as_str) {
            Some(message) if !message.trim().is_empty() => Self::Message(message.to_string()),
            _ => Self::Unparseable,
        }
    }
}

// FastAPI reports schema violations as `detail: [{ "msg": ... }, ...]`.
fn detail_text(detail: &Value) -> Option<String> {
    match detail {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Unable to reach {url}: {reason}")]
    Transport { url: String, reason: String },
    #[error("{}", status_message(body, fallback, *status))]
    Status {
        url: String,
        status: u16,
        body: ErrorBody,
        fallback: String,
    },
    #[error("Unexpected response from {url}: {reason}")]
    Decode { url: String, reason: String },
}

fn status_message(body: &ErrorBody, fallback: &str, status: u16) -> String {
    match body {
        ErrorBody::Detail(text) | ErrorBody::Message(text) => text.clone(),
        ErrorBody::Unparseable => format!("{} (status {})", fallback, status),
    }
}

impl RequestError {
    pub fn transport(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::Transport {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn decode(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::Decode {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// The text shown to the user.
    pub fn message(&self) -> String {
        self.to_string()
    }

    #[cfg(test)]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Self::Transport { url, .. } | Self::Status { url, .. } | Self::Decode { url, .. } => {
                url
            }
        }
    }
}

impl From<RequestError> for String {
    fn from(error: RequestError) -> Self {
        error.message()
    }
}

impl IntoView for RequestError {
    fn into_view(self) -> View {
        self.message().into_view()
    }
}
