//! Normalization of failed API calls into one user-facing message.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::shared::toast::Toasts;

pub const GENERIC_ERROR: &str = "An unexpected error occurred";

/// Everything a failed call can look like on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiFailure {
    /// Field-level validation map: `{message, errors: {field: [msgs]}}`.
    Validation {
        message: Option<String>,
        errors: BTreeMap<String, Vec<String>>,
    },
    /// Flat API error: `{message}` or `{error, message}`.
    Api { message: String },
    /// Network failure or a body that is not parseable JSON.
    Transport,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    errors: Option<BTreeMap<String, Vec<String>>>,
}

impl ApiFailure {
    /// Classify a captured error payload. Unparseable bodies fall back to
    /// the transport variant.
    pub fn from_body(body: &str) -> Self {
        let parsed: ErrorBody = match serde_json::from_str(body) {
            Ok(parsed) => parsed,
            Err(_) => return ApiFailure::Transport,
        };
        match parsed {
            ErrorBody {
                errors: Some(errors),
                message,
                ..
            } if !errors.is_empty() => ApiFailure::Validation { message, errors },
            ErrorBody {
                message: Some(message),
                ..
            } => ApiFailure::Api { message },
            ErrorBody {
                error: Some(message),
                ..
            } => ApiFailure::Api { message },
            _ => ApiFailure::Transport,
        }
    }

    /// The single message shown to the user. Priority: first message of the
    /// first validation field, then the accompanying message, then the flat
    /// message, then the generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            ApiFailure::Validation { message, errors } => errors
                .values()
                .next()
                .and_then(|msgs| msgs.first().cloned())
                .or_else(|| message.clone())
                .unwrap_or_else(|| GENERIC_ERROR.to_string()),
            ApiFailure::Api { message } => message.clone(),
            ApiFailure::Transport => GENERIC_ERROR.to_string(),
        }
    }

    /// Surface the failure: one log line, exactly one toast.
    pub fn report(&self, toasts: Toasts) {
        let message = self.user_message();
        log::warn!("api call failed: {:?}", self);
        toasts.error(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_win_over_top_level_message() {
        let failure =
            ApiFailure::from_body(r#"{"message":"failed","errors":{"email":["already taken"]}}"#);
        assert_eq!(failure.user_message(), "already taken");
    }

    #[test]
    fn flat_message_used_when_no_errors_field() {
        let failure = ApiFailure::from_body(r#"{"message":"Not found"}"#);
        assert_eq!(failure.user_message(), "Not found");
    }

    #[test]
    fn error_key_accepted_as_flat_message() {
        let failure = ApiFailure::from_body(r#"{"error":"Forbidden"}"#);
        assert_eq!(failure.user_message(), "Forbidden");
    }

    #[test]
    fn unparseable_body_falls_back_to_generic() {
        let failure = ApiFailure::from_body("<html>502</html>");
        assert_eq!(failure, ApiFailure::Transport);
        assert_eq!(failure.user_message(), GENERIC_ERROR);
    }

    #[test]
    fn empty_errors_map_degrades_to_flat_message() {
        let failure = ApiFailure::from_body(r#"{"message":"failed","errors":{}}"#);
        assert_eq!(failure.user_message(), "failed");
    }

    #[test]
    fn validation_without_field_messages_uses_its_message() {
        let failure = ApiFailure::from_body(r#"{"message":"failed","errors":{"email":[]}}"#);
        assert_eq!(failure.user_message(), "failed");
    }
}
