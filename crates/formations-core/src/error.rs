//! Error types for formation operations.
//!
//! Two kinds only: `ValidationError` is raised before any request is sent,
//! `ApiError` covers every failed call to the remote API. Neither carries a
//! message meant for the user; see [`ValidationError::user_message`] and
//! [`crate::messages`].

use thiserror::Error;

use crate::messages;
use crate::schema::FieldName;

/// Failure of a call to the formations REST API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request to '{url}' failed: {reason}")]
    Network { url: String, reason: String },

    #[error("server answered {status} for '{url}'")]
    Status { url: String, status: u16 },

    #[error("failed to decode response from '{url}': {reason}")]
    Decode { url: String, reason: String },

    #[error("failed to encode request body: {reason}")]
    Encode { reason: String },
}

impl ApiError {
    /// Create a network error.
    pub fn network(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Network {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create an unexpected-status error.
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Self::Status {
            url: url.into(),
            status,
        }
    }

    /// Create a response decoding error.
    pub fn decode(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Decode {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create a request encoding error.
    pub fn encode(reason: impl Into<String>) -> Self {
        Self::Encode {
            reason: reason.into(),
        }
    }
}

/// A draft rejected before submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("'{value}' is not an http(s) URL to a png, jpg, jpeg, gif, bmp or svg image")]
    InvalidImageUrl { value: String },

    #[error("missing required fields: {}", join_fields(.fields))]
    MissingFields { fields: Vec<FieldName> },

    #[error("field '{field}' is not a valid number: '{value}'")]
    InvalidNumber { field: FieldName, value: String },

    #[error("'{value}' is not a valid date")]
    InvalidDate { value: String },
}

impl ValidationError {
    /// True for the image-specific error, which forms show next to the image field.
    #[must_use]
    pub const fn is_image_error(&self) -> bool {
        matches!(self, Self::InvalidImageUrl { .. })
    }

    /// Message shown to the user for this error.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidImageUrl { .. } => messages::INVALID_IMAGE_URL.to_string(),
            Self::MissingFields { .. } => messages::ALL_FIELDS_REQUIRED.to_string(),
            Self::InvalidNumber { field, .. } => messages::invalid_number(*field),
            Self::InvalidDate { .. } => messages::INVALID_DATE.to_string(),
        }
    }
}

fn join_fields(fields: &[FieldName]) -> String {
    fields
        .iter()
        .map(|field| field.key())
        .collect::<Vec<_>>()
        .join(", ")
}
