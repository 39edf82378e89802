//! State of the create view

use tracing::{info, warn};

use crate::api::ApiResult;
use crate::draft::FormationDraft;
use crate::error::ValidationError;
use crate::messages;
use crate::model::{Formation, FormationPayload};
use crate::schema::{FieldName, FormSchema};
use crate::validation;

/// Generic (non-image) error shown above the create form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateError {
    /// The draft failed validation; nothing was sent.
    Invalid(ValidationError),
    /// The create request failed; the draft is kept.
    SubmitFailed,
}

impl CreateError {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Invalid(err) => err.user_message(),
            Self::SubmitFailed => messages::CREATE_FAILED.to_string(),
        }
    }
}

/// Identifies the confirmation shown after one successful create, so a
/// timer started for an earlier success cannot hide a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Confirmation(u64);

/// The create form: one draft, an image-specific error, a generic error,
/// and whether a submission is pending or just succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateForm {
    draft: FormationDraft,
    image_error: Option<ValidationError>,
    error: Option<CreateError>,
    submitting: bool,
    confirmation: Option<Confirmation>,
    successes: u64,
}

impl CreateForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn draft(&self) -> &FormationDraft {
        &self.draft
    }

    /// Records a keystroke. Editing the image URL clears the image error so
    /// the preview follows the new value.
    pub fn set_field(&mut self, name: FieldName, value: impl Into<String>) {
        self.draft.set(name, value);
        if name == FieldName::ImageUrl {
            self.image_error = None;
        }
    }

    #[must_use]
    pub const fn image_error(&self) -> Option<&ValidationError> {
        self.image_error.as_ref()
    }

    #[must_use]
    pub const fn error(&self) -> Option<&CreateError> {
        self.error.as_ref()
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// True while the success confirmation is showing.
    #[must_use]
    pub const fn is_created(&self) -> bool {
        self.confirmation.is_some()
    }

    /// The confirmation currently showing.
    #[must_use]
    pub const fn confirmation(&self) -> Option<Confirmation> {
        self.confirmation
    }

    /// URL to preview: the current image URL, unless empty or flagged.
    #[must_use]
    pub fn preview_url(&self) -> Option<&str> {
        if self.image_error.is_some() {
            return None;
        }
        Some(self.draft.trimmed(FieldName::ImageUrl)).filter(|url| !url.is_empty())
    }

    /// Validates the draft. Returns the payload to `POST` and marks the form
    /// as submitting, or returns `None` (no request) after recording why.
    pub fn prepare_submit(&mut self) -> Option<FormationPayload> {
        if self.submitting {
            return None;
        }
        self.image_error = None;
        self.error = None;
        self.confirmation = None;

        match validation::validate(&FormSchema::create(), &self.draft) {
            Ok(payload) => {
                self.submitting = true;
                Some(payload)
            }
            Err(err) if err.is_image_error() => {
                self.image_error = Some(err);
                None
            }
            Err(err) => {
                self.error = Some(CreateError::Invalid(err));
                None
            }
        }
    }

    /// Applies the create response. On success every field is cleared and the
    /// confirmation shows; on failure the entered values stay.
    pub fn complete_submit(&mut self, result: ApiResult<Formation>) -> Option<Formation> {
        self.submitting = false;
        match result {
            Ok(created) => {
                info!(id = %created.id, "formation created");
                self.draft.clear();
                self.successes = self.successes.wrapping_add(1);
                self.confirmation = Some(Confirmation(self.successes));
                Some(created)
            }
            Err(err) => {
                warn!(%err, "failed to create formation");
                self.error = Some(CreateError::SubmitFailed);
                None
            }
        }
    }

    /// Hides `confirmation` if it is still the one showing.
    pub fn dismiss_confirmation(&mut self, confirmation: Confirmation) {
        if self.confirmation == Some(confirmation) {
            self.confirmation = None;
        }
    }
}
