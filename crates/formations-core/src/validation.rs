//! Draft validation and coercion into a request payload.
//!
//! Checks run in a fixed order and stop at the first failure:
//! 1. patterned fields (the image URL) must be non-empty and match;
//! 2. every required field must be non-blank;
//! 3. numeric and date fields must parse.

use std::sync::LazyLock;

use regex::Regex;

use crate::draft::FormationDraft;
use crate::error::ValidationError;
use crate::model::{FormationPayload, parse_formation_date};
use crate::schema::{FieldName, FieldPattern, FormSchema};

/// Pattern an image URL must match.
pub const IMAGE_URL_PATTERN: &str = r"^https?://.*\.(png|jpg|jpeg|gif|bmp|svg)$";

// The pattern is a literal covered by `test_image_url_pattern_compiles`.
#[expect(clippy::expect_used)]
static IMAGE_URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(IMAGE_URL_PATTERN).expect("hardcoded regex pattern is valid"));

/// Validation result type.
pub type ValidationResult<T = ()> = Result<T, ValidationError>;

impl FieldPattern {
    #[must_use]
    pub fn matches(self, value: &str) -> bool {
        match self {
            Self::ImageUrl => is_valid_image_url(value),
        }
    }
}

/// True if `url` is an http(s) URL ending in a supported image extension.
#[must_use]
pub fn is_valid_image_url(url: &str) -> bool {
    IMAGE_URL_REGEX.is_match(url)
}

/// Checks every patterned field of `schema`.
///
/// # Errors
/// Returns `ValidationError::InvalidImageUrl` if a patterned field is empty
/// or does not match its pattern.
pub fn validate_patterns(schema: &FormSchema, draft: &FormationDraft) -> ValidationResult {
    schema
        .fields()
        .iter()
        .filter_map(|spec| spec.pattern.map(|pattern| (spec.name, pattern)))
        .try_for_each(|(name, pattern)| {
            let value = draft.trimmed(name);
            if !value.is_empty() && pattern.matches(value) {
                Ok(())
            } else {
                Err(ValidationError::InvalidImageUrl {
                    value: value.to_string(),
                })
            }
        })
}

/// Checks that every required field of `schema` is non-blank.
///
/// # Errors
/// Returns `ValidationError::MissingFields` listing every blank required field.
pub fn validate_required(schema: &FormSchema, draft: &FormationDraft) -> ValidationResult {
    let missing: Vec<FieldName> = schema
        .fields()
        .iter()
        .filter(|spec| spec.required && draft.is_blank(spec.name))
        .map(|spec| spec.name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields { fields: missing })
    }
}

/// Validates `draft` against `schema` and coerces it into a payload.
///
/// # Errors
/// Returns the first `ValidationError` found, in the order documented on this module.
pub fn validate(schema: &FormSchema, draft: &FormationDraft) -> ValidationResult<FormationPayload> {
    validate_patterns(schema, draft)?;
    validate_required(schema, draft)?;
    to_payload(schema, draft)
}

fn to_payload(schema: &FormSchema, draft: &FormationDraft) -> ValidationResult<FormationPayload> {
    let date_value = draft.trimmed(FieldName::DateFormation);
    let date_formation =
        parse_formation_date(date_value).ok_or_else(|| ValidationError::InvalidDate {
            value: date_value.to_string(),
        })?;

    let image_url = schema
        .field(FieldName::ImageUrl)
        .map(|_| draft.trimmed(FieldName::ImageUrl).to_string())
        .filter(|url| !url.is_empty());

    Ok(FormationPayload {
        nom: draft.trimmed(FieldName::Nom).to_string(),
        date_formation,
        nombre_utilisations: parse_integer(draft, FieldName::NombreUtilisations)?,
        thematique: draft.trimmed(FieldName::Thematique).to_string(),
        prix: parse_decimal(draft, FieldName::Prix)?,
        image_url,
    })
}

fn parse_integer(draft: &FormationDraft, field: FieldName) -> ValidationResult<i64> {
    let value = draft.trimmed(field);
    value.parse().map_err(|_| ValidationError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

fn parse_decimal(draft: &FormationDraft, field: FieldName) -> ValidationResult<f64> {
    let value = draft.trimmed(field);
    value
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .ok_or_else(|| ValidationError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}
