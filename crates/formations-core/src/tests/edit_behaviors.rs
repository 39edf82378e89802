//! Behavioral tests for the edit form of the list view

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::support::{formation, loaded};
use crate::error::{ApiError, ValidationError};
use crate::messages;
use crate::model::FormationId;
use crate::schema::FieldName;

// ============================================================================
// OPENING THE FORM
// ============================================================================

#[test]
fn given_loaded_record_when_edit_opened_then_draft_mirrors_record() {
    // Given
    let mut state = loaded(vec![formation("1", "Go Basics")]);
    let id = FormationId::new("1");

    // When
    assert!(state.begin_edit(&id));

    // Then
    let session = state.edit_session().unwrap();
    assert_eq!(session.id(), &id);
    assert_eq!(session.draft().get(FieldName::Nom), "Go Basics");
    assert_eq!(session.draft().get(FieldName::Prix), "100");
    assert_eq!(session.draft().get(FieldName::DateFormation), "2024-01-01");
    assert!(!session.is_submitting());
}

#[test]
fn given_open_form_when_typing_then_record_in_list_is_untouched() {
    // Given
    let mut state = loaded(vec![formation("1", "Go Basics")]);
    let id = FormationId::new("1");
    state.begin_edit(&id);

    // When
    state.set_edit_field(FieldName::Nom, "Go Avancé");

    // Then
    assert_eq!(state.formation(&id).unwrap().nom, "Go Basics");
    assert_eq!(
        state.edit_session().unwrap().draft().get(FieldName::Nom),
        "Go Avancé"
    );
}

#[test]
fn given_open_form_when_cancelled_then_form_closes_without_changes() {
    // Given
    let mut state = loaded(vec![formation("1", "Go Basics")]);
    let id = FormationId::new("1");
    state.begin_edit(&id);
    state.set_edit_field(FieldName::Nom, "Changed");

    // When
    state.cancel_edit();

    // Then
    assert!(!state.is_editing());
    assert_eq!(state.formation(&id).unwrap().nom, "Go Basics");
}

// ============================================================================
// SUBMISSION
// ============================================================================

#[test]
fn given_blanked_field_when_submitting_then_rejected_without_request() {
    // Given
    let mut state = loaded(vec![formation("1", "Go Basics")]);
    state.begin_edit(&FormationId::new("1"));
    state.set_edit_field(FieldName::Thematique, "");

    // When
    let result = state.prepare_update();

    // Then
    match result {
        Err(err @ ValidationError::MissingFields { .. }) => {
            assert_eq!(err.user_message(), messages::ALL_FIELDS_REQUIRED);
        }
        other => panic!("expected MissingFields, got {other:?}"),
    }
    let session = state.edit_session().unwrap();
    assert!(!session.is_submitting(), "form stays open and idle");
}

#[test]
fn given_valid_draft_when_submitting_then_full_record_payload_is_produced() {
    // Given
    let mut state = loaded(vec![formation("1", "Go Basics")]);
    let id = FormationId::new("1");
    state.begin_edit(&id);
    state.set_edit_field(FieldName::Prix, "120.5");

    // When
    let request = state.prepare_update().unwrap().unwrap();

    // Then
    assert_eq!(request.id, id);
    assert_eq!(request.payload.nom, "Go Basics");
    assert_eq!(request.payload.nombre_utilisations, 5);
    assert!((request.payload.prix - 120.5).abs() < f64::EPSILON);
    assert_eq!(request.payload.image_url.as_deref(), Some("https://x.com/1.png"));
    assert!(state.edit_session().unwrap().is_submitting());
}

#[test]
fn given_pending_update_when_submitting_again_then_nothing_is_sent() {
    // Given
    let mut state = loaded(vec![formation("1", "Go Basics")]);
    state.begin_edit(&FormationId::new("1"));
    state.prepare_update().unwrap();

    // When
    let second = state.prepare_update();

    // Then
    assert_eq!(second, Ok(None));
}

#[test]
fn given_server_accepts_update_when_applied_then_record_replaced_and_form_closed() {
    // Given
    let mut state = loaded(vec![formation("1", "Go Basics"), formation("2", "Rust")]);
    let id = FormationId::new("1");
    state.begin_edit(&id);
    state.prepare_update().unwrap();
    let mut stored = formation("1", "Go Basics (2e édition)");
    stored.prix = 150.0;

    // When
    let result = state.complete_update(&id, Ok(stored.clone()));

    // Then
    assert!(result.is_ok());
    assert!(!state.is_editing());
    assert_eq!(state.formation(&id), Some(&stored));
    assert_eq!(state.formations().len(), 2);
    assert_eq!(state.formations().first().unwrap().id, id, "position is kept");
}

#[test]
fn given_server_rejects_update_when_applied_then_form_stays_open_with_draft() {
    // Given
    let mut state = loaded(vec![formation("1", "Go Basics")]);
    let id = FormationId::new("1");
    state.begin_edit(&id);
    state.set_edit_field(FieldName::Nom, "Nouveau nom");
    state.prepare_update().unwrap();

    // When
    let result = state.complete_update(&id, Err(ApiError::status("u", 400)));

    // Then
    assert!(result.is_err());
    let session = state.edit_session().unwrap();
    assert!(!session.is_submitting());
    assert_eq!(session.draft().get(FieldName::Nom), "Nouveau nom");
    assert_eq!(state.formation(&id).unwrap().nom, "Go Basics");
}

#[test]
fn given_legacy_record_without_image_when_submitting_then_image_is_required() {
    // Given
    let mut legacy = formation("1", "Ancienne");
    legacy.image_url = None;
    let mut state = loaded(vec![legacy]);
    state.begin_edit(&FormationId::new("1"));

    // When
    let result = state.prepare_update();

    // Then
    assert!(matches!(result, Err(ValidationError::InvalidImageUrl { .. })));
}
