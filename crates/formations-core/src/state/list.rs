//! State of the list/detail/edit view

use tracing::{debug, info, warn};

use crate::api::ApiResult;
use crate::draft::FormationDraft;
use crate::error::ValidationError;
use crate::model::{Formation, FormationId, FormationPayload};
use crate::schema::{FieldName, FormSchema};
use crate::validation;

/// Identifies one list fetch. Only the result of the latest fetch of a
/// live view is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FetchEpoch(u64);

impl FetchEpoch {
    const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Progress of the collection fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// An open edit form bound to a draft copy of one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    id: FormationId,
    draft: FormationDraft,
    submitting: bool,
}

impl EditSession {
    #[must_use]
    pub const fn id(&self) -> &FormationId {
        &self.id
    }

    #[must_use]
    pub const fn draft(&self) -> &FormationDraft {
        &self.draft
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }
}

/// A validated full replacement ready to be sent with `PUT`.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateRequest {
    pub id: FormationId,
    pub payload: FormationPayload,
}

/// Records shown by the list view, in server order, plus which one has its
/// details open and which one is being edited.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListState {
    load: LoadState,
    formations: Vec<Formation>,
    selected: Option<FormationId>,
    editing: Option<EditSession>,
    epoch: FetchEpoch,
}

impl ListState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fetch of the collection and returns its epoch.
    pub fn begin_load(&mut self) -> FetchEpoch {
        self.epoch = self.epoch.next();
        self.load = LoadState::Loading;
        self.epoch
    }

    /// Makes every in-flight fetch stale. Called when the view goes away.
    pub fn invalidate(&mut self) {
        self.epoch = self.epoch.next();
    }

    #[must_use]
    pub const fn current_epoch(&self) -> FetchEpoch {
        self.epoch
    }

    /// Applies the result of the fetch started at `epoch`.
    ///
    /// Returns false, leaving the state untouched, when `epoch` is stale.
    pub fn finish_load(&mut self, epoch: FetchEpoch, result: ApiResult<Vec<Formation>>) -> bool {
        if epoch != self.epoch {
            debug!(?epoch, current = ?self.epoch, "discarding stale formation list");
            return false;
        }

        match result {
            Ok(formations) => {
                debug!(count = formations.len(), "formations loaded");
                self.formations = formations;
                self.load = LoadState::Loaded;
                self.forget_missing();
            }
            Err(err) => {
                warn!(%err, "failed to load formations");
                self.load = LoadState::Failed;
            }
        }
        true
    }

    #[must_use]
    pub const fn load_state(&self) -> LoadState {
        self.load
    }

    #[must_use]
    pub fn formations(&self) -> &[Formation] {
        &self.formations
    }

    #[must_use]
    pub fn formation(&self, id: &FormationId) -> Option<&Formation> {
        self.formations.iter().find(|formation| &formation.id == id)
    }

    /// Record whose details are open.
    #[must_use]
    pub const fn selected(&self) -> Option<&FormationId> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn is_selected(&self, id: &FormationId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    /// Opens `id`'s details, closing any other; closes them if already open.
    pub fn toggle_details(&mut self, id: &FormationId) {
        if self.is_selected(id) {
            self.selected = None;
        } else {
            self.selected = Some(id.clone());
        }
    }

    /// Opens the edit form on a copy of `id`'s current values.
    ///
    /// Returns false if the record is unknown or another update is in flight.
    pub fn begin_edit(&mut self, id: &FormationId) -> bool {
        if self.editing.as_ref().is_some_and(EditSession::is_submitting) {
            return false;
        }
        let Some(draft) = self.formation(id).map(FormationDraft::from_formation) else {
            return false;
        };
        self.editing = Some(EditSession {
            id: id.clone(),
            draft,
            submitting: false,
        });
        true
    }

    #[must_use]
    pub const fn edit_session(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn set_edit_field(&mut self, name: FieldName, value: impl Into<String>) {
        if let Some(session) = self.editing.as_mut() {
            session.draft.set(name, value);
        }
    }

    /// Closes the edit form, discarding the draft.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Validates the edit draft and marks it as submitting.
    ///
    /// `Ok(None)` means there is nothing to send: no form is open or its
    /// previous submission is still pending.
    ///
    /// # Errors
    /// Returns the `ValidationError` of the draft; no request must be sent.
    pub fn prepare_update(&mut self) -> Result<Option<UpdateRequest>, ValidationError> {
        let Some(session) = self.editing.as_mut() else {
            return Ok(None);
        };
        if session.submitting {
            return Ok(None);
        }

        let payload = validation::validate(&FormSchema::edit(), &session.draft)?;
        session.submitting = true;
        Ok(Some(UpdateRequest {
            id: session.id.clone(),
            payload,
        }))
    }

    /// Applies the response to the update of `id`: on success the record is
    /// replaced by the server's representation and the form closes; on
    /// failure the form stays open with its draft.
    ///
    /// # Errors
    /// Returns the request's `ApiError` so the caller can alert the user.
    pub fn complete_update(&mut self, id: &FormationId, result: ApiResult<Formation>) -> ApiResult<()> {
        match result {
            Ok(updated) => {
                info!(%id, "formation updated");
                if let Some(slot) = self.formations.iter_mut().find(|f| &f.id == id) {
                    *slot = updated;
                }
                if self.editing.as_ref().is_some_and(|session| &session.id == id) {
                    self.editing = None;
                }
                Ok(())
            }
            Err(err) => {
                warn!(%id, %err, "failed to update formation");
                if let Some(session) = self.editing.as_mut().filter(|session| &session.id == id) {
                    session.submitting = false;
                }
                Err(err)
            }
        }
    }

    /// Applies the response to the deletion of `id`. The list is only touched
    /// on success.
    ///
    /// # Errors
    /// Returns the request's `ApiError` so the caller can alert the user.
    pub fn complete_delete(&mut self, id: &FormationId, result: ApiResult<()>) -> ApiResult<()> {
        match result {
            Ok(()) => {
                info!(%id, "formation deleted");
                self.remove(id);
                Ok(())
            }
            Err(err) => {
                warn!(%id, %err, "failed to delete formation");
                Err(err)
            }
        }
    }

    /// Removes `id` from the list, closing its details and edit form.
    pub fn remove(&mut self, id: &FormationId) -> Option<Formation> {
        let position = self.formations.iter().position(|f| &f.id == id)?;
        let removed = self.formations.remove(position);
        self.forget_missing();
        Some(removed)
    }

    fn forget_missing(&mut self) {
        let formations = &self.formations;
        let known = |id: &FormationId| formations.iter().any(|f| &f.id == id);

        if self.selected.as_ref().is_some_and(|id| !known(id)) {
            self.selected = None;
        }
        if self.editing.as_ref().is_some_and(|session| !known(&session.id)) {
            self.editing = None;
        }
    }
}
