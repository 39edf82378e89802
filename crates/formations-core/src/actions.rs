//! Delete and edit actions of the list view
//!
//! The list page runs these against the browser's dialogs and its state
//! signal; tests run them against recorded dialogs and a plain cell. Each
//! action asks, sends at most one request, applies the response and alerts
//! on failure.

use std::cell::RefCell;

use tracing::debug;

use crate::api::{ApiResult, FormationApi};
use crate::error::ValidationError;
use crate::messages;
use crate::model::FormationId;
use crate::state::list::{ListState, UpdateRequest};

/// Blocking user dialogs.
pub trait Dialogs {
    /// Asks a yes/no question. Anything but an explicit yes is a no.
    fn confirm(&self, message: &str) -> bool;

    fn alert(&self, message: &str);
}

/// Where a view keeps its `ListState`.
pub trait ListStore {
    /// Runs `f` on the state, or returns `None` if the view is gone.
    fn apply<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut ListState) -> R;
}

impl ListStore for RefCell<ListState> {
    fn apply<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut ListState) -> R,
    {
        Some(f(&mut *self.borrow_mut()))
    }
}

/// How a delete or update request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user declined; nothing was sent.
    Declined,
    Applied,
    /// The request failed and the user was alerted.
    Failed,
    /// The view went away before the response arrived.
    Dropped,
}

fn settle<D>(dialogs: &D, applied: Option<ApiResult<()>>, failure: &str) -> Outcome
where
    D: Dialogs + ?Sized,
{
    match applied {
        Some(Ok(())) => Outcome::Applied,
        Some(Err(_)) => {
            dialogs.alert(failure);
            Outcome::Failed
        }
        None => Outcome::Dropped,
    }
}

/// Deletes `id` once the user confirms.
pub async fn delete_formation<A, D, S>(
    api: &A,
    dialogs: &D,
    store: &S,
    id: &FormationId,
) -> Outcome
where
    A: FormationApi + ?Sized,
    D: Dialogs + ?Sized,
    S: ListStore,
{
    if !dialogs.confirm(messages::CONFIRM_DELETE) {
        debug!(%id, "delete declined");
        return Outcome::Declined;
    }
    let result = api.delete(id).await;
    settle(
        dialogs,
        store.apply(|list| list.complete_delete(id, result)),
        messages::DELETE_FAILED,
    )
}

/// Validates the open edit form. Invalid drafts are alerted and returned as
/// errors; `Ok(None)` means there is nothing to send.
///
/// # Errors
/// Returns the draft's `ValidationError` after alerting it.
pub fn prepare_update<D, S>(
    dialogs: &D,
    store: &S,
) -> Result<Option<UpdateRequest>, ValidationError>
where
    D: Dialogs + ?Sized,
    S: ListStore,
{
    match store.apply(ListState::prepare_update) {
        None => Ok(None),
        Some(Err(err)) => {
            dialogs.alert(&err.user_message());
            Err(err)
        }
        Some(Ok(request)) => Ok(request),
    }
}

/// Sends a prepared update and applies the server's copy.
pub async fn send_update<A, D, S>(
    api: &A,
    dialogs: &D,
    store: &S,
    request: UpdateRequest,
) -> Outcome
where
    A: FormationApi + ?Sized,
    D: Dialogs + ?Sized,
    S: ListStore,
{
    let result = api.update(&request.id, &request.payload).await;
    settle(
        dialogs,
        store.apply(|list| list.complete_update(&request.id, result)),
        messages::UPDATE_FAILED,
    )
}
