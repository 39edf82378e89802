//! List page: every formation as a card, with details, edit and delete
//!
//! All state lives in one `ListState` signal. Requests run on
//! `spawn_local`; their results are applied with `try_update`, so a response
//! arriving after the page is gone is dropped, and the fetch epoch is
//! invalidated on cleanup so a late list never overwrites a newer one.

use leptos::prelude::*;
use tracing::debug;
use wasm_bindgen_futures::spawn_local;

use formations_core::{
    EditSession, FieldName, FormSchema, FormationApi, FormationId, ListState, ListStore, LoadState,
    actions, messages,
};

use crate::client::{HttpFormationApi, use_api};
use crate::components::{FormationCard, FormationForm};
use crate::dialog::BrowserDialogs;

/// The page's `ListState` signal as seen by the shared actions.
#[derive(Clone, Copy)]
struct ListSignal(RwSignal<ListState>);

impl ListStore for ListSignal {
    fn apply<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut ListState) -> R,
    {
        self.0.try_update(f)
    }
}

fn load_formations(api: HttpFormationApi, state: RwSignal<ListState>) {
    let Some(epoch) = state.try_update(ListState::begin_load) else {
        return;
    };
    spawn_local(async move {
        let result = api.list().await;
        if state.try_update(|list| list.finish_load(epoch, result)).is_none() {
            debug!("list page disposed before formations arrived");
        }
    });
}

fn delete_formation(api: HttpFormationApi, state: RwSignal<ListState>, id: FormationId) {
    spawn_local(async move {
        let outcome =
            actions::delete_formation(&api, &BrowserDialogs, &ListSignal(state), &id).await;
        debug!(%id, ?outcome, "delete finished");
    });
}

fn submit_update(
    api: HttpFormationApi,
    state: RwSignal<ListState>,
    edit_error: RwSignal<Option<String>>,
) {
    let store = ListSignal(state);
    match actions::prepare_update(&BrowserDialogs, &store) {
        Ok(None) => {}
        Err(err) => edit_error.set(Some(err.user_message())),
        Ok(Some(request)) => {
            edit_error.set(None);
            spawn_local(async move {
                let id = request.id.clone();
                let outcome = actions::send_update(&api, &BrowserDialogs, &store, request).await;
                debug!(%id, ?outcome, "update finished");
            });
        }
    }
}

/// Formations list page
#[component]
pub fn Formations() -> impl IntoView {
    let api = use_api();
    let state = RwSignal::new(ListState::new());

    load_formations(api.clone(), state);
    on_cleanup(move || {
        state.try_update_untracked(ListState::invalidate);
    });

    let load_state = Memo::new(move |_| state.with(ListState::load_state));
    let formations = Memo::new(move |_| state.with(|list| list.formations().to_vec()));
    let selected = Memo::new(move |_| state.with(|list| list.selected().cloned()));
    let is_editing = Memo::new(move |_| state.with(ListState::is_editing));
    let edit_error = RwSignal::new(None::<String>);

    let on_toggle =
        Callback::new(move |id: FormationId| state.update(|list| list.toggle_details(&id)));
    let on_edit = Callback::new(move |id: FormationId| {
        let opened = state.try_update(|list| list.begin_edit(&id)).unwrap_or(false);
        if opened {
            edit_error.set(None);
        } else {
            debug!(%id, "edit not opened");
        }
    });
    let on_delete = {
        let api = api.clone();
        Callback::new(move |id: FormationId| delete_formation(api.clone(), state, id))
    };

    let edit_schema = FormSchema::edit();
    let edit_draft = Signal::derive(move || {
        state.with(|list| {
            list.edit_session()
                .map(|session| session.draft().clone())
                .unwrap_or_default()
        })
    });
    let edit_submitting = Signal::derive(move || {
        state.with(|list| list.edit_session().is_some_and(EditSession::is_submitting))
    });
    let on_edit_input = Callback::new(move |(name, value): (FieldName, String)| {
        state.update(|list| list.set_edit_field(name, value));
        edit_error.set(None);
    });
    let on_edit_submit = Callback::new(move |()| submit_update(api.clone(), state, edit_error));
    let on_edit_cancel = Callback::new(move |()| {
        state.update(ListState::cancel_edit);
        edit_error.set(None);
    });

    let cards = move || {
        formations
            .get()
            .into_iter()
            .map(|formation| {
                let id = formation.id.clone();
                let expanded =
                    Signal::derive(move || selected.with(|open| open.as_ref() == Some(&id)));
                view! {
                    <FormationCard
                        formation=formation
                        expanded=expanded
                        on_toggle=on_toggle
                        on_edit=on_edit
                        on_delete=on_delete
                    />
                }
            })
            .collect_view()
    };

    view! {
        <div class="formations-page">
            <h1>{messages::LIST_TITLE}</h1>

            {move || match load_state.get() {
                LoadState::Idle | LoadState::Loading => {
                    view! { <div class="status-message">{messages::LOADING}</div> }.into_any()
                }
                LoadState::Failed => {
                    view! { <div class="status-message error">{messages::LOAD_FAILED}</div> }.into_any()
                }
                LoadState::Loaded if formations.with(Vec::is_empty) => {
                    view! { <div class="status-message">{messages::EMPTY_LIST}</div> }.into_any()
                }
                LoadState::Loaded => {
                    view! { <div class="formations-grid">{cards}</div> }.into_any()
                }
            }}

            <Show when=move || is_editing.get()>
                <section class="edit-panel">
                    <h3>{edit_schema.title()}</h3>
                    {move || edit_error.get().map(|message| view! { <div class="form-error">{message}</div> })}
                    <FormationForm
                        schema=edit_schema
                        draft=edit_draft
                        submitting=edit_submitting
                        on_input=on_edit_input
                        on_submit=on_edit_submit
                        on_cancel=on_edit_cancel
                    />
                </section>
            </Show>
        </div>
    }
}
