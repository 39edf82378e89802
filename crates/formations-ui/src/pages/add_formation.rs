//! Create page: the add form, its image preview and the confirmation banner

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use tracing::debug;
use wasm_bindgen_futures::spawn_local;

use formations_core::{CreateError, CreateForm, FieldName, FormSchema, FormationApi, messages};

use crate::client::{HttpFormationApi, use_api};
use crate::components::formation_form::FieldError;
use crate::components::{FormationForm, FormationImage};

/// How long the success banner stays up.
pub const CONFIRMATION_MS: u32 = 4_000;

fn submit(api: HttpFormationApi, form: RwSignal<CreateForm>) {
    let Some(Some(payload)) = form.try_update(CreateForm::prepare_submit) else {
        return;
    };
    spawn_local(async move {
        let result = api.create(&payload).await;
        let confirmation = form
            .try_update(|form| {
                form.complete_submit(result);
                form.confirmation()
            })
            .flatten();
        if let Some(confirmation) = confirmation {
            Timeout::new(CONFIRMATION_MS, move || {
                if form
                    .try_update(|form| form.dismiss_confirmation(confirmation))
                    .is_none()
                {
                    debug!("create page gone before confirmation timed out");
                }
            })
            .forget();
        }
    });
}

/// Add formation page
#[component]
pub fn AddFormation() -> impl IntoView {
    let api = use_api();
    let form = RwSignal::new(CreateForm::new());
    let schema = FormSchema::create();

    let draft = Signal::derive(move || form.with(|form| form.draft().clone()));
    let submitting = Signal::derive(move || form.with(CreateForm::is_submitting));
    let image_error: Signal<FieldError> = Signal::derive(move || {
        form.with(|form| {
            form.image_error()
                .map(|err| (FieldName::ImageUrl, err.user_message()))
        })
    });
    let error = Memo::new(move |_| form.with(|form| form.error().map(CreateError::message)));
    let created = Memo::new(move |_| form.with(CreateForm::is_created));
    let preview = Memo::new(move |_| form.with(|form| form.preview_url().map(str::to_string)));

    let on_input = Callback::new(move |(name, value): (FieldName, String)| {
        form.update(|form| form.set_field(name, value));
    });
    let on_submit = Callback::new(move |()| submit(api.clone(), form));

    view! {
        <div class="add-formation-page">
            <h2>{schema.title()}</h2>

            <Show when=move || created.get()>
                <div class="success-banner">{messages::CREATE_SUCCEEDED}</div>
            </Show>
            {move || error.get().map(|message| view! { <div class="form-error">{message}</div> })}

            <FormationForm
                schema=schema
                draft=draft
                submitting=submitting
                on_input=on_input
                on_submit=on_submit
                field_error=image_error
            />

            {move || {
                preview
                    .get()
                    .map(|url| {
                        view! {
                            <div class="image-preview">
                                <FormationImage url=Some(url) alt=FieldName::ImageUrl.label() />
                            </div>
                        }
                    })
            }}
        </div>
    }
}
