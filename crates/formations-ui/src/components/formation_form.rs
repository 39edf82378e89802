//! One form for both creating and editing a formation
//!
//! Inputs come from a `FormSchema`; the form owns no state. Values are read
//! from `draft` and every keystroke is reported through `on_input`.

use leptos::prelude::*;

use formations_core::{FieldName, FieldSpec, FormSchema, FormationDraft};

/// A message attached to one field, rendered under its input.
pub type FieldError = Option<(FieldName, String)>;

/// DOM id of the input for `name` within the form of `schema`.
#[must_use]
pub fn input_id(schema: &FormSchema, name: FieldName) -> String {
    format!("{:?}-{}", schema.kind(), name.key()).to_lowercase()
}

#[component]
pub fn FormationForm(
    schema: FormSchema,
    #[prop(into)] draft: Signal<FormationDraft>,
    #[prop(into)] submitting: Signal<bool>,
    on_input: Callback<(FieldName, String)>,
    on_submit: Callback<()>,
    #[prop(optional)] on_cancel: Option<Callback<()>>,
    #[prop(optional)] field_error: Option<Signal<FieldError>>,
) -> impl IntoView {
    let inputs = schema
        .fields()
        .iter()
        .map(|spec| {
            let name = spec.name;
            let error = Signal::derive(move || {
                field_error
                    .and_then(|error| error.get())
                    .filter(|(field, _)| *field == name)
                    .map(|(_, message)| message)
            });
            view! {
                <FormField
                    spec=*spec
                    id=input_id(&schema, name)
                    draft=draft
                    error=error
                    on_input=on_input
                />
            }
        })
        .collect_view();

    view! {
        <form
            class="formation-form"
            novalidate=true
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            {inputs}
            <div class="form-actions">
                <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                    {move || {
                        if submitting.get() { schema.busy_label() } else { schema.submit_label() }
                    }}
                </button>
                {on_cancel.map(|cancel| {
                    view! {
                        <button type="button" class="btn-secondary" on:click=move |_| cancel.run(())>
                            {formations_core::messages::CANCEL}
                        </button>
                    }
                })}
            </div>
        </form>
    }
}

#[component]
fn FormField(
    spec: FieldSpec,
    id: String,
    draft: Signal<FormationDraft>,
    error: Signal<Option<String>>,
    on_input: Callback<(FieldName, String)>,
) -> impl IntoView {
    let name = spec.name;

    view! {
        <div class="form-group">
            <label for=id.clone()>{spec.label()}</label>
            <input
                id=id
                name=name.key()
                type=spec.kind.html_type()
                step=spec.kind.step()
                placeholder=spec.placeholder
                required=spec.required
                prop:value=move || draft.with(|draft| draft.get(name).to_string())
                on:input=move |ev| on_input.run((name, event_target_value(&ev)))
            />
            {move || error.get().map(|message| view! { <p class="field-error">{message}</p> })}
        </div>
    }
}
