//! Card summarising one formation, with its action buttons

use leptos::prelude::*;

use formations_core::display::{format_date, format_price, format_timestamp};
use formations_core::messages;
use formations_core::{Formation, FormationId};

use crate::components::formation_image::FormationImage;

/// Label of the details toggle.
#[must_use]
pub const fn details_label(expanded: bool) -> &'static str {
    if expanded {
        messages::HIDE_DETAILS
    } else {
        messages::SHOW_DETAILS
    }
}

#[component]
pub fn FormationCard(
    formation: Formation,
    #[prop(into)] expanded: Signal<bool>,
    on_toggle: Callback<FormationId>,
    on_edit: Callback<FormationId>,
    on_delete: Callback<FormationId>,
) -> impl IntoView {
    let toggle_id = formation.id.clone();
    let edit_id = formation.id.clone();
    let delete_id = formation.id.clone();

    let date = format_date(formation.date_formation);
    let price = format_price(formation.prix);
    let detail_date = date.clone();
    let detail_price = price.clone();
    let detail_theme = formation.thematique.clone();

    view! {
        <article class="formation-card">
            <FormationImage
                url=formation.image_url().map(str::to_string)
                alt=formation.nom.clone()
            />
            <h2 class="formation-name">{formation.nom.clone()}</h2>
            <p>{messages::LABEL_DATE}": "{date}</p>
            <p>{messages::LABEL_USES}": "{formation.nombre_utilisations.to_string()}</p>
            <p>{messages::LABEL_THEME}": "{formation.thematique.clone()}</p>
            <p>{messages::LABEL_PRICE}": "{price}</p>
            <p>{messages::LABEL_CREATED}": "{format_timestamp(formation.created_at)}</p>
            <p>{messages::LABEL_UPDATED}": "{format_timestamp(formation.updated_at)}</p>

            <div class="card-actions">
                <button class="btn-details" on:click=move |_| on_toggle.run(toggle_id.clone())>
                    {move || details_label(expanded.get())}
                </button>
                <button class="btn-edit" on:click=move |_| on_edit.run(edit_id.clone())>
                    {messages::EDIT}
                </button>
                <button class="btn-delete" on:click=move |_| on_delete.run(delete_id.clone())>
                    {messages::DELETE}
                </button>
            </div>

            <Show when=move || expanded.get()>
                <div class="formation-details">
                    <p>{messages::LABEL_THEME}": "{detail_theme.clone()}</p>
                    <p>{messages::LABEL_PRICE}": "{detail_price.clone()}</p>
                    <p>{messages::LABEL_DATE}": "{detail_date.clone()}</p>
                </div>
            </Show>
        </article>
    }
}
