//! 404 page

use leptos::prelude::*;
use leptos_router::components::A;

use formations_core::messages;

use crate::router::routes;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>{messages::NOT_FOUND_TITLE}</h1>
            <p>{messages::NOT_FOUND_BODY}</p>
            <A href=routes::HOME>{messages::NAV_HOME}</A>
        </div>
    }
}
