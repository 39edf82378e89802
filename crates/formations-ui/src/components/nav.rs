//! Top navigation bar

use leptos::prelude::*;
use leptos_router::components::A;

use formations_core::messages;

use crate::router::routes;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="app-nav">
            <h1 class="app-title">{messages::APP_TITLE}</h1>
            <ul class="nav-links">
                <li>
                    <A href=routes::HOME>{messages::NAV_HOME}</A>
                </li>
                <li>
                    <A href=routes::ADD_FORMATION>{messages::NAV_ADD}</A>
                </li>
            </ul>
        </nav>
    }
}
