//! Routes of the console
//!
//! The original client mounted its views at `/Accueil` and `/AjoutFormation`;
//! both paths keep working next to the current ones.

use leptos::prelude::*;
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::NavBar;
use crate::pages::{AddFormation, Formations, NotFound};

/// Route definitions as constants for type safety
pub mod routes {
    pub const HOME: &str = "/";
    pub const ADD_FORMATION: &str = "/ajout-formation";
    pub const LEGACY_HOME: &str = "/Accueil";
    pub const LEGACY_ADD_FORMATION: &str = "/AjoutFormation";
}

/// Router with the navigation bar above the routed page
#[component]
pub fn AppRouter() -> impl IntoView {
    view! {
        <Router>
            <NavBar />
            <main class="app-main">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=StaticSegment("") view=Formations />
                    <Route path=StaticSegment("ajout-formation") view=AddFormation />
                    <Route path=StaticSegment("Accueil") view=Formations />
                    <Route path=StaticSegment("AjoutFormation") view=AddFormation />
                </Routes>
            </main>
        </Router>
    }
}
