//! Root component

use leptos::prelude::*;
use tracing::info;

use formations_core::ApiConfig;

use crate::client::HttpFormationApi;
use crate::router::AppRouter;

/// Root of the console: provides the API client to every page and mounts
/// the router.
#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_build_env();
    info!(base_url = config.base_url(), "formations console starting");
    provide_context(HttpFormationApi::new(config));

    view! {
        <div class="app-container">
            <AppRouter />
        </div>
    }
}
