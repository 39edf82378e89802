//! WASM entry point for the formations console
//!
//! Trunk compiles this binary and loads it from `index.html`.

use formations_ui::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    mount_to_body(|| {
        view! {
            <App />
        }
    });
}
