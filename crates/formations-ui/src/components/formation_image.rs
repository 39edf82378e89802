//! Formation image with a placeholder fallback

use leptos::prelude::*;
use tracing::debug;

use formations_core::display::ImageSource;

/// `<img>` for a formation. Remote images that fail to load are swapped for
/// the placeholder once; a failing placeholder is left alone.
#[component]
pub fn FormationImage(url: Option<String>, #[prop(into)] alt: String) -> impl IntoView {
    let source = RwSignal::new(ImageSource::for_url(url.as_deref()));

    let on_error = move |_| {
        if source.try_update(ImageSource::fall_back) == Some(true) {
            debug!("formation image failed to load, using placeholder");
        }
    };

    view! {
        <img
            class="formation-image"
            src=move || source.with(|source| source.src().to_string())
            alt=alt
            on:error=on_error
        />
    }
}
