//! Browser tests, run with `wasm-pack test --headless --firefox crates/formations-ui`

#![cfg(target_arch = "wasm32")]

#![allow(clippy::unwrap_used)]

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

use formations_core::{Formation, FormationId, messages};
use formations_ui::App;
use formations_ui::components::{FormationCard, FormationImage};

wasm_bindgen_test_configure!(run_in_browser);

fn body_text() -> String {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
        .and_then(|body| body.text_content())
        .unwrap_or_default()
}

fn query(selector: &str) -> Option<web_sys::Element> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.query_selector(selector).ok().flatten())
}

fn go_basics() -> Formation {
    serde_json::from_str(
        r#"{
            "_id": "1",
            "nom": "Go Basics",
            "dateFormation": "2024-01-01",
            "nombreUtilisations": 5,
            "thematique": "Dev",
            "prix": 100,
            "imageUrl": "https://x.com/a.png"
        }"#,
    )
    .unwrap()
}

#[wasm_bindgen_test]
fn given_browser_when_app_mounts_then_navigation_is_shown() {
    mount_to_body(App);

    let text = body_text();
    assert!(text.contains(messages::APP_TITLE));
    assert!(text.contains(messages::NAV_HOME));
    assert!(text.contains(messages::NAV_ADD));
}

#[wasm_bindgen_test]
fn given_non_http_image_url_when_rendered_then_placeholder_is_used() {
    mount_to_body(|| view! { <FormationImage url=Some("ftp://x.com/a.png".to_string()) alt="x" /> });

    let src = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.query_selector("img.formation-image").ok().flatten())
        .and_then(|img| img.get_attribute("src"));
    assert_eq!(src.as_deref(), Some(formations_core::config::PLACEHOLDER_IMAGE));
}

#[wasm_bindgen_test]
async fn given_go_basics_card_when_details_clicked_then_label_toggles() {
    let expanded = RwSignal::new(false);
    let on_toggle = Callback::new(move |_: FormationId| expanded.update(|open| *open = !*open));
    mount_to_body(move || {
        view! {
            <div id="card-under-test">
                <FormationCard
                    formation=go_basics()
                    expanded=expanded
                    on_toggle=on_toggle
                    on_edit=Callback::new(|_: FormationId| {})
                    on_delete=Callback::new(|_: FormationId| {})
                />
            </div>
        }
    });

    let card = query("#card-under-test").unwrap().text_content().unwrap_or_default();
    assert!(card.contains("Go Basics"));
    assert!(card.contains("100"));
    let button = query("#card-under-test .btn-details")
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    assert_eq!(button.text_content().as_deref(), Some(messages::SHOW_DETAILS));
    assert!(query("#card-under-test .formation-details").is_none());

    button.click();
    leptos::task::tick().await;

    assert!(expanded.get_untracked());
    assert_eq!(button.text_content().as_deref(), Some(messages::HIDE_DETAILS));
    assert!(query("#card-under-test .formation-details").is_some());
}
