#![cfg(target_arch = "wasm32")]

use gloo_timers::future::sleep;
use leptos::*;
use reputation_wallet::app::App;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

// Mounts a fresh app into its own container and returns the container.
async fn mount_app() -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&container).unwrap();

    mount_to(container.clone().unchecked_into(), || view! { <App/> });
    sleep(Duration::from_millis(50)).await;
    container
}

fn text_of(container: &web_sys::Element, selector: &str) -> String {
    container
        .query_selector(selector)
        .unwrap()
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

fn click(container: &web_sys::Element, selector: &str) {
    let element = container
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element for {selector}"));
    element.unchecked_into::<web_sys::HtmlElement>().click();
}

async fn switch_view(container: &web_sys::Element) {
    let toggle = container
        .query_selector("#view-toggle")
        .unwrap()
        .unwrap()
        .unchecked_into::<web_sys::HtmlInputElement>();
    toggle.click();
    sleep(Duration::from_millis(50)).await;
}

#[wasm_bindgen_test]
async fn freelancer_view_shows_seeded_summary() {
    let container = mount_app().await;

    assert_eq!(text_of(&container, ".stat-value.average"), "4.8");
    assert_eq!(text_of(&container, ".stat-value.total"), "5");
    assert_eq!(text_of(&container, ".stat-value.jobs"), "32");
    assert!(text_of(&container, ".user-name").contains("Ana Carolina"));
}

#[wasm_bindgen_test]
async fn issuing_a_review_updates_the_freelancer_profile() {
    let container = mount_app().await;
    switch_view(&container).await;
    assert!(text_of(&container, ".user-name").contains("Innovate Corp"));
    assert_eq!(container.query_selector_all(".write-review").unwrap().length(), 4);

    // First collaboration belongs to Alice.
    click(&container, ".write-review");
    sleep(Duration::from_millis(50)).await;
    let stars = container.query_selector_all(".review-form .star").unwrap();
    stars.item(4).unwrap().unchecked_into::<web_sys::HtmlElement>().click();
    sleep(Duration::from_millis(20)).await;
    click(&container, ".review-form button[type=submit]");
    sleep(Duration::from_millis(50)).await;

    assert_eq!(container.query_selector_all(".write-review").unwrap().length(), 3);
    assert_eq!(container.query_selector_all(".badge.issued").unwrap().length(), 1);
    assert_eq!(container.query_selector_all(".revoke").unwrap().length(), 1);
    assert!(text_of(&container, ".toast-stack").contains("Review submitted successfully!"));

    switch_view(&container).await;
    assert_eq!(text_of(&container, ".stat-value.total"), "6");
    assert_eq!(text_of(&container, ".stat-value.jobs"), "33");
    assert_eq!(container.query_selector_all(".review-card.highlighted").unwrap().length(), 1);
}

#[wasm_bindgen_test]
async fn revoke_requires_confirmation() {
    let container = mount_app().await;
    switch_view(&container).await;

    click(&container, ".write-review");
    sleep(Duration::from_millis(50)).await;
    let stars = container.query_selector_all(".review-form .star").unwrap();
    stars.item(2).unwrap().unchecked_into::<web_sys::HtmlElement>().click();
    sleep(Duration::from_millis(20)).await;
    click(&container, ".review-form button[type=submit]");
    sleep(Duration::from_millis(50)).await;

    // Cancel keeps the review.
    click(&container, ".revoke");
    sleep(Duration::from_millis(20)).await;
    click(&container, ".dialog .button.outline");
    sleep(Duration::from_millis(20)).await;
    assert_eq!(container.query_selector_all(".revoke").unwrap().length(), 1);

    click(&container, ".revoke");
    sleep(Duration::from_millis(20)).await;
    click(&container, ".dialog .confirm");
    sleep(Duration::from_millis(50)).await;
    assert_eq!(container.query_selector_all(".revoke").unwrap().length(), 0);
    // Default policy reopens the collaboration.
    assert_eq!(container.query_selector_all(".write-review").unwrap().length(), 4);
}

#[wasm_bindgen_test]
async fn submit_is_disabled_until_a_star_is_picked() {
    let container = mount_app().await;
    switch_view(&container).await;
    click(&container, ".write-review");
    sleep(Duration::from_millis(50)).await;

    let submit = container
        .query_selector(".review-form button[type=submit]")
        .unwrap()
        .unwrap()
        .unchecked_into::<web_sys::HtmlButtonElement>();
    assert!(submit.disabled());
}
