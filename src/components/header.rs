use leptos::*;
use crate::state::{use_wallet, UserView};

#[component]
pub fn Header(user_view: RwSignal<UserView>, #[prop(into)] new_credentials: Signal<usize>) -> impl IntoView {
    let config = use_wallet().config;
    let user_name = move || match user_view.get() {
        UserView::Freelancer => config.freelancer_display_name.clone(),
        UserView::Employer => config.employer_display_name.clone(),
    };

    view! {
        <header class="app-header">
            <div class="brand">
                <span class="logo">{ "RW" }</span>
                <h1>{ "Reputation Wallet" }</h1>
                <span class="badge outline">{ "MVP Demo" }</span>
            </div>
            <div class="view-switch">
                <label for="view-toggle">
                    { "Freelancer" }
                    <Show when=move || { new_credentials.get() > 0 }>
                        <span class="badge new">{ move || new_credentials.get() }</span>
                    </Show>
                </label>
                <input
                    id="view-toggle"
                    type="checkbox"
                    role="switch"
                    prop:checked=move || user_view.get() == UserView::Employer
                    on:change=move |_| user_view.update(|v| *v = v.toggled())
                />
                <label for="view-toggle">{ "Employer" }</label>
            </div>
            <div class="welcome">
                <p class="muted">{ "Welcome back," }</p>
                <p class="user-name">{ user_name }</p>
            </div>
        </header>
    }
}
