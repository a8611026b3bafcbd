/// Main application entry point for the Reputation Wallet.
/// Provides the shared wallet state and switches between the freelancer and employer views.
use leptos::logging::warn;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use crate::components::employer_view::EmployerView;
use crate::components::freelancer_view::{track_new_credentials, FreelancerView, NewCredentials};
use crate::components::header::Header;
use crate::components::toast::{provide_toaster, ToastStack};
use crate::config::{WalletConfig, CONFIG_ELEMENT_ID};
use crate::state::{provide_wallet, UserView};

#[component]
pub fn App(#[prop(optional)] config: Option<WalletConfig>) -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/reputation-wallet.css"/>
        <Title text="Reputation Wallet"/>
        <WalletShell config=config.unwrap_or_default()>
            <Router>
                <Routes>
                    <Route path="" view=|| view! { <WalletPage/> }/>
                </Routes>
            </Router>
        </WalletShell>
    }
}

/// Provides the wallet, toaster and credential tracker to `children`, and embeds
/// `config` in the page so the hydrating client starts from the same settings.
#[component]
pub fn WalletShell(config: WalletConfig, children: Children) -> impl IntoView {
    let embedded = config.to_embedded_json().unwrap_or_else(|err| {
        warn!("[CONFIG] Could not embed config: {}", err);
        "{}".to_string()
    });

    provide_toaster(config.toast_duration_ms);
    let wallet = provide_wallet(config);
    track_new_credentials(&wallet);

    view! {
        <script id=CONFIG_ELEMENT_ID type="application/json" inner_html=embedded></script>
        {children()}
        <ToastStack/>
    }
}

/// Single page of the wallet. Only one of the two views is mounted at a time.
#[component]
pub fn WalletPage(#[prop(optional)] initial_view: UserView) -> impl IntoView {
    let new_credentials = expect_context::<NewCredentials>();
    let user_view = create_rw_signal(initial_view);

    view! {
        <Header user_view=user_view new_credentials=Signal::derive(move || new_credentials.count())/>
        <main class="container">
            {move || match user_view.get() {
                UserView::Freelancer => view! { <FreelancerView/> }.into_view(),
                UserView::Employer => view! { <EmployerView/> }.into_view(),
            }}
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_page(config: WalletConfig, initial_view: UserView) -> String {
        let runtime = create_runtime();
        let html = view! {
            <WalletShell config=config>
                <WalletPage initial_view=initial_view/>
            </WalletShell>
        }
        .into_view()
        .render_to_string()
        .to_string();
        runtime.dispose();
        html
    }

    #[test]
    fn freelancer_page_renders_the_seeded_profile() {
        let html = render_page(WalletConfig::default(), UserView::Freelancer);

        assert!(html.contains("4.8"));
        assert!(html.contains("Verified Reviews"));
        assert!(html.contains("FlowDesign Co"));
        assert_eq!(html.matches("View Credential").count(), 5);
        assert!(html.contains("Ana Carolina"));
    }

    #[test]
    fn employer_page_offers_every_pending_collaboration() {
        let html = render_page(WalletConfig::default(), UserView::Employer);

        assert_eq!(html.matches("Write Review").count(), 4);
        assert!(html.contains("Innovate Corp"));
        assert!(html.contains("issued any reviews yet."));
    }

    #[test]
    fn shell_embeds_the_config_it_was_given() {
        let config = WalletConfig {
            employer_name: "Acme".to_string(),
            ..WalletConfig::default()
        };
        let html = render_page(config, UserView::Employer);

        assert!(html.contains(&format!("id=\"{CONFIG_ELEMENT_ID}\"")));
        assert!(html.contains("\"employer_name\":\"Acme\""));
    }
}
