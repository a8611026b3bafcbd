/// Freelancer side of the wallet: reputation summary and received credentials.
use leptos::*;
use leptos::logging::{log, warn};
use crate::components::dialogs::CredentialDialog;
use crate::components::reviews_list::ReviewsList;
use crate::components::toast::use_toaster;
use crate::error::WalletError;
use crate::events::WalletEvent;
use crate::models::review::Review;
use crate::state::{use_wallet, WalletState};
use crate::stats::ReputationSummary;

/// Ids of credentials the profile owner received but has not looked at yet.
#[derive(Clone, Copy)]
pub struct NewCredentials(pub RwSignal<Vec<u64>>);

impl NewCredentials {
    pub fn count(&self) -> usize {
        self.0.with(|ids| ids.len())
    }

    pub fn contains(&self, id: u64) -> bool {
        self.0.with(|ids| ids.contains(&id))
    }

    pub fn clear(&self) {
        self.0.update(|ids| ids.clear());
    }
}

/// Keeps `NewCredentials` in sync with issued and revoked reviews for the profile owner.
/// Lives for the whole app so reviews issued from the employer view are not missed.
pub fn track_new_credentials(wallet: &WalletState) -> NewCredentials {
    let tracker = NewCredentials(create_rw_signal(Vec::new()));
    let owner = wallet.config.freelancer_name.clone();

    let subscription = wallet.events.subscribe(move |event| match event {
        WalletEvent::ReviewIssued(review) if review.freelancer_name == owner => {
            log!("[FREELANCER] New credential {} for {}", review.id, owner);
            tracker.0.update(|ids| ids.push(review.id));
        }
        WalletEvent::ReviewRevoked(review) => {
            tracker.0.update(|ids| ids.retain(|id| *id != review.id));
        }
        _ => {}
    });
    let events = wallet.events.clone();
    on_cleanup(move || {
        events.unsubscribe(subscription);
    });

    provide_context(tracker);
    tracker
}

async fn copy_to_clipboard(text: &str) -> Result<(), WalletError> {
    let promise: js_sys::Promise = gloo_utils::window().navigator().clipboard().write_text(text);
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|err| WalletError::Clipboard(format!("{:?}", err)))
}

#[component]
pub fn FreelancerView() -> impl IntoView {
    let wallet = use_wallet();
    let toaster = use_toaster();
    let new_credentials = expect_context::<NewCredentials>();
    let store = wallet.store;
    let config = wallet.config.clone();

    let owner = config.freelancer_name.clone();
    let reviews = Signal::derive(move || store.with(|s| s.reviews_for(&owner)));
    let (base, seed) = (config.jobs_completed_base, config.seed_review_count);
    let summary = Signal::derive(move || {
        reviews.with(|r| ReputationSummary::from_reviews(r, base, seed))
    });
    let (viewing, set_viewing) = create_signal(None::<Review>);

    // Leaving the profile marks everything as seen.
    on_cleanup(move || new_credentials.clear());

    let profile_link = config.profile_link();
    let share_profile = move |_| {
        let link = profile_link.clone();
        spawn_local(async move {
            match copy_to_clipboard(&link).await {
                Ok(()) => toaster.show(
                    "Link copied!",
                    "Your shareable reputation profile link has been copied to clipboard.",
                ),
                Err(err) => {
                    warn!("[FREELANCER] {}", err);
                    toaster.show("Copy this link to share your profile", link);
                }
            }
        });
    };

    view! {
        <div class="freelancer-view">
            <section class="stats">
                <div class="card stat">
                    <span class="stat-value average">{ move || summary.with(|s| s.formatted_average()) }</span>
                    <span class="muted">{ "Average rating" }</span>
                </div>
                <div class="card stat">
                    <span class="stat-value total">{ move || summary.with(|s| s.total_reviews) }</span>
                    <span class="muted">{ "Verified reviews" }</span>
                </div>
                <div class="card stat">
                    <span class="stat-value jobs">{ move || summary.with(|s| s.jobs_completed) }</span>
                    <span class="muted">{ "Jobs completed" }</span>
                </div>
                <button type="button" class="button primary share" on:click=share_profile>{ "Share Profile" }</button>
            </section>

            <ReviewsList
                title="Verified Reviews".to_string()
                reviews=reviews
                highlight=Callback::new(move |id: u64| new_credentials.contains(id))
                empty_message="No credentials received yet."
                actions=move |review: Review| view! {
                    <button type="button" class="button outline" on:click=move |_| set_viewing.set(Some(review.clone()))>
                        { "View Credential" }
                    </button>
                }
            />

            {move || viewing.get().map(|review| view! {
                <CredentialDialog review=review on_close=Callback::new(move |_: ()| set_viewing.set(None)) />
            })}
        </div>
    }
}
