/// Reactive wrapper around the review store, shared with components through context.
use crate::config::WalletConfig;
use crate::employer::{self, ReviewFormState, Revocation, Submission};
use crate::error::WalletError;
use crate::events::{EventBus, WalletEvent};
use crate::models::collaboration::Collaboration;
use crate::store::ReviewStore;
use leptos::logging::{log, warn};
use leptos::*;

/// Which side of the wallet is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserView {
    #[default]
    Freelancer,
    Employer,
}

impl UserView {
    pub fn toggled(self) -> Self {
        match self {
            UserView::Freelancer => UserView::Employer,
            UserView::Employer => UserView::Freelancer,
        }
    }
}

#[derive(Clone, Debug)]
pub struct WalletState {
    pub store: RwSignal<ReviewStore>,
    pub events: EventBus,
    pub config: WalletConfig,
}

impl WalletState {
    pub fn new(store: ReviewStore, config: WalletConfig) -> Self {
        Self {
            store: create_rw_signal(store),
            events: EventBus::new(),
            config,
        }
    }

    /// Issues a review as the configured employer. Listeners are notified once the
    /// store has been updated. Rejected forms leave the store signal untouched.
    pub fn issue_review(
        &self,
        collaboration: &Collaboration,
        form: ReviewFormState,
    ) -> Result<Submission, WalletError> {
        if !form.can_submit() {
            return Err(WalletError::InvalidRating(form.rating));
        }

        let employer_name = self.config.employer_name.clone();
        let submission = self
            .store
            .try_update(|store| employer::submit_review(store, collaboration, &employer_name, form))
            .ok_or(WalletError::StoreUnavailable)??;

        self.notify(submission.events());
        Ok(submission)
    }

    /// Revokes one of the employer's reviews using the configured policy.
    pub fn revoke_review(&self, review_id: u64) -> Option<Revocation> {
        if self.store.try_with_untracked(|s| s.review(review_id).is_none()).unwrap_or(true) {
            warn!("[WALLET] Review {} not found, nothing revoked", review_id);
            return None;
        }

        let policy = self.config.revocation;
        let revocation = self
            .store
            .try_update(|store| employer::revoke_review(store, review_id, policy))
            .flatten();

        match &revocation {
            Some(revocation) => self.notify(revocation.events()),
            None => warn!("[WALLET] Review {} not found, nothing revoked", review_id),
        }
        revocation
    }

    fn notify(&self, events: Vec<WalletEvent>) {
        for event in &events {
            self.events.emit(event);
        }
        log!("[WALLET] Delivered {} event(s)", events.len());
    }
}

/// Creates the wallet state for this subtree, seeded with the demo data.
pub fn provide_wallet(config: WalletConfig) -> WalletState {
    let state = WalletState::new(ReviewStore::seeded(), config);
    provide_context(state.clone());
    state
}

pub fn use_wallet() -> WalletState {
    expect_context::<WalletState>()
}
