/// Employer side of the wallet: collaborations awaiting a review and issued reviews.
use leptos::*;
use leptos::logging::warn;
use crate::components::dialogs::{ConfirmDialog, Dialog};
use crate::components::qr_scan::QrScanDialog;
use crate::components::review_form::ReviewForm;
use crate::components::reviews_list::ReviewsList;
use crate::employer::pending_collaboration;
use crate::models::collaboration::{Collaboration, CollaborationStatus};
use crate::models::review::Review;
use crate::state::use_wallet;

#[component]
pub fn EmployerView() -> impl IntoView {
    let wallet = use_wallet();
    let store = wallet.store;
    let employer_name = wallet.config.employer_name.clone();

    let collaborations = move || store.with(|s| s.collaborations().to_vec());
    let issued = Signal::derive(move || store.with(|s| s.reviews_by(&employer_name)));

    let (selected, set_selected) = create_signal(None::<Collaboration>);
    let (qr_open, set_qr_open) = create_signal(false);
    let (to_revoke, set_to_revoke) = create_signal(None::<u64>);

    // Re-check the status at click time, the card may be stale.
    let open_review = move |id: u64| match store.with_untracked(|s| pending_collaboration(s, id)) {
        Ok(collaboration) => set_selected.set(Some(collaboration)),
        Err(err) => warn!("[EMPLOYER] Cannot open review form: {}", err),
    };
    let close_review = Callback::new(move |_: ()| set_selected.set(None));

    let revoke_wallet = wallet.clone();
    let confirm_revoke = Callback::new(move |_: ()| {
        if let Some(id) = to_revoke.get_untracked() {
            revoke_wallet.revoke_review(id);
        }
        set_to_revoke.set(None);
    });

    view! {
        <div class="employer-view">
            <section class="card collaborations">
                <div class="section-heading">
                    <h2>{ "Recent Collaborations" }</h2>
                    <button type="button" class="button outline qr" on:click=move |_| set_qr_open.set(true)>
                        { "Scan QR Code" }
                    </button>
                </div>
                <For
                    each=collaborations
                    key=|c| (c.id, c.status)
                    children=move |collaboration: Collaboration| {
                        let id = collaboration.id;
                        view! {
                            <div class="card collaboration">
                                <div>
                                    <span class="freelancer">{ collaboration.freelancer_name.clone() }</span>
                                    <h3>{ collaboration.job_title.clone() }</h3>
                                </div>
                                {match collaboration.status {
                                    CollaborationStatus::Pending => view! {
                                        <button type="button" class="button primary write-review" on:click=move |_| open_review(id)>
                                            { "Write Review" }
                                        </button>
                                    }
                                    .into_view(),
                                    CollaborationStatus::Issued => view! {
                                        <span class="badge issued">{ "✓ Review Issued" }</span>
                                    }
                                    .into_view(),
                                }}
                            </div>
                        }
                    }
                />
            </section>

            <ReviewsList
                title="Reviews I've Issued".to_string()
                reviews=issued
                empty_message="You have not issued any reviews yet."
                actions=move |review: Review| {
                    let id = review.id;
                    view! {
                        <button type="button" class="button destructive revoke" on:click=move |_| set_to_revoke.set(Some(id))>
                            { "Revoke Review" }
                        </button>
                    }
                }
            />

            {move || selected.get().map(|collaboration| view! {
                <Dialog title=format!("Review for {}", collaboration.freelancer_name) on_close=close_review>
                    <ReviewForm collaboration=collaboration.clone() on_close=close_review />
                </Dialog>
            })}

            <Show when=move || qr_open.get()>
                <QrScanDialog
                    on_identified=Callback::new(move |collaboration: Collaboration| {
                        set_qr_open.set(false);
                        set_selected.set(Some(collaboration));
                    })
                    on_cancel=Callback::new(move |_: ()| set_qr_open.set(false))
                />
            </Show>

            <Show when=move || to_revoke.get().is_some()>
                <ConfirmDialog
                    title="Confirm Review Revocation".to_string()
                    message="Are you sure you want to revoke this review? This action cannot be undone.".to_string()
                    confirm_label="Revoke".to_string()
                    on_confirm=confirm_revoke
                    on_cancel=Callback::new(move |_: ()| set_to_revoke.set(None))
                />
            </Show>
        </div>
    }
}
