use crate::models::review::Review;
use crate::components::skill_picker::SkillBadges;
use crate::components::star_rating::StarRating;
use leptos::*;

/// Modal shell: a backdrop plus a titled panel.
#[component]
pub fn Dialog(title: String, #[prop(into)] on_close: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <div class="dialog-backdrop">
            <div class="dialog" role="dialog" aria-modal="true">
                <header class="dialog-header">
                    <h2>{ title }</h2>
                    <button type="button" class="dialog-close" on:click=move |_| on_close.call(())>{ "×" }</button>
                </header>
                { children() }
            </div>
        </div>
    }
}

/// Yes/no confirmation used before destructive actions.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    confirm_label: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Dialog title=title on_close=on_cancel>
            <p>{ message }</p>
            <div class="dialog-actions">
                <button type="button" class="button outline" on:click=move |_| on_cancel.call(())>{ "Cancel" }</button>
                <button type="button" class="button destructive confirm" on:click=move |_| on_confirm.call(())>
                    { confirm_label }
                </button>
            </div>
        </Dialog>
    }
}

/// Full record of a review, presented as a verifiable credential.
#[component]
pub fn CredentialDialog(review: Review, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    view! {
        <Dialog title="Credential Details".to_string() on_close=on_close>
            <dl class="credential">
                <dt>{ "Issued by" }</dt>
                <dd>{ review.employer_name.clone() }</dd>
                <dt>{ "Issued to" }</dt>
                <dd>{ review.freelancer_name.clone() }</dd>
                <dt>{ "Job" }</dt>
                <dd>{ review.job_title.clone() }</dd>
                <dt>{ "Date" }</dt>
                <dd>{ review.date_issued.clone() }</dd>
                <dt>{ "Rating" }</dt>
                <dd>
                    <StarRating rating=review.rating />
                    <span>{ format!("{}/5", review.rating) }</span>
                </dd>
                <dt>{ "Review" }</dt>
                <dd>{ review.review_snippet.clone() }</dd>
                <dt>{ "Skills" }</dt>
                <dd><SkillBadges skills=review.skills.clone() /></dd>
                <dt>{ "Credential ID" }</dt>
                <dd class="mono">{ format!("rw-{:016x}", review.id) }</dd>
            </dl>
        </Dialog>
    }
}
