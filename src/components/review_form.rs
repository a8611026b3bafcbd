use leptos::*;
use leptos::ev::SubmitEvent;
use leptos::logging::warn;
use crate::components::skill_picker::SkillPicker;
use crate::components::star_rating::StarRating;
use crate::employer::{ReviewFormState, PREDEFINED_SKILLS};
use crate::models::collaboration::Collaboration;
use crate::state::use_wallet;

/// Review form for one collaboration. Calls `on_close` after a successful submit.
#[component]
pub fn ReviewForm(collaboration: Collaboration, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let wallet = use_wallet();
    let form = create_rw_signal(ReviewFormState::default());
    let (error, set_error) = create_signal(None::<String>);

    let freelancer_name = collaboration.freelancer_name.clone();
    let job_title = collaboration.job_title.clone();

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match wallet.issue_review(&collaboration, form.get_untracked()) {
            Ok(_) => {
                // Reset values
                form.update(|f| f.reset());
                set_error.set(None);
                on_close.call(());
            }
            Err(err) => {
                warn!("[EMPLOYER] Review not submitted: {}", err);
                set_error.set(Some(err.to_string()));
            }
        }
    };

    view! {
        <form class="review-form" on:submit=handle_submit>
            <p class="muted">{ format!("{} · {}", freelancer_name, job_title) }</p>
            <h3>{ "Rating" }</h3>
            <StarRating
                rating=Signal::derive(move || form.with(|f| f.rating))
                on_select=Callback::new(move |rating: u8| form.update(|f| f.rating = rating))
            />
            <h3>{ "Review" }</h3>
            <textarea
                placeholder="Describe the collaboration"
                prop:value=move || form.with(|f| f.review.clone())
                on:input=move |e| form.update(|f| f.review = event_target_value(&e))
            />
            <h3>{ "Skills" }</h3>
            <SkillPicker
                skills=PREDEFINED_SKILLS.to_vec()
                selected=Signal::derive(move || form.with(|f| f.skills.clone()))
                on_toggle=Callback::new(move |skill: String| form.update(|f| f.toggle_skill(&skill)))
            />
            {move || error.get().map(|message| view! { <p class="error">{ message }</p> })}
            <div class="dialog-actions">
                <button type="button" class="button outline" on:click=move |_| on_close.call(())>{ "Cancel" }</button>
                <button type="submit" class="button primary" disabled=move || !form.with(|f| f.can_submit())>
                    { "Submit Review" }
                </button>
            </div>
        </form>
    }
}
