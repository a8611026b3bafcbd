use leptos::*;
use crate::components::skill_picker::SkillBadges;
use crate::components::star_rating::StarRating;
use crate::models::review::Review;

/// One review rendered as a credential card. `children` holds the card's actions.
#[component]
pub fn ReviewCard(
    review: Review,
    #[prop(optional, into)] highlighted: Option<Signal<bool>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let highlighted = move || highlighted.map(|h| h.get()).unwrap_or(false);
    view! {
        <article class="card review-card" class:highlighted=highlighted>
            <div class="review-heading">
                <div>
                    <h3>{ review.job_title.clone() }</h3>
                    <p class="muted">{ review.employer_name.clone() }</p>
                </div>
                <div class="review-rating">
                    <StarRating rating=review.rating />
                    <span>{ format!("{}/5", review.rating) }</span>
                </div>
            </div>
            <p class="muted date">{ review.date_issued.clone() }</p>
            <p class="snippet">{ format!("\"{}\"", review.review_snippet) }</p>
            <SkillBadges skills=review.skills.clone() />
            <Show when=highlighted>
                <span class="badge new">{ "New" }</span>
            </Show>
            { children.map(|children| view! { <div class="card-actions">{ children() }</div> }) }
        </article>
    }
}

/// Reviews in store order with per-card actions built by `actions`.
#[component]
pub fn ReviewsList<A, V>(
    title: String,
    #[prop(into)] reviews: Signal<Vec<Review>>,
    actions: A,
    #[prop(optional)] highlight: Option<Callback<u64, bool>>,
    #[prop(optional)] empty_message: Option<&'static str>,
) -> impl IntoView
where
    A: Fn(Review) -> V + Copy + 'static,
    V: IntoView,
{
    let count = move || reviews.with(|r| r.len());
    view! {
        <section class="reviews-list">
            <h2>{ move || format!("{} ({})", title, count()) }</h2>
            <Show
                when=move || { count() > 0 }
                fallback=move || view! { <p class="muted">{ empty_message.unwrap_or("No reviews yet.") }</p> }
            >
                <div class="review-grid">
                    <For
                        each=move || reviews.get()
                        key=|review| review.id
                        children=move |review: Review| {
                            let id = review.id;
                            let highlighted = Signal::derive(move || {
                                highlight.map(|h| h.call(id)).unwrap_or(false)
                            });
                            view! {
                                <ReviewCard review=review.clone() highlighted=highlighted>
                                    { actions(review.clone()) }
                                </ReviewCard>
                            }
                        }
                    />
                </div>
            </Show>
        </section>
    }
}
