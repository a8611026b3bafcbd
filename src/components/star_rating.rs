use crate::models::review::star_states;
use leptos::*;

/// Five stars, filled up to `rating`. With `on_select` the stars become buttons.
#[component]
pub fn StarRating(
    #[prop(into)] rating: MaybeSignal<u8>,
    #[prop(optional)] on_select: Option<Callback<u8>>,
) -> impl IntoView {
    view! {
        <div class="stars" class:interactive=on_select.is_some()>
            {move || {
                star_states(rating.get())
                    .into_iter()
                    .enumerate()
                    .map(|(i, filled)| {
                        let value = i as u8 + 1;
                        let symbol = if filled { "★" } else { "☆" };
                        match on_select {
                            Some(on_select) => view! {
                                <button
                                    type="button"
                                    class="star"
                                    class:filled=filled
                                    aria-label=format!("{value} star")
                                    on:click=move |_| on_select.call(value)
                                >
                                    { symbol }
                                </button>
                            }
                            .into_view(),
                            None => view! { <span class="star" class:filled=filled>{ symbol }</span> }.into_view(),
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
