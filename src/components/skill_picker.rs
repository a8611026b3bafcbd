use leptos::*;

/// Toggle buttons for endorsing skills. Selected skills are highlighted.
#[component]
pub fn SkillPicker(
    skills: Vec<&'static str>,
    #[prop(into)] selected: Signal<Vec<String>>,
    #[prop(into)] on_toggle: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="skill-picker">
            {skills
                .into_iter()
                .map(|skill| {
                    let is_selected = move || selected.with(|s| s.iter().any(|x| x == skill));
                    view! {
                        <button
                            type="button"
                            class="skill"
                            class:selected=is_selected
                            on:click=move |_| on_toggle.call(skill.to_string())
                        >
                            { skill }
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Read-only badges for a review's skills.
#[component]
pub fn SkillBadges(skills: Vec<String>) -> impl IntoView {
    view! {
        <div class="skills">
            {skills
                .into_iter()
                .map(|skill| view! { <span class="badge">{ skill }</span> })
                .collect_view()}
        </div>
    }
}
