use leptos::*;
use leptos::ev::SubmitEvent;
use crate::components::dialogs::Dialog;
use crate::components::toast::use_toaster;
use crate::employer::scan_qr;
use crate::models::collaboration::Collaboration;
use crate::state::use_wallet;

/// Mock QR scan. The employer enters the job title and the scan "identifies"
/// the configured freelancer.
#[component]
pub fn QrScanDialog(
    #[prop(into)] on_identified: Callback<Collaboration>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let freelancer_name = use_wallet().config.qr_freelancer_name;
    let toaster = use_toaster();
    let (job_title, set_job_title) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let handle_scan = move |ev: SubmitEvent| {
        ev.prevent_default();
        match scan_qr(&job_title.get_untracked(), &freelancer_name) {
            Ok(collaboration) => {
                toaster.show(
                    "Freelancer identified!",
                    format!("{} has been identified. You can now write a review.", collaboration.freelancer_name),
                );
                set_job_title.set(String::new());
                on_identified.call(collaboration);
            }
            Err(err) => set_error.set(Some(err.to_string())),
        }
    };

    view! {
        <Dialog title="Scan Freelancer QR Code".to_string() on_close=on_cancel>
            <form class="qr-form" on:submit=handle_scan>
                <div class="qr-placeholder">{ "▣" }</div>
                <input
                    type="text"
                    placeholder="Job title"
                    prop:value=move || job_title.get()
                    on:input=move |e| set_job_title.set(event_target_value(&e))
                />
                {move || error.get().map(|message| view! { <p class="error">{ message }</p> })}
                <div class="dialog-actions">
                    <button type="button" class="button outline" on:click=move |_| on_cancel.call(())>{ "Cancel" }</button>
                    <button type="submit" class="button primary">{ "Scan" }</button>
                </div>
            </form>
        </Dialog>
    }
}
