/// Transient notifications shown in the corner of the screen.
use crate::events::WalletEvent;
use crate::state::use_wallet;
use crate::utils::leptos_owner::with_owner_safe;
use gloo_timers::callback::Timeout;
use leptos::logging::log;
use leptos::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
}

/// Ordered list of visible toasts, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, title: impl Into<String>, description: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            title: title.into(),
            description: description.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Handle used by components to raise toasts.
#[derive(Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
    duration_ms: u32,
    owner: Option<Owner>,
}

impl Toaster {
    pub fn show(&self, title: impl Into<String>, description: impl Into<String>) {
        let title = title.into();
        log!("[TOAST] {}", title);
        let id = self.queue.try_update(|q| q.push(title, description));

        if let Some(id) = id {
            let queue = self.queue;
            let owner = self.owner;
            Timeout::new(self.duration_ms, move || {
                with_owner_safe(owner, "toast dismiss", || {
                    queue.try_update(|q| q.dismiss(id));
                });
            })
            .forget();
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

/// Makes a toaster available to the subtree. Call before rendering `ToastStack`.
pub fn provide_toaster(duration_ms: u32) -> Toaster {
    let toaster = Toaster {
        queue: create_rw_signal(ToastQueue::default()),
        duration_ms,
        owner: Owner::current(),
    };
    provide_context(toaster);
    toaster
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

fn toast_for(event: &WalletEvent) -> Option<(String, String)> {
    match event {
        WalletEvent::ReviewIssued(review) => Some((
            "Review submitted successfully!".to_string(),
            format!("Verifiable credential sent to {}'s profile.", review.freelancer_name),
        )),
        WalletEvent::ReviewRevoked(review) => Some((
            "Review revoked".to_string(),
            format!("The credential for \"{}\" is no longer valid.", review.job_title),
        )),
        WalletEvent::CollaborationStatusChanged { .. } => None,
    }
}

/// Renders the toast stack and turns wallet events into toasts.
/// Must be rendered inside the wallet and toaster contexts.
#[component]
pub fn ToastStack() -> impl IntoView {
    let wallet = use_wallet();
    let toaster = use_toaster();

    let subscription = wallet.events.subscribe(move |event| {
        if let Some((title, description)) = toast_for(event) {
            toaster.show(title, description);
        }
    });
    let events = wallet.events.clone();
    on_cleanup(move || {
        events.unsubscribe(subscription);
    });

    view! {
        <div class="toast-stack" role="status">
            <For
                each=move || toaster.queue.with(|q| q.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class="toast">
                            <strong>{ toast.title }</strong>
                            <p>{ toast.description }</p>
                            <button class="toast-close" on:click=move |_| toaster.dismiss(id)>{ "×" }</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
