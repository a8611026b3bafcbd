use std::panic;
use leptos::logging::log;

/// Sets up a panic hook that forwards to `console_error_panic_hook` and adds
/// wallet context for the panics we know how to explain.
pub fn set_custom_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        console_error_panic_hook::hook(panic_info);

        // Extract panic message
        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };

        if message.contains("WalletState") {
            log!("[PANIC] Wallet context missing. Components using the store must be rendered inside <App/>.");
        } else if message.contains("already mutably borrowed") || message.contains("already borrowed") {
            log!("[PANIC] The review store was read while it was being updated.");
            log!("[PANIC] Event listeners must not read the store signal from inside an update.");
        } else if message.contains("OwnerDisposed") {
            log!("[PANIC] A callback ran after its component was unmounted (dialog or toast timer).");
        }
    }));
}

/// Call in main.rs or app initialization
pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
    log!("[PANIC_HOOK] Custom panic hook set up successfully");
}
