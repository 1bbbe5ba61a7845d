use leptos::logging::log;
use leptos::Owner;

/// Runs `f` under `owner` if that owner is still alive.
/// Network calls can resolve after the component that issued them is gone;
/// in that case the update is logged and dropped.
pub fn with_owner_safe<F, R>(owner: Option<Owner>, log_context: &str, f: F) -> Option<R>
where
    F: FnOnce() -> R,
{
    let Some(owner) = owner else {
        log!("[OWNER] No Leptos owner in context: {}", log_context);
        return None;
    };
    match leptos::try_with_owner(owner, f) {
        Ok(value) => Some(value),
        Err(_) => {
            log!("[OWNER] Owner disposed, dropping update: {}", log_context);
            None
        }
    }
}
