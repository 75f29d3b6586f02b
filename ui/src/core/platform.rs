//! Fire-and-forget task spawning for scheduled UI events.

use std::future::Future;

/// Spawn a future on the platform executor.
///
/// Futures passed here are detached: the caller never joins them, and their
/// eventual completion after the owning component unmounts must be harmless
/// (they only post events into channels that may already be closed).
#[cfg(target_arch = "wasm32")]
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            handle.spawn(future);
        }
        Err(_) => {
            // No runtime on this thread (plain unit tests): nothing to drive
            // the timer, so the event is dropped rather than blocking.
            #[cfg(debug_assertions)]
            eprintln!("[platform] spawn_future called outside a runtime; future dropped");
        }
    }
}
