//! Fire-and-forget task spawning for both targets.
//!
//! - Native: `tokio::spawn` on the ambient runtime (the app enters one in `main`).
//! - WASM: `wasm_bindgen_futures::spawn_local` on the JS event loop.

use std::future::Future;

/// Returns `false` when there is nothing to run the future on.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn<F>(future: F) -> bool
where
    F: Future<Output = ()> + Send + 'static,
{
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            handle.spawn(future);
            true
        }
        Err(err) => {
            log::error!("No tokio runtime to run background fetch: {err}");
            false
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn spawn<F>(future: F) -> bool
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
    true
}
