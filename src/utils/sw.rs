//! Service worker registration hook.
//!
//! The worker is a no-op shell; registration happens in release builds only
//! and failures are logged, never surfaced.

use wasm_bindgen_futures::{JsFuture, spawn_local};

use super::dom;
use crate::config::SERVICE_WORKER_URL;

pub fn register_service_worker() {
    if cfg!(debug_assertions) {
        return;
    }

    let Some(window) = dom::window() else {
        return;
    };
    let container = window.navigator().service_worker();
    let promise = container.register(SERVICE_WORKER_URL);

    spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => tracing::info!(url = SERVICE_WORKER_URL, "service worker registered"),
            Err(e) => tracing::warn!(error = ?e, "service worker registration failed"),
        }
    });
}
