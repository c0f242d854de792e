//! Network fetching for document discovery.
//!
//! Discovery fetches bypass the HTTP cache and run to the browser's own
//! completion or failure; no timeout is raced against them.

use pfe_core::{FetchError, Fetcher};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestInit, RequestMode, Response};

/// [`Fetcher`] backed by the browser Fetch API.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserFetcher;

impl Fetcher for BrowserFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        fetch_url(url).await
    }
}

/// Fetch text from a URL using the Fetch API.
async fn fetch_url(url: &str) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_cache(RequestCache::NoCache);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let result = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| FetchError::NetworkError(js_error_message(&e)))?;

    let resp: Response = result.dyn_into().map_err(|_| FetchError::InvalidContent)?;

    if !resp.ok() {
        return Err(FetchError::HttpError(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;

    text.as_string().ok_or(FetchError::InvalidContent)
}

/// Best-effort message from a rejected fetch promise (usually a `TypeError`).
fn js_error_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| "Unknown error".to_string())
}
