//! Browser-side dataset fetch through `web-sys`.
//!
//! One unauthenticated GET with `window.fetch`; failures come back as
//! strings ready for `AppState.error_msg`.

use gth_data::Dataset;
use log::info;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// GET `url` and return the body text.
pub async fn fetch_text(url: &str) -> Result<String, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    let window = web_sys::window().ok_or("No global window available")?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;

    if !response.ok() {
        return Err(format!("GET {} returned status {}", url, response.status()));
    }

    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    body.as_string()
        .ok_or_else(|| format!("Response body from {} was not text", url))
}

/// GET `url` and parse it as a dataset.
pub async fn fetch_dataset(url: &str) -> Result<Dataset, String> {
    let body = fetch_text(url).await?;
    info!("Fetched {} bytes from {}", body.len(), url);
    Dataset::from_json(&body).map_err(|e| e.to_string())
}

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("Network request failed: {:?}", value))
}
