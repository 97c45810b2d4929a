use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, Response};

use controller::request::{normalize, ApiCall};
use controller::RequestError;
use shared::constants::CONTENT_TYPE_JSON;

use crate::utils::{get_window, js_error_message};

/// JSON request helper: one fetch, one normalized result.
pub async fn request(call: &ApiCall) -> Result<Value, RequestError> {
    let body = call.body()?;
    let method = call.method().as_str();
    let url = call.url();
    log::debug!("{method} {url}");
    let (status_ok, text) = send(method, &url, body.as_deref()).await
        .map_err(|err| {
            let message = js_error_message(&err);
            log::error!("{method} {url}: {message}");
            RequestError::Transport(message)
        })?;
    normalize(status_ok, &text)
}

async fn send(method: &str, url: &str, body: Option<&str>) -> Result<(bool, String), JsValue> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_credentials(RequestCredentials::SameOrigin);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts)?;
    if body.is_some() {
        request.headers().set("Content-Type", CONTENT_TYPE_JSON)?;
    }

    let window = get_window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let text = JsFuture::from(resp.text()?).await?;

    Ok((resp.ok(), text.as_string().unwrap_or_default()))
}
