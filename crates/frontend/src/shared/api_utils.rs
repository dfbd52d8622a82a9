//! HTTP helpers for the showroom backend.
//!
//! Every call goes through [`join_api_url`], so callers pass either a path
//! relative to the configured base (`"products"`) or an absolute URL.

use contracts::shared::api_path::{bearer, join_api_url};
use contracts::shared::error::SiteError;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde_json::Value;
use wasm_bindgen::JsValue;
use web_sys::FormData;

use super::storage;

/// Attach `Authorization: Bearer ...` when an admin token is stored.
fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::api_token() {
        Some(token) => builder.header("Authorization", &bearer(&token)),
        None => builder,
    }
}

/// Map a JS exception into a transport error.
pub fn js_error(value: JsValue) -> SiteError {
    SiteError::Transport(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}

fn transport(e: gloo_net::Error) -> SiteError {
    SiteError::Transport(e.to_string())
}

/// Read a response body as JSON; an empty 2xx body becomes `null`.
async fn read_json(response: Response) -> Result<Value, SiteError> {
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.map_err(transport)?;

    if !response.ok() {
        return Err(SiteError::from_response(status, &status_text, &body));
    }
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&body)?)
}

/// `GET {base}/{path}` returning the raw JSON document.
pub async fn get_json(base: &str, path: &str) -> Result<Value, SiteError> {
    let url = join_api_url(base, path);
    log::debug!("GET {}", url);

    let response = with_auth(Request::get(&url).header("Accept", "application/json"))
        .send()
        .await
        .map_err(transport)?;
    read_json(response).await
}

/// `POST {base}/{path}` with a multipart body.
///
/// No `Content-Type` header is set so the browser adds the boundary itself.
pub async fn post_form(base: &str, path: &str, form: &FormData) -> Result<Value, SiteError> {
    let url = join_api_url(base, path);
    log::debug!("POST {}", url);

    let request = with_auth(Request::post(&url).header("Accept", "application/json"))
        .body(JsValue::from(form.clone()))
        .map_err(transport)?;
    let response = request.send().await.map_err(transport)?;
    read_json(response).await
}
