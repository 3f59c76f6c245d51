//! Shared HTTP path for every backend call.
//!
//! All service functions go through the helpers here, which add the JSON
//! headers, log each request and response, and abort requests that exceed
//! the fixed timeout. Payloads pass through untouched and every failure is
//! returned to the caller as `Err(String)` — no retries.

use gloo_net::http::{Request, Response};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{AbortController, AbortSignal};

use crate::shared::api_utils::api_url;

const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Aborts the in-flight request once the timeout elapses. Dropping the
/// guard cancels the timer, so a response that arrives in time wins.
struct TimeoutGuard {
    signal: Option<AbortSignal>,
    _timer: Option<Timeout>,
}

impl TimeoutGuard {
    fn new() -> Self {
        match AbortController::new() {
            Ok(controller) => {
                let signal = controller.signal();
                let timer = Timeout::new(REQUEST_TIMEOUT_MS, move || controller.abort());
                Self {
                    signal: Some(signal),
                    _timer: Some(timer),
                }
            }
            // No AbortController (non-browser host): request runs unguarded.
            Err(_) => Self {
                signal: None,
                _timer: None,
            },
        }
    }

    fn signal(&self) -> Option<&AbortSignal> {
        self.signal.as_ref()
    }
}

async fn send_logged(
    method: &'static str,
    path: &str,
    request: Request,
    guard: TimeoutGuard,
) -> Result<Response, String> {
    log::info!("API request: {} {}", method, path);

    let result = request.send().await;
    drop(guard);

    let response = result.map_err(|e| {
        log::error!("API request error: {} {}: {}", method, path, e);
        format!("Request failed: {}", e)
    })?;

    let status = response.status();
    log::info!("API response: {} {}", status, path);
    if status >= 500 {
        log::error!("Server error: {} {}", status, path);
    }
    if !response.ok() {
        return Err(format!("HTTP error: {}", status));
    }
    Ok(response)
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let guard = TimeoutGuard::new();
    let request = Request::get(&api_url(path))
        .abort_signal(guard.signal())
        .header("Accept", "application/json")
        .build()
        .map_err(|e| format!("Failed to build request: {}", e))?;
    let response = send_logged("GET", path, request, guard).await?;
    parse(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let guard = TimeoutGuard::new();
    let request = Request::post(&api_url(path))
        .abort_signal(guard.signal())
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?;
    let response = send_logged("POST", path, request, guard).await?;
    parse(response).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let guard = TimeoutGuard::new();
    let request = Request::put(&api_url(path))
        .abort_signal(guard.signal())
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?;
    let response = send_logged("PUT", path, request, guard).await?;
    parse(response).await
}

pub async fn delete(path: &str) -> Result<(), String> {
    let guard = TimeoutGuard::new();
    let request = Request::delete(&api_url(path))
        .abort_signal(guard.signal())
        .header("Accept", "application/json")
        .build()
        .map_err(|e| format!("Failed to build request: {}", e))?;
    send_logged("DELETE", path, request, guard).await?;
    Ok(())
}
