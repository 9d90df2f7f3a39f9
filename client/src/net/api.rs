//! REST calls against the remote collection resource.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: stubs returning `StoreError::Local`,
//! since the resource is only contacted from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures are classified by where they happened: the request could not be
//! built (`Local`), it was sent but nothing came back (`NoResponse`), or the
//! server answered with a non-success status (`Status`). The body parsers
//! below are pure so both builds share and test them.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use serde_json::{Map, Value};

use super::cancel::CancelToken;
use crate::entity::{Draft, EntityDescriptor, Record};
use crate::store::{StoreError, UNKNOWN_ERROR};

/// Write requests give up after this long. Reads have no timeout.
pub const WRITE_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetch the whole collection with `GET endpoint`.
///
/// # Errors
///
/// Returns the classified `StoreError` for transport, status, or payload
/// failures, and `Cancelled` when `cancel` fires first.
pub async fn fetch_collection(
    descriptor: &EntityDescriptor,
    endpoint: &str,
    cancel: &CancelToken,
) -> Result<Vec<Record>, StoreError> {
    #[cfg(feature = "hydrate")]
    {
        let controller = web_sys::AbortController::new().ok();
        let signal = controller.as_ref().map(web_sys::AbortController::signal);
        let request = gloo_net::http::Request::get(endpoint).abort_signal(signal.as_ref());

        let Ok(sent) = cancel.track(request.send()).await else {
            abort(controller.as_ref());
            return Err(StoreError::Cancelled);
        };
        let resp = sent.map_err(|e| {
            log::error!("GET {endpoint} failed: {e}");
            StoreError::NoResponse
        })?;
        let status = resp.status();
        let text = resp.text().await.map_err(|_| StoreError::NoResponse)?;
        if !resp.ok() {
            return Err(status_error(status, &text));
        }
        let body: Value = serde_json::from_str(&text).map_err(|_| StoreError::InvalidPayload)?;
        parse_collection(descriptor, status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (descriptor, endpoint, cancel);
        Err(StoreError::Local("not available on server".to_owned()))
    }
}

/// Send `draft` as the JSON body of `POST endpoint`.
///
/// # Errors
///
/// Returns the classified `StoreError`; a write that exceeds
/// [`WRITE_TIMEOUT`] is reported as `NoResponse`.
pub async fn post_record(
    descriptor: &EntityDescriptor,
    endpoint: &str,
    draft: &Draft,
    cancel: &CancelToken,
) -> Result<Record, StoreError> {
    #[cfg(feature = "hydrate")]
    {
        use futures::future::{Either, select};

        let body = draft_body(descriptor, draft);
        let controller = web_sys::AbortController::new().ok();
        let signal = controller.as_ref().map(web_sys::AbortController::signal);
        let request = gloo_net::http::Request::post(endpoint)
            .header("Content-Type", "application/json")
            .abort_signal(signal.as_ref())
            .json(&body)
            .map_err(|e| StoreError::Local(e.to_string()))?;

        let send = Box::pin(request.send());
        let timeout = Box::pin(gloo_timers::future::sleep(WRITE_TIMEOUT));
        let Ok(raced) = cancel.track(select(send, timeout)).await else {
            abort(controller.as_ref());
            return Err(StoreError::Cancelled);
        };
        let resp = match raced {
            Either::Left((sent, _)) => sent.map_err(|e| {
                log::error!("POST {endpoint} failed: {e}");
                StoreError::NoResponse
            })?,
            Either::Right(((), _)) => {
                abort(controller.as_ref());
                log::error!("POST {endpoint} timed out after {WRITE_TIMEOUT:?}");
                return Err(StoreError::NoResponse);
            }
        };
        let status = resp.status();
        let text = resp.text().await.map_err(|_| StoreError::NoResponse)?;
        if !resp.ok() {
            return Err(status_error(status, &text));
        }
        Ok(created_record(descriptor, draft, &text))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (descriptor, endpoint, draft, cancel);
        Err(StoreError::Local("not available on server".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
fn abort(controller: Option<&web_sys::AbortController>) {
    if let Some(controller) = controller {
        controller.abort();
    }
}

/// Map a successful read to records: only HTTP 200 with an array counts.
///
/// # Errors
///
/// Returns `InvalidPayload` for any other status or body shape.
pub fn parse_collection(descriptor: &EntityDescriptor, status: u16, body: &Value) -> Result<Vec<Record>, StoreError> {
    let Value::Array(items) = body else {
        return Err(StoreError::InvalidPayload);
    };
    if status != 200 {
        return Err(StoreError::InvalidPayload);
    }
    let records: Vec<_> = items
        .iter()
        .filter_map(|item| record_from_json(descriptor, item))
        .collect();
    let skipped = items.len() - records.len();
    if skipped > 0 {
        log::warn!("{skipped} of {} {:?} rows skipped: no usable id", items.len(), descriptor.kind);
    }
    Ok(records)
}

/// Convert one JSON object into a record. Missing or null fields become
/// empty strings; numbers and booleans are stringified. Objects without a
/// usable `id` are skipped.
pub fn record_from_json(descriptor: &EntityDescriptor, item: &Value) -> Option<Record> {
    let object = item.as_object()?;
    let id = match object.get("id")? {
        Value::Number(n) => u32::try_from(n.as_u64()?).ok()?,
        Value::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    let fields = descriptor
        .fields
        .iter()
        .map(|field| (field.key.to_owned(), scalar_text(object.get(field.key))))
        .collect();
    Some(Record { id, fields })
}

fn scalar_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Status the candidate proxy answers with when its upstream never replied.
pub const GATEWAY_TIMEOUT: u16 = 504;

/// Build the `Status` error for a non-success response, taking the message
/// from the body's `message` field when there is one. A gateway timeout is
/// the proxy reporting that nothing came back, so it maps to `NoResponse`.
pub fn status_error(status: u16, body: &str) -> StoreError {
    if status == GATEWAY_TIMEOUT {
        return StoreError::NoResponse;
    }
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_owned))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_ERROR.to_owned());
    StoreError::Status { status, message }
}

/// JSON body for a write: every descriptor field, no identifier.
pub fn draft_body(descriptor: &EntityDescriptor, draft: &Draft) -> Value {
    let object: Map<String, Value> = descriptor
        .fields
        .iter()
        .map(|field| (field.key.to_owned(), Value::String(draft.get(field.key).to_owned())))
        .collect();
    Value::Object(object)
}

/// The record a successful write produced: the echoed body when it parses,
/// otherwise the draft under identifier 0.
pub fn created_record(descriptor: &EntityDescriptor, draft: &Draft, body: &str) -> Record {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| record_from_json(descriptor, &v))
        .unwrap_or_else(|| draft.clone().into_record(0))
}
