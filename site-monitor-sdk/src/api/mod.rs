//! Wrapped backend APIs.
//!
//! Every domain module offers a raw function that returns the parsed [`Envelope`] and a reshaping
//! function that returns a flattened record or an [`ErrFetch`]:
//! - [`ErrFetch::FetchFailed`] when the envelope reports failure or carries no payload.
//! - [`ErrFetch::Offline`] when the request itself fails.

use bytes::Bytes;
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use site_monitor_corelib::err::ErrFetch;

pub mod attendance;
pub mod crane;
pub mod environment;
pub mod health;
pub mod http;

use http::Error;

/// The status of records built from a successful response.
pub const STATUS_RUNNING: &'static str = "running";
/// The status to display when a fetch fails for any reason.
pub const STATUS_OFFLINE: &'static str = "offline";

/// The outer wrapper of all backend responses. Missing and `null` scalar fields take their
/// default values.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Envelope<T = Value> {
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: i64,
    #[serde(default)]
    pub meta: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default)]
    pub messages: Option<Value>,
    pub data: Option<T>,
    #[serde(rename = "complexData", default, deserialize_with = "null_as_default")]
    pub complex_data: bool,
    #[serde(rename = "encryptData", default, deserialize_with = "null_as_default")]
    pub encrypt_data: bool,
    #[serde(rename = "disableEncrypt", default, deserialize_with = "null_as_default")]
    pub disable_encrypt: bool,
}

/// The device status derived from a fetch result. Any failure shows as offline.
pub fn status_of<T>(result: &Result<T, ErrFetch>) -> &'static str {
    match result {
        Err(_) => STATUS_OFFLINE,
        Ok(_) => STATUS_RUNNING,
    }
}

/// To parse a response body into an envelope.
pub(crate) fn parse_envelope(body: &Bytes) -> Result<Envelope, Error> {
    match serde_json::from_slice::<Envelope>(body.as_ref()) {
        Err(e) => Err(Error::Std(Box::new(e))),
        Ok(envelope) => Ok(envelope),
    }
}

/// To take the payload out of a raw API result. The cause is logged and then dropped.
pub(crate) fn take_payload(api: &str, result: Result<Envelope, Error>) -> Result<Value, ErrFetch> {
    let envelope = match result {
        Err(e) => {
            warn!("[{}] request error: {}", api, e);
            return Err(ErrFetch::Offline);
        }
        Ok(envelope) => envelope,
    };
    if !envelope.success {
        warn!(
            "[{}] unsuccessful response, code: {}, message: {:?}",
            api, envelope.code, envelope.message
        );
        return Err(ErrFetch::FetchFailed);
    }
    match envelope.data {
        Some(data) if is_present(&data) => Ok(data),
        _ => {
            warn!("[{}] response without data, code: {}", api, envelope.code);
            Err(ErrFetch::FetchFailed)
        }
    }
}

/// To decode a payload into a typed view-model. Decoding errors count as offline.
pub(crate) fn decode_payload<T>(api: &str, data: Value) -> Result<T, ErrFetch>
where
    T: for<'de> Deserialize<'de>,
{
    match serde_json::from_value::<T>(data) {
        Err(e) => {
            warn!("[{}] unexpected data format: {}", api, e);
            Err(ErrFetch::Offline)
        }
        Ok(value) => Ok(value),
    }
}

/// Empty strings, zero and `false` payloads count as absent as well as `null`.
fn is_present(data: &Value) -> bool {
    match data {
        Value::Null => false,
        Value::Bool(v) => *v,
        Value::Number(v) => v.as_f64() != Some(0.0),
        Value::String(v) => !v.is_empty(),
        _ => true,
    }
}

fn null_as_default<'de, D, V>(deserializer: D) -> Result<V, D::Error>
where
    D: Deserializer<'de>,
    V: Default + Deserialize<'de>,
{
    Ok(Option::<V>::deserialize(deserializer)?.unwrap_or_default())
}
