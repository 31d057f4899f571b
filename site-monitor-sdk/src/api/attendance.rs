//! Personnel attendance from face recognition devices.

use bytes::Bytes;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use site_monitor_corelib::err::ErrFetch;

use super::{
    Envelope,
    http::{Client, Error},
    decode_payload, parse_envelope, take_payload,
};

const API_NAME: &'static str = "attendance";

/// Search conditions. Absent fields are not sent.
#[derive(Default, Serialize)]
pub struct SearchReq<'a> {
    /// Worker name.
    #[serde(rename = "realName", skip_serializing_if = "Option::is_none")]
    pub real_name: Option<&'a str>,
    /// Where the clock-in device is installed.
    #[serde(rename = "devicePosition", skip_serializing_if = "Option::is_none")]
    pub device_position: Option<&'a str>,
    #[serde(rename = "pageSize", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,
    /// 1-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<u64>,
}

/// One page of attendance records.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AttendancePage {
    pub records: Vec<Map<String, Value>>,
    pub total: u64,
    pub size: u64,
    pub current: u64,
    pub pages: u64,
}

/// `POST /anon/kjxa/action/face-attendance/work/search-page`
pub async fn search_page(client: &Client, req: &SearchReq<'_>) -> Result<Envelope, Error> {
    let body = match serde_json::to_vec(req) {
        Err(e) => return Err(Error::Std(Box::new(e))),
        Ok(body) => Some(Bytes::from(body)),
    };
    let uri = "/anon/kjxa/action/face-attendance/work/search-page";
    let (_, body) = client.request(Method::POST, uri, body).await?;
    parse_envelope(&body)
}

/// To get one page of attendance records.
pub async fn get_page(client: &Client, req: &SearchReq<'_>) -> Result<AttendancePage, ErrFetch> {
    let data = take_payload(API_NAME, search_page(client, req).await)?;
    decode_payload(API_NAME, data)
}
