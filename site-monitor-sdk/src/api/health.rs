//! Personnel health monitoring (smart band logs).

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

/// The data-select collection code of smart band logs.
pub const COLLECT_CODE: &'static str = "smartBandLogGroup";

const API_NAME: &'static str = "health";

/// Search conditions. Absent fields are not sent.
#[derive(Default, Serialize)]
pub struct SearchReq<'a> {
    #[serde(rename = "userName", skip_serializing_if = "Option::is_none")]
    pub user_name: Option<&'a str>,
    #[serde(rename = "orgId", skip_serializing_if = "Option::is_none")]
    pub org_id: Option<&'a str>,
    /// The smart band code.
    #[serde(rename = "deviceCode", skip_serializing_if = "Option::is_none")]
    pub device_code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<&'a str>,
    #[serde(rename = "pageSize", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<u64>,
}

/// Health records.
#[derive(Debug, Serialize)]
pub struct HealthRecords {
    pub records: Vec<Map<String, Value>>,
    pub total: u64,
}

/// The collection API returns either a bare list or a page.
#[derive(Deserialize)]
#[serde(untagged)]
enum RecordsData {
    List(Vec<Map<String, Value>>),
    Page {
        #[serde(default)]
        records: Vec<Map<String, Value>>,
        total: Option<u64>,
    },
}

#[derive(Serialize)]
struct CollectQuery<'a> {
    code: &'a str,
}

/// `POST /api/base/data/data-select/search-collect-page?code=smartBandLogGroup`
pub async fn search_records(client: &Client, req: &SearchReq<'_>) -> Result<Envelope, Error> {
    let body = match serde_json::to_vec(req) {
        Err(e) => return Err(Error::Std(Box::new(e))),
        Ok(body) => Some(Bytes::from(body)),
    };
    let query = match serde_urlencoded::to_string(&CollectQuery { code: COLLECT_CODE }) {
        Err(e) => return Err(Error::Std(Box::new(e))),
        Ok(query) => query,
    };
    let uri = format!("/api/base/data/data-select/search-collect-page?{}", query);
    let (_, body) = client.request(Method::POST, uri.as_str(), body).await?;
    parse_envelope(&body)
}

/// To get health records.
pub async fn get_records(
    client: &Client,
    req: &SearchReq<'_>,
) -> Result<HealthRecords, ErrFetch> {
    let data = take_payload(API_NAME, search_records(client, req).await)?;

    Ok(match decode_payload::<RecordsData>(API_NAME, data)? {
        RecordsData::List(records) => HealthRecords {
            total: records.len() as u64,
            records,
        },
        RecordsData::Page { records, total } => HealthRecords {
            total: total.unwrap_or(records.len() as u64),
            records,
        },
    })
}
