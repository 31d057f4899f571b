//! Tower crane telemetry.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use site_monitor_corelib::{err::ErrFetch, strings};

use super::{
    Envelope, STATUS_RUNNING,
    http::{Client, Error},
    parse_envelope, take_payload,
};

pub const DEF_TOWER_CRANE_ID: &'static str = "6577049";
pub const DEF_TYPE: i32 = 0;

const API_NAME: &'static str = "crane";

/// The API path prefix to use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Access {
    /// `/anon/...` for the H5 pages without login.
    #[default]
    Anonymous,
    /// `/api/...` for the logged-in dashboard.
    Authenticated,
}

/// Parameters of [`get_latest_data`]. Missing values use [`DEF_TOWER_CRANE_ID`] and [`DEF_TYPE`].
#[derive(Clone, Copy, Default)]
pub struct LatestReq<'a> {
    pub tower_crane_id: Option<&'a str>,
    pub data_type: Option<i32>,
    pub access: Access,
}

/// The control panel view of the latest crane data.
#[derive(Debug, Serialize)]
pub struct ControlData {
    /// From `craneRange`.
    pub amplitude: String,
    /// From `craneHeight`.
    pub height: String,
    /// From `craneRotation`.
    pub rotation: String,
    /// From `craneElevatingCapacity`.
    pub weight: String,
    pub status: String,
    #[serde(rename = "rawData")]
    pub raw_data: Value,
}

#[derive(Serialize)]
struct LatestQuery<'a> {
    r#type: i32,
    #[serde(rename = "towerCraneId")]
    tower_crane_id: &'a str,
}

impl Access {
    pub fn prefix(&self) -> &'static str {
        match self {
            Access::Anonymous => "/anon",
            Access::Authenticated => "/api",
        }
    }
}

/// `GET /{anon|api}/kjxa/action/tower-crane/latest-data?type&towerCraneId`
pub async fn get_latest_data(client: &Client, req: &LatestReq<'_>) -> Result<Envelope, Error> {
    let query = LatestQuery {
        r#type: req.data_type.unwrap_or(DEF_TYPE),
        tower_crane_id: req.tower_crane_id.unwrap_or(DEF_TOWER_CRANE_ID),
    };
    let query = match serde_urlencoded::to_string(&query) {
        Err(e) => return Err(Error::Std(Box::new(e))),
        Ok(query) => query,
    };
    let uri = format!(
        "{}/kjxa/action/tower-crane/latest-data?{}",
        req.access.prefix(),
        query
    );
    let (_, body) = client.request(Method::GET, uri.as_str(), None).await?;
    parse_envelope(&body)
}

/// To get the latest crane data reshaped for the control panel.
pub async fn get_control_data(
    client: &Client,
    req: &LatestReq<'_>,
) -> Result<ControlData, ErrFetch> {
    let data = take_payload(API_NAME, get_latest_data(client, req).await)?;

    Ok(ControlData {
        amplitude: strings::format_value(data.get("craneRange")),
        height: strings::format_value(data.get("craneHeight")),
        rotation: strings::format_value(data.get("craneRotation")),
        weight: strings::format_value(data.get("craneElevatingCapacity")),
        status: STATUS_RUNNING.to_string(),
        raw_data: data,
    })
}
