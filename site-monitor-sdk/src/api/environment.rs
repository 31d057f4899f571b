//! Environment monitoring points (dust, noise, weather).

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use site_monitor_corelib::{err::ErrFetch, strings};

use super::{
    Envelope, STATUS_RUNNING,
    http::{Client, Error},
    parse_envelope, take_payload,
};

/// The default monitoring point number.
pub const DEF_MN: &'static str = "20250702GC0001";

const API_NAME: &'static str = "environment";

/// The panel view of the latest environment data.
#[derive(Debug, Serialize)]
pub struct EnvironmentData {
    pub temperature: String,
    pub humidity: String,
    pub pressure: String,
    #[serde(rename = "windSpeed")]
    pub wind_speed: String,
    pub status: String,
    /// The payload as received: `id`, `mn`, `pm25`, `pm10`, `tsp`, `noise`, `windDirection`,
    /// `updTime`, ...
    #[serde(rename = "rawData")]
    pub raw_data: Value,
}

/// `GET /anon/kjxa/environment/data/latest/{mn}`. The `mn` is sent as one encoded path segment.
pub async fn get_latest_data(client: &Client, mn: Option<&str>) -> Result<Envelope, Error> {
    let uri = format!(
        "/anon/kjxa/environment/data/latest/{}",
        urlencoding::encode(mn.unwrap_or(DEF_MN))
    );
    let (_, body) = client.request(Method::GET, uri.as_str(), None).await?;
    parse_envelope(&body)
}

/// To get the latest environment data of a monitoring point reshaped for display.
pub async fn get_environment_data(
    client: &Client,
    mn: Option<&str>,
) -> Result<EnvironmentData, ErrFetch> {
    let data = take_payload(API_NAME, get_latest_data(client, mn).await)?;

    Ok(EnvironmentData {
        temperature: strings::format_value(data.get("temperature")),
        humidity: strings::format_value(data.get("humidity")),
        pressure: strings::format_value(data.get("pressure")),
        wind_speed: strings::format_value(data.get("windSpeed")),
        status: STATUS_RUNNING.to_string(),
        raw_data: data,
    })
}
