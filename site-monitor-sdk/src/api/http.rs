//! A wrapped HTTP client that is used for the site monitoring backend APIs.
//!
//! The client only does transport: it joins the base URL with the API path, attaches the bearer
//! token (if any) and JSON bodies, and returns the status code with the raw body. Envelope
//! validation belongs to the API modules.
//!
//! Here is an example to create a client to access an API:
//!
//! ```rust,no_run
//! use reqwest::Method;
//! use site_monitor_sdk::api::http::{Client, ClientOptions};
//!
//! async fn fetch() {
//!     let opts = ClientOptions {
//!         base: "http://localhost:8080".to_string(),
//!         ..Default::default()
//!     };
//!     let client = match Client::new(opts) {
//!         Err(_) => return,
//!         Ok(client) => client,
//!     };
//!     let url = "/anon/kjxa/environment/data/latest/20250702GC0001";
//!     match client.request(Method::GET, url, None).await {
//!         Err(e) => {
//!             // Connection, timeout or non-2xx status.
//!         }
//!         Ok((status_code, body)) => {
//!             // Parse the envelope.
//!         }
//!     }
//! }
//! ```

use std::{error::Error as StdError, fmt, time::Duration};

use bytes::Bytes;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, StatusCode, header};

/// The HTTP client to request the backend APIs.
#[derive(Clone)]
pub struct Client {
    /// The underlying HTTP client instance.
    client: ReqwestClient,
    /// Backend base path.
    base: String,
    /// The access token for authenticated (`/api`) endpoints.
    token: Option<String>,
}

/// Options of the HTTP client [`Client`].
#[derive(Clone, Default)]
pub struct ClientOptions {
    /// Backend base path with scheme. For example `http://localhost:8080`.
    pub base: String,
    /// The access token. Sent as `Authorization: Bearer` when present.
    pub token: Option<String>,
    /// Request timeout in milliseconds. Default is [`DEF_TIMEOUT_MS`], which is also used for `0`.
    pub timeout_ms: Option<u64>,
}

/// Transport errors.
#[derive(Debug)]
pub enum Error {
    /// Errors from building or executing the request and from decoding the body.
    Std(Box<dyn StdError + Send + Sync>),
    /// Non-2xx status code with the body text.
    Status(StatusCode, String),
}

pub const DEF_TIMEOUT_MS: u64 = 10000;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Std(e) => write!(f, "{}", e),
            Error::Status(status, body) => {
                write!(f, "unexpected status: {}, body: {}", status, body)
            }
        }
    }
}

impl StdError for Error {}

impl Client {
    /// Create an instance.
    pub fn new(opts: ClientOptions) -> Result<Self, Error> {
        let timeout = Duration::from_millis(match opts.timeout_ms {
            None | Some(0) => DEF_TIMEOUT_MS,
            Some(timeout) => timeout,
        });
        let client = match ReqwestClient::builder().timeout(timeout).build() {
            Err(e) => return Err(Error::Std(Box::new(e))),
            Ok(client) => client,
        };
        Ok(Client {
            client,
            base: opts.base.trim_end_matches('/').to_string(),
            token: opts.token,
        })
    }

    /// The backend base path.
    pub fn base(&self) -> &str {
        self.base.as_str()
    }

    /// Execute an API request.
    /// - `api_path` is the relative path (of the base) of the API with query string.
    ///   For example: `/anon/kjxa/action/tower-crane/latest-data?type=0&towerCraneId=6577049`.
    /// - `body` **MUST** be JSON format.
    ///
    /// Statuses other than 2xx are returned as [`Error::Status`].
    pub async fn request(
        &self,
        method: Method,
        api_path: &str,
        body: Option<Bytes>,
    ) -> Result<(StatusCode, Bytes), Error> {
        let url = format!("{}{}", self.base, api_path);
        debug!("[API] {} {}", method, url);

        let mut builder = self.client.request(method, url.as_str());
        if let Some(token) = self.token.as_ref() {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            builder = builder.body(body);
        }
        let req = match builder.build() {
            Err(e) => return Err(Error::Std(Box::new(e))),
            Ok(req) => req,
        };
        let resp = match self.client.execute(req).await {
            Err(e) => return Err(Error::Std(Box::new(e))),
            Ok(resp) => resp,
        };
        let status = resp.status();
        let body = match resp.bytes().await {
            Err(e) => return Err(Error::Std(Box::new(e))),
            Ok(body) => body,
        };
        if !status.is_success() {
            let body = String::from_utf8_lossy(body.as_ref()).to_string();
            return Err(Error::Status(status, body));
        }
        Ok((status, body))
    }
}
