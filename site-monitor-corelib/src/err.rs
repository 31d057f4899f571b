//! The public error of the data-fetch functions.
//!
//! Only two conditions reach callers and both discard the original cause. Log the cause before
//! converting it:
//!
//! ```
//! use site_monitor_corelib::err::ErrFetch;
//!
//! fn check(success: bool) -> Result<(), ErrFetch> {
//!     match success {
//!         false => Err(ErrFetch::FetchFailed),
//!         true => Ok(()),
//!     }
//! }
//! ```

use std::{error::Error, fmt};

/// The fetch error definitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrFetch {
    /// The envelope reports failure or carries no payload.
    FetchFailed,
    /// The request did not complete: connection, timeout, status or decoding errors.
    Offline,
}

/// Envelope `success` is false or `data` is absent.
pub const E_FETCH_FAILED: &'static str = "fetch failed";
/// Transport level failure.
pub const E_OFFLINE: &'static str = "device offline";

impl ErrFetch {
    /// The fixed human-readable message.
    pub fn message(&self) -> &'static str {
        match *self {
            ErrFetch::FetchFailed => E_FETCH_FAILED,
            ErrFetch::Offline => E_OFFLINE,
        }
    }
}

impl fmt::Display for ErrFetch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl Error for ErrFetch {}
