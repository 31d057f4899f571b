//! SDK for construction-site monitoring front ends.
//!
//! - [`api`]: wrapped REST calls for tower cranes, environment sensors, attendance and health
//!   monitoring.
//! - [`routes`]: the page route table of the mobile (H5) pages.

pub mod api;
pub mod routes;
