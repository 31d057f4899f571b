//! Common libraries of Site Monitor modules.

pub mod err;
pub mod logger;
pub mod strings;
