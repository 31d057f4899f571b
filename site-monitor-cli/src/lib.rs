//! The command-line tool for construction-site monitoring APIs.

pub mod libs;
