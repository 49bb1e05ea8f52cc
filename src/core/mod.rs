//! Core utilities shared by the data sources
//!
//! - `http`: request headers for the upstream API
//! - `files`: snapshot file helpers

pub mod files;
pub mod http;

pub use files::{snapshot_path, try_read_to_string};
pub use http::default_header_map;
