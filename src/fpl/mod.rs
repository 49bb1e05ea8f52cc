//! Data-fetch layer for the draft API: typed records and the sources that produce them.

pub mod http;
pub mod snapshot;
pub mod source;
pub mod types;

pub use http::HttpSource;
pub use snapshot::SnapshotSource;
pub use source::DraftSource;
