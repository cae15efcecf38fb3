//! Network clients and data models for everything the app reads from the
//! outside world: the now-playing endpoint, station feeds, polls and
//! announcements. All remote reads go through the CORS relay.

pub mod announcements;
pub mod metadata;
pub mod models;
pub mod polls;
pub mod relay;
pub mod rss;

pub use models::*;
