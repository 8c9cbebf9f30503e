//! Type-safe wrappers for chat-platform ids and timestamps.

pub mod ids;
pub mod time;

pub use ids::{ChannelId, PlayerId, ServerId};
pub use time::{Timestamp, TIMESTAMP_FORMAT};
