pub mod app_config;
pub mod feed;
pub mod memory;
pub mod reporter;

pub use feed::{BroadcastFeed, FeedItem};
pub use memory::MemoryStore;
pub use reporter::TracingReporter;
