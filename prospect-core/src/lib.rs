pub mod engine;
pub mod error;
pub mod repository;

pub use engine::AnalyticalEngine;
pub use error::{AnalysisError, EngineError, FeedError, StoreError};
pub use repository::{EntityStore, ErrorReporter, NewsFeed};

pub type AnalysisResult<T> = Result<T, AnalysisError>;
