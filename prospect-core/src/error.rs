use uuid::Uuid;

/// Failure raised by an analytical engine. The two kinds stay
/// distinguishable for diagnostics, but the orchestration loop treats them
/// identically: report, then try the next engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("engine cannot interpret the request: {detail}")]
    CantUnderstand { detail: String },

    #[error("engine failed: {0}")]
    General(String),
}

/// Entity store failures. These are never diverted to the error reporter;
/// they propagate to the caller.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("write could not be durably recorded: {0}")]
    WriteFailed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("offer announcement could not be scheduled: {0}")]
    ScheduleFailed(String),
}

/// The only error surfaced by offer preparation
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Feed(#[from] FeedError),
}
