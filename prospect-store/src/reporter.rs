use async_trait::async_trait;
use prospect_core::{EngineError, ErrorReporter};
use tracing::error;

/// Reports diverted engine failures to the log
pub struct TracingReporter;

#[async_trait]
impl ErrorReporter for TracingReporter {
    async fn report(&self, err: EngineError) {
        error!(%err, "analytical engine failed");
    }
}
