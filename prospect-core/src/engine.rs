use async_trait::async_trait;
use prospect_shared::{Customer, Product};

use crate::error::EngineError;

/// A pluggable analysis strategy mapping a product to the customers
/// predicted to be interested in it.
#[async_trait]
pub trait AnalyticalEngine: Send + Sync {
    async fn interesting_customers(&self, product: &Product) -> Result<Vec<Customer>, EngineError>;

    /// Engine name used in diagnostics
    fn name(&self) -> &str {
        "unnamed"
    }
}
