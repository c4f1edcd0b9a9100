use async_trait::async_trait;
use prospect_offer::Offer;
use prospect_shared::Product;
use uuid::Uuid;

use crate::error::{EngineError, FeedError, StoreError};

/// Durable persistence boundary for products and offers
#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn find_product(&self, id: Uuid) -> Result<Product, StoreError>;

    async fn persist_offer(&self, offer: &Offer) -> Result<(), StoreError>;
}

/// Delivery boundary that announces a persisted offer to its audience.
/// Delivery cadence and guarantees belong to the feed, not the caller.
#[async_trait]
pub trait NewsFeed: Send + Sync {
    async fn schedule_recurring(&self, offer: Offer) -> Result<(), FeedError>;
}

/// Diagnostic sink for engine failures diverted out of the analysis loop.
/// Receives the original failure value, unwrapped. Best-effort: the caller
/// consumes no return value.
#[async_trait]
pub trait ErrorReporter: Send + Sync {
    async fn report(&self, error: EngineError);
}
