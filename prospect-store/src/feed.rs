use async_trait::async_trait;
use chrono::Utc;
use prospect_core::{FeedError, NewsFeed};
use prospect_offer::Offer;
use prospect_shared::OfferPersistedEvent;
use tokio::sync::broadcast;

use crate::app_config::FeedConfig;

/// One announcement on the feed: the offer together with its event payload
#[derive(Debug, Clone)]
pub struct FeedItem {
    pub event: OfferPersistedEvent,
    pub offer: Offer,
}

/// Announcement fan-out over an in-process broadcast channel. Each scheduled
/// offer is published once; recurring re-delivery is the subscribers'
/// concern.
pub struct BroadcastFeed {
    tx: broadcast::Sender<FeedItem>,
}

impl BroadcastFeed {
    pub fn new(buffer: usize) -> Self {
        let (tx, _) = broadcast::channel(buffer);
        Self { tx }
    }

    pub fn from_config(config: &FeedConfig) -> Self {
        Self::new(config.buffer)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<FeedItem> {
        self.tx.subscribe()
    }
}

#[async_trait]
impl NewsFeed for BroadcastFeed {
    async fn schedule_recurring(&self, offer: Offer) -> Result<(), FeedError> {
        let event = OfferPersistedEvent {
            offer_id: offer.id,
            product_id: offer.product.id,
            customer_id: offer.customer.id,
            timestamp: Utc::now().timestamp(),
        };

        match self.tx.send(FeedItem { event, offer }) {
            Ok(_) => Ok(()),
            // No subscriber yet: the announcement has no audience to miss
            Err(broadcast::error::SendError(_)) => Ok(()),
        }
    }
}
