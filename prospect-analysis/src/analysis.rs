use std::sync::Arc;

use chrono::Duration;
use prospect_core::{AnalysisResult, AnalyticalEngine, EntityStore, ErrorReporter, NewsFeed};
use prospect_offer::{Offer, DEFAULT_TTL_DAYS};
use prospect_shared::{Customer, Product};
use tracing::{debug, warn};
use uuid::Uuid;

/// Orchestrates customer discovery and offer preparation.
///
/// Holds an ordered list of analytical engines and the three collaborator
/// boundaries (entity store, news feed, error reporter). Every call runs
/// its steps strictly in sequence; concurrent calls share only immutable
/// state.
pub struct CustomerAnalysis {
    engines: Vec<Arc<dyn AnalyticalEngine>>,
    store: Arc<dyn EntityStore>,
    feed: Arc<dyn NewsFeed>,
    reporter: Arc<dyn ErrorReporter>,
    offer_ttl: Duration,
}

impl CustomerAnalysis {
    /// The engine list is fixed for the lifetime of the orchestrator and
    /// tried in the order given here.
    pub fn new(
        engines: Vec<Arc<dyn AnalyticalEngine>>,
        store: Arc<dyn EntityStore>,
        feed: Arc<dyn NewsFeed>,
        reporter: Arc<dyn ErrorReporter>,
    ) -> Self {
        Self {
            engines,
            store,
            feed,
            reporter,
            offer_ttl: Duration::days(DEFAULT_TTL_DAYS),
        }
    }

    /// Override the TTL stamped on prepared offers
    pub fn with_offer_ttl(mut self, ttl: Duration) -> Self {
        self.offer_ttl = ttl;
        self
    }

    /// Ask each engine in turn for the customers interested in `product`.
    ///
    /// The first engine to answer wins, even with an empty answer, and no
    /// later engine runs for this call. A failing engine has its failure
    /// forwarded to the error reporter unmodified, then the next engine is
    /// tried with the same product. Engine failures never reach the caller;
    /// when no engine can answer, the result is empty.
    pub async fn find_interesting_customers(&self, product: &Product) -> Vec<Customer> {
        for engine in &self.engines {
            match engine.interesting_customers(product).await {
                Ok(customers) => {
                    debug!(
                        engine = engine.name(),
                        product_id = %product.id,
                        count = customers.len(),
                        "engine produced a result"
                    );
                    return customers;
                }
                Err(err) => {
                    self.reporter.report(err).await;
                }
            }
        }

        warn!(product_id = %product.id, "no engine produced a result");
        Vec::new()
    }

    /// Load the product, find its interested customers, and dispatch one
    /// offer per customer in the order the engine produced them. Each offer
    /// is persisted before its announcement is scheduled; an offer that
    /// failed to persist is never handed to the feed.
    ///
    /// Store and feed failures abort the call and propagate to the caller;
    /// they are not routed through the error reporter. Returns the number
    /// of offers dispatched.
    pub async fn prepare_offers_for_product(&self, product_id: Uuid) -> AnalysisResult<u32> {
        let product = self.store.find_product(product_id).await?;
        let customers = self.find_interesting_customers(&product).await;

        let mut dispatched = 0;
        for customer in customers {
            let offer = Offer::with_ttl(product.clone(), customer, self.offer_ttl);
            // Abort-on-failure policy lives on these two `?`: a later offer
            // is never attempted once persistence or scheduling fails.
            self.store.persist_offer(&offer).await?;
            self.feed.schedule_recurring(offer).await?;
            dispatched += 1;
        }

        debug!(product_id = %product.id, dispatched, "offer preparation complete");
        Ok(dispatched)
    }
}
