use std::collections::HashMap;

use async_trait::async_trait;
use prospect_core::{AnalyticalEngine, EngineError};
use prospect_shared::{Customer, Product, ProductCategory};

/// Selects roster customers whose declared interests contain the product's
/// category. Only models live-catalog affinity, so a deactivated product is
/// outside its vocabulary.
pub struct SegmentAffinityEngine {
    roster: Vec<Customer>,
}

impl SegmentAffinityEngine {
    pub fn new(roster: Vec<Customer>) -> Self {
        Self { roster }
    }
}

#[async_trait]
impl AnalyticalEngine for SegmentAffinityEngine {
    async fn interesting_customers(&self, product: &Product) -> Result<Vec<Customer>, EngineError> {
        if !product.is_active {
            return Err(EngineError::CantUnderstand {
                detail: format!("product {} is not in the live catalog", product.id),
            });
        }

        Ok(self
            .roster
            .iter()
            .filter(|customer| customer.interests.contains(&product.category))
            .cloned()
            .collect())
    }

    fn name(&self) -> &str {
        "segment-affinity"
    }
}

/// Selects customers who recently bought in the product's category, from a
/// purchase log keyed by category.
pub struct RecentBuyerEngine {
    purchases: HashMap<ProductCategory, Vec<Customer>>,
    available: bool,
}

impl RecentBuyerEngine {
    pub fn new(purchases: HashMap<ProductCategory, Vec<Customer>>) -> Self {
        Self {
            purchases,
            available: true,
        }
    }

    /// Mark the backing purchase log unreachable; every lookup then fails
    pub fn offline(mut self) -> Self {
        self.available = false;
        self
    }
}

#[async_trait]
impl AnalyticalEngine for RecentBuyerEngine {
    async fn interesting_customers(&self, product: &Product) -> Result<Vec<Customer>, EngineError> {
        if !self.available {
            return Err(EngineError::General("purchase log unavailable".to_string()));
        }

        Ok(self
            .purchases
            .get(&product.category)
            .cloned()
            .unwrap_or_default())
    }

    fn name(&self) -> &str {
        "recent-buyer"
    }
}
