use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use prospect_core::{EntityStore, StoreError};
use prospect_offer::Offer;
use prospect_shared::Product;
use tokio::sync::RwLock;
use uuid::Uuid;

/// HashMap-backed entity store for development and tests
pub struct MemoryStore {
    products: RwLock<HashMap<Uuid, Product>>,
    offers: RwLock<Vec<Offer>>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            products: RwLock::new(HashMap::new()),
            offers: RwLock::new(Vec::new()),
            unavailable: AtomicBool::new(false),
        }
    }

    pub async fn add_product(&self, product: Product) {
        self.products.write().await.insert(product.id, product);
    }

    pub async fn offer_count(&self) -> usize {
        self.offers.read().await.len()
    }

    pub async fn offers_for_product(&self, product_id: Uuid) -> Vec<Offer> {
        self.offers
            .read()
            .await
            .iter()
            .filter(|offer| offer.product.id == product_id)
            .cloned()
            .collect()
    }

    /// Simulate the backing store going down; every call then fails
    pub fn set_unavailable(&self, down: bool) {
        self.unavailable.store(down, Ordering::SeqCst);
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn find_product(&self, id: Uuid) -> Result<Product, StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store offline".to_string()));
        }

        self.products
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound {
                entity: "product",
                id,
            })
    }

    async fn persist_offer(&self, offer: &Offer) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::WriteFailed("memory store offline".to_string()));
        }

        self.offers.write().await.push(offer.clone());
        Ok(())
    }
}
