use chrono::{DateTime, Duration, Utc};
use prospect_shared::{Customer, Product};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Offer lifetime when no explicit TTL is configured
pub const DEFAULT_TTL_DAYS: i64 = 7;

/// Offer status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OfferStatus {
    Active,
    Expired,
    Withdrawn,
}

/// The record binding one product to one customer: an intent to market
/// that product to that customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Offer {
    pub id: Uuid,
    pub product: Product,
    pub customer: Customer,
    pub status: OfferStatus,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Offer {
    /// Pure offer construction: pairs a product with a customer under a
    /// fresh id. No side effects, no failure modes.
    pub fn new(product: Product, customer: Customer) -> Self {
        Self::with_ttl(product, customer, Duration::days(DEFAULT_TTL_DAYS))
    }

    pub fn with_ttl(product: Product, customer: Customer, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            product,
            customer,
            status: OfferStatus::Active,
            created_at: now,
            expires_at: now + ttl,
        }
    }

    /// Check if offer is past its TTL
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Check if offer is still active
    pub fn is_active(&self) -> bool {
        self.status == OfferStatus::Active && !self.is_expired()
    }
}
