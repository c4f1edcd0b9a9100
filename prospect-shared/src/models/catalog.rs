use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product categories understood by the analytical engines
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductCategory {
    Electronics,
    Apparel,
    Grocery,
    Travel,
    Media,
    HomeGoods,
}

/// A marketable product. Loaded from the entity store, never mutated
/// during analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub category: ProductCategory,
    pub description: Option<String>,
    pub price_nuc: i32,
    pub is_active: bool,
    pub metadata: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn new(name: impl Into<String>, category: ProductCategory, price_nuc: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
            description: None,
            price_nuc,
            is_active: true,
            metadata: serde_json::json!({}),
            created_at: Utc::now(),
        }
    }

    /// Mark the product withdrawn from the live catalog
    pub fn deactivated(mut self) -> Self {
        self.is_active = false;
        self
    }
}

/// A customer as selected by an analytical engine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub id: Uuid,
    pub email: String,
    pub segment: Option<String>,
    pub interests: Vec<ProductCategory>,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    pub fn new(email: impl Into<String>, interests: Vec<ProductCategory>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            segment: None,
            interests,
            created_at: Utc::now(),
        }
    }

    pub fn with_segment(mut self, segment: impl Into<String>) -> Self {
        self.segment = Some(segment.into());
        self
    }
}
