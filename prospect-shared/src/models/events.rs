use uuid::Uuid;

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct OfferPersistedEvent {
    pub offer_id: Uuid,
    pub product_id: Uuid,
    pub customer_id: Uuid,
    pub timestamp: i64,
}
