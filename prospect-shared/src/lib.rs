pub mod models;

pub use models::catalog::{Customer, Product, ProductCategory};
pub use models::events::OfferPersistedEvent;
