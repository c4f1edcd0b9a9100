pub mod models;

pub use models::{Offer, OfferStatus, DEFAULT_TTL_DAYS};
