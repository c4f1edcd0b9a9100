pub mod catalog;
pub mod events;
