//! Domain entities and value objects shared by the storage and service layers.

pub mod category;
pub mod product;
pub mod types;
