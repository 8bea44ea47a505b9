//! Product catalog domain module.
//!
//! This crate contains the catalog contract — product records, the fixed
//! seed table, and the list/get/accept operations — implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod catalog;
pub mod product;
pub mod seed;

pub use catalog::{AcceptedProduct, Catalog};
pub use product::{ImageSet, Product, ProductDraft, Rating};
pub use seed::seed_products;
