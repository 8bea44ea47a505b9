//! The catalog: a process-wide read-only product table.

use chrono::{DateTime, Utc};

use showroom_core::{DomainError, DomainResult, ProductId};

use crate::product::{Product, ProductDraft};
use crate::seed::seed_products;

/// Acknowledgement for an accepted draft.
///
/// The draft is echoed back to the caller and then discarded — the catalog
/// does not retain it. Real storage is a deliberate non-goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedProduct {
    pub draft: ProductDraft,
    pub accepted_at: DateTime<Utc>,
}

/// Immutable product table, constructed once at startup.
///
/// There is no write path back into the table: `accept` validates and
/// acknowledges a draft without storing it, and no update/delete operations
/// exist. Because the table never changes after construction it can be
/// shared across request handlers without locks.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from explicit records; identifiers must be unique.
    pub fn from_products(products: Vec<Product>) -> DomainResult<Self> {
        for (i, p) in products.iter().enumerate() {
            if products[..i].iter().any(|q| q.id() == p.id()) {
                return Err(DomainError::validation(format!(
                    "duplicate product id {}",
                    p.id()
                )));
            }
        }
        Ok(Self { products })
    }

    /// Build the catalog from the fixed seed table.
    pub fn seeded() -> DomainResult<Self> {
        Self::from_products(seed_products()?)
    }

    /// Every record, in stable insertion order. Idempotent, no side effects.
    pub fn list_all(&self) -> &[Product] {
        &self.products
    }

    /// Linear scan for the record with the given id.
    ///
    /// `None` means not-found: callers render a not-found state, never fail
    /// the process.
    pub fn get_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Validate and acknowledge a draft without storing it.
    ///
    /// The accepted record is echoed back and then dropped; a subsequent
    /// `list_all` is unaffected.
    pub fn accept(&self, draft: ProductDraft) -> DomainResult<AcceptedProduct> {
        draft.validate()?;
        tracing::info!(name = %draft.name, images = draft.images.len(), "accepted product draft (not persisted)");
        Ok(AcceptedProduct {
            draft,
            accepted_at: Utc::now(),
        })
    }
}
