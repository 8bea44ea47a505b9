//! Service wiring: the seeded catalog plus the simulated round-trip delay.

use std::time::Duration;

use showroom_catalog::{AcceptedProduct, Catalog, Product, ProductDraft};
use showroom_core::{DomainResult, ProductId};

/// Shared, read-only application services.
///
/// The catalog is built once before the server starts; handlers share it
/// through an `Arc` with no locks and no interior mutability.
pub struct AppServices {
    catalog: Catalog,
    simulated_delay: Duration,
}

pub fn build_services(simulated_delay: Duration) -> DomainResult<AppServices> {
    Ok(AppServices {
        catalog: Catalog::seeded()?,
        simulated_delay,
    })
}

impl AppServices {
    pub async fn products_list(&self) -> &[Product] {
        self.round_trip().await;
        self.catalog.list_all()
    }

    pub async fn products_get(&self, id: ProductId) -> Option<&Product> {
        self.round_trip().await;
        self.catalog.get_by_id(id)
    }

    pub async fn products_accept(&self, draft: ProductDraft) -> DomainResult<AcceptedProduct> {
        self.round_trip().await;
        self.catalog.accept(draft)
    }

    /// Emulated network/database round trip. Correctness-neutral: a
    /// non-blocking suspension with no cancellation support.
    async fn round_trip(&self) {
        if !self.simulated_delay.is_zero() {
            tokio::time::sleep(self.simulated_delay).await;
        }
    }
}
