//! Fixed seed table the catalog is built from at process start.

use showroom_core::{DomainResult, ProductId};

use crate::product::{ImageSet, Product, Rating};

struct SeedRow {
    id: u32,
    name: &'static str,
    price_cents: u64,
    images: &'static [&'static str],
    model_url: &'static str,
    rating_tenths: u8,
    reviews: u32,
}

const SEED: &[SeedRow] = &[
    SeedRow {
        id: 1,
        name: "Luxe Lounge Chair",
        price_cents: 129_999,
        images: &[
            "/chair.png?height=600&width=600",
            "/chair.png?height=600&width=600",
        ],
        model_url: "/chair.glb",
        rating_tenths: 48,
        reviews: 124,
    },
    SeedRow {
        id: 2,
        name: "Elegant Dining Table",
        price_cents: 249_999,
        images: &[
            "/coffee_grinder.png?height=600&width=600",
            "/coffee_grinder.png?height=600&width=600",
        ],
        model_url: "/coffee_grinder.glb",
        rating_tenths: 49,
        reviews: 89,
    },
    SeedRow {
        id: 3,
        name: "Sofa",
        price_cents: 3_999_999,
        images: &["/sofa.png?height=600&width=600"],
        model_url: "/sofa.glb",
        rating_tenths: 47,
        reviews: 56,
    },
];

/// Build the seed records in insertion order.
pub fn seed_products() -> DomainResult<Vec<Product>> {
    let mut products = Vec::with_capacity(SEED.len());
    for row in SEED {
        let images = ImageSet::new(row.images.iter().map(|s| s.to_string()).collect())?;
        products.push(Product::new(
            ProductId::new(row.id)?,
            row.name,
            row.price_cents,
            images,
            row.model_url,
            Rating::from_tenths(row.rating_tenths)?,
            row.reviews,
        )?);
    }
    Ok(products)
}
