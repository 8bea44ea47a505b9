use serde::Deserialize;

use showroom_catalog::{Product, ProductDraft, Rating};
use showroom_core::DomainResult;
use showroom_viewer::ArViewerSource;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: Option<String>,
    pub price_cents: u64,
    pub images: Vec<String>,
    pub model_url: String,
    pub rating: Option<f64>,
    pub reviews: Option<u32>,
}

impl CreateProductRequest {
    pub fn into_draft(self) -> DomainResult<ProductDraft> {
        let rating = self.rating.map(Rating::from_stars).transpose()?;
        let draft = ProductDraft {
            name: self.name,
            description: self.description,
            price_cents: self.price_cents,
            images: self.images,
            model_url: self.model_url,
            rating,
            reviews: self.reviews,
        };
        draft.validate()?;
        Ok(draft)
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn product_to_json(p: &Product) -> serde_json::Value {
    serde_json::json!({
        "id": p.id().get(),
        "name": p.name(),
        "price_cents": p.price_cents(),
        "images": p.images().as_slice(),
        "model_url": p.model_url(),
        "rating": p.rating().as_stars(),
        "reviews": p.reviews(),
        "ar": ArViewerSource::for_product(p),
    })
}

pub fn draft_to_json(d: &ProductDraft) -> serde_json::Value {
    serde_json::json!({
        "name": d.name,
        "description": d.description,
        "price_cents": d.price_cents,
        "images": d.images,
        "model_url": d.model_url,
        "rating": d.rating.map(|r| r.as_stars()),
        "reviews": d.reviews,
    })
}
