use serde::{Deserialize, Serialize};

use showroom_core::{DomainError, DomainResult, ProductId, ValueObject};

/// Star rating in the range 0.0–5.0, stored in tenths so records stay `Eq`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const MAX_TENTHS: u8 = 50;

    /// Build a rating from tenths of a star (e.g. 48 for 4.8).
    pub fn from_tenths(tenths: u8) -> DomainResult<Self> {
        if tenths > Self::MAX_TENTHS {
            return Err(DomainError::validation(format!(
                "rating must be between 0.0 and 5.0, got {}",
                tenths as f32 / 10.0
            )));
        }
        Ok(Self(tenths))
    }

    /// Build a rating from a decimal star value, rounding to the nearest tenth.
    pub fn from_stars(stars: f64) -> DomainResult<Self> {
        if !stars.is_finite() || !(0.0..=5.0).contains(&stars) {
            return Err(DomainError::validation(format!(
                "rating must be between 0.0 and 5.0, got {stars}"
            )));
        }
        Ok(Self((stars * 10.0).round() as u8))
    }

    pub fn tenths(&self) -> u8 {
        self.0
    }

    pub fn as_stars(&self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl ValueObject for Rating {}

/// Ordered, non-empty sequence of image URLs for one product.
///
/// The carousel index invariant (`0 <= index < len`) relies on this never
/// being empty, so construction goes through [`ImageSet::new`] only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSet(Vec<String>);

impl ImageSet {
    pub fn new(urls: Vec<String>) -> DomainResult<Self> {
        if urls.is_empty() {
            return Err(DomainError::validation("a product needs at least one image"));
        }
        if urls.iter().any(|u| u.trim().is_empty()) {
            return Err(DomainError::validation("image URLs cannot be empty"));
        }
        Ok(Self(urls))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        // Always false: empty sets are rejected at construction.
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// First image, used as the listing thumbnail and AR poster.
    pub fn primary(&self) -> &str {
        &self.0[0]
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl ValueObject for ImageSet {}

/// One catalog record. Immutable for the lifetime of the process: records
/// are built once from the seed table and there is no update or delete path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: String,
    price_cents: u64,
    images: ImageSet,
    model_url: String,
    rating: Rating,
    reviews: u32,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price_cents: u64,
        images: ImageSet,
        model_url: impl Into<String>,
        rating: Rating,
        reviews: u32,
    ) -> DomainResult<Self> {
        let name = name.into();
        let model_url = model_url.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if model_url.trim().is_empty() {
            return Err(DomainError::validation("model URL cannot be empty"));
        }

        Ok(Self {
            id,
            name,
            price_cents,
            images,
            model_url,
            rating,
            reviews,
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price in minor currency units (cents).
    pub fn price_cents(&self) -> u64 {
        self.price_cents
    }

    pub fn images(&self) -> &ImageSet {
        &self.images
    }

    /// Opaque 3D-model asset URL. The rendering collaborator owns fetching,
    /// decoding, and failure reporting; nothing here inspects the asset.
    pub fn model_url(&self) -> &str {
        &self.model_url
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn reviews(&self) -> u32 {
        self.reviews
    }
}

/// A product payload minus its identifier, as submitted by the admin upload
/// flow. Validated at the boundary before the catalog acknowledges it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: Option<String>,
    pub price_cents: u64,
    pub images: Vec<String>,
    pub model_url: String,
    pub rating: Option<Rating>,
    pub reviews: Option<u32>,
}

impl ProductDraft {
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.images.is_empty() {
            return Err(DomainError::validation("at least one image is required"));
        }
        if self.images.iter().any(|u| u.trim().is_empty()) {
            return Err(DomainError::validation("image URLs cannot be empty"));
        }
        if self.model_url.trim().is_empty() {
            return Err(DomainError::validation("a 3D model is required"));
        }
        Ok(())
    }
}
