//! Typed intake for the admin upload dashboard.
//!
//! Replaces the source's loose drag-and-drop file objects with values
//! validated at the boundary. All of this state is confined to one user
//! session's view; it is never shared or synchronized.

use serde::{Deserialize, Serialize};

use showroom_catalog::ProductDraft;
use showroom_core::{DomainError, DomainResult, ValueObject};

/// One dropped file, reduced to the metadata this core cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedAsset {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

impl UploadedAsset {
    /// Boundary validation of one dropped file.
    pub fn from_parts(
        name: impl Into<String>,
        size_bytes: u64,
        mime_type: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        let mime_type = mime_type.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("file name cannot be empty"));
        }
        if size_bytes == 0 {
            return Err(DomainError::validation("file is empty"));
        }
        let asset = Self {
            name,
            size_bytes,
            mime_type,
        };
        if !asset.is_image() && !asset.is_model() {
            return Err(DomainError::validation(format!(
                "unsupported file type: {}",
                asset.mime_type
            )));
        }
        Ok(asset)
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    /// glTF/GLB by MIME family; the asset content itself stays opaque.
    pub fn is_model(&self) -> bool {
        self.mime_type.starts_with("model/")
    }
}

impl ValueObject for UploadedAsset {}

/// Accumulating state of one upload form: text fields, dropped images, and
/// the single 3D-model slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadSubmission {
    pub name: String,
    pub description: String,
    pub price_cents: Option<u64>,
    images: Vec<UploadedAsset>,
    model: Option<UploadedAsset>,
}

impl UploadSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn images(&self) -> &[UploadedAsset] {
        &self.images
    }

    pub fn model(&self) -> Option<&UploadedAsset> {
        self.model.as_ref()
    }

    /// Append a dropped image. Non-image files are rejected here, mirroring
    /// the dropzone's `image/*` accept filter.
    pub fn add_image(&mut self, asset: UploadedAsset) -> DomainResult<()> {
        if !asset.is_image() {
            return Err(DomainError::validation(format!(
                "{} is not an image",
                asset.name
            )));
        }
        self.images.push(asset);
        Ok(())
    }

    pub fn remove_image(&mut self, name: &str) {
        self.images.retain(|a| a.name != name);
    }

    /// Set the single model slot, replacing any previous choice.
    pub fn set_model(&mut self, asset: UploadedAsset) -> DomainResult<()> {
        if !asset.is_model() {
            return Err(DomainError::validation(format!(
                "{} is not a 3D model",
                asset.name
            )));
        }
        self.model = Some(asset);
        Ok(())
    }

    pub fn clear_model(&mut self) {
        self.model = None;
    }

    /// Completeness check. The error message is user-facing copy, not a
    /// process fault.
    pub fn validate(&self) -> DomainResult<()> {
        let complete = !self.name.trim().is_empty()
            && !self.description.trim().is_empty()
            && self.price_cents.is_some()
            && !self.images.is_empty()
            && self.model.is_some();

        if complete {
            Ok(())
        } else {
            Err(DomainError::validation(
                "Please fill in all fields, upload at least one image, and upload a 3D model.",
            ))
        }
    }

    /// Convert a complete submission into a draft for `POST /products`.
    ///
    /// File names stand in for storage URLs, as in the source: uploading to
    /// real storage is out of scope.
    pub fn into_draft(self) -> DomainResult<ProductDraft> {
        self.validate()?;
        let model = self.model.as_ref().map(|m| m.name.clone()).unwrap_or_default();
        Ok(ProductDraft {
            name: self.name,
            description: Some(self.description),
            price_cents: self.price_cents.unwrap_or_default(),
            images: self.images.into_iter().map(|a| a.name).collect(),
            model_url: model,
            rating: None,
            reviews: None,
        })
    }
}
