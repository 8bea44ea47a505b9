//! Attribute bundle for the external AR rendering collaborator.

use serde::Serialize;

use showroom_catalog::Product;

/// AR presentation modes forwarded verbatim to the model-viewer component.
const AR_MODES: &str = "webxr scene-viewer quick-look";
const ROTATION_PER_SECOND: &str = "30deg";

/// Everything the model-viewer collaborator needs to render one product.
///
/// This is a plain value: the collaborator fetches, decodes and renders the
/// asset and reports its own load/render failures. Nothing here validates
/// the model's format or reachability, and nothing retries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArViewerSource {
    /// Opaque 3D-model asset URL (glTF/GLB by convention, not enforced).
    pub model_url: String,
    /// Platform-specific alternate model (USDZ for iOS Quick Look).
    pub ios_model_url: Option<String>,
    /// Still image shown while the model loads.
    pub poster_url: Option<String>,
    /// Accessibility text, required by the collaborator.
    pub alt_text: String,
    /// Whether the collaborator should slowly spin the model.
    pub auto_rotate: bool,
}

impl ArViewerSource {
    /// Build the viewer source for one catalog record. The product's primary
    /// image doubles as the loading poster.
    pub fn for_product(product: &Product) -> Self {
        Self {
            model_url: product.model_url().to_string(),
            ios_model_url: None,
            poster_url: Some(product.images().primary().to_string()),
            alt_text: format!("A 3D model of {}", product.name()),
            auto_rotate: true,
        }
    }

    /// Flatten into the attribute list the web component consumes.
    ///
    /// Boolean attributes follow the HTML convention: present with an empty
    /// value when set, absent otherwise.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = vec![("src", self.model_url.clone())];
        if let Some(ios) = &self.ios_model_url {
            attrs.push(("ios-src", ios.clone()));
        }
        if let Some(poster) = &self.poster_url {
            attrs.push(("poster", poster.clone()));
        }
        attrs.push(("alt", self.alt_text.clone()));
        attrs.push(("ar", String::new()));
        attrs.push(("ar-modes", AR_MODES.to_string()));
        attrs.push(("camera-controls", String::new()));
        if self.auto_rotate {
            attrs.push(("auto-rotate", String::new()));
            attrs.push(("rotation-per-second", ROTATION_PER_SECOND.to_string()));
        }
        attrs
    }
}
