//! Product detail-view state machines.
//!
//! Everything here is a pure state struct with transition functions,
//! callable from any UI layer. No IO, no rendering: the AR surface itself
//! is an external collaborator that receives an [`ArViewerSource`] and owns
//! fetching, decoding, rendering, and failure reporting.

pub mod ar;
pub mod carousel;
pub mod upload;

pub use ar::ArViewerSource;
pub use carousel::{CarouselState, DetailViewState};
pub use upload::{UploadSubmission, UploadedAsset};
