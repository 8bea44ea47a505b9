//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values alone;
/// two instances with the same values are the same value. To "modify" one,
/// construct a new one. In this codebase `Rating`, `ImageSet` and
/// `UploadedAsset` are value objects, while `Product` is an entity keyed by
/// `ProductId`.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
