//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**; two instances holding the same values
/// are interchangeable. They are immutable: to "modify" one, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct ProductCode(String);
///
/// impl ValueObject for ProductCode {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
