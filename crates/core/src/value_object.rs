//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. In the
/// catalog they only come into existence through their owner's validation, e.g.
/// an empty `BookAuthors` cannot be built.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct BookAuthors(Vec<AuthorId>);
///
/// impl ValueObject for BookAuthors {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
