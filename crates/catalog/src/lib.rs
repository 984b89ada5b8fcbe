//! Catalog domain module (authors, publishers, labels, books, series).
//!
//! This crate contains the business rules for catalog records, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage). Every record is
//! built through `create` (fresh id, stamped now) or `reconstruct` (id and
//! timestamps from storage); both run the same checks, and a record that fails
//! any of them is never returned.

pub mod author;
pub mod book;
pub mod ids;
pub mod label;
pub mod name;
pub mod publisher;
pub mod series;
pub mod size;

pub use author::Author;
pub use book::{Book, BookAuthors, BookFields};
pub use ids::{AuthorId, BookId, LabelId, PublisherId, SeriesId, SizeId, StatusId};
pub use label::Label;
pub use name::{NameFields, PhoneticName};
pub use publisher::Publisher;
pub use series::{Series, SeriesBooks, SeriesFields};
pub use size::Size;

use bookshelf_core::DomainError;

/// Debug-log a rejected record; used with `Result::inspect_err`.
pub(crate) fn rejected(entity: &'static str) -> impl Fn(&DomainError) {
    move |err: &DomainError| tracing::debug!(entity, error = %err, "rejected catalog record")
}
