//! Identifiers of the catalog records.
//!
//! Every id is a [`bookshelf_core::CatalogId`]; the wrappers keep an author id
//! from being passed where a label id is expected. Cross-record references hold
//! the id only and never check that the referenced record exists.

use bookshelf_core::typed_id;

typed_id!(AuthorId, "author id");
typed_id!(PublisherId, "publisher id");
typed_id!(LabelId, "label id");
typed_id!(BookId, "book id");
typed_id!(SeriesId, "series id");
typed_id!(StatusId, "status id");
typed_id!(SizeId, "size id");
