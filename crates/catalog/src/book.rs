use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use bookshelf_core::checkdigit::is_valid_isbn13;
use bookshelf_core::invariant::{ensure_min_chars, ensure_min_count, parse_id, parse_ids};
use bookshelf_core::{DomainError, DomainResult, Entity, Timestamps, ValueObject};

use crate::ids::{AuthorId, BookId, LabelId, PublisherId};
use crate::rejected;

const ENTITY: &str = "book";

pub const TITLE_LENGTH_MIN: usize = 1;
pub const BOOK_AUTHORS_MIN: usize = 1;
/// Lowest accepted price, in yen.
pub const PRICE_MIN: i64 = 0;

/// Ordered list of the authors credited on a book.
///
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BookAuthors(Vec<AuthorId>);

impl BookAuthors {
    pub fn new(author_ids: Vec<AuthorId>) -> DomainResult<Self> {
        ensure_min_count("book must have", author_ids.len(), BOOK_AUTHORS_MIN, "author")?;
        Ok(Self(author_ids))
    }

    pub fn author_ids(&self) -> &[AuthorId] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &AuthorId> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, author_id: &AuthorId) -> bool {
        self.0.contains(author_id)
    }
}

impl ValueObject for BookAuthors {}

/// Book fields as supplied by the caller, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFields {
    /// ISBN-13 digits without separators; books without one are allowed.
    pub isbn: Option<String>,
    pub label_id: String,
    pub publisher_id: String,
    pub title: String,
    pub author_ids: Vec<String>,
    /// `None` is the unset release day and is rejected.
    pub release_day: Option<NaiveDate>,
    pub price: i64,
    pub description: String,
}

/// Entity: Book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    id: BookId,
    isbn: Option<String>,
    label_id: LabelId,
    publisher_id: PublisherId,
    title: String,
    authors: BookAuthors,
    release_day: NaiveDate,
    price: i64,
    description: String,
    #[serde(flatten)]
    timestamps: Timestamps,
}

impl Book {
    pub fn create(fields: BookFields) -> DomainResult<Self> {
        Self::create_at(fields, Utc::now())
    }

    pub fn create_at(fields: BookFields, now: DateTime<Utc>) -> DomainResult<Self> {
        let book = Self::build(BookId::generate(), fields, Ok(Timestamps::stamped(now)))?;
        tracing::trace!(entity = ENTITY, id = %book.id, "created");
        Ok(book)
    }

    /// Rebuild a stored book. Runs the same checks as [`Book::create`].
    pub fn reconstruct(
        id: &str,
        fields: BookFields,
        created_at: DateTime<Utc>,
        last_updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> DomainResult<Self> {
        let id = parse_id(BookId::LABEL, id).inspect_err(rejected(ENTITY))?;
        let timestamps = Timestamps::new(created_at, last_updated_at, deleted_at);
        Self::build(id, fields, timestamps)
    }

    /// A copy with new fields. `at` must not precede the last update.
    pub fn revise(&self, fields: BookFields, at: DateTime<Utc>) -> DomainResult<Self> {
        Self::build(self.id, fields, self.timestamps.touched(at))
    }

    /// A copy marked as deleted at `at`. Fails if the book is already deleted.
    pub fn soft_delete(&self, at: DateTime<Utc>) -> DomainResult<Self> {
        Self::build(self.id, self.to_fields(), self.timestamps.deleted(at))
    }

    /// Checks run references first, then the title, then the business values,
    /// then the timestamps; the first failure is reported.
    fn build(
        id: BookId,
        fields: BookFields,
        timestamps: DomainResult<Timestamps>,
    ) -> DomainResult<Self> {
        let build = || -> DomainResult<Self> {
            let label_id: LabelId = parse_id(LabelId::LABEL, &fields.label_id)?;
            let publisher_id: PublisherId = parse_id(PublisherId::LABEL, &fields.publisher_id)?;
            let author_ids: Vec<AuthorId> = parse_ids(AuthorId::LABEL, &fields.author_ids)?;

            ensure_min_chars("title", &fields.title, TITLE_LENGTH_MIN)?;

            if let Some(isbn) = &fields.isbn {
                if !is_valid_isbn13(isbn) {
                    return Err(DomainError::validation("isbn is invalid"));
                }
            }
            let authors = BookAuthors::new(author_ids)?;
            if fields.price < PRICE_MIN {
                return Err(DomainError::validation(format!(
                    "price must be at least {PRICE_MIN}"
                )));
            }
            let release_day = fields
                .release_day
                .ok_or_else(|| DomainError::validation("release day must not be the zero value"))?;

            let timestamps = timestamps?;

            Ok(Self {
                id,
                isbn: fields.isbn,
                label_id,
                publisher_id,
                title: fields.title,
                authors,
                release_day,
                price: fields.price,
                description: fields.description,
                timestamps,
            })
        };
        build().inspect_err(rejected(ENTITY))
    }

    pub fn id_typed(&self) -> BookId {
        self.id
    }

    pub fn isbn(&self) -> Option<&str> {
        self.isbn.as_deref()
    }

    pub fn label_id(&self) -> LabelId {
        self.label_id
    }

    pub fn publisher_id(&self) -> PublisherId {
        self.publisher_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn authors(&self) -> &BookAuthors {
        &self.authors
    }

    pub fn author_ids(&self) -> &[AuthorId] {
        self.authors.author_ids()
    }

    pub fn release_day(&self) -> NaiveDate {
        self.release_day
    }

    pub fn price(&self) -> i64 {
        self.price
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.timestamps.created_at()
    }

    pub fn last_updated_at(&self) -> DateTime<Utc> {
        self.timestamps.last_updated_at()
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.timestamps.deleted_at()
    }

    /// The business fields in caller form, e.g. as a starting point for `revise`.
    pub fn to_fields(&self) -> BookFields {
        BookFields {
            isbn: self.isbn.clone(),
            label_id: self.label_id.to_string(),
            publisher_id: self.publisher_id.to_string(),
            title: self.title.clone(),
            author_ids: self.authors.iter().map(ToString::to_string).collect(),
            release_day: Some(self.release_day),
            price: self.price,
            description: self.description.clone(),
        }
    }
}

impl Entity for Book {
    type Id = BookId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }
}
