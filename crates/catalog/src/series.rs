use chrono::{DateTime, Utc};
use serde::Serialize;

use bookshelf_core::invariant::{ensure_min_chars, ensure_min_count, parse_id, parse_ids};
use bookshelf_core::{DomainResult, Entity, Timestamps, ValueObject};

use crate::ids::{BookId, SeriesId, StatusId};
use crate::rejected;

const ENTITY: &str = "series";

pub const SERIES_NAME_LENGTH_MIN: usize = 1;
pub const SERIES_BOOKS_MIN: usize = 1;

/// Ordered list of the books making up a series, in reading order.
///
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SeriesBooks(Vec<BookId>);

impl SeriesBooks {
    pub fn new(book_ids: Vec<BookId>) -> DomainResult<Self> {
        ensure_min_count("series must contain", book_ids.len(), SERIES_BOOKS_MIN, "book")?;
        Ok(Self(book_ids))
    }

    pub fn book_ids(&self) -> &[BookId] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &BookId> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Zero-based position of `book_id` in the series.
    pub fn position(&self, book_id: &BookId) -> Option<usize> {
        self.0.iter().position(|id| id == book_id)
    }
}

impl ValueObject for SeriesBooks {}

/// Series fields as supplied by the caller, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesFields {
    pub name: String,
    pub book_ids: Vec<String>,
    /// Publication status (ongoing, completed, ...), owned by another aggregate.
    pub status_id: String,
}

/// Entity: Series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Series {
    id: SeriesId,
    name: String,
    books: SeriesBooks,
    status_id: StatusId,
    #[serde(flatten)]
    timestamps: Timestamps,
}

impl Series {
    pub fn create(fields: SeriesFields) -> DomainResult<Self> {
        Self::create_at(fields, Utc::now())
    }

    pub fn create_at(fields: SeriesFields, now: DateTime<Utc>) -> DomainResult<Self> {
        let series = Self::build(SeriesId::generate(), fields, Ok(Timestamps::stamped(now)))?;
        tracing::trace!(entity = ENTITY, id = %series.id, "created");
        Ok(series)
    }

    pub fn reconstruct(
        id: &str,
        fields: SeriesFields,
        created_at: DateTime<Utc>,
        last_updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> DomainResult<Self> {
        let id = parse_id(SeriesId::LABEL, id).inspect_err(rejected(ENTITY))?;
        let timestamps = Timestamps::new(created_at, last_updated_at, deleted_at);
        Self::build(id, fields, timestamps)
    }

    pub fn revise(&self, fields: SeriesFields, at: DateTime<Utc>) -> DomainResult<Self> {
        Self::build(self.id, fields, self.timestamps.touched(at))
    }

    pub fn soft_delete(&self, at: DateTime<Utc>) -> DomainResult<Self> {
        Self::build(self.id, self.to_fields(), self.timestamps.deleted(at))
    }

    fn build(
        id: SeriesId,
        fields: SeriesFields,
        timestamps: DomainResult<Timestamps>,
    ) -> DomainResult<Self> {
        let build = || -> DomainResult<Self> {
            let status_id: StatusId = parse_id(StatusId::LABEL, &fields.status_id)?;
            let book_ids: Vec<BookId> = parse_ids(BookId::LABEL, &fields.book_ids)?;

            ensure_min_chars("series name", &fields.name, SERIES_NAME_LENGTH_MIN)?;
            let books = SeriesBooks::new(book_ids)?;

            let timestamps = timestamps?;

            Ok(Self {
                id,
                name: fields.name,
                books,
                status_id,
                timestamps,
            })
        };
        build().inspect_err(rejected(ENTITY))
    }

    pub fn id_typed(&self) -> SeriesId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn books(&self) -> &SeriesBooks {
        &self.books
    }

    pub fn book_ids(&self) -> &[BookId] {
        self.books.book_ids()
    }

    pub fn status_id(&self) -> StatusId {
        self.status_id
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

    pub fn to_fields(&self) -> SeriesFields {
        SeriesFields {
            name: self.name.clone(),
            book_ids: self.books.iter().map(ToString::to_string).collect(),
            status_id: self.status_id.to_string(),
        }
    }
}

impl Entity for Series {
    type Id = SeriesId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_core::DomainError;
    use chrono::Duration;

    fn fields_with(book_ids: &[BookId]) -> SeriesFields {
        SeriesFields {
            name: "テスト".to_string(),
            book_ids: book_ids.iter().map(ToString::to_string).collect(),
            status_id: StatusId::generate().to_string(),
        }
    }

    fn valid_fields() -> SeriesFields {
        fields_with(&[BookId::generate(), BookId::generate()])
    }

    #[test]
    fn create_echoes_fields() {
        let fields = valid_fields();
        let now = Utc::now();
        let series = Series::create_at(fields.clone(), now).unwrap();

        assert_eq!(series.name(), "テスト");
        assert_eq!(series.status_id().to_string(), fields.status_id);
        assert_eq!(series.books().len(), 2);
        assert_eq!(series.to_fields(), fields);
        assert_eq!(series.created_at(), now);
        assert_eq!(series.last_updated_at(), now);
        assert_eq!(series.deleted_at(), None);
    }

    #[test]
    fn reconstruct_and_create_agree_on_business_fields() {
        let fields = valid_fields();
        let now = Utc::now();
        let created = Series::create_at(fields.clone(), now).unwrap();
        let id = SeriesId::generate();
        let loaded = Series::reconstruct(&id.to_string(), fields, now, now, None).unwrap();

        assert_ne!(created.id(), loaded.id());
        assert_eq!(created.to_fields(), loaded.to_fields());
        assert_eq!(created.timestamps(), loaded.timestamps());
    }

    #[test]
    fn revise_before_last_update_is_rejected() {
        let now = Utc::now();
        let series = Series::create_at(valid_fields(), now)
            .unwrap()
            .revise(valid_fields(), now + Duration::days(10))
            .unwrap();
        let err = series
            .revise(series.to_fields(), now + Duration::days(1))
            .unwrap_err();
        assert_eq!(
            err.message(),
            "last updated at must not be before the previous update"
        );
    }

    #[test]
    fn reconstruct_keeps_book_order() {
        let now = Utc::now();
        let earlier = now - Duration::hours(1);
        let later = now + Duration::hours(1);
        let first = BookId::generate();
        let second = BookId::generate();
        let id = SeriesId::generate();

        let series = Series::reconstruct(
            &id.to_string(),
            fields_with(&[second, first]),
            earlier,
            now,
            Some(later),
        )
        .unwrap();

        assert_eq!(series.id_typed(), id);
        assert_eq!(series.name(), "テスト");
        assert_eq!(series.book_ids(), &[second, first]);
        assert_eq!(series.books().position(&first), Some(1));
        assert_eq!(series.deleted_at(), Some(later));
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = Series::create(SeriesFields {
            name: String::new(),
            ..valid_fields()
        })
        .unwrap_err();
        assert_eq!(err.message(), "series name must be at least 1 character");
    }

    #[test]
    fn empty_book_list_is_rejected() {
        let err = Series::create(fields_with(&[])).unwrap_err();
        assert_eq!(
            err,
            DomainError::validation("series must contain at least 1 book")
        );
    }

    #[test]
    fn malformed_status_is_rejected() {
        let err = Series::create(SeriesFields {
            status_id: "ongoing".to_string(),
            ..valid_fields()
        })
        .unwrap_err();
        assert_eq!(err.message(), "status id is invalid");
    }

    #[test]
    fn malformed_book_reference_is_rejected_before_name() {
        let err = Series::create(SeriesFields {
            name: String::new(),
            book_ids: vec!["book-1".to_string()],
            ..valid_fields()
        })
        .unwrap_err();
        assert_eq!(err.message(), "book id is invalid");
    }

    #[test]
    fn malformed_series_id_is_rejected() {
        let now = Utc::now();
        let err = Series::reconstruct("", valid_fields(), now, now, None).unwrap_err();
        assert_eq!(err.message(), "series id is invalid");
    }

    #[test]
    fn update_before_creation_is_rejected() {
        let now = Utc::now();
        let id = SeriesId::generate().to_string();
        let err = Series::reconstruct(&id, valid_fields(), now, now - Duration::hours(1), None)
            .unwrap_err();
        assert_eq!(err.message(), "last updated at must not be before created at");
    }

    #[test]
    fn equal_timestamps_are_accepted() {
        let now = Utc::now();
        let id = SeriesId::generate().to_string();
        assert!(Series::reconstruct(&id, valid_fields(), now, now, None).is_ok());
    }

    #[test]
    fn deletion_before_creation_is_rejected() {
        let now = Utc::now();
        let id = SeriesId::generate().to_string();
        let err = Series::reconstruct(
            &id,
            valid_fields(),
            now,
            now + Duration::hours(1),
            Some(now - Duration::hours(1)),
        )
        .unwrap_err();
        assert_eq!(err.message(), "deleted at must not be before created at");
    }

    #[test]
    fn revise_appends_volume() {
        let now = Utc::now();
        let first = BookId::generate();
        let series = Series::create_at(fields_with(&[first]), now).unwrap();
        let next = BookId::generate();

        let mut fields = series.to_fields();
        fields.book_ids.push(next.to_string());
        let revised = series.revise(fields, now + Duration::days(30)).unwrap();

        assert_eq!(revised.book_ids(), &[first, next]);
        assert_eq!(revised.created_at(), now);
        assert_eq!(series.books().len(), 1);
    }

    #[test]
    fn soft_delete_marks_series() {
        let now = Utc::now();
        let series = Series::create_at(valid_fields(), now).unwrap();
        let deleted = series.soft_delete(now).unwrap();
        assert!(deleted.is_deleted());
        assert_eq!(deleted.book_ids(), series.book_ids());
    }
}
