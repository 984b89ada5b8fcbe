use crate::ids::AuthorId;
use crate::name::phonetic_entity;

phonetic_entity! {
    /// Entity: Author.
    Author, AuthorId, "author"
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_core::{CatalogId, DomainError, Entity};
    use chrono::{DateTime, Duration, Utc};

    use crate::name::NameFields;

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    fn fields() -> NameFields {
        NameFields::new("test", "テスト")
    }

    #[test]
    fn create_echoes_fields_with_fresh_id() {
        let now = test_time();
        let author = Author::create_at(fields(), now).unwrap();

        assert_eq!(author.name(), "test");
        assert_eq!(author.name_phonic(), "テスト");
        assert!(CatalogId::is_valid(&author.id().to_string()));
        assert_eq!(author.created_at(), now);
        assert_eq!(author.last_updated_at(), author.created_at());
        assert_eq!(author.deleted_at(), None);
    }

    #[test]
    fn create_stamps_now() {
        let before = test_time();
        let author = Author::create(fields()).unwrap();
        assert!(author.created_at() >= before);
        assert_eq!(author.created_at(), author.last_updated_at());
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = Author::create(NameFields::new("", "テスト")).unwrap_err();
        assert_eq!(
            err,
            DomainError::validation("author name must be at least 1 character")
        );
    }

    #[test]
    fn empty_reading_is_rejected() {
        let err = Author::create(NameFields::new("test", "")).unwrap_err();
        assert_eq!(err.message(), "author name phonic must be at least 1 character");
    }

    #[test]
    fn hiragana_reading_is_rejected() {
        let err = Author::create(NameFields::new("test", "てすと")).unwrap_err();
        assert_eq!(err.message(), "author name phonic must be katakana");
    }

    #[test]
    fn reconstruct_rejects_update_before_creation() {
        let now = test_time();
        let id = AuthorId::generate().to_string();
        let err = Author::reconstruct(&id, fields(), now, now - Duration::hours(1), None)
            .unwrap_err();
        assert_eq!(err.message(), "last updated at must not be before created at");
    }

    #[test]
    fn reconstruct_rejects_deletion_before_creation() {
        let now = test_time();
        let id = AuthorId::generate().to_string();
        let err = Author::reconstruct(&id, fields(), now, now, Some(now - Duration::hours(1)))
            .unwrap_err();
        assert_eq!(err.message(), "deleted at must not be before created at");
    }

    #[test]
    fn reconstruct_rejects_malformed_id() {
        let now = test_time();
        let err = Author::reconstruct("author-1", fields(), now, now, None).unwrap_err();
        assert_eq!(err.message(), "author id is invalid");
    }

    #[test]
    fn reconstruct_keeps_supplied_values() {
        let now = test_time();
        let earlier = now - Duration::hours(1);
        let later = now + Duration::hours(1);
        let id = AuthorId::generate();

        let author =
            Author::reconstruct(&id.to_string(), fields(), earlier, now, Some(later)).unwrap();

        assert_eq!(author.id_typed(), id);
        assert_eq!(author.created_at(), earlier);
        assert_eq!(author.last_updated_at(), now);
        assert_eq!(author.deleted_at(), Some(later));
        assert!(author.is_deleted());
    }

    #[test]
    fn revise_keeps_identity_and_creation_time() {
        let now = test_time();
        let author = Author::create_at(fields(), now).unwrap();
        let later = now + Duration::minutes(5);

        let revised = author
            .revise(NameFields::new("renamed", "カイメイ"), later)
            .unwrap();

        assert_eq!(revised.id(), author.id());
        assert_eq!(revised.name(), "renamed");
        assert_eq!(revised.created_at(), now);
        assert_eq!(revised.last_updated_at(), later);
        // The receiver is untouched.
        assert_eq!(author.name(), "test");
    }

    #[test]
    fn revise_revalidates() {
        let author = Author::create(fields()).unwrap();
        let err = author
            .revise(NameFields::new("test", "test"), test_time())
            .unwrap_err();
        assert_eq!(err.message(), "author name phonic must be katakana");
    }

    #[test]
    fn soft_delete_marks_copy() {
        let now = test_time();
        let author = Author::create_at(fields(), now).unwrap();
        let deleted = author.soft_delete(now + Duration::days(1)).unwrap();

        assert!(deleted.is_deleted());
        assert_eq!(deleted.deleted_at(), Some(now + Duration::days(1)));
        assert_eq!(deleted.last_updated_at(), now + Duration::days(1));
        assert!(!author.is_deleted());
    }

    #[test]
    fn soft_delete_before_creation_is_rejected() {
        let now = test_time();
        let author = Author::create_at(fields(), now).unwrap();
        assert!(author.soft_delete(now - Duration::seconds(1)).is_err());
    }

    #[test]
    fn revise_never_moves_last_update_backwards() {
        let now = test_time();
        let author = Author::create_at(fields(), now).unwrap();
        let revised = author.revise(fields(), now + Duration::days(10)).unwrap();

        let err = revised
            .revise(NameFields::new("renamed", "カイメイ"), now + Duration::days(1))
            .unwrap_err();
        assert_eq!(
            err.message(),
            "last updated at must not be before the previous update"
        );

        let err = revised.soft_delete(now + Duration::days(2)).unwrap_err();
        assert_eq!(
            err.message(),
            "last updated at must not be before the previous update"
        );
        assert_eq!(revised.last_updated_at(), now + Duration::days(10));
    }

    #[test]
    fn second_soft_delete_keeps_first_marker() {
        let now = test_time();
        let deleted = Author::create_at(fields(), now)
            .unwrap()
            .soft_delete(now + Duration::days(2))
            .unwrap();

        let err = deleted.soft_delete(now + Duration::days(5)).unwrap_err();
        assert_eq!(err.message(), "record is already deleted");
        assert_eq!(deleted.deleted_at(), Some(now + Duration::days(2)));
    }

    #[test]
    fn invalid_fields_win_over_backwards_revision() {
        let now = test_time();
        let author = Author::create_at(fields(), now).unwrap();
        let err = author
            .revise(NameFields::new("", "テスト"), now - Duration::days(1))
            .unwrap_err();
        assert_eq!(err.message(), "author name must be at least 1 character");
    }
}
