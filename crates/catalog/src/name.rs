//! Display name plus katakana reading, shared by authors, publishers and labels.

use serde::Serialize;

use bookshelf_core::invariant::{ensure_katakana, ensure_min_chars};
use bookshelf_core::{DomainResult, ValueObject};

pub const NAME_LENGTH_MIN: usize = 1;
pub const NAME_PHONIC_LENGTH_MIN: usize = 1;

/// Name fields as supplied by the caller, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFields {
    pub name: String,
    /// Reading of `name`, in katakana.
    pub name_phonic: String,
}

impl NameFields {
    pub fn new(name: impl Into<String>, name_phonic: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            name_phonic: name_phonic.into(),
        }
    }
}

/// Validated name and reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneticName {
    name: String,
    name_phonic: String,
}

impl PhoneticName {
    /// Validate `fields` for the record kind `subject` (e.g. `"author"`).
    ///
    /// Checks run name length, reading length, then reading script, so an empty
    /// reading is reported as too short rather than as not katakana.
    pub fn parse(subject: &str, fields: NameFields) -> DomainResult<Self> {
        ensure_min_chars(&format!("{subject} name"), &fields.name, NAME_LENGTH_MIN)?;

        let phonic_field = format!("{subject} name phonic");
        ensure_min_chars(&phonic_field, &fields.name_phonic, NAME_PHONIC_LENGTH_MIN)?;
        ensure_katakana(&phonic_field, &fields.name_phonic)?;

        Ok(Self {
            name: fields.name,
            name_phonic: fields.name_phonic,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_phonic(&self) -> &str {
        &self.name_phonic
    }

    pub fn to_fields(&self) -> NameFields {
        NameFields::new(self.name.clone(), self.name_phonic.clone())
    }
}

impl ValueObject for PhoneticName {}

/// Declare a catalog record made of a [`PhoneticName`] and its timestamps.
///
/// ```ignore
/// phonetic_entity! {
///     /// Entity: Author.
///     Author, AuthorId, "author"
/// }
/// ```
///
/// The subject prefixes every validation message and log line.
macro_rules! phonetic_entity {
    ($(#[$meta:meta])* $entity:ident, $id:ident, $subject:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
        pub struct $entity {
            id: $id,
            #[serde(flatten)]
            name: $crate::name::PhoneticName,
            #[serde(flatten)]
            timestamps: bookshelf_core::Timestamps,
        }

        impl $entity {
            #[doc = concat!("Register a new ", $subject, ", stamped with the current time.")]
            pub fn create(fields: $crate::name::NameFields) -> bookshelf_core::DomainResult<Self> {
                Self::create_at(fields, chrono::Utc::now())
            }

            #[doc = concat!("Register a new ", $subject, " created (and last updated) at `now`.")]
            pub fn create_at(
                fields: $crate::name::NameFields,
                now: chrono::DateTime<chrono::Utc>,
            ) -> bookshelf_core::DomainResult<Self> {
                let record = Self::build(
                    $id::generate(),
                    fields,
                    Ok(bookshelf_core::Timestamps::stamped(now)),
                )?;
                tracing::trace!(entity = $subject, id = %record.id, "created");
                Ok(record)
            }

            #[doc = concat!("Rebuild a stored ", $subject, ". Runs the same checks as `create`.")]
            pub fn reconstruct(
                id: &str,
                fields: $crate::name::NameFields,
                created_at: chrono::DateTime<chrono::Utc>,
                last_updated_at: chrono::DateTime<chrono::Utc>,
                deleted_at: Option<chrono::DateTime<chrono::Utc>>,
            ) -> bookshelf_core::DomainResult<Self> {
                let id = bookshelf_core::invariant::parse_id($id::LABEL, id)
                    .inspect_err($crate::rejected($subject))?;
                let timestamps =
                    bookshelf_core::Timestamps::new(created_at, last_updated_at, deleted_at);
                Self::build(id, fields, timestamps)
            }

            /// A copy with new name fields, last updated at `at`.
            pub fn revise(
                &self,
                fields: $crate::name::NameFields,
                at: chrono::DateTime<chrono::Utc>,
            ) -> bookshelf_core::DomainResult<Self> {
                Self::build(self.id, fields, self.timestamps.touched(at))
            }

            /// A copy marked as deleted at `at`.
            pub fn soft_delete(
                &self,
                at: chrono::DateTime<chrono::Utc>,
            ) -> bookshelf_core::DomainResult<Self> {
                Self::build(self.id, self.name.to_fields(), self.timestamps.deleted(at))
            }

            fn build(
                id: $id,
                fields: $crate::name::NameFields,
                timestamps: bookshelf_core::DomainResult<bookshelf_core::Timestamps>,
            ) -> bookshelf_core::DomainResult<Self> {
                let build = || -> bookshelf_core::DomainResult<Self> {
                    let name = $crate::name::PhoneticName::parse($subject, fields)?;
                    let timestamps = timestamps?;
                    Ok(Self {
                        id,
                        name,
                        timestamps,
                    })
                };
                build().inspect_err($crate::rejected($subject))
            }

            pub fn id_typed(&self) -> $id {
                self.id
            }

            pub fn name(&self) -> &str {
                self.name.name()
            }

            pub fn name_phonic(&self) -> &str {
                self.name.name_phonic()
            }

            pub fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
                self.timestamps.created_at()
            }

            pub fn last_updated_at(&self) -> chrono::DateTime<chrono::Utc> {
                self.timestamps.last_updated_at()
            }

            pub fn deleted_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
                self.timestamps.deleted_at()
            }
        }

        impl bookshelf_core::Entity for $entity {
            type Id = $id;

            fn id(&self) -> &Self::Id {
                &self.id
            }

            fn timestamps(&self) -> &bookshelf_core::Timestamps {
                &self.timestamps
            }
        }
    };
}

pub(crate) use phonetic_entity;
