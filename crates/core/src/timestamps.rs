//! Audit timestamps shared by every catalog record.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

pub const UPDATED_BEFORE_CREATED: &str = "last updated at must not be before created at";
pub const DELETED_BEFORE_CREATED: &str = "deleted at must not be before created at";
pub const UPDATED_BEFORE_PREVIOUS_UPDATE: &str =
    "last updated at must not be before the previous update";
pub const ALREADY_DELETED: &str = "record is already deleted";

/// Creation, last-update and optional soft-delete instants.
///
/// Invariants: `last_updated_at >= created_at`, and `deleted_at >= created_at`
/// when present. A set `deleted_at` only marks the record as logically removed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Timestamps {
    created_at: DateTime<Utc>,
    last_updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl Timestamps {
    pub fn new(
        created_at: DateTime<Utc>,
        last_updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> DomainResult<Self> {
        if last_updated_at < created_at {
            return Err(DomainError::validation(UPDATED_BEFORE_CREATED));
        }
        if let Some(deleted_at) = deleted_at {
            if deleted_at < created_at {
                return Err(DomainError::validation(DELETED_BEFORE_CREATED));
            }
        }
        Ok(Self {
            created_at,
            last_updated_at,
            deleted_at,
        })
    }

    /// Timestamps of a record created at `now`.
    pub fn stamped(now: DateTime<Utc>) -> Self {
        Self {
            created_at: now,
            last_updated_at: now,
            deleted_at: None,
        }
    }

    /// Timestamps after a change at `at`. The deletion marker is carried over.
    pub fn touched(&self, at: DateTime<Utc>) -> DomainResult<Self> {
        if at < self.last_updated_at {
            return Err(DomainError::validation(UPDATED_BEFORE_PREVIOUS_UPDATE));
        }
        Self::new(self.created_at, at, self.deleted_at)
    }

    /// Timestamps after a soft delete at `at`. The first marker is final.
    pub fn deleted(&self, at: DateTime<Utc>) -> DomainResult<Self> {
        if self.deleted_at.is_some() {
            return Err(DomainError::validation(ALREADY_DELETED));
        }
        let touched = self.touched(at)?;
        Ok(Self {
            deleted_at: Some(at),
            ..touched
        })
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_updated_at(&self) -> DateTime<Utc> {
        self.last_updated_at
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

impl ValueObject for Timestamps {}
