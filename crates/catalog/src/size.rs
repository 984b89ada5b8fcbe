use chrono::{DateTime, Utc};
use serde::Serialize;

use bookshelf_core::{Entity, Timestamps};

use crate::ids::SizeId;

/// Entity: Size (a physical book format such as 文庫 or B6).
///
/// A passive record: it enforces nothing beyond what its parts already
/// guarantee, and exposes accessors only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Size {
    id: SizeId,
    name: String,
    #[serde(flatten)]
    timestamps: Timestamps,
}

impl Size {
    pub fn from_parts(id: SizeId, name: impl Into<String>, timestamps: Timestamps) -> Self {
        Self {
            id,
            name: name.into(),
            timestamps,
        }
    }

    pub fn id_typed(&self) -> SizeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
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
}

impl Entity for Size {
    type Id = SizeId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }
}
