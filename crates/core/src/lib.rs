//! `bookshelf-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identifiers, audit timestamps, the error model and the predicates the catalog
//! invariants are built from.

pub mod checkdigit;
pub mod entity;
pub mod error;
pub mod id;
pub mod invariant;
pub mod text;
pub mod timestamps;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::CatalogId;
pub use timestamps::Timestamps;
pub use value_object::ValueObject;
