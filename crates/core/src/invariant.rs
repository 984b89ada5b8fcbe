//! Invariant checks shared by the catalog records.
//!
//! Each helper reports a single [`DomainError::Validation`] whose message names
//! the field and the rule, so callers can surface it as-is.

use core::str::FromStr;

use crate::error::{DomainError, DomainResult};
use crate::text::{char_count, is_katakana};

fn unit(count: usize, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{noun}s")
    }
}

/// `value` must be at least `min` characters long (Unicode scalar values).
pub fn ensure_min_chars(field: &str, value: &str, min: usize) -> DomainResult<()> {
    if char_count(value) < min {
        return Err(DomainError::validation(format!(
            "{field} must be at least {min} {}",
            unit(min, "character")
        )));
    }
    Ok(())
}

/// `value` must consist of katakana only.
pub fn ensure_katakana(field: &str, value: &str) -> DomainResult<()> {
    if !is_katakana(value) {
        return Err(DomainError::validation(format!("{field} must be katakana")));
    }
    Ok(())
}

/// A collection must hold at least `min` entries.
///
/// `subject` reads as the start of the sentence, e.g. `"book must have"`.
pub fn ensure_min_count(subject: &str, len: usize, min: usize, noun: &str) -> DomainResult<()> {
    if len < min {
        return Err(DomainError::validation(format!(
            "{subject} at least {min} {}",
            unit(min, noun)
        )));
    }
    Ok(())
}

/// Parse a raw identifier, reporting failure against `field`.
pub fn parse_id<T: FromStr>(field: &str, raw: &str) -> DomainResult<T> {
    raw.parse()
        .map_err(|_| DomainError::validation(format!("{field} is invalid")))
}

/// Parse every raw identifier of a list, preserving order.
pub fn parse_ids<T: FromStr>(field: &str, raw: &[String]) -> DomainResult<Vec<T>> {
    raw.iter().map(|id| parse_id(field, id)).collect()
}
