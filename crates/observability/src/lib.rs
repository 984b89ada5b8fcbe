//! Tracing/logging setup for processes hosting the catalog core.
//!
//! The domain crates only emit `tracing` events; nothing is printed until the
//! host calls [`init`].

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, output format).
pub mod tracing;
