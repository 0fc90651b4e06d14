//! In-memory entity storage.
//!
//! # Responsibility
//! - Hold the ordered note and folder lists plus the current selection.
//! - Resolve selection ids to list positions for the editor layer.
//!
//! # Invariants
//! - Insert paths reject ids already present in either list.
//! - A selection that no longer resolves is reported as not-found,
//!   never treated as an error.

pub mod entity_store;
