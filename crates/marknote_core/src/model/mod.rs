//! Domain model for notes and folders.
//!
//! # Responsibility
//! - Define the canonical entity records shared by store and editor.
//! - Own title validation used by every write path.
//!
//! # Invariants
//! - Every entity is identified by a stable `EntityId`.
//! - Ids are unique across the combined note+folder space.

pub mod entity;
