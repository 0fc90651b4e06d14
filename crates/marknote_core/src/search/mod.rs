//! Substring search over store contents.
//!
//! # Responsibility
//! - Expose query APIs over the in-memory entity lists.
//! - Keep result shaping inside core.

pub mod query;
