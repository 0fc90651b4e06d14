//! Display projections for the sidebar.
//!
//! # Responsibility
//! - Derive plain-text excerpts from markdown note bodies.
//! - Render entity timestamps into the sidebar's bucketed labels.

pub mod preview;
pub mod timestamp;
