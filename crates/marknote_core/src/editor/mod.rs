//! Editor session state.
//!
//! # Responsibility
//! - Model the draft copy of the entity under edit.
//! - Make the idle/editing distinction an explicit tagged state.

pub mod draft;
