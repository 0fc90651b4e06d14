//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store and editor state into the synchronous event
//!   contract the presentation layer calls into.
//! - Keep UI layers decoupled from store internals.

pub mod workbench;
