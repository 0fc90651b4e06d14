//! Core domain logic for MarkNote.
//! This crate is the single source of truth for editing-session invariants.

pub mod editor;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod store;
pub mod view;

pub use editor::draft::{Draft, EditorState};
pub use logging::{init_logging, logging_status};
pub use model::entity::{
    validate_title, EntityId, EntityKind, EntityValidationError, Folder, Note, TITLE_MAX_CHARS,
};
pub use search::query::{search_store, SearchHit, SearchQuery, SearchScope};
pub use service::workbench::{FolderDeleteMode, SaveError, SidebarEntry, Workbench};
pub use store::entity_store::{EntityLocation, EntityStore, StoreError};
pub use view::preview::excerpt;
pub use view::timestamp::{timestamp_label, DAY_MS, WEEK_MS};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
