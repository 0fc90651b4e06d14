//! Case-insensitive substring search.
//!
//! # Responsibility
//! - Filter notes and folders by title/content substring match.
//! - Return typed hits with stable ids.
//!
//! # Invariants
//! - Matching is case-insensitive on both sides.
//! - Result ordering is deterministic: folders in list order, then
//!   notes in list order.
//! - Blank queries return no hits.

use crate::model::entity::{EntityId, EntityKind};
use crate::store::entity_store::EntityStore;

/// Which entity fields a query matches against.
///
/// Folders have no content, so `Content` never matches a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    /// Title or content.
    #[default]
    Any,
    Title,
    Content,
}

/// Search options for substring matching.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// User query text; matched case-insensitively.
    pub text: String,
    pub scope: SearchScope,
    /// Optional entity family filter.
    pub kind: Option<EntityKind>,
}

impl SearchQuery {
    /// Creates a query matching any field of any entity kind.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            scope: SearchScope::Any,
            kind: None,
        }
    }
}

/// Single search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub id: EntityId,
    pub kind: EntityKind,
    pub title: String,
}

/// Searches the store and returns hits in deterministic order.
pub fn search_store(store: &EntityStore, query: &SearchQuery) -> Vec<SearchHit> {
    let needle = query.text.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut hits = Vec::new();

    if query.kind != Some(EntityKind::Note) {
        for folder in store.folders() {
            let title_match = folder.title.to_lowercase().contains(&needle);
            let matched = match query.scope {
                SearchScope::Any | SearchScope::Title => title_match,
                SearchScope::Content => false,
            };
            if matched {
                hits.push(SearchHit {
                    id: folder.id,
                    kind: EntityKind::Folder,
                    title: folder.title.clone(),
                });
            }
        }
    }

    if query.kind != Some(EntityKind::Folder) {
        for note in store.notes() {
            let title_match = note.title.to_lowercase().contains(&needle);
            let content_match = note.content.to_lowercase().contains(&needle);
            let matched = match query.scope {
                SearchScope::Any => title_match || content_match,
                SearchScope::Title => title_match,
                SearchScope::Content => content_match,
            };
            if matched {
                hits.push(SearchHit {
                    id: note.id,
                    kind: EntityKind::Note,
                    title: note.title.clone(),
                });
            }
        }
    }

    hits
}
