//! Note/folder entity records.
//!
//! # Responsibility
//! - Define `Note` and `Folder` plus their shared identity type.
//! - Provide title validation applied before any store mutation.
//!
//! # Invariants
//! - `id` is stable and never reused for another entity.
//! - `title` is non-blank and at most `TITLE_MAX_CHARS` characters
//!   once an entity has been committed to the store.
//! - `updated_at` is epoch milliseconds stamped at commit time.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Maximum committed title length in characters.
pub const TITLE_MAX_CHARS: usize = 30;

/// Stable identifier shared by notes and folders.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntityId = Uuid;

/// Discriminates the two entity families held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Markdown note with a text body.
    Note,
    /// Grouping container; title only, no body.
    Folder,
}

/// A markdown note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable global id.
    pub id: EntityId,
    pub title: String,
    /// Markdown body shown in the editor pane.
    pub content: String,
    /// Folder this note lives in; `None` means root.
    pub container: Option<EntityId>,
    /// Last commit time in epoch milliseconds.
    pub updated_at: i64,
}

/// A folder grouping notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Stable global id.
    pub id: EntityId,
    pub title: String,
    /// Last commit time in epoch milliseconds.
    pub updated_at: i64,
}

impl Note {
    /// Creates a note with a generated stable id and zero timestamp.
    ///
    /// The timestamp is stamped by the commit path, not here.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            container: None,
            updated_at: 0,
        }
    }
}

impl Folder {
    /// Creates a folder with a generated stable id and zero timestamp.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            updated_at: 0,
        }
    }
}

/// Title validation failure raised by commit paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityValidationError {
    /// Title is empty or whitespace-only.
    EmptyTitle,
    /// Title exceeds `TITLE_MAX_CHARS` characters.
    TitleTooLong { chars: usize },
}

impl Display for EntityValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be blank"),
            Self::TitleTooLong { chars } => write!(
                f,
                "title has {chars} characters; limit is {TITLE_MAX_CHARS}"
            ),
        }
    }
}

impl Error for EntityValidationError {}

/// Validates a title against the commit rules.
///
/// # Errors
/// - `EmptyTitle` when the title is blank after trimming.
/// - `TitleTooLong` when the character count exceeds `TITLE_MAX_CHARS`.
pub fn validate_title(title: &str) -> Result<(), EntityValidationError> {
    if title.trim().is_empty() {
        return Err(EntityValidationError::EmptyTitle);
    }
    let chars = title.chars().count();
    if chars > TITLE_MAX_CHARS {
        return Err(EntityValidationError::TitleTooLong { chars });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_title, EntityValidationError, Folder, Note, TITLE_MAX_CHARS};

    #[test]
    fn note_new_sets_defaults() {
        let note = Note::new("groceries", "- milk");
        assert!(!note.id.is_nil());
        assert_eq!(note.title, "groceries");
        assert_eq!(note.content, "- milk");
        assert_eq!(note.container, None);
        assert_eq!(note.updated_at, 0);
    }

    #[test]
    fn folder_new_sets_defaults() {
        let folder = Folder::new("work");
        assert!(!folder.id.is_nil());
        assert_eq!(folder.title, "work");
        assert_eq!(folder.updated_at, 0);
    }

    #[test]
    fn validate_title_rejects_blank_values() {
        assert_eq!(
            validate_title("   "),
            Err(EntityValidationError::EmptyTitle)
        );
        assert_eq!(validate_title(""), Err(EntityValidationError::EmptyTitle));
    }

    #[test]
    fn validate_title_rejects_overlong_values() {
        let long = "x".repeat(TITLE_MAX_CHARS + 1);
        assert_eq!(
            validate_title(&long),
            Err(EntityValidationError::TitleTooLong {
                chars: TITLE_MAX_CHARS + 1
            })
        );
        let exact = "x".repeat(TITLE_MAX_CHARS);
        assert!(validate_title(&exact).is_ok());
    }
}
