//! Draft record and editor state machine.
//!
//! # Responsibility
//! - Hold the scratch copy of a note or folder while it is edited.
//! - Accept field edits without touching the store.
//!
//! # Invariants
//! - A draft never aliases store data; commit copies it back.
//! - `kind` is fixed for the lifetime of a draft.
//! - Content edits on folder drafts are silent no-ops.

use crate::model::entity::{EntityId, EntityKind, Folder, Note};
use uuid::Uuid;

/// Scratch copy of an entity under edit, not yet committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    /// Id the draft will commit under. Not in the store for new drafts.
    pub id: EntityId,
    pub kind: EntityKind,
    pub title: String,
    /// Markdown body. Unused for folder drafts.
    pub content: String,
    /// Folder the entity lives in; meaningful for note drafts only.
    pub container: Option<EntityId>,
}

impl Draft {
    /// Creates an empty draft of `kind` with a freshly allocated id.
    pub fn blank(kind: EntityKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            title: String::new(),
            content: String::new(),
            container: None,
        }
    }

    /// Copies an existing note into a draft.
    pub fn from_note(note: &Note) -> Self {
        Self {
            id: note.id,
            kind: EntityKind::Note,
            title: note.title.clone(),
            content: note.content.clone(),
            container: note.container,
        }
    }

    /// Copies an existing folder into a draft.
    pub fn from_folder(folder: &Folder) -> Self {
        Self {
            id: folder.id,
            kind: EntityKind::Folder,
            title: folder.title.clone(),
            content: String::new(),
            container: None,
        }
    }

    /// Replaces the draft title.
    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title = value.into();
    }

    /// Replaces the draft body. No-op for folder drafts.
    pub fn set_content(&mut self, value: impl Into<String>) {
        if self.kind == EntityKind::Note {
            self.content = value.into();
        }
    }

    /// Materializes the committed note with the given timestamp.
    ///
    /// Callers must hold `kind == EntityKind::Note`.
    pub fn into_note(self, updated_at: i64) -> Note {
        Note {
            id: self.id,
            title: self.title,
            content: self.content,
            container: self.container,
            updated_at,
        }
    }

    /// Materializes the committed folder with the given timestamp.
    ///
    /// Callers must hold `kind == EntityKind::Folder`.
    pub fn into_folder(self, updated_at: i64) -> Folder {
        Folder {
            id: self.id,
            title: self.title,
            updated_at,
        }
    }
}

/// Editor pane state. Explicit so "no draft" cannot be confused with
/// an empty draft.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorState {
    /// Nothing under edit.
    #[default]
    Idle,
    /// A draft is open in the editor pane.
    Editing(Draft),
}

impl EditorState {
    /// Borrows the open draft, if any.
    pub fn draft(&self) -> Option<&Draft> {
        match self {
            Self::Idle => None,
            Self::Editing(draft) => Some(draft),
        }
    }

    /// Mutably borrows the open draft, if any.
    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        match self {
            Self::Idle => None,
            Self::Editing(draft) => Some(draft),
        }
    }

    /// Returns the open draft and resets the editor to idle.
    pub fn take_draft(&mut self) -> Option<Draft> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Editing(draft) => Some(draft),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }
}

#[cfg(test)]
mod tests {
    use super::{Draft, EditorState};
    use crate::model::entity::{EntityKind, Folder, Note};

    #[test]
    fn blank_draft_allocates_fresh_id() {
        let a = Draft::blank(EntityKind::Note);
        let b = Draft::blank(EntityKind::Note);
        assert_ne!(a.id, b.id);
        assert!(a.title.is_empty());
        assert!(a.content.is_empty());
    }

    #[test]
    fn draft_copies_note_without_aliasing() {
        let mut note = Note::new("original", "body");
        note.updated_at = 42;
        let mut draft = Draft::from_note(&note);
        draft.set_title("changed");

        assert_eq!(note.title, "original");
        assert_eq!(draft.content, "body");
        assert_eq!(draft.id, note.id);
    }

    #[test]
    fn folder_draft_ignores_content_edits() {
        let folder = Folder::new("inbox");
        let mut draft = Draft::from_folder(&folder);
        draft.set_content("should vanish");
        assert!(draft.content.is_empty());
    }

    #[test]
    fn take_draft_resets_to_idle() {
        let mut state = EditorState::Editing(Draft::blank(EntityKind::Note));
        assert!(state.is_editing());
        assert!(state.take_draft().is_some());
        assert_eq!(state, EditorState::Idle);
        assert!(state.take_draft().is_none());
    }
}
