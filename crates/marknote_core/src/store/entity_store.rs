//! Ordered note/folder lists with selection tracking.
//!
//! # Responsibility
//! - Provide CRUD primitives over the two entity lists.
//! - Resolve an id to its owning list and index (first match wins).
//!
//! # Invariants
//! - No id appears twice across notes and folders combined.
//! - List order is caller-controlled: new entities are prepended by
//!   the commit path, overwrites keep their position.

use crate::model::entity::{EntityId, EntityKind, Folder, Note};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Position of an entity inside the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityLocation {
    /// Index into the notes list.
    Note(usize),
    /// Index into the folders list.
    Folder(usize),
}

impl EntityLocation {
    /// Returns which entity family the location points into.
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Note(_) => EntityKind::Note,
            Self::Folder(_) => EntityKind::Folder,
        }
    }
}

/// Store-level failure for insert paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The id is already present in one of the lists.
    DuplicateId(EntityId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "entity id already in store: {id}"),
        }
    }
}

impl Error for StoreError {}

/// In-memory store backing the editor session.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    notes: Vec<Note>,
    folders: Vec<Folder>,
    selection: Option<EntityId>,
}

impl EntityStore {
    /// Creates an empty store with no selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Notes in list order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Folders in list order.
    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    /// Currently selected entity id, if any.
    pub fn selection(&self) -> Option<EntityId> {
        self.selection
    }

    /// Points the selection at `id` without resolving it.
    ///
    /// Callers that need a resolving selection should check `locate`
    /// first; a dangling selection is legal and reads as not-found.
    pub fn set_selection(&mut self, id: Option<EntityId>) {
        self.selection = id;
    }

    /// Resolves an id to its list and index. Linear scan, notes first.
    pub fn locate(&self, id: EntityId) -> Option<EntityLocation> {
        if let Some(index) = self.notes.iter().position(|note| note.id == id) {
            return Some(EntityLocation::Note(index));
        }
        self.folders
            .iter()
            .position(|folder| folder.id == id)
            .map(EntityLocation::Folder)
    }

    /// Resolves the current selection, treating a dangling id as none.
    pub fn locate_selection(&self) -> Option<EntityLocation> {
        self.selection.and_then(|id| self.locate(id))
    }

    /// Note lookup by id.
    pub fn note(&self, id: EntityId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Folder lookup by id.
    pub fn folder(&self, id: EntityId) -> Option<&Folder> {
        self.folders.iter().find(|folder| folder.id == id)
    }

    /// Prepends a note.
    ///
    /// # Errors
    /// - `DuplicateId` when the id is already present in either list.
    pub fn insert_note(&mut self, note: Note) -> Result<(), StoreError> {
        self.ensure_unique(note.id)?;
        self.notes.insert(0, note);
        Ok(())
    }

    /// Prepends a folder.
    ///
    /// # Errors
    /// - `DuplicateId` when the id is already present in either list.
    pub fn insert_folder(&mut self, folder: Folder) -> Result<(), StoreError> {
        self.ensure_unique(folder.id)?;
        self.folders.insert(0, folder);
        Ok(())
    }

    /// Overwrites the note at its current position. Returns `false`
    /// when the id does not resolve to a note.
    pub fn replace_note(&mut self, note: Note) -> bool {
        match self.locate(note.id) {
            Some(EntityLocation::Note(index)) => {
                self.notes[index] = note;
                true
            }
            _ => false,
        }
    }

    /// Overwrites the folder at its current position. Returns `false`
    /// when the id does not resolve to a folder.
    pub fn replace_folder(&mut self, folder: Folder) -> bool {
        match self.locate(folder.id) {
            Some(EntityLocation::Folder(index)) => {
                self.folders[index] = folder;
                true
            }
            _ => false,
        }
    }

    /// Removes the note with `id`. Returns the removed note, or `None`
    /// when the id does not resolve to a note.
    ///
    /// Clears the selection when it pointed at the removed note.
    pub fn remove_note(&mut self, id: EntityId) -> Option<Note> {
        let index = match self.locate(id) {
            Some(EntityLocation::Note(index)) => index,
            _ => return None,
        };
        let removed = self.notes.remove(index);
        if self.selection == Some(id) {
            self.selection = None;
        }
        Some(removed)
    }

    /// Removes the folder with `id`. Returns the removed folder, or
    /// `None` when the id does not resolve to a folder.
    ///
    /// Contained notes are untouched here; folder delete policy lives
    /// in the workbench. Clears a selection pointing at the folder.
    pub fn remove_folder(&mut self, id: EntityId) -> Option<Folder> {
        let index = match self.locate(id) {
            Some(EntityLocation::Folder(index)) => index,
            _ => return None,
        };
        let removed = self.folders.remove(index);
        if self.selection == Some(id) {
            self.selection = None;
        }
        Some(removed)
    }

    /// Ids of notes contained in the given folder, in list order.
    pub fn notes_in_folder(&self, folder_id: EntityId) -> Vec<EntityId> {
        self.notes
            .iter()
            .filter(|note| note.container == Some(folder_id))
            .map(|note| note.id)
            .collect()
    }

    /// Moves every note contained in `folder_id` to the root.
    pub fn release_folder_notes(&mut self, folder_id: EntityId) {
        for note in &mut self.notes {
            if note.container == Some(folder_id) {
                note.container = None;
            }
        }
    }

    fn ensure_unique(&self, id: EntityId) -> Result<(), StoreError> {
        if self.locate(id).is_some() {
            return Err(StoreError::DuplicateId(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{EntityLocation, EntityStore, StoreError};
    use crate::model::entity::{Folder, Note};

    #[test]
    fn locate_scans_notes_before_folders() {
        let mut store = EntityStore::new();
        let note = Note::new("a", "");
        let folder = Folder::new("b");
        store.insert_note(note.clone()).unwrap();
        store.insert_folder(folder.clone()).unwrap();

        assert_eq!(store.locate(note.id), Some(EntityLocation::Note(0)));
        assert_eq!(store.locate(folder.id), Some(EntityLocation::Folder(0)));
        assert_eq!(store.locate(Note::new("x", "").id), None);
    }

    #[test]
    fn insert_rejects_duplicate_ids_across_lists() {
        let mut store = EntityStore::new();
        let note = Note::new("a", "");
        store.insert_note(note.clone()).unwrap();

        let err = store.insert_note(note.clone()).unwrap_err();
        assert_eq!(err, StoreError::DuplicateId(note.id));

        let mut folder = Folder::new("b");
        folder.id = note.id;
        let err = store.insert_folder(folder).unwrap_err();
        assert_eq!(err, StoreError::DuplicateId(note.id));
    }

    #[test]
    fn insert_prepends_and_replace_keeps_position() {
        let mut store = EntityStore::new();
        let first = Note::new("first", "");
        let second = Note::new("second", "");
        store.insert_note(first.clone()).unwrap();
        store.insert_note(second.clone()).unwrap();
        assert_eq!(store.notes()[0].id, second.id);
        assert_eq!(store.notes()[1].id, first.id);

        let mut edited = first.clone();
        edited.title = "renamed".to_string();
        assert!(store.replace_note(edited));
        assert_eq!(store.notes()[1].title, "renamed");
    }

    #[test]
    fn remove_clears_matching_selection() {
        let mut store = EntityStore::new();
        let note = Note::new("a", "");
        store.insert_note(note.clone()).unwrap();
        store.set_selection(Some(note.id));

        assert!(store.remove_note(note.id).is_some());
        assert_eq!(store.selection(), None);
        assert!(store.notes().is_empty());
    }

    #[test]
    fn remove_keeps_unrelated_selection() {
        let mut store = EntityStore::new();
        let keep = Note::new("keep", "");
        let drop = Note::new("drop", "");
        store.insert_note(keep.clone()).unwrap();
        store.insert_note(drop.clone()).unwrap();
        store.set_selection(Some(keep.id));

        store.remove_note(drop.id);
        assert_eq!(store.selection(), Some(keep.id));
    }

    #[test]
    fn release_folder_notes_moves_children_to_root() {
        let mut store = EntityStore::new();
        let folder = Folder::new("work");
        let mut inside = Note::new("inside", "");
        inside.container = Some(folder.id);
        let outside = Note::new("outside", "");
        store.insert_folder(folder.clone()).unwrap();
        store.insert_note(inside.clone()).unwrap();
        store.insert_note(outside.clone()).unwrap();

        assert_eq!(store.notes_in_folder(folder.id), vec![inside.id]);
        store.release_folder_notes(folder.id);
        assert!(store.notes_in_folder(folder.id).is_empty());
        assert_eq!(store.note(inside.id).unwrap().container, None);
    }
}
