//! Workbench: the editing session over the in-memory store.
//!
//! # Responsibility
//! - Implement the choose/add/delete/save event contract.
//! - Reconcile the editor draft against the store on save.
//!
//! # Invariants
//! - Save validates the draft title before any store mutation; a
//!   rejected save leaves the store untouched.
//! - Stale or missing ids are silent no-ops, never panics.
//! - After save the selection stays on the saved entity and the
//!   editor returns to idle.

use crate::editor::draft::{Draft, EditorState};
use crate::model::entity::{
    validate_title, EntityId, EntityKind, EntityValidationError,
};
use crate::store::entity_store::{EntityLocation, EntityStore};
use crate::view::preview::excerpt;
use crate::view::timestamp::{now_ms, timestamp_label};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Folder delete policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderDeleteMode {
    /// Delete the folder only and move contained notes to root.
    Dissolve,
    /// Delete the folder together with its contained notes.
    DeleteAll,
}

/// Failure modes of `Workbench::save`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveError {
    /// The editor is idle; there is nothing to commit.
    NoActiveDraft,
    /// The draft title violates commit rules.
    Validation(EntityValidationError),
}

impl Display for SaveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoActiveDraft => write!(f, "no draft is open in the editor"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SaveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoActiveDraft => None,
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<EntityValidationError> for SaveError {
    fn from(value: EntityValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Sidebar row projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    pub id: EntityId,
    pub kind: EntityKind,
    pub title: String,
    /// Plain-text excerpt of the note body; `None` for folders and
    /// for notes with no visible text.
    pub excerpt: Option<String>,
    /// Bucketed timestamp label (time-of-day / weekday / full date).
    pub timestamp_label: String,
    /// Whether this row is the current selection.
    pub active: bool,
}

/// Editing session facade: store + editor + selection.
#[derive(Debug, Clone, Default)]
pub struct Workbench {
    store: EntityStore,
    editor: EditorState,
}

impl Workbench {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Currently selected entity id, if any.
    pub fn selection(&self) -> Option<EntityId> {
        self.store.selection()
    }

    /// Draft currently open in the editor pane, if any.
    pub fn draft(&self) -> Option<&Draft> {
        self.editor.draft()
    }

    /// Opens a blank note draft and returns its allocated id.
    ///
    /// The id is not in the store until the first successful save; the
    /// selection points at it and resolves not-found until then.
    pub fn add_note(&mut self) -> EntityId {
        self.start_new(EntityKind::Note)
    }

    /// Opens a blank folder draft and returns its allocated id.
    pub fn add_folder(&mut self) -> EntityId {
        self.start_new(EntityKind::Folder)
    }

    /// Selects `id` and copies the matching entity into a fresh draft.
    ///
    /// Returns `false` (leaving selection and editor untouched) when
    /// the id does not resolve.
    pub fn choose(&mut self, id: EntityId) -> bool {
        let draft = match self.store.locate(id) {
            Some(EntityLocation::Note(index)) => Draft::from_note(&self.store.notes()[index]),
            Some(EntityLocation::Folder(index)) => {
                Draft::from_folder(&self.store.folders()[index])
            }
            None => {
                debug!("event=choose module=workbench status=not_found id={id}");
                return false;
            }
        };
        self.store.set_selection(Some(id));
        self.editor = EditorState::Editing(draft);
        true
    }

    /// Replaces the draft title. No-op while idle.
    pub fn update_title(&mut self, value: impl Into<String>) {
        if let Some(draft) = self.editor.draft_mut() {
            draft.set_title(value);
        }
    }

    /// Replaces the draft body. No-op while idle or for folder drafts.
    pub fn update_content(&mut self, value: impl Into<String>) {
        if let Some(draft) = self.editor.draft_mut() {
            draft.set_content(value);
        }
    }

    /// Moves a note draft into a folder (or to root). No-op while
    /// idle, for folder drafts, and for ids that are not folders.
    pub fn update_container(&mut self, container: Option<EntityId>) {
        if let Some(id) = container {
            if self.store.folder(id).is_none() {
                debug!("event=update_container module=workbench status=not_found id={id}");
                return;
            }
        }
        if let Some(draft) = self.editor.draft_mut() {
            if draft.kind == EntityKind::Note {
                draft.container = container;
            }
        }
    }

    /// Commits the open draft into the store.
    ///
    /// New ids are prepended to their list; existing ids are
    /// overwritten in place. The entity timestamp is refreshed either
    /// way. Selection stays on the saved entity; the editor goes idle.
    ///
    /// # Errors
    /// - `NoActiveDraft` when the editor is idle.
    /// - `Validation` when the title is blank or too long; the draft
    ///   stays open and the store is unmodified.
    pub fn save(&mut self) -> Result<EntityId, SaveError> {
        self.save_at(now_ms())
    }

    /// `save` with an explicit commit timestamp.
    pub fn save_at(&mut self, timestamp_ms: i64) -> Result<EntityId, SaveError> {
        let Some(draft) = self.editor.draft() else {
            return Err(SaveError::NoActiveDraft);
        };
        if let Err(err) = validate_title(&draft.title) {
            warn!("event=save module=workbench status=rejected reason={err}");
            return Err(err.into());
        }

        let draft = self.editor.take_draft().expect("checked draft above");
        let id = draft.id;
        let kind = draft.kind;
        match kind {
            EntityKind::Note => {
                let note = draft.into_note(timestamp_ms);
                if !self.store.replace_note(note.clone()) {
                    self.store
                        .insert_note(note)
                        .expect("id absent from store after failed replace");
                }
            }
            EntityKind::Folder => {
                let folder = draft.into_folder(timestamp_ms);
                if !self.store.replace_folder(folder.clone()) {
                    self.store
                        .insert_folder(folder)
                        .expect("id absent from store after failed replace");
                }
            }
        }

        self.store.set_selection(Some(id));
        info!("event=save module=workbench status=ok kind={kind:?} id={id}");
        Ok(id)
    }

    /// Discards the open draft without touching the store.
    ///
    /// A selection left dangling by an unsaved new draft is cleared.
    pub fn cancel(&mut self) {
        self.editor = EditorState::Idle;
        if self.store.locate_selection().is_none() {
            self.store.set_selection(None);
        }
    }

    /// Deletes the note with `id`. Silent no-op when the id does not
    /// resolve to a note. Clears a matching selection and discards a
    /// draft that was editing the removed note.
    pub fn delete_note(&mut self, id: EntityId) {
        if self.store.remove_note(id).is_none() {
            debug!("event=delete_note module=workbench status=not_found id={id}");
            return;
        }
        self.drop_draft_for(id);
        info!("event=delete_note module=workbench status=ok id={id}");
    }

    /// Deletes the folder with `id` according to `mode`. Silent no-op
    /// when the id does not resolve to a folder.
    pub fn delete_folder(&mut self, id: EntityId, mode: FolderDeleteMode) {
        let contained = self.store.notes_in_folder(id);
        if self.store.remove_folder(id).is_none() {
            debug!("event=delete_folder module=workbench status=not_found id={id}");
            return;
        }
        match mode {
            FolderDeleteMode::Dissolve => self.store.release_folder_notes(id),
            FolderDeleteMode::DeleteAll => {
                for note_id in contained {
                    self.store.remove_note(note_id);
                    self.drop_draft_for(note_id);
                }
            }
        }
        self.drop_draft_for(id);
        info!("event=delete_folder module=workbench status=ok mode={mode:?} id={id}");
    }

    /// Deletes whatever the selection points at. No-op when nothing is
    /// selected or the selection is dangling. Folder selections are
    /// dissolved rather than cascaded.
    pub fn delete_selected(&mut self) {
        match self.store.locate_selection() {
            Some(EntityLocation::Note(index)) => {
                let id = self.store.notes()[index].id;
                self.delete_note(id);
            }
            Some(EntityLocation::Folder(index)) => {
                let id = self.store.folders()[index].id;
                self.delete_folder(id, FolderDeleteMode::Dissolve);
            }
            None => {}
        }
    }

    /// Builds the sidebar rows as seen at the current wall-clock time.
    pub fn sidebar_entries(&self) -> Vec<SidebarEntry> {
        self.sidebar_entries_at(now_ms())
    }

    /// Builds the sidebar rows as seen at `now_ms`: folders first,
    /// then notes, both in store order.
    pub fn sidebar_entries_at(&self, now_ms: i64) -> Vec<SidebarEntry> {
        let selection = self.store.selection();
        let mut entries = Vec::with_capacity(
            self.store.folders().len() + self.store.notes().len(),
        );
        for folder in self.store.folders() {
            entries.push(SidebarEntry {
                id: folder.id,
                kind: EntityKind::Folder,
                title: folder.title.clone(),
                excerpt: None,
                timestamp_label: timestamp_label(folder.updated_at, now_ms),
                active: selection == Some(folder.id),
            });
        }
        for note in self.store.notes() {
            entries.push(SidebarEntry {
                id: note.id,
                kind: EntityKind::Note,
                title: note.title.clone(),
                excerpt: excerpt(&note.content),
                timestamp_label: timestamp_label(note.updated_at, now_ms),
                active: selection == Some(note.id),
            });
        }
        entries
    }

    fn start_new(&mut self, kind: EntityKind) -> EntityId {
        let draft = Draft::blank(kind);
        let id = draft.id;
        self.store.set_selection(Some(id));
        self.editor = EditorState::Editing(draft);
        debug!("event=start_new module=workbench status=ok kind={kind:?} id={id}");
        id
    }

    fn drop_draft_for(&mut self, id: EntityId) {
        if self.editor.draft().is_some_and(|draft| draft.id == id) {
            self.editor = EditorState::Idle;
        }
    }
}
