//! NoteStore: in-memory note storage
//!
//! Holds every note keyed by id together with the id counter. Both live behind
//! one lock so id assignment and map mutation happen atomically. Nothing is
//! persisted; the store starts empty on every boot.

use chrono::Utc;
use parking_lot::RwLock;
use std::collections::BTreeMap;

use crate::models::{NewNote, Note};

/// First id handed out by a fresh store
const FIRST_ID: i64 = 1;

struct StoreInner {
    notes: BTreeMap<i64, Note>,
    next_id: i64,
}

/// Authoritative holder of all notes.
///
/// Lookups that miss return `None`/`false`; no operation here can fail.
pub struct NoteStore {
    inner: RwLock<StoreInner>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                notes: BTreeMap::new(),
                next_id: FIRST_ID,
            }),
        }
    }

    /// Store a new note under the next id. Both timestamps are set to now.
    pub fn insert(&self, candidate: NewNote) -> Note {
        let mut inner = self.inner.write();

        let id = inner.next_id;
        inner.next_id += 1;

        let now = Utc::now();
        let note = Note {
            id,
            title: candidate.title,
            body: candidate.body,
            created_at: now,
            updated_at: now,
        };
        inner.notes.insert(id, note.clone());

        log::debug!("[NOTES] Created note {}", id);
        note
    }

    /// All notes in ascending id order.
    pub fn get_all(&self) -> Vec<Note> {
        self.inner.read().notes.values().cloned().collect()
    }

    pub fn get(&self, id: i64) -> Option<Note> {
        self.inner.read().notes.get(&id).cloned()
    }

    /// Replace title and body of an existing note and refresh `updated_at`.
    pub fn update(&self, id: i64, candidate: NewNote) -> Option<Note> {
        let mut inner = self.inner.write();
        let note = inner.notes.get_mut(&id)?;

        note.title = candidate.title;
        note.body = candidate.body;
        // updated_at must never precede created_at, even if the wall clock stepped back
        note.updated_at = Utc::now().max(note.created_at);

        log::debug!("[NOTES] Updated note {}", id);
        Some(note.clone())
    }

    /// Remove a note. Returns whether anything was removed.
    pub fn delete(&self, id: i64) -> bool {
        let removed = self.inner.write().notes.remove(&id).is_some();
        if removed {
            log::debug!("[NOTES] Deleted note {}", id);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.inner.read().notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().notes.is_empty()
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}
