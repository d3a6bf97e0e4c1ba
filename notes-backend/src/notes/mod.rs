//! Notes system: in-memory note storage plus boundary validation
//!
//! Handlers validate a payload first, then hand the resulting `NewNote` to the
//! store. The store never re-checks content.

pub mod store;
pub mod validation;

pub use store::NoteStore;
