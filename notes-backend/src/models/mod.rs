mod note;

pub use note::NewNote;
pub use notes_types::{ErrorResponse, Note, NotePayload};
