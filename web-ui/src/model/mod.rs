// UI models

pub mod editor_state;

pub use editor_state::{EditorMsg, EditorState};
