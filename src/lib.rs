use midly::num::u7;

pub mod cmdline;
pub mod song;

/// The note-on pitches of a song, in the order they sound.
pub type NoteVec = Vec<u7>;
