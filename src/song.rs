use crate::NoteVec;
use anyhow::{Context, Result};
use midi_reader_writer::midly_0_5::merge_tracks;
use midly::{num::u7, MidiMessage::NoteOn, Smf, TrackEventKind::Midi};
use std::{
    io::{self, Write},
    path::Path,
};

pub const ZERO_U7: u7 = u7::new(0);

/// Marker line written before the notes.
pub const SONG_START: &str = "SONG_START";
/// Marker line written after the notes.
pub const SONG_END: &str = "SONG_END";

/// Reads a MIDI file and collects the pitch of every audible note onset.
pub fn load_midi_file(path: &Path) -> Result<NoteVec> {
    let data = std::fs::read(path)
        .with_context(|| format!("Can't read MIDI file {}", path.display()))?;
    let smf = Smf::parse(&data)
        .with_context(|| format!("Can't parse MIDI file {}", path.display()))?;
    Ok(note_ons(&smf))
}

/// Collects note-on pitches with all tracks merged into one chronological
/// stream. A note-on with zero velocity is a note-off in disguise and is
/// skipped.
pub fn note_ons(smf: &Smf) -> NoteVec {
    merge_tracks(&smf.tracks)
        .filter_map(|(_ticks, _track_index, event)| match event {
            Midi {
                channel: _,
                message: NoteOn { key: _, vel: ZERO_U7 },
            } => None,
            Midi {
                channel: _,
                message: NoteOn { key, vel: _ },
            } => Some(key),
            _ => None,
        })
        .collect()
}

/// Writes the song in the format the game loads: one `SONG_START` line, one
/// decimal pitch per line, one `SONG_END` line.
pub fn write_song(notes: &[u7], out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", SONG_START)?;
    for pitch in notes {
        writeln!(out, "{}", pitch)?;
    }
    writeln!(out, "{}", SONG_END)?;
    Ok(())
}
