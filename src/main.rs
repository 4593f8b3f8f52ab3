use anyhow::Result;
use midi2song::cmdline::parse_args;
use midi2song::song::{load_midi_file, write_song};
use std::io;

fn main() -> Result<()> {
    let args = parse_args();
    let notes = load_midi_file(&args.midi_file)?;
    let stdout = io::stdout();
    write_song(&notes, &mut stdout.lock())?;
    Ok(())
}
