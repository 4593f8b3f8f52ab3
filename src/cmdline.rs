use std::path::PathBuf;

use structopt::StructOpt;

/// Converts a MIDI song file into the plain-text note list read by the game,
/// printed on standard output.
#[derive(StructOpt)]
pub struct Cli {
    /// The MIDI file to convert
    #[structopt(parse(from_os_str))]
    pub midi_file: PathBuf,
}

pub fn parse_args() -> Cli {
    Cli::from_args()
}
