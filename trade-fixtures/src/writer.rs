use std::fs::File;
use std::io;
use std::path::Path;

use csv::{Terminator, WriterBuilder};
use log::info;

use crate::error::FixtureError;
use crate::synth::Synthesizer;
use crate::trade::HEADER;

/// Writes the header followed by rows `0..rows` produced by `synthesizer`, returning the
/// number of data rows written.
///
/// The header is written explicitly so an empty run still produces it.
///
/// # Errors
/// Errors when a record cannot be serialized or the underlying writer fails
pub fn write_trades<W: io::Write>(
    synthesizer: &Synthesizer,
    rows: u32,
    writer: W,
) -> Result<u32, FixtureError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    writer.write_record(HEADER)?;
    for trade in synthesizer.trades(0..rows) {
        writer.serialize(trade)?;
    }
    writer.flush()?;

    Ok(rows)
}

/// Creates (or truncates) the file at `path` and fills it with `rows` synthesized trades.
///
/// # Errors
/// Errors when the file cannot be created, e.g. its parent directory is missing or not
/// writable, or when writing to it fails part way
pub fn generate<P: AsRef<Path>>(
    synthesizer: &Synthesizer,
    rows: u32,
    path: P,
) -> Result<u32, FixtureError> {
    let path = path.as_ref();
    info!("generating {rows} trades into {}", path.display());

    let file = File::create(path)?;
    let written = write_trades(synthesizer, rows, file)?;

    info!("finished writing {}", path.display());
    Ok(written)
}
