//! Times trade synthesis and CSV serialization into an in-memory buffer.
//! can be run with `cargo run --release --example benchmark`

use std::error::Error;
use std::time::Instant;

use log::warn;
use trade_fixtures::synth::Synthesizer;
use trade_fixtures::writer::write_trades;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let synthesizer = Synthesizer::default();
    let start = Instant::now();
    let trades = synthesizer.trades(0..1_000_000).count();
    warn!("Synthesizing {} trades took: {:.2?}", trades, start.elapsed());

    let mut buffer = Vec::new();
    let start_writing = Instant::now();
    write_trades(&synthesizer, 1_000_000, &mut buffer)?;
    warn!(
        "Writing {} bytes took: {:.2?}",
        buffer.len(),
        start_writing.elapsed()
    );

    Ok(())
}
