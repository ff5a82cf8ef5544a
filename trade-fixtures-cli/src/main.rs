use std::error::Error;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Parser;

use trade_fixtures::synth::Synthesizer;
use trade_fixtures::writer;

#[derive(Parser)]
#[clap(author, version, about = "Generates a CSV of synthetic trades for test fixtures", long_about = None)]
struct Cli {
    /// Number of data rows to generate
    #[clap(long, default_value_t = 3000)]
    pub(crate) rows: u32,
    /// Destination CSV file, created or overwritten
    #[clap(long, default_value = "testdata/large_trades.csv")]
    pub(crate) out: PathBuf,
    /// Session start all entry times are offset from
    #[clap(long, default_value = "2024-01-01T09:30:00Z")]
    pub(crate) start: DateTime<Utc>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let synthesizer = Synthesizer::new(cli.start);
    let rows = writer::generate(&synthesizer, cli.rows, &cli.out)?;

    println!("wrote {} rows to {}", rows, cli.out.display());
    Ok(())
}
