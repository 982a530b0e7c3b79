//! leadsift CLI
//!
//! Reads a lead batch from a JSON file, deduplicates it, prints a change
//! report, and writes the deduplicated batch back out.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use leadsift::{io, ConsoleReporter, Deduplicator, LeadBatch, NullReporter};

#[derive(Parser)]
#[command(
    name = "leadsift",
    about = "Deduplicate a batch of lead records by id and email",
    version
)]
struct Cli {
    /// Input JSON file containing a {"leads": [...]} batch
    input: PathBuf,

    /// Where to write the deduplicated batch
    #[arg(short, long, default_value = "out/deduped_leads.json")]
    output: PathBuf,

    /// Suppress the per-lead change report
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let batch = io::read_batch(&cli.input)?;
    info!(count = batch.len(), input = %cli.input.display(), "read lead batch");

    let deduped = if cli.quiet {
        Deduplicator::new(NullReporter).deduplicate(batch.leads)
    } else {
        Deduplicator::new(ConsoleReporter).deduplicate(batch.leads)
    };
    info!(count = deduped.len(), "deduplication complete");

    io::write_batch(&cli.output, &LeadBatch::new(deduped))?;
    println!("Results written to {}", cli.output.display());
    Ok(())
}
