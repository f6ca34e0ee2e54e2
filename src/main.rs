use clap::Parser;
use concordance::{build_concordance, into_sorted, write_report};
use std::io::{self, BufWriter};
use std::time::Instant;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "concordance")]
#[command(about = "Read text on stdin and list each word with the lines it appears on")]
#[command(version)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> concordance::Result<()> {
    let start = Instant::now();
    let stdin = io::stdin();
    let (index, stats) = build_concordance(stdin.lock())?;
    debug!(
        records = index.len(),
        lines = stats.lines,
        tokens = stats.tokens,
        rejected = stats.rejected_words,
        truncated = stats.truncated_markers,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "input consumed"
    );

    let records = into_sorted(index);

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    let written = write_report(&records, &mut writer)?;
    debug!(lines = written, "report written");

    Ok(())
}

/// Diagnostics go to stderr so stdout carries only the report
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
