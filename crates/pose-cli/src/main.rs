use std::{fs, path::Path};

use anyhow::{Context, Result};
use clap::Parser;
use pose_core::{run_batch, BatchReport, PoseBatch};

/// Evaluate a batch of pose operations.
#[derive(Debug, Parser)]
#[command(author, version, about = "Pose algebra batch evaluator")]
struct Args {
    /// Path to JSON file containing a PoseBatch.
    #[arg(long)]
    input: String,

    /// Keep going after a failing op and record its error in the report.
    #[arg(long)]
    keep_going: bool,

    /// Pretty-print the JSON report.
    #[arg(long)]
    pretty: bool,
}

fn load_batch(path: &Path) -> Result<PoseBatch> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("invalid pose batch in {}", path.display()))
}

fn write_report_json(report: &BatchReport, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(json)
}

fn run_batch_from_file(input_path: &str, keep_going: bool, pretty: bool) -> Result<String> {
    let mut batch = load_batch(Path::new(input_path))?;
    if keep_going {
        batch.options.fail_fast = false;
    }
    let report = run_batch(&batch).context("pose batch failed")?;
    write_report_json(&report, pretty)
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let args = Args::parse();
    let json = run_batch_from_file(&args.input, args.keep_going, args.pretty)?;
    println!("{}", json);
    Ok(())
}
