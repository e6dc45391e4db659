use std::path::PathBuf;

use anyhow::{Context, bail};
use log::info;
use statepop::{MergeConfig, pipeline, reader};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 {
        bail!("Usage: {} <names.csv> <populations.csv> <output.csv>", args[0]);
    }
    let name_path = PathBuf::from(&args[1]);
    let pop_path = PathBuf::from(&args[2]);
    let out_path = PathBuf::from(&args[3]);

    let config = MergeConfig::default();

    // Show the first few records of each input. Everything is a string at
    // this point.
    print_sample(&name_path, "Name file", config.sample_rows)?;
    print_sample(&pop_path, "Population file", config.sample_rows)?;

    let summary = pipeline::run(&name_path, &pop_path, &out_path, &config)
        .with_context(|| format!("merging {} with {}", args[1], args[2]))?;

    info!(
        "Merged {} rows across {} divisions ({} duplicate keys skipped)",
        summary.rows_written, summary.divisions, summary.duplicates_skipped
    );
    Ok(())
}

fn print_sample(path: &std::path::Path, label: &str, n: usize) -> anyhow::Result<()> {
    let records = reader::read_records(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let sample = &records[..records.len().min(n)];
    println!(
        "\n{label} information in first {} records:\n{}",
        sample.len(),
        serde_json::to_string_pretty(sample)?
    );
    Ok(())
}
