use std::error::Error;
use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, error::ErrorKind};

use crate::config::ReportConfig;
use crate::download::DownloadArtifact;
use crate::metrics::{CorpusMetrics, CorpusMetricsBuilder};
use crate::report::{format_count, render_text_report};
use crate::snapshot::SnapshotCache;

#[derive(Debug, Parser)]
#[command(
    name = "prepstats",
    disable_help_subcommand = true,
    about = "Summarize a preprocessed text dataset",
    long_about = "Load a preprocessed posts CSV, derive token counts, trigger rates and the top-term table, and optionally export the dataset and a text report.",
    after_help = "Values are resolved in order by explicit flag, --config file, then built-in defaults."
)]
/// CLI for `prepstats`.
///
/// Common usage:
/// - Summary of the default dataset: `prepstats`
/// - Explicit dataset and JSON output: `prepstats --data posts.csv --json`
/// - Export download artifacts: `prepstats --export-dir out/`
struct ReportCli {
    #[arg(
        long = "data",
        value_name = "PATH",
        help = "Dataset CSV path (overrides the config file)"
    )]
    data: Option<PathBuf>,
    #[arg(
        long = "config",
        value_name = "PATH",
        help = "Optional JSON configuration file"
    )]
    config: Option<PathBuf>,
    #[arg(
        long = "top-n",
        value_parser = parse_positive_usize,
        help = "Number of entries in the top-terms table"
    )]
    top_n: Option<usize>,
    #[arg(
        long = "json",
        conflicts_with = "report",
        help = "Print metrics as JSON instead of a summary"
    )]
    json: bool,
    #[arg(long = "report", help = "Print the full text report instead of a summary")]
    report: bool,
    #[arg(
        long = "export-dir",
        value_name = "DIR",
        help = "Write the dataset and the text report into DIR"
    )]
    export_dir: Option<PathBuf>,
}

/// Config file (or defaults) with flag overrides applied.
fn resolve_config(cli: &ReportCli) -> Result<ReportConfig, Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => ReportConfig::from_json_file(path)?,
        None => ReportConfig::default(),
    };
    if let Some(path) = &cli.data {
        config = config.with_dataset_path(path);
    }
    if let Some(top_n) = cli.top_n {
        config = config.with_top_n(top_n);
    }
    config.validate()?;
    Ok(config)
}

/// Entry point for the `prepstats` binary.
pub fn run_report<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let Some(cli) =
        parse_cli::<ReportCli, _>(std::iter::once("prepstats".to_string()).chain(args_iter))?
    else {
        return Ok(());
    };

    let config = resolve_config(&cli)?;
    let cache = SnapshotCache::new(config.loader()?, CorpusMetricsBuilder::from_config(&config)?);
    let snapshot = cache.get()?;
    let metrics = snapshot.metrics();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(metrics)?);
    } else if cli.report {
        print!("{}", render_text_report(metrics, Utc::now()));
    } else {
        print_summary(metrics);
    }

    if let Some(dir) = &cli.export_dir {
        let dataset =
            DownloadArtifact::dataset_named(&config.dataset_path, &config.download_file_name)?;
        let dataset_path = dataset.write_to(dir)?;
        let report = DownloadArtifact::report(render_text_report(metrics, Utc::now()));
        let report_path = report.write_to(dir)?;
        eprintln!(
            "Exported {} and {}",
            dataset_path.display(),
            report_path.display()
        );
    }

    Ok(())
}

fn print_summary(metrics: &CorpusMetrics) {
    println!("=== dataset ===");
    println!("  posts:                {}", format_count(metrics.post_count));
    println!(
        "  avg tokens original:  {:.1}",
        metrics.avg_original_tokens
    );
    println!(
        "  avg tokens processed: {:.1}",
        metrics.avg_processed_tokens
    );
    println!(
        "  token reduction:      {:.1}% ({:.1} tokens/post)",
        metrics.token_reduction_pct, metrics.tokens_removed_per_post
    );
    println!(
        "  vocabulary size:      {}",
        format_count(metrics.vocabulary_size)
    );
    println!();
    println!("=== trigger rates ===");
    if metrics.trigger_rates.is_empty() {
        println!("  (no trigger categories configured)");
    }
    for (category, rate) in &metrics.trigger_rates {
        println!("  {category:<14} {rate:>5.1}%");
    }
    println!();
    println!("=== top terms ===");
    if metrics.top_terms.is_empty() {
        println!("  (no terms)");
    }
    for entry in &metrics.top_terms {
        println!("  {:<16} {}", entry.term, format_count(entry.count));
    }
}

fn parse_positive_usize(raw: &str) -> Result<usize, String> {
    let parsed = raw.parse::<usize>().map_err(|_| {
        format!(
            "Could not parse --top-n value '{}' as a positive integer",
            raw
        )
    })?;
    if parsed == 0 {
        return Err("--top-n must be greater than zero".to_string());
    }
    Ok(parsed)
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}
