use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use itertools::Itertools;
use simplelog::*;

use blaze_ideinfo::config::ImportConfig;
use blaze_ideinfo::import::{import_build_graph, save_snapshot, BuildGraph, ImportOutcome};

#[derive(Parser)]
#[command(name = "import", version, about = "Import a Blaze build graph into a target map")]
struct Cli {
    /// Build-graph JSON produced by the build tool.
    graph: PathBuf,
    /// Write the imported target map to this file.
    #[arg(long)]
    snapshot: Option<PathBuf>,
    /// Number of import threads (defaults to available parallelism).
    #[arg(long)]
    workers: Option<usize>,
    /// Fail instead of skipping targets with malformed labels or kinds.
    #[arg(long)]
    fail_on_invalid: bool,
    /// Also write the log to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Log every imported target.
    #[arg(long)]
    verbose: bool,
}

fn init_logger(log_file: Option<&Path>, verbose: bool) -> Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        loggers.push(WriteLogger::new(LevelFilter::Trace, Config::default(), file));
    }

    CombinedLogger::init(loggers).context("Failed to initialize logger")
}

fn print_summary(outcome: &ImportOutcome) {
    let kind_counts = outcome
        .target_map
        .targets()
        .map(|target| target.to_target_info().kind_string().to_string())
        .counts();
    for (kind, count) in kind_counts.into_iter().sorted() {
        if kind.is_empty() {
            println!("unknown: {}", count);
        } else {
            println!("{}: {}", kind, count);
        }
    }
    println!("targets: {}", outcome.target_map.len());
    for label in &outcome.failed_targets {
        println!("failed: {}", label);
    }
}

pub fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_file.as_deref(), cli.verbose)?;

    let config = ImportConfig::new(cli.workers, cli.fail_on_invalid);
    let graph = BuildGraph::from_path(&cli.graph)?;
    let outcome = import_build_graph(graph, &config)?;

    if let Some(path) = &cli.snapshot {
        save_snapshot(&outcome.target_map, path)?;
    }

    print_summary(&outcome);
    Ok(())
}
