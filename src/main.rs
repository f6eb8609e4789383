use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use resection::{JobLoader, ReplaceJob, RunOptions};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to rewrite (defaults to the job's path)
    file: Option<PathBuf>,

    /// TOML job file describing markers and replacement
    #[arg(short, long)]
    job: Option<PathBuf>,

    /// Show the change without writing it
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    resection::init_with_logger(cli.verbose);

    let mut job = match &cli.job {
        Some(path) => JobLoader::with_path(path)
            .load()
            .with_context(|| format!("Failed to load job file: {}", path.display()))?,
        None => ReplaceJob::default(),
    };
    if let Some(file) = cli.file {
        job = job.with_path(file);
    }

    info!("Running job against {}", job.path.display());
    let report = resection::run_job(
        &job,
        RunOptions {
            dry_run: cli.dry_run,
        },
    )
    .with_context(|| format!("Failed to update {}", job.path.display()))?;

    println!("{}", report.summary());
    if let Some(preview) = &report.preview {
        print!("{}", preview);
    }

    Ok(())
}
