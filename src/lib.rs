use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod adjacency;
pub mod bits;
pub mod error;
pub mod grid;
pub mod loop_detect;
pub mod orchestrator;
pub mod walker;

pub use adjacency::{AdjacencyTable, Jump};
pub use error::Error;
pub use grid::{Direction, Grid, Guard, Laboratory, Position};
pub use loop_detect::{LoopDetector, VisitedState};
pub use walker::{PathEntry, walk};

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    /// Number of worker threads for checking loop positions, defaults to one per core.
    #[arg(short, long)]
    pub threads: Option<usize>,
}

/// Logs go to stderr, filtered by RUST_LOG.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

pub fn read_lab<P: AsRef<Path>>(path: P) -> Result<Laboratory> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let rows = reader
        .lines()
        .enumerate()
        .map(|(ind, line)| {
            line.with_context(|| {
                format!(
                    "Failed to read line {} from given file({}).",
                    ind + 1,
                    path.as_ref().display()
                )
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Laboratory::from_rows(rows)?)
}

#[test]
fn test_init_tracing_twice() {
    init_tracing();
    init_tracing();
}
