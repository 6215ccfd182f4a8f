//! Read -> split -> write orchestration shared by the CLI commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use nightledger_ingest::read_table;
use nightledger_model::Table;
use nightledger_output::write_split_workbook;
use nightledger_split::{SplitStats, split_reservations_detailed};

/// Everything one run produces: both tables for previewing, the run
/// counters, and the workbook path when one was written.
#[derive(Debug)]
pub struct SplitOutcome {
    pub original: Table,
    pub nightly: Table,
    pub stats: SplitStats,
    pub workbook: Option<PathBuf>,
}

/// Default output path: the input stem plus `_daily_split.xlsx`, next to
/// the input file.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("reservations");
    input.with_file_name(format!("{stem}_daily_split.xlsx"))
}

/// Run the full pipeline for one export file.
pub fn run_split_pipeline(
    input: &Path,
    output: Option<&Path>,
    dry_run: bool,
) -> Result<SplitOutcome> {
    let original = read_table(input).with_context(|| format!("read input: {}", input.display()))?;
    info!(
        rows = original.height(),
        columns = original.width(),
        "input table loaded"
    );

    let run = split_reservations_detailed(&original).context("split reservations")?;

    let workbook = if dry_run {
        None
    } else {
        let path = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| default_output_path(input));
        write_split_workbook(&original, &run.table, &path)?;
        Some(path)
    };

    Ok(SplitOutcome {
        original,
        nightly: run.table,
        stats: run.stats,
        workbook,
    })
}
