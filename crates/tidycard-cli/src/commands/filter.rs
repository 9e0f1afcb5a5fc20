use crate::commands::{percent, print_json, Context};
use anyhow::{Context as _, Result};
use chrono::Local;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tidycard_core::{partition_by_validity, ListMode};
use tidycard_store::{read_records, write_records, write_sample, DeleteScript};
use tidycard_sync::{load_validity, locate_validity_file, ValidityFormat};
use tracing::{debug, info, warn};

#[derive(Debug, Args)]
pub struct FilterArgs {
    /// JSON array of contacts
    pub input: PathBuf,
    /// Number list; searched for under the configured directory when omitted
    #[arg(long)]
    pub validity: Option<PathBuf>,
    /// The number list holds unreachable numbers instead of reachable ones
    #[arg(long)]
    pub deny_list: bool,
    #[arg(long)]
    pub kept_out: PathBuf,
    #[arg(long)]
    pub removed_out: PathBuf,
    #[arg(long)]
    pub sample_out: Option<PathBuf>,
    /// Write a delete script for the removed contacts
    #[arg(long)]
    pub sql_out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct FilterReport {
    validity_file: String,
    format: ValidityFormat,
    mode: ListMode,
    listed_numbers: usize,
    skipped_rows: usize,
    flagged_out: usize,
    total: usize,
    kept: usize,
    removed: usize,
    kept_percent: f64,
    removed_percent: f64,
    sql_output: Option<String>,
}

pub fn filter_contacts(ctx: &Context<'_>, args: FilterArgs) -> Result<()> {
    let validity_path = match args.validity {
        Some(path) => path,
        None => locate_validity_file(
            &ctx.config.validity.search_dir,
            &ctx.config.validity.candidates,
        )?,
    };
    debug!(path = %validity_path.display(), "validity file resolved");

    // Fail on a bad table layout before any output is written.
    let script = match args.sql_out {
        Some(_) => Some(DeleteScript::new(
            &ctx.config.sql.temp_table,
            &ctx.config.sql.column,
            &ctx.config.sql.tables,
            ctx.config.sql.batch_size,
        )?),
        None => None,
    };

    let load = load_validity(&validity_path, &ctx.config.validity.valid_flag)
        .with_context(|| format!("load validity file {}", validity_path.display()))?;
    for warning in &load.warnings {
        warn!(file = %validity_path.display(), "{warning}");
    }
    info!(
        numbers = load.numbers.len(),
        skipped = load.skipped_rows,
        "validity list loaded"
    );

    let records = read_records(&args.input)
        .with_context(|| format!("read contacts {}", args.input.display()))?;
    let total = records.len();
    let mode = if args.deny_list {
        ListMode::Deny
    } else {
        ListMode::Allow
    };
    let partition = partition_by_validity(records, &load.numbers, mode);

    write_records(&args.kept_out, &partition.kept)
        .with_context(|| format!("write kept contacts {}", args.kept_out.display()))?;
    write_records(&args.removed_out, &partition.removed)
        .with_context(|| format!("write removed contacts {}", args.removed_out.display()))?;
    if let Some(path) = args.sample_out.as_ref() {
        write_sample(path, &partition.kept, ctx.config.sample_size)
            .with_context(|| format!("write sample {}", path.display()))?;
    }
    if let (Some(script), Some(path)) = (script.as_ref(), args.sql_out.as_ref()) {
        script
            .write(path, &partition.removed, Local::now().naive_local())
            .with_context(|| format!("write delete script {}", path.display()))?;
    }

    let report = FilterReport {
        validity_file: validity_path.display().to_string(),
        format: load.format,
        mode,
        listed_numbers: load.numbers.len(),
        skipped_rows: load.skipped_rows,
        flagged_out: load.flagged_out,
        total,
        kept: partition.kept.len(),
        removed: partition.removed.len(),
        kept_percent: percent(partition.kept.len(), total),
        removed_percent: percent(partition.removed.len(), total),
        sql_output: args.sql_out.as_ref().map(|path| path.display().to_string()),
    };

    if ctx.json {
        return print_json(&report);
    }

    println!("Validity file: {}", report.validity_file);
    println!(
        "Listed numbers: {} (skipped rows {}, flagged out {})",
        report.listed_numbers, report.skipped_rows, report.flagged_out
    );
    println!("Contacts:  {}", report.total);
    println!("Kept:      {} ({:.1}%)", report.kept, report.kept_percent);
    println!("Removed:   {} ({:.1}%)", report.removed, report.removed_percent);
    if let Some(sql) = report.sql_output.as_deref() {
        println!("Delete script: {}", sql);
    }
    Ok(())
}
