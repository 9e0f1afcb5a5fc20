use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use anyhow::{Context as _, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tidycard_core::names::BUILTIN_OVERRIDES_VERSION;
use tidycard_core::{normalize_batch, NormalizeReportDto, UnrecoverablePolicy};
use tidycard_store::{read_records, write_records, write_sample};
use tracing::{debug, info, warn};

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// JSON array of contacts
    pub input: PathBuf,
    #[arg(long)]
    pub out: PathBuf,
    #[arg(long)]
    pub sample_out: Option<PathBuf>,
    #[arg(long)]
    pub sample_size: Option<usize>,
    /// Leave out records whose name cannot be recovered
    #[arg(long)]
    pub drop_unrecoverable: bool,
    /// Report without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Serialize)]
struct NormalizeSummary {
    #[serde(flatten)]
    report: NormalizeReportDto,
    overrides_version: u32,
    output: Option<String>,
    sample_output: Option<String>,
    sample_written: usize,
    dry_run: bool,
}

pub fn normalize_file(ctx: &Context<'_>, args: NormalizeArgs) -> Result<()> {
    let sample_size = args.sample_size.unwrap_or(ctx.config.sample_size);
    if sample_size == 0 {
        return Err(invalid_input("--sample-size must be at least 1"));
    }
    let policy = if args.drop_unrecoverable {
        UnrecoverablePolicy::Drop
    } else {
        ctx.config.unrecoverable
    };

    let records = read_records(&args.input)
        .with_context(|| format!("read contacts {}", args.input.display()))?;
    debug!(count = records.len(), ?policy, "contacts loaded");

    let batch = normalize_batch(records, ctx.normalizer, policy);
    info!(
        total = batch.report.total,
        changed = batch.report.changed,
        "names normalized"
    );
    if !batch.report.unrecoverable.is_empty() {
        warn!(
            count = batch.report.unrecoverable.len(),
            "some names could not be recovered"
        );
    }

    let mut sample_written = 0;
    if !args.dry_run {
        write_records(&args.out, &batch.records)
            .with_context(|| format!("write contacts {}", args.out.display()))?;
        if let Some(path) = args.sample_out.as_ref() {
            sample_written = write_sample(path, &batch.records, sample_size)
                .with_context(|| format!("write sample {}", path.display()))?;
        }
    }

    let summary = NormalizeSummary {
        report: batch.report,
        overrides_version: BUILTIN_OVERRIDES_VERSION,
        output: (!args.dry_run).then(|| args.out.display().to_string()),
        sample_output: args
            .sample_out
            .as_ref()
            .filter(|_| !args.dry_run)
            .map(|path| path.display().to_string()),
        sample_written,
        dry_run: args.dry_run,
    };

    if ctx.json {
        return print_json(&summary);
    }

    let report = &summary.report;
    println!(
        "Normalized {} contacts: changed {}, date fragments {}, unrecoverable {}, dropped {}",
        report.total,
        report.changed,
        report.date_fragments,
        report.unrecoverable.len(),
        report.dropped
    );
    match summary.output.as_deref() {
        Some(output) => println!("Wrote {} contacts to {}", report.written, output),
        None => println!("Dry run: nothing written"),
    }
    if let Some(sample) = summary.sample_output.as_deref() {
        println!("Wrote sample of {} contacts to {}", summary.sample_written, sample);
    }
    if !report.examples.is_empty() {
        println!("Examples:");
        for example in &report.examples {
            println!("- {:?} -> {:?}", example.original, example.cleaned);
        }
    }
    if !report.unrecoverable.is_empty() {
        println!("Unrecoverable:");
        for entry in &report.unrecoverable {
            println!(
                "- {} ({})",
                entry.phone,
                entry.original.as_deref().unwrap_or("no name")
            );
        }
    }
    Ok(())
}
