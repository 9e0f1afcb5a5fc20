use crate::commands::{print_json, Context};
use anyhow::{Context as _, Result};
use clap::Args;
use std::path::PathBuf;
use tidycard_core::country_breakdown;
use tidycard_store::read_records;

const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Args)]
pub struct StatsArgs {
    pub input: PathBuf,
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,
}

pub fn country_stats(ctx: &Context<'_>, args: StatsArgs) -> Result<()> {
    let records = read_records(&args.input)
        .with_context(|| format!("read contacts {}", args.input.display()))?;
    let counts = country_breakdown(&records, args.limit);

    if ctx.json {
        return print_json(&counts);
    }

    println!("{} contacts", records.len());
    for entry in counts {
        println!(
            "{:<20} {:>6} ({:5.1}%)",
            entry.country, entry.count, entry.percent
        );
    }
    Ok(())
}
