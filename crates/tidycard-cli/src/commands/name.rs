use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use serde::Serialize;

#[derive(Debug, Args)]
pub struct NameArgs {
    #[arg(required = true)]
    pub names: Vec<String>,
}

#[derive(Debug, Serialize)]
struct NameResult {
    raw: String,
    cleaned_name: Option<String>,
    date_fragment: Option<String>,
}

pub fn normalize_names(ctx: &Context<'_>, args: NameArgs) -> Result<()> {
    let results: Vec<NameResult> = args
        .names
        .into_iter()
        .map(|raw| {
            let outcome = ctx.normalizer.normalize(&raw);
            NameResult {
                raw,
                cleaned_name: outcome.cleaned_name,
                date_fragment: outcome.date_fragment,
            }
        })
        .collect();

    if ctx.json {
        return print_json(&results);
    }

    for result in results {
        let cleaned = result.cleaned_name.as_deref().unwrap_or("<unrecoverable>");
        match result.date_fragment {
            Some(fragment) => println!("{} -> {} [{}]", result.raw, cleaned, fragment),
            None => println!("{} -> {}", result.raw, cleaned),
        }
    }
    Ok(())
}
