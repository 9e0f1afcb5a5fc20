use anyhow::Result;
use serde::Serialize;
use std::io::{self, Write};
use tidycard_config::AppConfig;
use tidycard_core::Normalizer;

pub mod completions;
pub mod filter;
pub mod name;
pub mod normalize;
pub mod stats;

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
    pub normalizer: &'a Normalizer,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

pub fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}
