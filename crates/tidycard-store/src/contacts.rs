use crate::error::{Result, StoreError};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tidycard_core::ContactRecord;

/// Reads a JSON array of contact records.
pub fn read_records(path: &Path) -> Result<Vec<ContactRecord>> {
    if !path.exists() {
        return Err(StoreError::NotFound(path.to_path_buf()));
    }
    let file = File::open(path)?;
    let records = serde_json::from_reader(BufReader::new(file))?;
    Ok(records)
}

/// Writes records as pretty-printed UTF-8 JSON, creating parent
/// directories as needed.
pub fn write_records(path: &Path, records: &[ContactRecord]) -> Result<()> {
    write_json(path, records)
}

/// Writes the first `size` records. Returns how many were written.
pub fn write_sample(path: &Path, records: &[ContactRecord], size: usize) -> Result<usize> {
    let sample = &records[..size.min(records.len())];
    write_json(path, sample)?;
    Ok(sample.len())
}

pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    ensure_parent(path)?;
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

pub(crate) fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
