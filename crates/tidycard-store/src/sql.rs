use crate::contacts::ensure_parent;
use crate::error::{Result, StoreError};
use chrono::NaiveDateTime;
use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tidycard_core::ContactRecord;

const TEMP_COLUMN: &str = "phone";

/// Transactional script that deletes the given phone numbers from every
/// configured table through a temporary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteScript {
    temp_table: String,
    column: String,
    tables: Vec<String>,
    batch_size: usize,
}

impl DeleteScript {
    pub fn new(
        temp_table: &str,
        column: &str,
        tables: &[String],
        batch_size: usize,
    ) -> Result<Self> {
        validate_identifier(temp_table)?;
        validate_identifier(column)?;
        if tables.is_empty() {
            return Err(StoreError::NoTables);
        }
        for table in tables {
            validate_identifier(table)?;
        }
        if batch_size == 0 {
            return Err(StoreError::InvalidBatchSize(batch_size));
        }
        Ok(Self {
            temp_table: temp_table.to_string(),
            column: column.to_string(),
            tables: tables.to_vec(),
            batch_size,
        })
    }

    pub fn tables(&self) -> &[String] {
        &self.tables
    }

    /// Renders the script for `records`. Duplicate phones are inserted once.
    pub fn render(&self, records: &[ContactRecord], generated_at: NaiveDateTime) -> String {
        let mut seen = HashSet::new();
        let phones: Vec<&str> = records
            .iter()
            .map(|record| record.phone.as_str())
            .filter(|phone| seen.insert(*phone))
            .collect();

        let mut out = String::new();
        let _ = writeln!(out, "-- Delete contacts whose phone number is not reachable");
        let _ = writeln!(out, "-- Generated: {}", generated_at.format("%Y-%m-%d %H:%M:%S"));
        let _ = writeln!(out, "-- Total to delete: {} contacts", records.len());
        out.push('\n');
        out.push_str("BEGIN;\n\n");

        let _ = writeln!(
            out,
            "CREATE TEMP TABLE {} ({TEMP_COLUMN} VARCHAR(50));",
            self.temp_table
        );

        for chunk in phones.chunks(self.batch_size) {
            let _ = writeln!(
                out,
                "\nINSERT INTO {} ({TEMP_COLUMN}) VALUES",
                self.temp_table
            );
            let values: Vec<String> = chunk
                .iter()
                .map(|phone| format!("  ('{}')", escape_literal(phone)))
                .collect();
            out.push_str(&values.join(",\n"));
            out.push_str(";\n");
        }

        out.push('\n');
        for table in &self.tables {
            let _ = writeln!(
                out,
                "DELETE FROM \"{table}\" WHERE \"{}\" IN (SELECT {TEMP_COLUMN} FROM {});",
                self.column, self.temp_table
            );
        }

        let _ = writeln!(out, "\nDROP TABLE {};", self.temp_table);
        out.push_str("\nCOMMIT;\n");
        out
    }

    pub fn write(
        &self,
        path: &Path,
        records: &[ContactRecord],
        generated_at: NaiveDateTime,
    ) -> Result<()> {
        ensure_parent(path)?;
        fs::write(path, self.render(records, generated_at))?;
        Ok(())
    }
}

fn validate_identifier(value: &str) -> Result<()> {
    let valid = value
        .chars()
        .next()
        .is_some_and(|ch| ch.is_ascii_alphabetic() || ch == '_')
        && value
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidIdentifier(value.to_string()))
    }
}

fn escape_literal(value: &str) -> String {
    value.replace('\'', "''")
}
