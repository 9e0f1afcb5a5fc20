use crate::error::{Result, SyncError};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tidycard_core::domain::phone_match_key;
use tidycard_core::PhoneSet;

const NUMBER_HEADERS: [&str; 4] = ["number", "phone", "telefono", "teléfono"];
const FLAG_HEADERS: [&str; 2] = ["valid", "status"];
const MAX_WARNINGS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidityFormat {
    /// One number per line.
    PlainList,
    /// Delimited rows under a header line.
    Headered,
    /// Delimited `number,flag` rows without a header.
    Headerless,
}

#[derive(Debug, Clone)]
pub struct ValidityLoad {
    pub numbers: PhoneSet,
    pub format: ValidityFormat,
    pub delimiter: Option<char>,
    /// Data rows read, header excluded.
    pub rows: usize,
    /// Rows without a usable number or with too few columns.
    pub skipped_rows: usize,
    /// Rows whose flag column did not match.
    pub flagged_out: usize,
    pub warnings: Vec<String>,
}

impl ValidityLoad {
    fn new(format: ValidityFormat, delimiter: Option<char>) -> Self {
        Self {
            numbers: PhoneSet::new(),
            format,
            delimiter,
            rows: 0,
            skipped_rows: 0,
            flagged_out: 0,
            warnings: Vec::new(),
        }
    }

    fn skip(&mut self, line: usize, reason: &str) {
        self.skipped_rows += 1;
        if self.warnings.len() < MAX_WARNINGS {
            self.warnings.push(format!("line {line}: {reason}"));
        }
    }
}

/// First of `candidates` that exists under `dir`.
pub fn locate_validity_file(dir: &Path, candidates: &[String]) -> Result<PathBuf> {
    let searched: Vec<PathBuf> = candidates.iter().map(|name| dir.join(name)).collect();
    match searched.iter().find(|path| path.is_file()) {
        Some(path) => Ok(path.clone()),
        None => Err(SyncError::MissingValidityFile { searched }),
    }
}

pub fn load_validity(path: &Path, valid_flag: &str) -> Result<ValidityLoad> {
    if !path.is_file() {
        return Err(SyncError::MissingValidityFile {
            searched: vec![path.to_path_buf()],
        });
    }
    let data = fs::read_to_string(path)?;
    parse_validity(&data, valid_flag)
}

/// Reads reachable numbers from a delimited export or a plain list.
///
/// Delimited data is split on `,` or `;`, whichever dominates the first
/// line. A first row without any digit is a header: the number column is the
/// one named like `number`/`phone`/`telefono`, the flag column the one named
/// like `valid`/`status`. Without a header the first column is the number
/// and a second column, when present, is the flag. Rows with a flag column
/// count only when the flag equals `valid_flag`, ignoring case.
pub fn parse_validity(data: &str, valid_flag: &str) -> Result<ValidityLoad> {
    let Some(delimiter) = detect_delimiter(data) else {
        return Ok(parse_plain_list(data));
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(data.as_bytes());

    let mut records = reader.records();
    let Some(first) = records.next().transpose()? else {
        return Ok(ValidityLoad::new(ValidityFormat::Headered, Some(delimiter)));
    };

    let is_header = !first.iter().any(|field| field.contains(|ch: char| ch.is_ascii_digit()));
    let (format, number_col, flag_col) = if is_header {
        let number_col = find_column(&first, &NUMBER_HEADERS).unwrap_or(0);
        let flag_col = find_column(&first, &FLAG_HEADERS).filter(|col| *col != number_col);
        (ValidityFormat::Headered, number_col, flag_col)
    } else {
        let flag_col = (first.len() > 1).then_some(1);
        (ValidityFormat::Headerless, 0, flag_col)
    };

    let mut load = ValidityLoad::new(format, Some(delimiter));
    let mut pending = if is_header { None } else { Some(first) };
    let mut line = if is_header { 1 } else { 0 };

    loop {
        let record = match pending.take() {
            Some(record) => record,
            None => match records.next().transpose()? {
                Some(record) => record,
                None => break,
            },
        };
        line += 1;
        if record.iter().all(str::is_empty) {
            continue;
        }
        load.rows += 1;

        let Some(number) = record.get(number_col) else {
            load.skip(line, "missing number column");
            continue;
        };
        if let Some(flag_col) = flag_col {
            match record.get(flag_col) {
                Some(flag) if flag.eq_ignore_ascii_case(valid_flag) => {}
                Some(_) => {
                    load.flagged_out += 1;
                    continue;
                }
                None => {
                    load.skip(line, "missing flag column");
                    continue;
                }
            }
        }
        if phone_match_key(number).is_none() {
            load.skip(line, "no digits in number");
            continue;
        }
        load.numbers.insert(number);
    }

    Ok(load)
}

fn detect_delimiter(data: &str) -> Option<char> {
    let first_line = data.lines().find(|line| !line.trim().is_empty())?;
    let commas = first_line.matches(',').count();
    let semicolons = first_line.matches(';').count();
    if commas == 0 && semicolons == 0 {
        None
    } else if semicolons > commas {
        Some(';')
    } else {
        Some(',')
    }
}

fn find_column(header: &csv::StringRecord, names: &[&str]) -> Option<usize> {
    header.iter().position(|field| {
        let lower = field.to_lowercase();
        names.iter().any(|name| lower.contains(name))
    })
}

fn parse_plain_list(data: &str) -> ValidityLoad {
    let mut load = ValidityLoad::new(ValidityFormat::PlainList, None);
    for (index, raw) in data.lines().enumerate() {
        let value = raw.trim();
        if value.is_empty() {
            continue;
        }
        load.rows += 1;
        let numeric_start = value.starts_with(|ch: char| ch.is_ascii_digit() || ch == '+');
        if !numeric_start || phone_match_key(value).is_none() {
            load.skip(index + 1, "not a phone number");
            continue;
        }
        load.numbers.insert(value);
    }
    load
}
