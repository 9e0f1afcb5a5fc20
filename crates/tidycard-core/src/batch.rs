use crate::domain::{merge_note, sort_by_name, ContactRecord};
use crate::dto::{NameChangeDto, NormalizeReportDto, UnrecoverableNameDto};
use crate::names::{NormalizationOutcome, Normalizer};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

const MAX_EXAMPLES: usize = 20;

/// What happens to a record whose name cannot be recovered. Either way the
/// record is listed in the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnrecoverablePolicy {
    /// Keep the record with a null name.
    #[default]
    Keep,
    /// Leave the record out of the output.
    Drop,
}

#[derive(Debug, Clone, Default)]
pub struct NormalizedBatch {
    /// Sorted by case-insensitive name.
    pub records: Vec<ContactRecord>,
    pub report: NormalizeReportDto,
}

/// Normalizes every name in parallel, moves date fragments into notes, and
/// sorts the result once.
pub fn normalize_batch(
    records: Vec<ContactRecord>,
    normalizer: &Normalizer,
    policy: UnrecoverablePolicy,
) -> NormalizedBatch {
    let total = records.len();
    let processed: Vec<(ContactRecord, NormalizationOutcome)> = records
        .into_par_iter()
        .map(|record| {
            let outcome = normalizer.normalize(record.name.as_deref().unwrap_or_default());
            (record, outcome)
        })
        .collect();

    let mut report = NormalizeReportDto {
        total,
        ..NormalizeReportDto::default()
    };
    let mut output = Vec::with_capacity(total);

    for (record, outcome) in processed {
        if outcome.date_fragment.is_some() {
            report.date_fragments += 1;
        }
        let note = merge_note(record.note.as_deref(), outcome.date_fragment.as_deref());

        let Some(cleaned) = outcome.cleaned_name else {
            report.unrecoverable.push(UnrecoverableNameDto {
                phone: record.phone.clone(),
                original: record.name.clone(),
                date_fragment: outcome.date_fragment,
            });
            if record.name.is_some() {
                report.changed += 1;
            }
            match policy {
                UnrecoverablePolicy::Keep => output.push(ContactRecord {
                    name: None,
                    phone: record.phone,
                    note,
                }),
                UnrecoverablePolicy::Drop => report.dropped += 1,
            }
            continue;
        };

        if record.name.as_deref() != Some(cleaned.as_str()) {
            report.changed += 1;
            if report.examples.len() < MAX_EXAMPLES {
                report.examples.push(NameChangeDto {
                    original: record.name.clone().unwrap_or_default(),
                    cleaned: cleaned.clone(),
                });
            }
        }

        output.push(ContactRecord {
            name: Some(cleaned),
            phone: record.phone,
            note,
        });
    }

    sort_by_name(&mut output);
    report.written = output.len();

    NormalizedBatch {
        records: output,
        report,
    }
}
